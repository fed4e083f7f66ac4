// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::{BTreeSet, HashMap};
use teamdesk_domain::{MemberRecord, TeamRecord, TeamStatus};

/// A team as the cache knows it during one reconciler run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedTeam {
    /// The canonical identifier assigned by the backend.
    pub team_id: i64,
    /// The team's lifecycle status.
    pub status: TeamStatus,
    /// Normalized names of the subteams known under this team.
    pub sub_teams: BTreeSet<String>,
    /// Lowercased emails of the members known under this team.
    pub member_emails: BTreeSet<String>,
}

/// Run-scoped cache of resolved entities, keyed by normalized team name.
///
/// Built once at the start of a run from the caller's currently-known
/// collection, grown as entities are created during the run, and
/// discarded at the end. Avoids duplicate "does this team exist"
/// round-trips within a single import.
#[derive(Debug, Clone, Default)]
pub struct EntityCache {
    teams: HashMap<String, CachedTeam>,
}

impl EntityCache {
    /// Normalizes an entity name for matching.
    ///
    /// Trims and lowercases. Interior whitespace is NOT collapsed:
    /// "Eng Team" and "Eng  Team" are distinct destinations, and changing
    /// that would change which rows are treated as duplicates.
    #[must_use]
    pub fn normalize(name: &str) -> String {
        name.trim().to_lowercase()
    }

    /// Seeds a cache from the caller's current teams and members.
    #[must_use]
    pub fn seed(teams: &[TeamRecord], members: &[MemberRecord]) -> Self {
        let mut cache: Self = Self::default();

        for team in teams {
            let sub_teams: BTreeSet<String> = team
                .sub_teams
                .iter()
                .map(|s| Self::normalize(&s.name))
                .collect();
            let member_emails: BTreeSet<String> = members
                .iter()
                .filter(|m| m.team_id == team.team_id)
                .map(|m| m.email.trim().to_lowercase())
                .collect();

            cache.teams.insert(
                Self::normalize(&team.name),
                CachedTeam {
                    team_id: team.team_id,
                    status: team.status,
                    sub_teams,
                    member_emails,
                },
            );
        }

        cache
    }

    /// Looks up a team by (raw) name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&CachedTeam> {
        self.teams.get(&Self::normalize(name))
    }

    /// Records a team created during this run.
    pub fn insert_team(&mut self, record: &TeamRecord) {
        self.teams.insert(
            Self::normalize(&record.name),
            CachedTeam {
                team_id: record.team_id,
                status: record.status,
                sub_teams: BTreeSet::new(),
                member_emails: BTreeSet::new(),
            },
        );
    }

    /// Checks whether a subteam is known under a team.
    #[must_use]
    pub fn has_sub_team(&self, team_name: &str, sub_team_name: &str) -> bool {
        self.lookup(team_name)
            .is_some_and(|t| t.sub_teams.contains(&Self::normalize(sub_team_name)))
    }

    /// Records a subteam created during this run.
    pub fn add_sub_team(&mut self, team_name: &str, sub_team_name: &str) {
        if let Some(team) = self.teams.get_mut(&Self::normalize(team_name)) {
            team.sub_teams.insert(Self::normalize(sub_team_name));
        }
    }

    /// Checks whether a member email is known under a team.
    #[must_use]
    pub fn has_member_email(&self, team_name: &str, email: &str) -> bool {
        self.lookup(team_name)
            .is_some_and(|t| t.member_emails.contains(&email.trim().to_lowercase()))
    }

    /// Records a member created during this run.
    pub fn add_member_email(&mut self, team_name: &str, email: &str) {
        if let Some(team) = self.teams.get_mut(&Self::normalize(team_name)) {
            team.member_emails.insert(email.trim().to_lowercase());
        }
    }
}
