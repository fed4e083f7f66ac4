// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::RepositoryError;
use crate::repository::EntityRepository;
use crate::validate::MemberFields;
use std::future::Future;
use teamdesk_domain::{MemberRecord, RowId, SubTeamRecord, TeamRecord, TeamStatus};

/// An in-memory entity directory.
///
/// Backs the reconciler in tests and the demo server. Behaves like the
/// real backend at the contract level: create calls enforce uniqueness
/// and answer conflicts with a generic create-failed error, and
/// creations persist across runs so idempotence can be exercised.
#[derive(Debug, Clone)]
pub struct InMemoryDirectory {
    teams: Vec<TeamRecord>,
    members: Vec<MemberRecord>,
    next_team_id: i64,
    next_sub_team_id: i64,
    next_member_id: i64,
    fail_creates: bool,
}

impl Default for InMemoryDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            teams: Vec::new(),
            members: Vec::new(),
            next_team_id: 1,
            next_sub_team_id: 1,
            next_member_id: 1,
            fail_creates: false,
        }
    }

    /// Seeds a team directly, bypassing the repository contract.
    pub fn add_team(&mut self, name: &str, status: TeamStatus) -> i64 {
        let team_id: i64 = self.next_team_id;
        self.next_team_id += 1;
        self.teams.push(TeamRecord::new(team_id, name, status));
        team_id
    }

    /// Seeds a subteam directly, bypassing the repository contract.
    pub fn add_sub_team(&mut self, team_id: i64, name: &str) {
        let sub_team_id: i64 = self.next_sub_team_id;
        self.next_sub_team_id += 1;
        if let Some(team) = self.teams.iter_mut().find(|t| t.team_id == team_id) {
            team.sub_teams.push(SubTeamRecord::new(sub_team_id, name));
        }
    }

    /// Seeds a member directly, bypassing the repository contract.
    pub fn add_member(&mut self, team_id: i64, name: &str, email: &str) -> RowId {
        let id: RowId = RowId::new(&format!("member-{}", self.next_member_id));
        self.next_member_id += 1;
        self.members.push(MemberRecord {
            id: id.clone(),
            name: name.to_string(),
            email: email.to_string(),
            role: None,
            designation: None,
            notes: None,
            team_id,
        });
        id
    }

    /// Makes every subsequent create call fail, simulating an outage.
    pub const fn set_fail_creates(&mut self, fail: bool) {
        self.fail_creates = fail;
    }

    /// The current teams, suitable for seeding a reconciler run.
    #[must_use]
    pub fn teams(&self) -> &[TeamRecord] {
        &self.teams
    }

    /// The current members, suitable for seeding a reconciler run.
    #[must_use]
    pub fn members(&self) -> &[MemberRecord] {
        &self.members
    }

    fn team_name_taken(&self, name: &str) -> bool {
        let wanted: String = name.trim().to_lowercase();
        self.teams
            .iter()
            .any(|t| t.name.trim().to_lowercase() == wanted)
    }
}

impl EntityRepository for InMemoryDirectory {
    fn create_team(
        &mut self,
        name: &str,
    ) -> impl Future<Output = Result<TeamRecord, RepositoryError>> + Send {
        let result: Result<TeamRecord, RepositoryError> = if self.fail_creates
            || self.team_name_taken(name)
        {
            Err(RepositoryError::CreateFailed {
                entity: String::from("team"),
            })
        } else {
            let team_id: i64 = self.next_team_id;
            self.next_team_id += 1;
            let team: TeamRecord = TeamRecord::new(team_id, name.trim(), TeamStatus::Active);
            self.teams.push(team.clone());
            Ok(team)
        };
        async move { result }
    }

    fn create_subteam(
        &mut self,
        team_id: i64,
        name: &str,
    ) -> impl Future<Output = Result<SubTeamRecord, RepositoryError>> + Send {
        let result: Result<SubTeamRecord, RepositoryError> = if self.fail_creates {
            Err(RepositoryError::CreateFailed {
                entity: String::from("subteam"),
            })
        } else {
            let sub_team_id: i64 = self.next_sub_team_id;
            match self.teams.iter_mut().find(|t| t.team_id == team_id) {
                None => Err(RepositoryError::NotFound {
                    id: team_id.to_string(),
                }),
                Some(team) => {
                    let wanted: String = name.trim().to_lowercase();
                    if team
                        .sub_teams
                        .iter()
                        .any(|s| s.name.trim().to_lowercase() == wanted)
                    {
                        Err(RepositoryError::CreateFailed {
                            entity: String::from("subteam"),
                        })
                    } else {
                        self.next_sub_team_id += 1;
                        let sub_team: SubTeamRecord = SubTeamRecord::new(sub_team_id, name.trim());
                        team.sub_teams.push(sub_team.clone());
                        Ok(sub_team)
                    }
                }
            }
        };
        async move { result }
    }

    fn create_member(
        &mut self,
        team_id: i64,
        fields: &MemberFields,
    ) -> impl Future<Output = Result<RowId, RepositoryError>> + Send {
        let result: Result<RowId, RepositoryError> = if self.fail_creates {
            Err(RepositoryError::CreateFailed {
                entity: String::from("member"),
            })
        } else if self.teams.iter().any(|t| t.team_id == team_id) {
            let id: RowId = RowId::new(&format!("member-{}", self.next_member_id));
            self.next_member_id += 1;
            self.members.push(MemberRecord {
                id: id.clone(),
                name: fields.name.clone(),
                email: fields.email.clone(),
                role: fields.role.clone(),
                designation: fields.designation.clone(),
                notes: fields.notes.clone(),
                team_id,
            });
            Ok(id)
        } else {
            Err(RepositoryError::NotFound {
                id: team_id.to_string(),
            })
        };
        async move { result }
    }

    fn delete_entity(
        &mut self,
        id: &RowId,
    ) -> impl Future<Output = Result<(), RepositoryError>> + Send {
        let before: usize = self.members.len();
        self.members.retain(|m| &m.id != id);
        let result: Result<(), RepositoryError> = if self.members.len() == before {
            Err(RepositoryError::NotFound {
                id: id.to_string(),
            })
        } else {
            Ok(())
        };
        async move { result }
    }
}
