// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::cache::EntityCache;
use crate::report::{FailedRow, ImportReport};
use crate::repository::EntityRepository;
use crate::validate::{GroupFields, MemberFields, validate_group_row, validate_member_row};
use teamdesk_domain::{
    DomainError, ImportRow, MemberRecord, RoleDirectory, TeamRecord, TeamStatus,
    validate_team_active,
};
use tracing::{debug, warn};

/// Reconciles group (team/subteam) rows against the backend.
///
/// Each row resolves its team through the run's entity cache, creating
/// the team and/or subteam when missing. A pre-existing team+subteam
/// pair fails with the duplicate reason; the import never silently
/// no-ops, so the operator can see what was skipped. Re-running the
/// identical input against persisted state therefore fails every
/// previously-successful row.
///
/// Rows are processed strictly sequentially: row N's success can change
/// whether row N+1's parent-exists check is true, and parallel runs
/// would race on parent creation.
///
/// # Arguments
///
/// * `rows` - The adapted input rows, in file order
/// * `teams` - The caller's currently-known teams, seeding the cache
/// * `repository` - The backend collaborator for create calls
pub async fn reconcile_groups<R: EntityRepository>(
    rows: &[ImportRow],
    teams: &[TeamRecord],
    repository: &mut R,
) -> ImportReport {
    let mut cache: EntityCache = EntityCache::seed(teams, &[]);
    let mut report: ImportReport = ImportReport::default();

    debug!(rows = rows.len(), "starting group import run");

    for row in rows {
        match reconcile_group_row(row, &mut cache, repository).await {
            Ok(()) => report.success_count += 1,
            Err(reason) => {
                debug!(%reason, "group row failed");
                report.failed_rows.push(FailedRow {
                    row: row.clone(),
                    reason,
                });
            }
        }
    }

    debug!(
        succeeded = report.success_count,
        failed = report.failed_count(),
        "group import run finished"
    );
    report
}

/// Processes one group row to a terminal outcome.
async fn reconcile_group_row<R: EntityRepository>(
    row: &ImportRow,
    cache: &mut EntityCache,
    repository: &mut R,
) -> Result<(), String> {
    let fields: GroupFields = validate_group_row(row).map_err(|e| e.to_string())?;

    let existing: Option<(i64, TeamStatus)> = cache
        .lookup(&fields.team_name)
        .map(|t| (t.team_id, t.status));

    let team_id: i64 = match existing {
        None => {
            let team: TeamRecord = match repository.create_team(&fields.team_name).await {
                Ok(team) => team,
                Err(err) => {
                    warn!(error = %err, team = %fields.team_name, "create team failed");
                    return Err(String::from("Failed to create team"));
                }
            };
            cache.insert_team(&team);
            team.team_id
        }
        Some((team_id, status)) => {
            validate_team_active(status).map_err(|e| e.to_string())?;
            if cache.has_sub_team(&fields.team_name, &fields.sub_team_name) {
                return Err(DomainError::DuplicateChild {
                    child: String::from("Subteam"),
                    parent: String::from("team"),
                }
                .to_string());
            }
            team_id
        }
    };

    if let Err(err) = repository
        .create_subteam(team_id, &fields.sub_team_name)
        .await
    {
        warn!(error = %err, sub_team = %fields.sub_team_name, "create subteam failed");
        return Err(String::from("Failed to create subteam"));
    }
    cache.add_sub_team(&fields.team_name, &fields.sub_team_name);

    Ok(())
}

/// Reconciles member rows against the backend.
///
/// Members resolve their destination team through the cache but never
/// create teams: an unresolved team name fails the row. Duplicate
/// detection is by lowercased email under the destination team, seeded
/// from `members` and grown as rows commit, so the second identical row
/// within one file fails like a pre-existing member would.
///
/// # Arguments
///
/// * `rows` - The adapted input rows, in file order
/// * `teams` - The caller's currently-known teams, seeding the cache
/// * `members` - The caller's currently-known members, seeding the
///   duplicate check
/// * `roles` - The lookup table for role cross-reference validation
/// * `repository` - The backend collaborator for create calls
pub async fn reconcile_members<R: EntityRepository>(
    rows: &[ImportRow],
    teams: &[TeamRecord],
    members: &[MemberRecord],
    roles: &RoleDirectory,
    repository: &mut R,
) -> ImportReport {
    let mut cache: EntityCache = EntityCache::seed(teams, members);
    let mut report: ImportReport = ImportReport::default();

    debug!(rows = rows.len(), "starting member import run");

    for row in rows {
        match reconcile_member_row(row, roles, &mut cache, repository).await {
            Ok(()) => report.success_count += 1,
            Err(reason) => {
                debug!(%reason, "member row failed");
                report.failed_rows.push(FailedRow {
                    row: row.clone(),
                    reason,
                });
            }
        }
    }

    debug!(
        succeeded = report.success_count,
        failed = report.failed_count(),
        "member import run finished"
    );
    report
}

/// Processes one member row to a terminal outcome.
async fn reconcile_member_row<R: EntityRepository>(
    row: &ImportRow,
    roles: &RoleDirectory,
    cache: &mut EntityCache,
    repository: &mut R,
) -> Result<(), String> {
    let fields: MemberFields = validate_member_row(row, roles).map_err(|e| e.to_string())?;

    let Some((team_id, status)) = cache
        .lookup(&fields.team_name)
        .map(|t| (t.team_id, t.status))
    else {
        return Err(DomainError::LookupNotFound {
            value: fields.team_name.clone(),
        }
        .to_string());
    };

    validate_team_active(status).map_err(|e| e.to_string())?;

    if cache.has_member_email(&fields.team_name, &fields.email) {
        return Err(DomainError::DuplicateChild {
            child: String::from("Member"),
            parent: String::from("team"),
        }
        .to_string());
    }

    if let Err(err) = repository.create_member(team_id, &fields).await {
        warn!(error = %err, email = %fields.email, "create member failed");
        return Err(String::from("Failed to create member"));
    }
    cache.add_member_email(&fields.team_name, &fields.email);

    Ok(())
}
