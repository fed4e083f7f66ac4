// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for bulk actions and import runs.
//!
//! Handlers orchestrate the cores against their collaborators and attach
//! the audit event every completed bulk operation must produce. They are
//! transport-agnostic; the server layer maps them onto HTTP.

use teamdesk::{PagedIdFetcher, SelectionState, materialize};
use teamdesk_audit::{Actor, AuditEvent, BulkAction, OutcomeTally, Trigger};
use teamdesk_domain::{MemberRecord, RoleDirectory, RowId, TeamRecord};
use teamdesk_import::{
    EntityRepository, ImportReport, reconcile_groups, reconcile_members,
};
use tracing::{info, warn};

use crate::csv_ingest::{parse_group_rows, parse_member_rows, render_failed_rows_csv};
use crate::error::ApiError;
use crate::request_response::{BulkDeleteResponse, ImportResponse};

/// Deletes every row in the effective selection.
///
/// The selection is materialized first; a fetch failure aborts the whole
/// action before anything is deleted, leaving the caller's selection
/// intact for a retry. Per-id delete failures do not abort the sweep;
/// they are counted and reported.
///
/// # Arguments
///
/// * `selection` - The selection to resolve
/// * `fetcher` - The id-fetch collaborator bound to the active filter
/// * `repository` - The backend collaborator performing deletions
/// * `actor` - The operator triggering the action
/// * `trigger` - The request that started the action
///
/// # Errors
///
/// Returns `ApiError::SelectionFetchFailed` when materialization fails.
pub async fn run_bulk_delete<F, R>(
    selection: &SelectionState,
    fetcher: &F,
    repository: &mut R,
    actor: &Actor,
    trigger: Trigger,
) -> Result<(BulkDeleteResponse, AuditEvent), ApiError>
where
    F: PagedIdFetcher,
    F::Error: std::fmt::Display,
    R: EntityRepository,
{
    let ids: Vec<RowId> =
        materialize(selection, fetcher)
            .await
            .map_err(|e| ApiError::SelectionFetchFailed {
                message: e.to_string(),
            })?;

    let requested: u64 = ids.len() as u64;
    let mut deleted: u64 = 0;
    let mut failed: u64 = 0;

    for id in &ids {
        match repository.delete_entity(id).await {
            Ok(()) => deleted += 1,
            Err(err) => {
                warn!(row = %id, error = %err, "bulk delete skipped a row");
                failed += 1;
            }
        }
    }

    info!(requested, deleted, failed, "bulk delete finished");

    let audit_event: AuditEvent = AuditEvent::new(
        actor.clone(),
        trigger,
        BulkAction::new(
            String::from("BulkDelete"),
            Some(format!("Deleted {deleted} of {requested} selected rows")),
        ),
        OutcomeTally::new(requested, deleted, failed),
    );

    let response: BulkDeleteResponse = BulkDeleteResponse {
        requested,
        deleted,
        failed,
        message: format!("Deleted {deleted} of {requested} selected rows"),
    };

    Ok((response, audit_event))
}

/// Runs a group (team/subteam) import from raw CSV content.
///
/// # Arguments
///
/// * `csv_content` - The uploaded file's content
/// * `teams` - The caller's currently-known teams, seeding the run
/// * `repository` - The backend collaborator for create calls
/// * `actor` - The operator triggering the import
/// * `trigger` - The request that started the import
///
/// # Errors
///
/// Returns `ApiError::InvalidCsvFormat` when the file is unreadable or
/// missing required headers; per-row failures are reported in the
/// response instead.
pub async fn run_group_import<R: EntityRepository>(
    csv_content: &str,
    teams: &[TeamRecord],
    repository: &mut R,
    actor: &Actor,
    trigger: Trigger,
) -> Result<(ImportResponse, AuditEvent), ApiError> {
    let rows = parse_group_rows(csv_content)?;
    let report: ImportReport = reconcile_groups(&rows, teams, repository).await;

    finish_import(report, "ImportGroups", actor, trigger)
}

/// Runs a member import from raw CSV content.
///
/// # Arguments
///
/// * `csv_content` - The uploaded file's content
/// * `teams` - The caller's currently-known teams, seeding the run
/// * `members` - The caller's currently-known members, seeding the
///   duplicate check
/// * `roles` - The lookup table for role cross-reference validation
/// * `repository` - The backend collaborator for create calls
/// * `actor` - The operator triggering the import
/// * `trigger` - The request that started the import
///
/// # Errors
///
/// Returns `ApiError::InvalidCsvFormat` when the file is unreadable or
/// missing required headers; per-row failures are reported in the
/// response instead.
pub async fn run_member_import<R: EntityRepository>(
    csv_content: &str,
    teams: &[TeamRecord],
    members: &[MemberRecord],
    roles: &RoleDirectory,
    repository: &mut R,
    actor: &Actor,
    trigger: Trigger,
) -> Result<(ImportResponse, AuditEvent), ApiError> {
    let rows = parse_member_rows(csv_content)?;
    let report: ImportReport = reconcile_members(&rows, teams, members, roles, repository).await;

    finish_import(report, "ImportMembers", actor, trigger)
}

/// Builds the response and audit event for a finished import run.
fn finish_import(
    report: ImportReport,
    action_name: &str,
    actor: &Actor,
    trigger: Trigger,
) -> Result<(ImportResponse, AuditEvent), ApiError> {
    let corrective_csv: Option<String> = if report.is_clean() {
        None
    } else {
        Some(render_failed_rows_csv(&report.failed_rows)?)
    };

    let message: String = if report.is_clean() {
        format!("Imported {} rows", report.success_count)
    } else {
        format!(
            "Imported {} rows; {} failed",
            report.success_count,
            report.failed_count()
        )
    };

    info!(
        action = action_name,
        succeeded = report.success_count,
        failed = report.failed_count(),
        "import run finished"
    );

    let audit_event: AuditEvent = AuditEvent::new(
        actor.clone(),
        trigger,
        BulkAction::new(action_name.to_string(), Some(message.clone())),
        OutcomeTally::new(
            report.attempted(),
            report.success_count,
            report.failed_count(),
        ),
    );

    let response: ImportResponse = ImportResponse {
        success_count: report.success_count,
        failed_count: report.failed_count(),
        failed_rows: report.failed_rows,
        corrective_csv,
        message,
    };

    Ok((response, audit_event))
}
