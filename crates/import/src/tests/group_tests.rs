// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::group_row;
use crate::{ImportReport, InMemoryDirectory, reconcile_groups};
use teamdesk_domain::{ImportRow, TeamStatus};

#[tokio::test]
async fn test_single_row_creates_team_and_subteam() {
    let mut directory: InMemoryDirectory = InMemoryDirectory::new();
    let rows: Vec<ImportRow> = vec![group_row("Eng", "Backend")];

    let report: ImportReport = reconcile_groups(&rows, &[], &mut directory).await;

    assert_eq!(report.success_count, 1);
    assert!(report.failed_rows.is_empty());
    assert_eq!(directory.teams().len(), 1);
    assert_eq!(directory.teams()[0].name, "Eng");
    assert_eq!(directory.teams()[0].sub_teams.len(), 1);
    assert_eq!(directory.teams()[0].sub_teams[0].name, "Backend");
}

#[tokio::test]
async fn test_two_rows_same_new_team_create_it_once() {
    // Row 2's parent-exists check must see row 1's creation; processing
    // is sequential for exactly this reason.
    let mut directory: InMemoryDirectory = InMemoryDirectory::new();
    let rows: Vec<ImportRow> = vec![group_row("New", "A"), group_row("New", "B")];

    let report: ImportReport = reconcile_groups(&rows, &[], &mut directory).await;

    assert_eq!(report.success_count, 2);
    assert!(report.failed_rows.is_empty());
    assert_eq!(directory.teams().len(), 1);
    assert_eq!(directory.teams()[0].sub_teams.len(), 2);
}

#[tokio::test]
async fn test_rerunning_identical_import_is_reported_not_repeated() {
    let mut directory: InMemoryDirectory = InMemoryDirectory::new();
    let rows: Vec<ImportRow> = vec![group_row("Eng", "Backend")];

    let first: ImportReport = reconcile_groups(&rows, &[], &mut directory).await;
    assert_eq!(first.success_count, 1);
    assert!(first.failed_rows.is_empty());

    // Run 2 seeds its cache from the now-persisted collection.
    let teams = directory.teams().to_vec();
    let second: ImportReport = reconcile_groups(&rows, &teams, &mut directory).await;

    assert_eq!(second.success_count, 0);
    assert_eq!(second.failed_rows.len(), 1);
    assert_eq!(
        second.failed_rows[0].reason,
        "Subteam already exists under this team"
    );
    assert_eq!(directory.teams().len(), 1);
    assert_eq!(directory.teams()[0].sub_teams.len(), 1);
}

#[tokio::test]
async fn test_duplicate_pair_within_one_file_fails_second_row() {
    let mut directory: InMemoryDirectory = InMemoryDirectory::new();
    let rows: Vec<ImportRow> = vec![group_row("Eng", "Backend"), group_row("Eng", "Backend")];

    let report: ImportReport = reconcile_groups(&rows, &[], &mut directory).await;

    assert_eq!(report.success_count, 1);
    assert_eq!(report.failed_rows.len(), 1);
    assert_eq!(
        report.failed_rows[0].reason,
        "Subteam already exists under this team"
    );
}

#[tokio::test]
async fn test_existing_team_gains_new_subteam() {
    let mut directory: InMemoryDirectory = InMemoryDirectory::new();
    let team_id: i64 = directory.add_team("Eng", TeamStatus::Active);
    directory.add_sub_team(team_id, "Backend");
    let teams = directory.teams().to_vec();

    let rows: Vec<ImportRow> = vec![group_row("Eng", "Frontend")];
    let report: ImportReport = reconcile_groups(&rows, &teams, &mut directory).await;

    assert_eq!(report.success_count, 1);
    assert_eq!(directory.teams()[0].sub_teams.len(), 2);
}

#[tokio::test]
async fn test_inactive_team_refuses_rows() {
    let mut directory: InMemoryDirectory = InMemoryDirectory::new();
    directory.add_team("Eng", TeamStatus::Inactive);
    let teams = directory.teams().to_vec();

    let rows: Vec<ImportRow> = vec![group_row("Eng", "Backend")];
    let report: ImportReport = reconcile_groups(&rows, &teams, &mut directory).await;

    assert_eq!(report.success_count, 0);
    assert_eq!(
        report.failed_rows[0].reason,
        "Cannot import into inactive team"
    );
}

#[tokio::test]
async fn test_team_name_matching_trims_and_lowercases() {
    let mut directory: InMemoryDirectory = InMemoryDirectory::new();
    directory.add_team("Eng", TeamStatus::Active);
    let teams = directory.teams().to_vec();

    let rows: Vec<ImportRow> = vec![group_row("  eng  ", "Backend")];
    let report: ImportReport = reconcile_groups(&rows, &teams, &mut directory).await;

    assert_eq!(report.success_count, 1);
    // The existing team was reused, not duplicated.
    assert_eq!(directory.teams().len(), 1);
}

#[tokio::test]
async fn test_interior_whitespace_is_not_collapsed() {
    // "Eng Team" and "Eng  Team" are distinct destinations.
    let mut directory: InMemoryDirectory = InMemoryDirectory::new();
    directory.add_team("Eng Team", TeamStatus::Active);
    let teams = directory.teams().to_vec();

    let rows: Vec<ImportRow> = vec![group_row("Eng  Team", "Backend")];
    let report: ImportReport = reconcile_groups(&rows, &teams, &mut directory).await;

    assert_eq!(report.success_count, 1);
    assert_eq!(directory.teams().len(), 2);
}

#[tokio::test]
async fn test_collaborator_failure_fails_row_and_continues() {
    let mut directory: InMemoryDirectory = InMemoryDirectory::new();
    directory.set_fail_creates(true);

    let rows: Vec<ImportRow> = vec![group_row("Eng", "Backend"), group_row("Ops", "SRE")];
    let report: ImportReport = reconcile_groups(&rows, &[], &mut directory).await;

    assert_eq!(report.success_count, 0);
    assert_eq!(report.failed_rows.len(), 2);
    assert_eq!(report.failed_rows[0].reason, "Failed to create team");
    assert_eq!(report.failed_rows[1].reason, "Failed to create team");
}

#[tokio::test]
async fn test_failed_row_does_not_block_later_rows_for_same_team() {
    let mut directory: InMemoryDirectory = InMemoryDirectory::new();
    let team_id: i64 = directory.add_team("Eng", TeamStatus::Active);
    directory.add_sub_team(team_id, "Backend");
    let teams = directory.teams().to_vec();

    let rows: Vec<ImportRow> = vec![
        group_row("Eng", "Backend"),
        group_row("Eng", "Frontend"),
    ];
    let report: ImportReport = reconcile_groups(&rows, &teams, &mut directory).await;

    assert_eq!(report.success_count, 1);
    assert_eq!(report.failed_rows.len(), 1);
    assert_eq!(directory.teams().len(), 1);
}

#[tokio::test]
async fn test_failed_rows_keep_original_fields_in_order() {
    let mut directory: InMemoryDirectory = InMemoryDirectory::new();
    let rows: Vec<ImportRow> = vec![group_row("", "Backend")];

    let report: ImportReport = reconcile_groups(&rows, &[], &mut directory).await;

    assert_eq!(report.failed_rows.len(), 1);
    let failed = &report.failed_rows[0];
    assert_eq!(failed.reason, "Missing Team Name");
    let names: Vec<&str> = failed
        .row
        .columns()
        .iter()
        .map(|(n, _)| n.as_str())
        .collect();
    assert_eq!(names, vec!["team_name", "sub_team_name"]);
}

#[tokio::test]
async fn test_mixed_valid_and_invalid_rows_partition() {
    let mut directory: InMemoryDirectory = InMemoryDirectory::new();
    let rows: Vec<ImportRow> = vec![
        group_row("Eng", "Backend"),
        group_row("Bad!Name", "Backend"),
        group_row("Ops", "SRE"),
    ];

    let report: ImportReport = reconcile_groups(&rows, &[], &mut directory).await;

    assert_eq!(report.success_count, 2);
    assert_eq!(report.failed_rows.len(), 1);
    assert_eq!(
        report.failed_rows[0].reason,
        "Invalid characters in Team Name"
    );
    assert_eq!(report.attempted(), 3);
}
