// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! CSV ingestion and corrective output.
//!
//! Header aliasing happens here, at the system boundary: the reconciler
//! only ever sees canonical column names. An unreadable file or a file
//! missing its required headers is batch-fatal and reported once; it
//! never produces a partial failed-row list.

use csv::StringRecord;
use teamdesk_domain::ImportRow;
use teamdesk_import::FailedRow;

use crate::error::ApiError;

/// Required canonical headers for a group (team/subteam) file.
const GROUP_REQUIRED_HEADERS: &[&str] = &["team_name", "sub_team_name"];

/// Required canonical headers for a member file.
const MEMBER_REQUIRED_HEADERS: &[&str] = &["name", "email", "team_name"];

/// Normalizes a CSV header string for case-insensitive, whitespace-tolerant
/// matching.
fn normalize_header(header: &str) -> String {
    header.trim().to_lowercase().replace(' ', "_")
}

/// Resolves a normalized header to its canonical column name.
///
/// "Team", "Team Name", and "TeamName" all address the team-name column;
/// unknown headers pass through unchanged and are simply carried along.
fn canonical_header(normalized: &str) -> String {
    match normalized {
        "team" | "teamname" | "team_name" => String::from("team_name"),
        "subteam" | "sub_team" | "subteamname" | "sub_team_name" | "subteam_name" => {
            String::from("sub_team_name")
        }
        "member_name" | "full_name" | "name" => String::from("name"),
        "email_address" | "e-mail" | "email" => String::from("email"),
        other => other.to_string(),
    }
}

/// Parses CSV content into adapted rows, checking required headers.
fn parse_rows(csv_content: &str, required: &[&str]) -> Result<Vec<ImportRow>, ApiError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(csv_content.as_bytes());

    let headers: StringRecord = reader
        .headers()
        .map_err(|e| ApiError::InvalidCsvFormat {
            reason: format!("Failed to read CSV headers: {e}"),
        })?
        .clone();

    let canonical: Vec<String> = headers
        .iter()
        .map(|h| canonical_header(&normalize_header(h)))
        .collect();

    let missing: Vec<&str> = required
        .iter()
        .filter(|r| !canonical.iter().any(|c| c == *r))
        .copied()
        .collect();
    if !missing.is_empty() {
        return Err(ApiError::InvalidCsvFormat {
            reason: format!("Missing required headers: {}", missing.join(", ")),
        });
    }

    let mut rows: Vec<ImportRow> = Vec::new();
    for result in reader.records() {
        // A malformed record means the file itself is unreadable; that is
        // batch-fatal, not a per-row failure.
        let record: StringRecord = result.map_err(|e| ApiError::InvalidCsvFormat {
            reason: format!("Failed to read CSV rows: {e}"),
        })?;

        let columns: Vec<(String, String)> = canonical
            .iter()
            .cloned()
            .zip(record.iter().map(ToString::to_string))
            .collect();
        rows.push(ImportRow::new(columns));
    }

    Ok(rows)
}

/// Parses a group (team/subteam) CSV into adapted rows.
///
/// # Errors
///
/// Returns `ApiError::InvalidCsvFormat` when the file cannot be read or
/// lacks a team-name or subteam-name column under any accepted alias.
pub fn parse_group_rows(csv_content: &str) -> Result<Vec<ImportRow>, ApiError> {
    parse_rows(csv_content, GROUP_REQUIRED_HEADERS)
}

/// Parses a member CSV into adapted rows.
///
/// # Errors
///
/// Returns `ApiError::InvalidCsvFormat` when the file cannot be read or
/// lacks a name, email, or team-name column under any accepted alias.
pub fn parse_member_rows(csv_content: &str) -> Result<Vec<ImportRow>, ApiError> {
    parse_rows(csv_content, MEMBER_REQUIRED_HEADERS)
}

/// Renders failed rows back into CSV for a corrective re-upload.
///
/// The column layout is the original input layout with `reason` appended,
/// so the operator can fix the named problems and re-import the same file.
///
/// # Errors
///
/// Returns `ApiError::Internal` when CSV serialization fails.
pub fn render_failed_rows_csv(failed_rows: &[FailedRow]) -> Result<String, ApiError> {
    let Some(first) = failed_rows.first() else {
        return Ok(String::new());
    };

    let mut writer = csv::Writer::from_writer(Vec::new());

    let mut header: Vec<&str> = first
        .row
        .columns()
        .iter()
        .map(|(name, _)| name.as_str())
        .collect();
    header.push("reason");
    writer
        .write_record(&header)
        .map_err(|e| ApiError::Internal {
            message: format!("Failed to write corrective CSV: {e}"),
        })?;

    for failed in failed_rows {
        let mut record: Vec<&str> = failed
            .row
            .columns()
            .iter()
            .map(|(_, value)| value.as_str())
            .collect();
        record.push(&failed.reason);
        writer
            .write_record(&record)
            .map_err(|e| ApiError::Internal {
                message: format!("Failed to write corrective CSV: {e}"),
            })?;
    }

    let bytes: Vec<u8> = writer.into_inner().map_err(|e| ApiError::Internal {
        message: format!("Failed to flush corrective CSV: {e}"),
    })?;
    String::from_utf8(bytes).map_err(|e| ApiError::Internal {
        message: format!("Corrective CSV is not valid UTF-8: {e}"),
    })
}
