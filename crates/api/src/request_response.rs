// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use teamdesk_import::FailedRow;

/// Information about a single member row.
///
/// This DTO is distinct from domain types and represents the API contract.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MemberInfo {
    /// The stable row identifier.
    pub id: String,
    /// The member's display name.
    pub name: String,
    /// The member's email address.
    pub email: String,
    /// The member's role, when assigned.
    pub role: Option<String>,
    /// The member's designation, when assigned.
    pub designation: Option<String>,
    /// The team this member belongs to.
    pub team_id: i64,
}

/// API response for a paginated member listing.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ListMembersResponse {
    /// The members on the requested page.
    pub members: Vec<MemberInfo>,
    /// The requested page number (1-based).
    pub page: u32,
    /// The page size used.
    pub page_size: u32,
    /// The total number of rows matching the filter, across all pages.
    pub total_matching: u64,
}

/// API response for a bulk delete.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BulkDeleteResponse {
    /// The number of ids the materialized selection resolved to.
    pub requested: u64,
    /// The number of rows actually deleted.
    pub deleted: u64,
    /// The number of rows that could not be deleted.
    pub failed: u64,
    /// A success message.
    pub message: String,
}

/// API response for an import run.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ImportResponse {
    /// The number of rows that fully committed.
    pub success_count: u64,
    /// The number of rows that failed.
    pub failed_count: u64,
    /// The failed rows, each with its original fields and reason.
    pub failed_rows: Vec<FailedRow>,
    /// A corrective CSV (original columns + reason), present only when
    /// there are failures.
    pub corrective_csv: Option<String>,
    /// A summary message.
    pub message: String,
}
