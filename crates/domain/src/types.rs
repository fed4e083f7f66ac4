// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The stable identifier of a row in the console's dataset.
///
/// Rows are opaque to the selection and import logic: nothing here ever
/// inspects row fields beyond this identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RowId(String);

impl RowId {
    /// Creates a new row identifier.
    #[must_use]
    pub fn new(id: &str) -> Self {
        Self(id.to_string())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The lifecycle status of a team.
///
/// Imports are refused for inactive teams; the status gates the
/// business-rule check in the import validator chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TeamStatus {
    /// Team accepts new members and subteams.
    #[default]
    Active,
    /// Team is retired. No imports may target it.
    Inactive,
}

impl TeamStatus {
    /// Converts this status to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }
}

impl FromStr for TeamStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(Self::Active),
            "Inactive" => Ok(Self::Inactive),
            _ => Err(DomainError::InvalidTeamStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for TeamStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A subteam as known to the backend dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubTeamRecord {
    /// The canonical numeric identifier assigned by the backend.
    pub sub_team_id: i64,
    /// The subteam's display name.
    pub name: String,
}

impl SubTeamRecord {
    /// Creates a new subteam record.
    #[must_use]
    pub fn new(sub_team_id: i64, name: &str) -> Self {
        Self {
            sub_team_id,
            name: name.to_string(),
        }
    }
}

/// A team as known to the backend dataset, with its subteams.
///
/// This is the seed material for an import run's entity cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRecord {
    /// The canonical numeric identifier assigned by the backend.
    pub team_id: i64,
    /// The team's display name.
    pub name: String,
    /// The team's lifecycle status.
    pub status: TeamStatus,
    /// The subteams currently known under this team.
    pub sub_teams: Vec<SubTeamRecord>,
}

impl TeamRecord {
    /// Creates a new team record with no subteams.
    #[must_use]
    pub fn new(team_id: i64, name: &str, status: TeamStatus) -> Self {
        Self {
            team_id,
            name: name.to_string(),
            status,
            sub_teams: Vec::new(),
        }
    }

    /// Creates a new team record with the given subteams.
    #[must_use]
    pub fn with_sub_teams(
        team_id: i64,
        name: &str,
        status: TeamStatus,
        sub_teams: Vec<SubTeamRecord>,
    ) -> Self {
        Self {
            team_id,
            name: name.to_string(),
            status,
            sub_teams,
        }
    }
}

/// A member row as known to the backend dataset.
///
/// Members are the rows the console lists, selects, and bulk-deletes;
/// they also seed the duplicate-email check of a member import run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberRecord {
    /// The stable row identifier.
    pub id: RowId,
    /// The member's display name.
    pub name: String,
    /// The member's email address.
    pub email: String,
    /// The member's role, when assigned.
    pub role: Option<String>,
    /// The member's designation, when assigned.
    pub designation: Option<String>,
    /// Free-text notes.
    pub notes: Option<String>,
    /// The team this member belongs to.
    pub team_id: i64,
}

/// A caller-supplied lookup table for cross-reference validation.
///
/// Referenced values (role names today) must resolve against this
/// directory before a row may be imported. Matching is exact after
/// trimming; the directory owner decides the casing convention.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RoleDirectory {
    roles: Vec<String>,
}

impl RoleDirectory {
    /// Creates an empty directory. Every lookup fails against it.
    #[must_use]
    pub const fn new() -> Self {
        Self { roles: Vec::new() }
    }

    /// Creates a directory from the given role names.
    #[must_use]
    pub fn from_roles(roles: &[&str]) -> Self {
        Self {
            roles: roles.iter().map(ToString::to_string).collect(),
        }
    }

    /// Checks whether a role name resolves.
    #[must_use]
    pub fn contains(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role.trim())
    }
}

/// One source record from an uploaded file after header adaptation.
///
/// Column names have already been normalized and aliased by the boundary
/// layer, so consumers address fields by canonical names (`team_name`,
/// `sub_team_name`, `name`, `email`, ...). The original column order is
/// preserved so failed rows can be rendered back in the same layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportRow {
    columns: Vec<(String, String)>,
}

impl ImportRow {
    /// Creates a row from (column-name, value) pairs in file order.
    #[must_use]
    pub const fn new(columns: Vec<(String, String)>) -> Self {
        Self { columns }
    }

    /// Returns the trimmed value of a column, or `None` when the column
    /// is absent or blank.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&str> {
        self.columns
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.trim())
            .filter(|value| !value.is_empty())
    }

    /// Returns the columns in their original file order.
    #[must_use]
    pub fn columns(&self) -> &[(String, String)] {
        &self.columns
    }
}
