// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use teamdesk_domain::{
    DESIGNATION_MAX_LEN, DomainError, FREE_TEXT_MAX_LEN, ImportRow, NAME_MAX_LEN, RoleDirectory,
    validate_charset, validate_email_format, validate_length, validate_required,
};

/// The canonical fields of a validated group (team/subteam) row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupFields {
    /// The destination team name, as written in the file.
    pub team_name: String,
    /// The subteam name, as written in the file.
    pub sub_team_name: String,
}

/// The canonical fields of a validated member row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberFields {
    /// The member's display name.
    pub name: String,
    /// The member's email address.
    pub email: String,
    /// The destination team name, as written in the file.
    pub team_name: String,
    /// The member's role, when the file carries one.
    pub role: Option<String>,
    /// The member's designation, when the file carries one.
    pub designation: Option<String>,
    /// Free-text notes, when the file carries them.
    pub notes: Option<String>,
}

/// Validates a group row against the field-level rule chain.
///
/// Checks run in a fixed order and the first failure wins, because only
/// one reason is reported per row: required fields, then charset, then
/// length bounds. Resolution-dependent rules (inactive team, duplicate
/// subteam) are the reconciler's responsibility.
///
/// # Errors
///
/// Returns the first failing rule's `DomainError`.
pub fn validate_group_row(row: &ImportRow) -> Result<GroupFields, DomainError> {
    let team_name: &str = validate_required(row, "team_name", "Team Name")?;
    let sub_team_name: &str = validate_required(row, "sub_team_name", "Sub Team Name")?;

    validate_charset(team_name, "Team Name")?;
    validate_charset(sub_team_name, "Sub Team Name")?;

    validate_length(team_name, NAME_MAX_LEN, "Team Name")?;
    validate_length(sub_team_name, NAME_MAX_LEN, "Sub Team Name")?;

    Ok(GroupFields {
        team_name: team_name.to_string(),
        sub_team_name: sub_team_name.to_string(),
    })
}

/// Validates a member row against the field-level rule chain.
///
/// Order: required fields, charset, length bounds, email format, then
/// role lookup. Team resolution, the inactive-team rule, and the
/// duplicate-member rule are the reconciler's responsibility.
///
/// # Errors
///
/// Returns the first failing rule's `DomainError`.
pub fn validate_member_row(
    row: &ImportRow,
    roles: &RoleDirectory,
) -> Result<MemberFields, DomainError> {
    let name: &str = validate_required(row, "name", "Name")?;
    let email: &str = validate_required(row, "email", "Email")?;
    let team_name: &str = validate_required(row, "team_name", "Team Name")?;

    validate_charset(name, "Name")?;

    validate_length(name, NAME_MAX_LEN, "Name")?;
    let designation: Option<&str> = row.get("designation");
    if let Some(value) = designation {
        validate_length(value, DESIGNATION_MAX_LEN, "Designation")?;
    }
    let notes: Option<&str> = row.get("notes");
    if let Some(value) = notes {
        validate_length(value, FREE_TEXT_MAX_LEN, "Notes")?;
    }

    validate_email_format(email)?;

    let role: Option<&str> = row.get("role");
    if let Some(value) = role
        && !roles.contains(value)
    {
        return Err(DomainError::LookupNotFound {
            value: value.to_string(),
        });
    }

    Ok(MemberFields {
        name: name.to_string(),
        email: email.to_string(),
        team_name: team_name.to_string(),
        role: role.map(ToString::to_string),
        designation: designation.map(ToString::to_string),
        notes: notes.map(ToString::to_string),
    })
}
