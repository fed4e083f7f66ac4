// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{ImportRow, TeamStatus};

/// Maximum length of a name field (team, subteam, or person).
pub const NAME_MAX_LEN: usize = 80;

/// Maximum length of a designation field.
pub const DESIGNATION_MAX_LEN: usize = 100;

/// Maximum length of a free-text field (notes and similar).
pub const FREE_TEXT_MAX_LEN: usize = 200;

/// Validates that a required column is present and non-blank.
///
/// # Arguments
///
/// * `row` - The import row to check
/// * `column` - The canonical column name
/// * `label` - The display label used in the failure reason
///
/// # Returns
///
/// * `Ok(&str)` - The trimmed field value
/// * `Err(DomainError::MissingField)` if the column is absent or blank
///
/// # Errors
///
/// Returns an error if the column is missing or contains only whitespace.
pub fn validate_required<'a>(
    row: &'a ImportRow,
    column: &str,
    label: &str,
) -> Result<&'a str, DomainError> {
    row.get(column).ok_or_else(|| DomainError::MissingField {
        field: label.to_string(),
    })
}

/// Validates that a value contains only allowed name characters.
///
/// The allow-list is letters, digits, space, `/`, and `-`.
///
/// # Errors
///
/// Returns `DomainError::InvalidCharacters` on the first disallowed character.
pub fn validate_charset(value: &str, label: &str) -> Result<(), DomainError> {
    let allowed = |c: char| c.is_alphanumeric() || c == ' ' || c == '/' || c == '-';
    if value.chars().all(allowed) {
        Ok(())
    } else {
        Err(DomainError::InvalidCharacters {
            field: label.to_string(),
        })
    }
}

/// Validates that a value fits within a length bound.
///
/// Length is measured in characters, not bytes.
///
/// # Errors
///
/// Returns `DomainError::LengthExceeded` when the bound is exceeded.
pub fn validate_length(value: &str, max: usize, label: &str) -> Result<(), DomainError> {
    if value.chars().count() > max {
        return Err(DomainError::LengthExceeded {
            field: label.to_string(),
        });
    }
    Ok(())
}

/// Validates that a value looks like an email address.
///
/// The accepted shape is `local@domain` where neither part contains
/// whitespace or a second `@`, and the domain has at least one interior
/// dot with characters on both sides.
///
/// # Errors
///
/// Returns `DomainError::InvalidEmailFormat` when the shape does not match.
pub fn validate_email_format(value: &str) -> Result<(), DomainError> {
    if value.chars().any(char::is_whitespace) {
        return Err(DomainError::InvalidEmailFormat);
    }

    let mut parts = value.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(DomainError::InvalidEmailFormat);
    };

    if local.is_empty() || domain.is_empty() {
        return Err(DomainError::InvalidEmailFormat);
    }

    // The dot must have at least one character on each side.
    let has_interior_dot: bool = domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + c.len_utf8() < domain.len());
    if !has_interior_dot {
        return Err(DomainError::InvalidEmailFormat);
    }

    Ok(())
}

/// Validates that a destination team accepts imports.
///
/// # Errors
///
/// Returns `DomainError::InactiveTeam` when the team is inactive.
pub const fn validate_team_active(status: TeamStatus) -> Result<(), DomainError> {
    match status {
        TeamStatus::Inactive => Err(DomainError::InactiveTeam),
        TeamStatus::Active => Ok(()),
    }
}
