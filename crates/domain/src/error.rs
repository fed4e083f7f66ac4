// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
///
/// The `Display` output of each variant is the per-row failure reason
/// reported to operators, so the wording here is a contract: corrective
/// CSV files carry these strings verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required field is missing or blank.
    MissingField {
        /// The display label of the field (e.g. "Name", "Team Name").
        field: String,
    },
    /// A field contains characters outside the allowed set.
    InvalidCharacters {
        /// The display label of the field.
        field: String,
    },
    /// A field exceeds its length bound.
    LengthExceeded {
        /// The display label of the field.
        field: String,
    },
    /// An email value does not look like an address.
    InvalidEmailFormat,
    /// A referenced lookup value did not resolve.
    LookupNotFound {
        /// The value that failed to resolve.
        value: String,
    },
    /// The destination team is inactive and refuses imports.
    InactiveTeam,
    /// The child entity already exists under its parent.
    DuplicateChild {
        /// The display label of the child (e.g. "Subteam", "Member").
        child: String,
        /// The display label of the parent (e.g. "team").
        parent: String,
    },
    /// A team status string did not parse.
    InvalidTeamStatus(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField { field } => write!(f, "Missing {field}"),
            Self::InvalidCharacters { field } => write!(f, "Invalid characters in {field}"),
            Self::LengthExceeded { field } => write!(f, "{field} exceeds limit"),
            Self::InvalidEmailFormat => write!(f, "Invalid email format"),
            Self::LookupNotFound { value } => write!(f, "{value} not found"),
            Self::InactiveTeam => write!(f, "Cannot import into inactive team"),
            Self::DuplicateChild { child, parent } => {
                write!(f, "{child} already exists under this {parent}")
            }
            Self::InvalidTeamStatus(s) => write!(f, "Invalid team status: {s}"),
        }
    }
}

impl std::error::Error for DomainError {}
