// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use teamdesk_import::RepositoryError;

/// API-level errors.
///
/// These are distinct from domain and repository errors and represent
/// the API contract. Per-row import failures never surface here; they
/// are absorbed into the failed-row report. Only batch-fatal conditions
/// (unreadable input) and materialization failures bubble up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The uploaded file could not be read or is missing required
    /// header columns. The batch does not proceed.
    InvalidCsvFormat {
        /// A human-readable description of the problem.
        reason: String,
    },
    /// Resolving the selection's id set against the backend failed.
    ///
    /// The bulk action did not run; the caller keeps the selection
    /// intact and may retry.
    SelectionFetchFailed {
        /// A human-readable description of the failure.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCsvFormat { reason } => write!(f, "Invalid CSV format: {reason}"),
            Self::SelectionFetchFailed { message } => {
                write!(f, "Failed to resolve selection: {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => write!(f, "{resource_type} not found: {message}"),
            Self::Internal { message } => write!(f, "Internal error: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { id } => Self::ResourceNotFound {
                resource_type: String::from("Entity"),
                message: id,
            },
            other => Self::Internal {
                message: other.to_string(),
            },
        }
    }
}
