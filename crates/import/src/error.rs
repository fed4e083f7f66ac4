// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

/// Failures reported by an [`crate::EntityRepository`] collaborator.
///
/// Inside a reconciler run these never abort the batch: the affected row
/// is downgraded to a failure and the loop proceeds. Callers performing
/// bulk actions (delete) see them directly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// The backend refused to create an entity.
    #[error("Failed to create {entity}")]
    CreateFailed {
        /// What was being created (e.g. "team", "subteam", "member").
        entity: String,
    },
    /// The referenced entity does not exist.
    #[error("Entity '{id}' not found")]
    NotFound {
        /// The identifier that failed to resolve.
        id: String,
    },
    /// The backend could not be reached or answered with a transport error.
    #[error("Backend error: {message}")]
    Backend {
        /// A human-readable description of the failure.
        message: String,
    },
}
