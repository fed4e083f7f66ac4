// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

//! Bulk-import reconciliation.
//!
//! A reconciler run turns a list of loosely-typed rows into backend
//! mutations while isolating row-level failures: a malformed row never
//! aborts the batch. Rows are processed strictly sequentially because a
//! row's success can change whether the next row's parent-exists check
//! holds (two rows creating subteams under the same new team). Each run
//! owns a fresh [`EntityCache`]; re-invoking the reconciler on a failed
//! row set is the supported retry mechanism.

mod cache;
mod error;
mod memory;
mod reconcile;
mod report;
mod repository;
mod validate;

#[cfg(test)]
mod tests;

pub use cache::{CachedTeam, EntityCache};
pub use error::RepositoryError;
pub use memory::InMemoryDirectory;
pub use reconcile::{reconcile_groups, reconcile_members};
pub use report::{FailedRow, ImportReport};
pub use repository::EntityRepository;
pub use validate::{GroupFields, MemberFields, validate_group_row, validate_member_row};
