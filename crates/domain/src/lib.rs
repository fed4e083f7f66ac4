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

mod error;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use types::{
    ImportRow, MemberRecord, RoleDirectory, RowId, SubTeamRecord, TeamRecord, TeamStatus,
};
pub use validation::{
    DESIGNATION_MAX_LEN, FREE_TEXT_MAX_LEN, NAME_MAX_LEN, validate_charset, validate_email_format,
    validate_length, validate_required, validate_team_active,
};
