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

//! Cross-page selection over a paginated, filtered collection.
//!
//! The model tracks which rows are selected without materializing the
//! full id list: "select all matching" is logical, with an exclusion set
//! for rows the operator unchecks afterwards. Selection state is a value
//! object transitioned only by [`apply`]; the host owns propagation and
//! must clear the state whenever the active filter changes (the model
//! does not observe filter state).

mod apply;
mod command;
mod materialize;
mod state;

#[cfg(test)]
mod tests;

pub use apply::apply;
pub use command::SelectionCommand;
pub use materialize::{PagedIdFetcher, materialize};
pub use state::{SelectionScope, SelectionState};
