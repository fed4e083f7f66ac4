// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{SelectionCommand, SelectionState, apply};
use teamdesk_domain::RowId;

pub fn ids(raw: &[&str]) -> Vec<RowId> {
    raw.iter().map(|s| RowId::new(s)).collect()
}

pub fn page_selection(page: u32, raw: &[&str]) -> SelectionState {
    apply(
        &SelectionState::new(),
        SelectionCommand::SelectCurrentPage {
            page,
            page_row_ids: ids(raw),
        },
    )
}

pub fn all_selection(total_matching: u64) -> SelectionState {
    apply(
        &SelectionState::new(),
        SelectionCommand::SelectAllMatching { total_matching },
    )
}
