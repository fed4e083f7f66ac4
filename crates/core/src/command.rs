// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use teamdesk_domain::RowId;

/// A selection command represents operator intent as data only.
///
/// Commands are the only way to change selection state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionCommand {
    /// Check or uncheck a single row's checkbox.
    SelectRow {
        /// The row being toggled.
        row_id: RowId,
        /// True for checked, false for unchecked.
        checked: bool,
    },
    /// Select exactly the rows of the current page.
    SelectCurrentPage {
        /// The active page number.
        page: u32,
        /// The ids rendered on the active page.
        page_row_ids: Vec<RowId>,
    },
    /// Logically select every row matching the current filter.
    ///
    /// No ids are fetched; materialization is deferred until a bulk
    /// action needs concrete ids.
    SelectAllMatching {
        /// The matching-row count, cached for UI display only.
        total_matching: u64,
    },
    /// Toggle the table's header checkbox.
    ToggleHeader {
        /// True for checked, false for unchecked.
        checked: bool,
        /// The active page number.
        page: u32,
        /// The ids rendered on the active page.
        page_row_ids: Vec<RowId>,
        /// The matching-row count under the active filter.
        total_matching: u64,
    },
    /// Discard the selection entirely.
    Clear,
    /// The host navigated to another page.
    ///
    /// A selection scoped to "this page" does not follow the operator to
    /// another page; all other scopes persist across navigation.
    PageChanged {
        /// The page now active.
        new_page: u32,
    },
}
