// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::BTreeSet;
use teamdesk_domain::RowId;

/// Descriptive classification of the current selection.
///
/// The scope drives UI messaging ("All 57 matching members selected")
/// only; selection semantics are carried entirely by the state's sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionScope {
    /// Nothing is selected.
    #[default]
    None,
    /// Exactly the current page's rows were bulk-selected.
    Page,
    /// Every row matching the current filter is selected (minus exclusions).
    All,
    /// Any hand-picked mixture.
    Custom,
}

/// The selection state of one hosted list view.
///
/// Exactly one of `selected_ids` / `excluded_ids` is semantically active
/// at a time, governed by `all_selected`:
/// - `all_selected = false`: `selected_ids` is the explicit selection.
/// - `all_selected = true`: every matching row is selected except those
///   named in `excluded_ids`.
///
/// The state is created empty when the list view mounts, is mutated only
/// through [`crate::apply`], and must be cleared by the host whenever the
/// active filter changes or a bulk action completes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionState {
    /// True when the logical "all matching rows" superset is selected.
    pub all_selected: bool,
    /// The explicit selection; meaningful only when `all_selected = false`.
    pub selected_ids: BTreeSet<RowId>,
    /// Rows logically deselected from the superset; meaningful only when
    /// `all_selected = true`.
    pub excluded_ids: BTreeSet<RowId>,
    /// Descriptive tag for UI banners.
    pub scope: SelectionScope,
    /// The page that was active when `scope` became `Page`.
    pub page_ref: Option<u32>,
    /// The matching-row count cached when "select all" was chosen.
    /// Display-only; queries take the authoritative count as an argument.
    pub total_matching: Option<u64>,
}

impl SelectionState {
    /// Creates a new empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            all_selected: false,
            selected_ids: BTreeSet::new(),
            excluded_ids: BTreeSet::new(),
            scope: SelectionScope::None,
            page_ref: None,
            total_matching: None,
        }
    }

    /// Checks whether a row is currently selected.
    ///
    /// This is the only permitted derivation:
    /// `all_selected ? !excluded.contains(id) : selected.contains(id)`.
    #[must_use]
    pub fn is_selected(&self, row_id: &RowId) -> bool {
        if self.all_selected {
            !self.excluded_ids.contains(row_id)
        } else {
            self.selected_ids.contains(row_id)
        }
    }

    /// Returns the number of effectively selected rows.
    ///
    /// # Arguments
    ///
    /// * `total_matching` - The authoritative count of rows matching the
    ///   active filter, supplied by the host
    #[must_use]
    pub fn effective_count(&self, total_matching: u64) -> u64 {
        if self.all_selected {
            total_matching.saturating_sub(self.excluded_ids.len() as u64)
        } else {
            self.selected_ids.len() as u64
        }
    }
}
