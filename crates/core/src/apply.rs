// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::SelectionCommand;
use crate::state::{SelectionScope, SelectionState};
use std::collections::BTreeSet;
use teamdesk_domain::RowId;

/// Applies a selection command to the current state, producing a new state.
///
/// Transitions are pure and total: they cannot fail, and the input state
/// is never mutated. The host owns propagation of the returned value.
///
/// # Arguments
///
/// * `state` - The current selection state (immutable)
/// * `command` - The selection command to apply
#[must_use]
pub fn apply(state: &SelectionState, command: SelectionCommand) -> SelectionState {
    match command {
        SelectionCommand::SelectRow { row_id, checked } => select_row(state, row_id, checked),
        SelectionCommand::SelectCurrentPage { page, page_row_ids } => {
            select_current_page(page, page_row_ids)
        }
        SelectionCommand::SelectAllMatching { total_matching } => {
            select_all_matching(total_matching)
        }
        SelectionCommand::ToggleHeader {
            checked,
            page,
            page_row_ids,
            total_matching,
        } => toggle_header(state, checked, page, page_row_ids, total_matching),
        SelectionCommand::Clear => SelectionState::new(),
        SelectionCommand::PageChanged { new_page } => page_changed(state, new_page),
    }
}

/// Toggles a single row's checkbox.
///
/// In all-selected mode the exclusion set is edited; the scope returns to
/// `All` while anything remains selected. In explicit mode the selection
/// set is edited and the scope always demotes to `Custom`, never `Page`,
/// even when the resulting set coincidentally equals the page's rows.
fn select_row(state: &SelectionState, row_id: RowId, checked: bool) -> SelectionState {
    if state.all_selected {
        let mut excluded_ids: BTreeSet<RowId> = state.excluded_ids.clone();
        if checked {
            excluded_ids.remove(&row_id);
        } else {
            excluded_ids.insert(row_id);
        }

        // The cached count decides whether anything is still selected.
        let total: u64 = state.total_matching.unwrap_or(0);
        if total.saturating_sub(excluded_ids.len() as u64) == 0 {
            return SelectionState::new();
        }

        return SelectionState {
            all_selected: true,
            selected_ids: BTreeSet::new(),
            excluded_ids,
            scope: SelectionScope::All,
            page_ref: None,
            total_matching: state.total_matching,
        };
    }

    let mut selected_ids: BTreeSet<RowId> = state.selected_ids.clone();
    if checked {
        selected_ids.insert(row_id);
    } else {
        selected_ids.remove(&row_id);
    }

    if selected_ids.is_empty() {
        return SelectionState::new();
    }

    SelectionState {
        all_selected: false,
        selected_ids,
        excluded_ids: BTreeSet::new(),
        scope: SelectionScope::Custom,
        page_ref: None,
        total_matching: None,
    }
}

/// Selects exactly the rows of the given page.
///
/// An empty page id list is equivalent to clearing the selection.
fn select_current_page(page: u32, page_row_ids: Vec<RowId>) -> SelectionState {
    if page_row_ids.is_empty() {
        return SelectionState::new();
    }

    SelectionState {
        all_selected: false,
        selected_ids: page_row_ids.into_iter().collect(),
        excluded_ids: BTreeSet::new(),
        scope: SelectionScope::Page,
        page_ref: Some(page),
        total_matching: None,
    }
}

/// Logically selects every row matching the current filter.
///
/// No ids are fetched here; `total_matching` is cached for display only
/// and materialization is deferred until a bulk action needs concrete ids.
fn select_all_matching(total_matching: u64) -> SelectionState {
    SelectionState {
        all_selected: true,
        selected_ids: BTreeSet::new(),
        excluded_ids: BTreeSet::new(),
        scope: SelectionScope::All,
        page_ref: None,
        total_matching: Some(total_matching),
    }
}

/// Toggles the table's header checkbox.
///
/// Checking selects the current page. Unchecking removes the page's rows
/// from the effective selection in whichever mode is active; when nothing
/// remains selected the state clears, otherwise the scope is `Custom`.
fn toggle_header(
    state: &SelectionState,
    checked: bool,
    page: u32,
    page_row_ids: Vec<RowId>,
    total_matching: u64,
) -> SelectionState {
    if checked {
        return select_current_page(page, page_row_ids);
    }

    if state.all_selected {
        let mut excluded_ids: BTreeSet<RowId> = state.excluded_ids.clone();
        excluded_ids.extend(page_row_ids);

        if total_matching.saturating_sub(excluded_ids.len() as u64) == 0 {
            return SelectionState::new();
        }

        return SelectionState {
            all_selected: true,
            selected_ids: BTreeSet::new(),
            excluded_ids,
            scope: SelectionScope::Custom,
            page_ref: None,
            total_matching: Some(total_matching),
        };
    }

    let mut selected_ids: BTreeSet<RowId> = state.selected_ids.clone();
    for row_id in &page_row_ids {
        selected_ids.remove(row_id);
    }

    if selected_ids.is_empty() {
        return SelectionState::new();
    }

    SelectionState {
        all_selected: false,
        selected_ids,
        excluded_ids: BTreeSet::new(),
        scope: SelectionScope::Custom,
        page_ref: None,
        total_matching: None,
    }
}

/// Reconciles the selection with a page navigation.
///
/// A `Page`-scoped selection belongs to the page it was made on; leaving
/// that page clears it. Every other scope survives navigation unchanged.
fn page_changed(state: &SelectionState, new_page: u32) -> SelectionState {
    if state.scope == SelectionScope::Page && state.page_ref != Some(new_page) {
        return SelectionState::new();
    }
    state.clone()
}
