// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::state::SelectionState;
use std::future::Future;
use teamdesk_domain::RowId;

/// Collaborator that can produce the complete id set for the active filter.
///
/// Implementations paginate the backend internally and capture the filter
/// the hosting view is showing; the selection model never observes filter
/// state itself.
pub trait PagedIdFetcher {
    /// The collaborator's failure type, propagated untouched.
    type Error;

    /// Fetches every id matching the active filter.
    fn fetch_all_ids(&self) -> impl Future<Output = Result<Vec<RowId>, Self::Error>> + Send;
}

/// Resolves the selection into a concrete id list for a bulk action.
///
/// An explicit selection returns its ids directly with no I/O. An
/// all-selected state awaits the fetcher and subtracts the exclusion set.
/// This is the only suspending operation of the model.
///
/// # Arguments
///
/// * `state` - The selection to resolve
/// * `fetcher` - The id-fetch collaborator bound to the active filter
///
/// # Errors
///
/// Propagates the fetcher's failure unchanged. The caller must not proceed
/// with a partial id list; the selection state is left intact so the
/// operator can retry.
pub async fn materialize<F: PagedIdFetcher>(
    state: &SelectionState,
    fetcher: &F,
) -> Result<Vec<RowId>, F::Error> {
    if !state.all_selected {
        return Ok(state.selected_ids.iter().cloned().collect());
    }

    let all_ids: Vec<RowId> = fetcher.fetch_all_ids().await?;
    Ok(all_ids
        .into_iter()
        .filter(|id| !state.excluded_ids.contains(id))
        .collect())
}
