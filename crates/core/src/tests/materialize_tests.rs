// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{all_selection, ids, page_selection};
use crate::{PagedIdFetcher, SelectionState, materialize};
use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use teamdesk_domain::RowId;

/// Fetcher returning a fixed id set, counting how often it is called.
struct StubFetcher {
    all_ids: Vec<RowId>,
    calls: AtomicUsize,
}

impl StubFetcher {
    fn with_ids(raw: &[&str]) -> Self {
        Self {
            all_ids: ids(raw),
            calls: AtomicUsize::new(0),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl PagedIdFetcher for StubFetcher {
    type Error = String;

    fn fetch_all_ids(&self) -> impl Future<Output = Result<Vec<RowId>, Self::Error>> + Send {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let result: Vec<RowId> = self.all_ids.clone();
        async move { Ok(result) }
    }
}

/// Fetcher that always fails, simulating a backend outage.
struct FailingFetcher;

impl PagedIdFetcher for FailingFetcher {
    type Error = String;

    fn fetch_all_ids(&self) -> impl Future<Output = Result<Vec<RowId>, Self::Error>> + Send {
        async { Err(String::from("backend unreachable")) }
    }
}

#[tokio::test]
async fn test_explicit_selection_materializes_without_io() {
    let state: SelectionState = page_selection(1, &["b", "a", "c"]);
    let fetcher: StubFetcher = StubFetcher::with_ids(&["a", "b", "c", "d", "e"]);

    let resolved: Vec<RowId> = materialize(&state, &fetcher).await.unwrap();

    assert_eq!(resolved, ids(&["a", "b", "c"]));
    assert_eq!(fetcher.call_count(), 0);
}

#[tokio::test]
async fn test_all_selection_fetches_and_subtracts_exclusions() {
    let mut state: SelectionState = all_selection(5);
    state.excluded_ids.insert(RowId::new("b"));
    state.excluded_ids.insert(RowId::new("d"));

    let fetcher: StubFetcher = StubFetcher::with_ids(&["a", "b", "c", "d", "e"]);
    let resolved: Vec<RowId> = materialize(&state, &fetcher).await.unwrap();

    assert_eq!(resolved, ids(&["a", "c", "e"]));
    assert_eq!(fetcher.call_count(), 1);
}

#[tokio::test]
async fn test_all_selection_without_exclusions_returns_everything() {
    let state: SelectionState = all_selection(3);
    let fetcher: StubFetcher = StubFetcher::with_ids(&["a", "b", "c"]);

    let resolved: Vec<RowId> = materialize(&state, &fetcher).await.unwrap();

    assert_eq!(resolved.len(), 3);
}

#[tokio::test]
async fn test_fetch_failure_propagates_untouched() {
    let state: SelectionState = all_selection(57);

    let err: String = materialize(&state, &FailingFetcher).await.unwrap_err();

    assert_eq!(err, "backend unreachable");
    // The state is borrowed immutably; the caller's selection survives the
    // failed action and can be retried as-is.
    assert!(state.all_selected);
}

#[tokio::test]
async fn test_empty_selection_materializes_to_empty_list() {
    let state: SelectionState = SelectionState::new();
    let fetcher: StubFetcher = StubFetcher::with_ids(&["a"]);

    let resolved: Vec<RowId> = materialize(&state, &fetcher).await.unwrap();

    assert!(resolved.is_empty());
    assert_eq!(fetcher.call_count(), 0);
}
