// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::future::Future;
use teamdesk::PagedIdFetcher;
use teamdesk_audit::{Actor, Trigger};
use teamdesk_domain::RowId;

/// Id fetcher over a fixed id set, optionally failing.
pub struct FixedIdFetcher {
    all_ids: Vec<RowId>,
    fail: bool,
}

impl FixedIdFetcher {
    pub fn with_ids(raw: &[&str]) -> Self {
        Self {
            all_ids: raw.iter().map(|s| RowId::new(s)).collect(),
            fail: false,
        }
    }

    pub const fn failing() -> Self {
        Self {
            all_ids: Vec::new(),
            fail: true,
        }
    }
}

impl PagedIdFetcher for FixedIdFetcher {
    type Error = String;

    fn fetch_all_ids(&self) -> impl Future<Output = Result<Vec<RowId>, Self::Error>> + Send {
        let result: Result<Vec<RowId>, String> = if self.fail {
            Err(String::from("backend unreachable"))
        } else {
            Ok(self.all_ids.clone())
        };
        async move { result }
    }
}

pub fn create_test_actor() -> Actor {
    Actor::new(String::from("op-123"), String::from("operator"))
}

pub fn create_test_trigger() -> Trigger {
    Trigger::new(String::from("req-456"), String::from("Operator request"))
}
