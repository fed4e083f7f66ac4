// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use teamdesk_domain::ImportRow;

/// A row that could not be reconciled.
///
/// The original fields are carried verbatim so the caller can render a
/// corrective file in the same column layout, with `reason` appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailedRow {
    /// The source row, untouched.
    pub row: ImportRow,
    /// A short human-readable classification of the failure.
    pub reason: String,
}

/// The outcome of one reconciler run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ImportReport {
    /// Rows that were fully committed. A row that created a brand-new
    /// team+subteam pair counts once.
    pub success_count: u64,
    /// Rows that failed, in input order, each with its reason.
    pub failed_rows: Vec<FailedRow>,
}

impl ImportReport {
    /// The number of failed rows.
    #[must_use]
    pub fn failed_count(&self) -> u64 {
        self.failed_rows.len() as u64
    }

    /// The number of rows the run was asked to process.
    #[must_use]
    pub fn attempted(&self) -> u64 {
        self.success_count + self.failed_count()
    }

    /// True when every row succeeded.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failed_rows.is_empty()
    }
}
