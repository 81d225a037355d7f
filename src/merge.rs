// src/merge.rs
//! Positional join of the two passes.
//!
//! Row N of the listing pass is paired with row N of the detail pass. Nothing
//! checks that both rows describe the same book (`upc` is not a join key);
//! alignment holds only when no detail URL was dropped. On a length mismatch
//! the output is truncated to the shorter side.

use tracing::warn;

use crate::data::{DetailRecord, ListRecord, MergedRecord};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MergeReport {
    pub rows: Vec<MergedRecord>,
    pub list_len: usize,
    pub detail_len: usize,
}

impl MergeReport {
    pub fn is_aligned(&self) -> bool {
        self.list_len == self.detail_len
    }

    /// Input rows that did not make it into the output.
    pub fn truncated(&self) -> usize {
        self.list_len.max(self.detail_len) - self.rows.len()
    }
}

pub fn merge(list: &[ListRecord], details: &[DetailRecord]) -> MergeReport {
    if list.len() != details.len() {
        warn!(
            list = list.len(),
            details = details.len(),
            "row counts differ; truncating merged table to {}",
            list.len().min(details.len())
        );
    }

    let rows = list
        .iter()
        .zip(details)
        .map(|(l, d)| MergedRecord::from_pair(l, d))
        .collect();

    MergeReport { rows, list_len: list.len(), detail_len: details.len() }
}
