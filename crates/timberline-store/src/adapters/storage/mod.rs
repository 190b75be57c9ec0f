//! # Record Store Adapters
//!
//! Two backing stores ship in-tree: an in-memory store used by unit tests
//! and light deployments, and a JSON-lines file store that persists across
//! restarts without requiring an external database.

mod jsonl;
mod memory;

pub use jsonl::JsonlRecordStore;
pub use memory::InMemoryRecordStore;

use crate::domain::filter::RecordFilter;
use crate::domain::record::StoredRecord;

/// Shared query semantics for the in-process adapters: filter, then order
/// newest first (id breaks timestamp ties so pagination is stable).
pub(crate) fn sorted_matches(records: &[StoredRecord], filter: &RecordFilter) -> Vec<StoredRecord> {
    let mut rows: Vec<StoredRecord> = records
        .iter()
        .filter(|record| filter.matches(record))
        .cloned()
        .collect();
    rows.sort_by(|a, b| {
        b.timestamp
            .cmp(&a.timestamp)
            .then_with(|| b.id.cmp(&a.id))
    });
    rows
}
