//! In-memory record store.
//!
//! The unit-test double and a usable store for light deployments that do
//! not need persistence. Interior `RwLock` so concurrent ingestions and
//! queries interleave freely.

use std::sync::RwLock;

use async_trait::async_trait;
use futures::stream;

use super::sorted_matches;
use crate::domain::errors::StoreError;
use crate::domain::filter::RecordFilter;
use crate::domain::record::{RecordId, StoredRecord};
use crate::ports::outbound::{RecordStore, RecordStream};

/// In-memory record store backed by a locked vector.
#[derive(Default)]
pub struct InMemoryRecordStore {
    records: RwLock<Vec<StoredRecord>>,
}

impl InMemoryRecordStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records held. Test helper.
    pub fn len(&self) -> usize {
        self.records.read().map(|records| records.len()).unwrap_or(0)
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read_locked(&self) -> Result<Vec<StoredRecord>, StoreError> {
        Ok(self
            .records
            .read()
            .map_err(|_| StoreError::Io {
                message: "record store lock poisoned".to_string(),
            })?
            .clone())
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn insert(&self, record: StoredRecord) -> Result<RecordId, StoreError> {
        let id = record.id;
        self.records
            .write()
            .map_err(|_| StoreError::Io {
                message: "record store lock poisoned".to_string(),
            })?
            .push(record);
        Ok(id)
    }

    async fn find(
        &self,
        filter: &RecordFilter,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<StoredRecord>, StoreError> {
        let records = self.read_locked()?;
        Ok(sorted_matches(&records, filter)
            .into_iter()
            .skip(skip as usize)
            .take(limit as usize)
            .collect())
    }

    async fn count(&self, filter: &RecordFilter) -> Result<u64, StoreError> {
        let records = self.read_locked()?;
        Ok(records.iter().filter(|r| filter.matches(r)).count() as u64)
    }

    async fn scan(&self, filter: &RecordFilter) -> Result<RecordStream, StoreError> {
        let rows = sorted_matches(&self.read_locked()?, filter);
        Ok(Box::pin(stream::iter(rows.into_iter().map(Ok))))
    }
}
