//! JSON-lines file-backed record store.
//!
//! Persists records as one JSON object per line, providing durability
//! without requiring an external database. The full record set is loaded
//! at open and kept in memory; inserts append to the file. Suitable for
//! development and light production.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use async_trait::async_trait;
use futures::stream;
use tracing::{info, warn};

use super::sorted_matches;
use crate::domain::errors::StoreError;
use crate::domain::filter::RecordFilter;
use crate::domain::record::{RecordId, StoredRecord};
use crate::ports::outbound::{RecordStore, RecordStream};

/// File-backed record store persisting JSON lines.
pub struct JsonlRecordStore {
    path: PathBuf,
    records: RwLock<Vec<StoredRecord>>,
}

impl JsonlRecordStore {
    /// Open a store at `path`, loading any records already persisted
    /// there. Undecodable lines are skipped, not fatal.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let mut records = Vec::new();

        match std::fs::read_to_string(&path) {
            Ok(contents) => {
                let mut skipped = 0usize;
                for line in contents.lines().filter(|l| !l.trim().is_empty()) {
                    match serde_json::from_str::<StoredRecord>(line) {
                        Ok(record) => records.push(record),
                        Err(_) => skipped += 1,
                    }
                }
                if skipped > 0 {
                    warn!(
                        "[store] {} undecodable lines skipped loading {}",
                        skipped,
                        path.display()
                    );
                }
                info!(
                    "[store] loaded {} records from {}",
                    records.len(),
                    path.display()
                );
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                info!("[store] no existing store file at {}", path.display());
            }
            Err(err) => return Err(err.into()),
        }

        Ok(Self {
            path,
            records: RwLock::new(records),
        })
    }

    fn append_line(&self, record: &StoredRecord) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let line = serde_json::to_string(record).map_err(|e| StoreError::Corrupted {
            message: e.to_string(),
        })?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{line}")?;
        Ok(())
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
impl RecordStore for JsonlRecordStore {
    async fn insert(&self, record: StoredRecord) -> Result<RecordId, StoreError> {
        let id = record.id;
        self.append_line(&record)?;
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
