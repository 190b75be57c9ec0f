//! # Outbound Ports (Driven Ports)
//!
//! Capabilities the store engine requires from the host deployment. Any
//! storage engine offering filtered find/count plus full-scan iteration
//! satisfies [`RecordStore`] - relational, document, or log-structured;
//! the trait deliberately does not assume a query language.
//!
//! In-tree adapters: `InMemoryRecordStore` and `JsonlRecordStore` for the
//! record store, `DirectoryExportSink`/`MemoryExportSink` for the sink,
//! `SystemClock`/`FixedClock` for the clock.

use async_trait::async_trait;
use futures::stream::BoxStream;
use time::OffsetDateTime;
use tokio::io::AsyncWrite;

use crate::domain::errors::{SinkError, StoreError};
use crate::domain::filter::RecordFilter;
use crate::domain::record::{RecordId, StoredRecord};

/// Cursor over all matches of a filter, newest first.
///
/// Items are per-record results so an adapter can surface an undecodable
/// row without aborting the scan; the engine skips such rows.
pub type RecordStream = BoxStream<'static, Result<StoredRecord, StoreError>>;

/// A writable export destination handle.
pub type SinkFile = Box<dyn AsyncWrite + Send + Unpin>;

/// Abstract interface for the persistent record store.
///
/// The store provides its own interior concurrency control; the engine
/// imposes no additional locking on top of it.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Persist one record. Exactly one physical write per call; no partial
    /// write is exposed to the caller.
    async fn insert(&self, record: StoredRecord) -> Result<RecordId, StoreError>;

    /// Fetch matches of `filter` ordered by timestamp descending, applying
    /// `skip`/`limit` as the pagination window.
    async fn find(
        &self,
        filter: &RecordFilter,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<StoredRecord>, StoreError>;

    /// Count all matches of `filter`, ignoring pagination.
    async fn count(&self, filter: &RecordFilter) -> Result<u64, StoreError>;

    /// Iterate over all matches of `filter` ordered by timestamp
    /// descending, without pagination.
    async fn scan(&self, filter: &RecordFilter) -> Result<RecordStream, StoreError>;
}

/// Abstract interface for the export file sink.
#[async_trait]
pub trait ExportSink: Send + Sync {
    /// Create-or-truncate a named destination and return a writable handle.
    async fn create(&self, name: &str) -> Result<SinkFile, SinkError>;
}

/// Abstract interface for time operations (for testability).
pub trait Clock: Send + Sync {
    /// The current instant.
    fn now(&self) -> OffsetDateTime;
}
