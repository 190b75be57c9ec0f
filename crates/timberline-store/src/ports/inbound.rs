//! # Inbound Port (Driving Port)
//!
//! The API a transport layer wraps. Whatever the deployment chooses - gRPC,
//! HTTP, a message bus - it calls these operations and maps the
//! [`ServiceError`] taxonomy onto its own status codes.
//!
//! | Operation | Input | Output | Error kinds |
//! |---|---|---|---|
//! | `register` | message, level, metadata | persisted record | invalid-level, registration |
//! | `query` | window, level, page, page size | page + continuation metadata | invalid-level, invalid-range, internal |
//! | `count` | window, level | total matches | invalid-level, invalid-range, internal |
//! | `export_to_file` | window, level | file name + byte size | invalid-level, invalid-range, internal |
//!
//! Streamed delivery of query pages is driven by `stream_query` in the
//! `stream` module, which loops over this port.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::criteria::{ExportReceipt, SearchResult, TimeWindow};
use crate::domain::errors::ServiceError;
use crate::domain::record::LogRecord;

/// Primary log store API.
///
/// `level` parameters arrive as raw strings from the transport; the
/// implementation validates them against the closed enumeration. For the
/// query-shaped operations an absent or empty level means "any level".
#[async_trait]
pub trait LogApi: Send + Sync {
    /// Ingest one record. Assigns identity and timestamp; returns the
    /// record as persisted.
    async fn register(
        &self,
        message: String,
        level: &str,
        metadata: HashMap<String, String>,
    ) -> Result<LogRecord, ServiceError>;

    /// Filtered, paginated search, newest first.
    async fn query(
        &self,
        window: TimeWindow,
        level: Option<&str>,
        page: u32,
        page_size: u32,
    ) -> Result<SearchResult, ServiceError>;

    /// Count matches of the filter, ignoring pagination.
    async fn count(&self, window: TimeWindow, level: Option<&str>) -> Result<u64, ServiceError>;

    /// Export every match to a newly created file; returns its name and
    /// the bytes written.
    async fn export_to_file(
        &self,
        window: TimeWindow,
        level: Option<&str>,
    ) -> Result<ExportReceipt, ServiceError>;
}
