//! # Store Engine
//!
//! Implements ingestion, filtered search with pagination, count, and
//! full-match file export against the backing record store. Owns the
//! compress-on-write / decompress-on-read policy.
//!
//! All dependencies are injected at construction:
//!
//! - `S`: the persistent record store
//! - `X`: the export file sink
//! - `D`: the message codec
//! - `C`: the clock
//!
//! Compression is best-effort on both paths. A compress failure stores
//! the plain bytes; a decompress failure returns the record in its stored
//! form with the flag still set. Neither fails the enclosing operation.

use futures::StreamExt;
use time::format_description::well_known::Rfc3339;
use tokio::io::AsyncWriteExt;
use tracing::{error, info, warn};

use crate::domain::compression::MessageCodec;
use crate::domain::config::StoreConfig;
use crate::domain::criteria::{ExportReceipt, SearchCriteria, SearchResult};
use crate::domain::errors::{EngineError, StoreError};
use crate::domain::filter::RecordFilter;
use crate::domain::record::{LogRecord, StoredRecord};
use crate::ports::outbound::{Clock, ExportSink, RecordStore};

/// The store engine.
pub struct StoreEngine<S, X, D, C>
where
    S: RecordStore,
    X: ExportSink,
    D: MessageCodec,
    C: Clock,
{
    store: S,
    sink: X,
    codec: D,
    clock: C,
    config: StoreConfig,
}

impl<S, X, D, C> StoreEngine<S, X, D, C>
where
    S: RecordStore,
    X: ExportSink,
    D: MessageCodec,
    C: Clock,
{
    /// Create an engine with the given dependencies.
    pub fn new(store: S, sink: X, codec: D, clock: C, config: StoreConfig) -> Self {
        Self {
            store,
            sink,
            codec,
            clock,
            config,
        }
    }

    /// Persist one record, compressing the message when it exceeds the
    /// configured threshold. At most one physical write per call.
    pub async fn ingest(&self, record: LogRecord) -> Result<LogRecord, StoreError> {
        let (stored, logical) = self.encode(record);
        self.store.insert(stored).await?;
        Ok(logical)
    }

    /// Filtered, paginated search, newest first.
    ///
    /// The total is counted independently of pagination; continuation
    /// metadata follows from it.
    pub async fn search(&self, criteria: &SearchCriteria) -> Result<SearchResult, StoreError> {
        let page_size = self.effective_page_size(criteria);
        let filter = RecordFilter::from_criteria(criteria);
        let skip = u64::from(criteria.page) * u64::from(page_size);

        let rows = self.store.find(&filter, skip, u64::from(page_size)).await?;
        let records = rows.into_iter().map(|row| self.decode(row)).collect();
        let total = self.store.count(&filter).await?;

        Ok(SearchResult::page(records, total, criteria.page, page_size))
    }

    /// Count all matches of the criteria's filter.
    pub async fn count(&self, criteria: &SearchCriteria) -> Result<u64, StoreError> {
        let filter = RecordFilter::from_criteria(criteria);
        self.store.count(&filter).await
    }

    /// Export every match to a newly created file, one formatted line per
    /// record, newest first. Pagination in the criteria is ignored.
    ///
    /// Per-record decode and write failures are logged and skipped; only
    /// query execution and sink creation failures abort the export.
    pub async fn export_to_file(
        &self,
        criteria: &SearchCriteria,
    ) -> Result<ExportReceipt, EngineError> {
        let filter = RecordFilter::from_criteria(criteria);
        let mut cursor = self.store.scan(&filter).await?;

        let file_name = format!("logs_export_{}.txt", self.clock.now().unix_timestamp());
        let mut file = self.sink.create(&file_name).await?;

        let mut bytes_written: u64 = 0;
        while let Some(row) = cursor.next().await {
            let stored = match row {
                Ok(stored) => stored,
                Err(err) => {
                    warn!("[store] skipping undecodable record during export: {err}");
                    continue;
                }
            };
            let record = self.decode(stored);

            let timestamp = match record.timestamp.format(&Rfc3339) {
                Ok(timestamp) => timestamp,
                Err(err) => {
                    warn!(
                        "[store] skipping record {} with unformattable timestamp: {err}",
                        record.id
                    );
                    continue;
                }
            };
            let line = format!("[{}] [{}] {}\n", timestamp, record.level, record.message);

            if let Err(err) = file.write_all(line.as_bytes()).await {
                error!(
                    "[store] failed to write export line for record {}: {err}",
                    record.id
                );
                continue;
            }
            bytes_written += line.len() as u64;
        }

        if let Err(err) = file.flush().await {
            warn!("[store] failed to flush export file {file_name}: {err}");
        }

        info!("[store] export complete: {file_name} ({bytes_written} bytes)");
        Ok(ExportReceipt {
            file_name,
            bytes_written,
        })
    }

    fn effective_page_size(&self, criteria: &SearchCriteria) -> u32 {
        if criteria.page_size == 0 {
            self.config.default_page_size
        } else {
            criteria.page_size
        }
    }

    /// Compute the storage view of a record, applying the compression
    /// policy. Returns the stored form alongside the logical record with
    /// its compression markers set.
    fn encode(&self, mut record: LogRecord) -> (StoredRecord, LogRecord) {
        if record.message.len() > self.config.compression_threshold {
            match self.codec.compress(record.message.as_bytes()) {
                Ok(body) => {
                    let at = self.clock.now();
                    let stored = StoredRecord::compressed(&record, body, at);
                    record.compressed = true;
                    record.compressed_at = Some(at);
                    return (stored, record);
                }
                Err(err) => {
                    warn!(
                        "[store] message compression failed for record {}, storing plain: {err}",
                        record.id
                    );
                }
            }
        }
        let stored = StoredRecord::plain(&record);
        (stored, record)
    }

    /// Compute the logical view of a stored record, decompressing the
    /// body when flagged. A decompress failure yields the stored form.
    fn decode(&self, stored: StoredRecord) -> LogRecord {
        let StoredRecord {
            id,
            body,
            timestamp,
            level,
            metadata,
            compressed,
            compressed_at,
        } = stored;

        let message = if compressed {
            match self.codec.decompress(&body) {
                Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
                Err(err) => {
                    warn!("[store] failed to decompress record {id}, returning stored form: {err}");
                    String::from_utf8_lossy(&body).into_owned()
                }
            }
        } else {
            String::from_utf8_lossy(&body).into_owned()
        };

        LogRecord {
            id,
            message,
            timestamp,
            level,
            metadata,
            compressed,
            compressed_at,
        }
    }
}
