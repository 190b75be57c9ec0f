//! # Log Service
//!
//! The business facade implementing [`LogApi`]. Validates inputs (level
//! enumeration, time-range ordering) strictly before any persistence
//! call, assigns record identity and timestamps on ingestion, and
//! classifies lower-level failures into the caller-facing error taxonomy.
//!
//! Causes of internal failures are logged with operation context and
//! never leaked to the caller as distinct kinds.

use std::collections::HashMap;

use async_trait::async_trait;
use tracing::{debug, error};
use uuid::Uuid;

use crate::domain::compression::MessageCodec;
use crate::domain::criteria::{ExportReceipt, SearchCriteria, SearchResult, TimeWindow};
use crate::domain::errors::ServiceError;
use crate::domain::record::{Level, LogRecord};
use crate::engine::StoreEngine;
use crate::ports::inbound::LogApi;
use crate::ports::outbound::{Clock, ExportSink, RecordStore};

/// The log store facade.
pub struct LogService<S, X, D, C>
where
    S: RecordStore,
    X: ExportSink,
    D: MessageCodec,
    C: Clock,
{
    engine: StoreEngine<S, X, D, C>,
    clock: C,
}

impl<S, X, D, C> LogService<S, X, D, C>
where
    S: RecordStore,
    X: ExportSink,
    D: MessageCodec,
    C: Clock,
{
    /// Create a service over an engine. The clock assigns record
    /// timestamps at ingestion.
    pub fn new(engine: StoreEngine<S, X, D, C>, clock: C) -> Self {
        Self { engine, clock }
    }

    /// Both bounds set and mis-ordered is a validation error; anything
    /// else passes.
    fn validate_window(window: &TimeWindow) -> Result<(), ServiceError> {
        if let (Some(start), Some(end)) = (window.start, window.end) {
            if end < start {
                error!("[store] rejected query: end time {end} precedes start time {start}");
                return Err(ServiceError::InvalidTimeRange { start, end });
            }
        }
        Ok(())
    }

    /// An absent or empty level means "any level"; a present one must
    /// belong to the closed enumeration.
    fn parse_level_filter(level: Option<&str>) -> Result<Option<Level>, ServiceError> {
        match level {
            None | Some("") => Ok(None),
            Some(raw) => Level::parse(raw).map(Some).ok_or_else(|| {
                error!("[store] rejected query: unrecognized level {raw:?}");
                ServiceError::InvalidLevel {
                    level: raw.to_string(),
                }
            }),
        }
    }

    fn criteria(
        window: TimeWindow,
        level: Option<&str>,
        page: u32,
        page_size: u32,
    ) -> Result<SearchCriteria, ServiceError> {
        Self::validate_window(&window)?;
        let level = Self::parse_level_filter(level)?;
        Ok(SearchCriteria {
            window,
            level,
            page,
            page_size,
        })
    }
}

#[async_trait]
impl<S, X, D, C> LogApi for LogService<S, X, D, C>
where
    S: RecordStore,
    X: ExportSink,
    D: MessageCodec,
    C: Clock,
{
    async fn register(
        &self,
        message: String,
        level: &str,
        metadata: HashMap<String, String>,
    ) -> Result<LogRecord, ServiceError> {
        let level = Level::parse(level).ok_or_else(|| {
            error!("[store] rejected registration: unrecognized level {level:?}");
            ServiceError::InvalidLevel {
                level: level.to_string(),
            }
        })?;

        let record = LogRecord::new(Uuid::now_v7(), message, self.clock.now(), level, metadata);
        debug!("[store] registering record {} at level {level}", record.id);

        self.engine.ingest(record).await.map_err(|err| {
            error!("[store] failed to register log record: {err}");
            ServiceError::Registration
        })
    }

    async fn query(
        &self,
        window: TimeWindow,
        level: Option<&str>,
        page: u32,
        page_size: u32,
    ) -> Result<SearchResult, ServiceError> {
        let criteria = Self::criteria(window, level, page, page_size)?;

        self.engine.search(&criteria).await.map_err(|err| {
            error!("[store] search failed: {err}");
            ServiceError::Internal
        })
    }

    async fn count(&self, window: TimeWindow, level: Option<&str>) -> Result<u64, ServiceError> {
        let criteria = Self::criteria(window, level, 0, 0)?;

        self.engine.count(&criteria).await.map_err(|err| {
            error!("[store] count failed: {err}");
            ServiceError::Internal
        })
    }

    async fn export_to_file(
        &self,
        window: TimeWindow,
        level: Option<&str>,
    ) -> Result<ExportReceipt, ServiceError> {
        let criteria = Self::criteria(window, level, 0, 0)?;

        self.engine.export_to_file(&criteria).await.map_err(|err| {
            error!("[store] export failed: {err}");
            ServiceError::Internal
        })
    }
}
