//! # Timberline Store
//!
//! The log-store engine: ingestion of structured records with size-based
//! compression, criteria-based filtered search with page-cursor semantics,
//! full-result file export, and chunked streaming delivery of paginated
//! results.
//!
//! ## Architecture
//!
//! ```text
//! caller ──→ LogService (validation, error classification)
//!               │
//!               ▼
//!           StoreEngine (filter build, compress/decompress, pagination)
//!               │
//!     ┌─────────┼──────────┐
//!     ▼         ▼          ▼
//! RecordStore ExportSink  Clock        (driven ports)
//! ```
//!
//! The streaming adapter (`stream_query`) sits beside the facade and loops
//! its pages into a transport-facing chunk sink.
//!
//! ## Crate Structure (Hexagonal Architecture)
//!
//! - `domain/` - Pure domain logic (record model, criteria, filter, codec)
//! - `ports/` - Port traits (inbound API, outbound capabilities)
//! - `adapters/` - In-memory and file-backed stores, sinks, clocks
//! - `engine.rs` - The store engine
//! - `service.rs` - The business facade implementing the inbound API
//! - `stream.rs` - The streaming adapter
//!
//! ## Usage
//!
//! ```ignore
//! use timberline_store::{
//!     DirectoryExportSink, InMemoryRecordStore, LogService, StoreConfig, StoreEngine,
//!     SystemClock, TimeWindow, ZstdCodec,
//! };
//!
//! let engine = StoreEngine::new(
//!     InMemoryRecordStore::new(),
//!     DirectoryExportSink::new("./exports"),
//!     ZstdCodec,
//!     SystemClock,
//!     StoreConfig::from_env(),
//! );
//! let service = LogService::new(engine, SystemClock);
//!
//! let record = service.register("boom".into(), "error", Default::default()).await?;
//! let page = service.query(TimeWindow::unbounded(), Some("error"), 0, 50).await?;
//! ```

pub mod adapters;
pub mod domain;
pub mod engine;
pub mod ports;
pub mod service;
pub mod stream;

// Re-export key types for convenience
pub use adapters::{
    DirectoryExportSink, FixedClock, InMemoryRecordStore, JsonlRecordStore, MemoryExportSink,
    SystemClock,
};
pub use domain::compression::{CodecError, MessageCodec, NoopCodec, ZstdCodec};
pub use domain::config::{StoreConfig, StreamConfig};
pub use domain::criteria::{ExportReceipt, SearchCriteria, SearchResult, TimeWindow};
pub use domain::errors::{EngineError, ServiceError, SinkError, StoreError};
pub use domain::filter::RecordFilter;
pub use domain::record::{Level, LogRecord, RecordId, StoredRecord};
pub use engine::StoreEngine;
pub use ports::inbound::LogApi;
pub use ports::outbound::{Clock, ExportSink, RecordStore, RecordStream, SinkFile};
pub use service::LogService;
pub use stream::{stream_query, ChunkSendError, ChunkSink, StreamError, StreamRequest};
