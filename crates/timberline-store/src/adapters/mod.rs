//! # Adapters Module
//!
//! Concrete implementations of the outbound ports.
//!
//! ## Modules
//!
//! - `storage`: record store adapters (in-memory, JSON-lines file)
//! - `export`: export sink adapters (directory on disk, in-memory capture)
//! - `infra`: clocks

pub mod export;
pub mod infra;
pub mod storage;

pub use export::{DirectoryExportSink, MemoryExportSink};
pub use infra::{FixedClock, SystemClock};
pub use storage::{InMemoryRecordStore, JsonlRecordStore};
