//! # Export Sink Adapters
//!
//! - `DirectoryExportSink` writes export files under a configured
//!   directory on disk.
//! - `MemoryExportSink` captures written bytes for assertions in tests.

mod file;
mod memory;

pub use file::DirectoryExportSink;
pub use memory::MemoryExportSink;
