//! # Domain Errors
//!
//! Error types, one enum per layer. Validation errors are detected at the
//! facade before any persistence call; lower-level failures are logged with
//! operation context and re-surfaced as the generic internal kind, so
//! callers never see backing-store detail.

use thiserror::Error;
use time::OffsetDateTime;

/// Errors surfaced by the facade to transport wrappers.
///
/// The taxonomy callers can rely on: `InvalidLevel` and `InvalidTimeRange`
/// are synchronous validation failures that never touch the backing store;
/// everything else collapses into the generic kinds.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// Level outside the closed enumeration.
    #[error("unrecognized level: {level:?}")]
    InvalidLevel {
        /// The offending level string.
        level: String,
    },

    /// End of the time window precedes its start.
    #[error("invalid time range: end {end} precedes start {start}")]
    InvalidTimeRange {
        /// Supplied start bound.
        start: OffsetDateTime,
        /// Supplied end bound.
        end: OffsetDateTime,
    },

    /// Registration failed for a cause that is logged, not leaked.
    #[error("failed to register log record")]
    Registration,

    /// Any other persistence or export failure.
    #[error("internal log store failure")]
    Internal,
}

/// Errors from the backing record store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// I/O failure while reading or writing the store.
    #[error("store I/O failure: {message}")]
    Io {
        /// Adapter-supplied detail.
        message: String,
    },

    /// A persisted record could not be decoded.
    #[error("stored record could not be decoded: {message}")]
    Corrupted {
        /// Adapter-supplied detail.
        message: String,
    },

    /// The filter/query could not be executed.
    #[error("query execution failed: {message}")]
    Query {
        /// Adapter-supplied detail.
        message: String,
    },
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io {
            message: err.to_string(),
        }
    }
}

/// Errors from the export file sink.
#[derive(Debug, Error)]
pub enum SinkError {
    /// I/O failure creating or writing the export destination.
    #[error("export sink I/O failure: {message}")]
    Io {
        /// Adapter-supplied detail.
        message: String,
    },
}

impl From<std::io::Error> for SinkError {
    fn from(err: std::io::Error) -> Self {
        SinkError::Io {
            message: err.to_string(),
        }
    }
}

/// Engine-level failures: either the backing store or the export sink.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Backing store failure.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Export sink failure.
    #[error(transparent)]
    Sink(#[from] SinkError),
}
