//! # Log Record Model
//!
//! The canonical record shape and level enumeration.
//!
//! Two views of the same record exist:
//!
//! - [`LogRecord`] is the logical view handed to callers: the message is
//!   always the original text.
//! - [`StoredRecord`] is the storage view that crosses the `RecordStore`
//!   port: the body holds either the UTF-8 message bytes or the codec
//!   output, as flagged.
//!
//! The logical message is immutable; the compressed byte form is a derived
//! representation computed at the persistence boundary.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// Unique record identifier, assigned once at ingestion.
///
/// UUIDv7 identifiers are monotonically sortable, so id order follows
/// ingestion order within timestamp ties.
pub type RecordId = Uuid;

/// Severity level of a log record. Closed enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// A failure that requires attention.
    Error,
    /// A recoverable or suspicious condition.
    Warn,
    /// Diagnostic detail.
    Debug,
    /// Routine operational information.
    Info,
}

impl Level {
    /// All members of the enumeration.
    pub const ALL: [Level; 4] = [Level::Error, Level::Warn, Level::Debug, Level::Info];

    /// Parse a level from its wire representation.
    ///
    /// Returns `None` for anything outside the closed enumeration,
    /// including the empty string.
    pub fn parse(s: &str) -> Option<Level> {
        match s {
            "error" => Some(Level::Error),
            "warn" => Some(Level::Warn),
            "debug" => Some(Level::Debug),
            "info" => Some(Level::Info),
            _ => None,
        }
    }

    /// The wire representation of this level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Error => "error",
            Level::Warn => "warn",
            Level::Debug => "debug",
            Level::Info => "info",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single stored log entry, logical view.
///
/// Created once per ingestion call and never updated afterwards; the
/// `compressed`/`compressed_at` fields describe the at-rest representation
/// and are set exactly once by the engine at write time. Returned records
/// are value copies - there is no shared mutable ownership with the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    /// Identifier assigned at ingestion, immutable thereafter.
    pub id: RecordId,
    /// The message text.
    pub message: String,
    /// Ingestion instant, immutable.
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    /// Severity level.
    pub level: Level,
    /// Free-form key/value metadata, immutable after creation.
    pub metadata: HashMap<String, String>,
    /// Whether the at-rest body is compressed.
    pub compressed: bool,
    /// The instant compression occurred, when it did.
    #[serde(with = "time::serde::rfc3339::option")]
    pub compressed_at: Option<OffsetDateTime>,
}

impl LogRecord {
    /// Create a fresh, uncompressed record.
    pub fn new(
        id: RecordId,
        message: String,
        timestamp: OffsetDateTime,
        level: Level,
        metadata: HashMap<String, String>,
    ) -> Self {
        Self {
            id,
            message,
            timestamp,
            level,
            metadata,
            compressed: false,
            compressed_at: None,
        }
    }
}

/// A log record as it crosses the persistence boundary.
///
/// `body` holds the UTF-8 message bytes, or the codec output when
/// `compressed` is set. Everything else mirrors [`LogRecord`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredRecord {
    /// Record identifier.
    pub id: RecordId,
    /// Stored message bytes (plain UTF-8 or codec output).
    pub body: Vec<u8>,
    /// Ingestion instant.
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    /// Severity level.
    pub level: Level,
    /// Free-form key/value metadata.
    pub metadata: HashMap<String, String>,
    /// Whether `body` is codec output.
    pub compressed: bool,
    /// The instant compression occurred, when it did.
    #[serde(with = "time::serde::rfc3339::option")]
    pub compressed_at: Option<OffsetDateTime>,
}

impl StoredRecord {
    /// Build the storage view of an uncompressed record.
    pub fn plain(record: &LogRecord) -> Self {
        Self {
            id: record.id,
            body: record.message.clone().into_bytes(),
            timestamp: record.timestamp,
            level: record.level,
            metadata: record.metadata.clone(),
            compressed: false,
            compressed_at: None,
        }
    }

    /// Build the storage view of a compressed record.
    pub fn compressed(record: &LogRecord, body: Vec<u8>, at: OffsetDateTime) -> Self {
        Self {
            id: record.id,
            body,
            timestamp: record.timestamp,
            level: record.level,
            metadata: record.metadata.clone(),
            compressed: true,
            compressed_at: Some(at),
        }
    }
}
