//! # Search Criteria & Result Model
//!
//! Value types describing a filtered, paginated query and its results.
//! All of these are transient, per-call values with no persistence.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::record::{Level, LogRecord};

/// An optional time window over record timestamps.
///
/// Either side may be omitted, meaning unbounded in that direction. Both
/// bounds are inclusive. When both are present, `end` must not precede
/// `start`; violating this is a validation error at the facade, never a
/// silent correction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeWindow {
    /// Inclusive lower bound, `None` = unbounded.
    pub start: Option<OffsetDateTime>,
    /// Inclusive upper bound, `None` = unbounded.
    pub end: Option<OffsetDateTime>,
}

impl TimeWindow {
    /// A window with no bounds; matches every timestamp.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// A window bounded on both sides.
    pub fn between(start: OffsetDateTime, end: OffsetDateTime) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// A window bounded only from below.
    pub fn since(start: OffsetDateTime) -> Self {
        Self {
            start: Some(start),
            end: None,
        }
    }

    /// A window bounded only from above.
    pub fn until(end: OffsetDateTime) -> Self {
        Self {
            start: None,
            end: Some(end),
        }
    }

    /// Whether the bounds are consistently ordered.
    ///
    /// Only a window with both bounds set can be mis-ordered.
    pub fn is_ordered(&self) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => start <= end,
            _ => true,
        }
    }

    /// Whether `timestamp` falls inside the window.
    pub fn contains(&self, timestamp: OffsetDateTime) -> bool {
        self.start.map_or(true, |s| timestamp >= s) && self.end.map_or(true, |e| timestamp <= e)
    }
}

/// The filter and pagination parameters of one query.
///
/// A `page_size` of 0 means the caller supplied no usable size; the engine
/// substitutes its configured default.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchCriteria {
    /// Time window; unbounded sides match everything.
    pub window: TimeWindow,
    /// Level filter; `None` matches any level.
    pub level: Option<Level>,
    /// Zero-based page index.
    pub page: u32,
    /// Records per page; 0 selects the engine default.
    pub page_size: u32,
}

/// One page of matching records plus continuation metadata.
///
/// `has_more` is true iff `(page + 1) * page_size < total`. `next_page` is
/// `page + 1` while more pages exist; the terminal page repeats its own
/// index, and callers may treat the unchanged index as the termination
/// signal for iteration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// Matching records, newest first.
    pub records: Vec<LogRecord>,
    /// Total matches ignoring pagination.
    pub total: u64,
    /// Whether further pages exist.
    pub has_more: bool,
    /// The next page index to request; equals the current page when done.
    pub next_page: u32,
}

impl SearchResult {
    /// Assemble a result page, computing the continuation metadata.
    pub fn page(records: Vec<LogRecord>, total: u64, page: u32, page_size: u32) -> Self {
        let has_more = (u64::from(page) + 1) * u64::from(page_size) < total;
        let next_page = if has_more { page + 1 } else { page };
        Self {
            records,
            total,
            has_more,
            next_page,
        }
    }
}

/// The outcome of a completed file export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportReceipt {
    /// Name of the created export file.
    pub file_name: String,
    /// Cumulative bytes written to it.
    pub bytes_written: u64,
}
