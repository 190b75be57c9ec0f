//! # Record Filter
//!
//! The conjunctive predicate shared by search, count, and export. A filter
//! is built clause by clause from the criteria: a present start bound adds
//! `timestamp >= start`, a present end bound adds `timestamp <= end`, a
//! present level adds `level == level`; absent clauses are not applied, so
//! a filter with no clauses matches everything.
//!
//! Backing-store adapters translate this into whatever query form their
//! engine understands; [`RecordFilter::matches`] is the reference
//! semantics they must preserve.

use time::OffsetDateTime;

use crate::domain::criteria::SearchCriteria;
use crate::domain::record::{Level, StoredRecord};

/// A conjunctive filter over record timestamp and level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecordFilter {
    /// Inclusive lower timestamp bound, when present.
    pub start: Option<OffsetDateTime>,
    /// Inclusive upper timestamp bound, when present.
    pub end: Option<OffsetDateTime>,
    /// Level equality clause, when present.
    pub level: Option<Level>,
}

impl RecordFilter {
    /// Build the filter for a set of criteria, clause by clause.
    pub fn from_criteria(criteria: &SearchCriteria) -> Self {
        let mut filter = RecordFilter::default();
        if let Some(start) = criteria.window.start {
            filter.start = Some(start);
        }
        if let Some(end) = criteria.window.end {
            filter.end = Some(end);
        }
        if let Some(level) = criteria.level {
            filter.level = Some(level);
        }
        filter
    }

    /// Whether this filter carries no clauses at all.
    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none() && self.level.is_none()
    }

    /// Reference matching semantics: all present clauses must hold.
    pub fn matches(&self, record: &StoredRecord) -> bool {
        if let Some(start) = self.start {
            if record.timestamp < start {
                return false;
            }
        }
        if let Some(end) = self.end {
            if record.timestamp > end {
                return false;
            }
        }
        if let Some(level) = self.level {
            if record.level != level {
                return false;
            }
        }
        true
    }
}
