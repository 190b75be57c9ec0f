//! End-to-end integration of the log store.

pub mod end_to_end;
pub mod persistence;
pub mod streaming;
