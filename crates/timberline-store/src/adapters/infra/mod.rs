//! # Infrastructure Adapters

mod clock;

pub use clock::{FixedClock, SystemClock};
