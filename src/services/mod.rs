//! External collaborators module
//!
//! Where the countdown gets its notion of time: the remote authoritative
//! clock and the local wall clock.

pub mod clock;
pub mod time_source;

// Re-export main types
pub use clock::{Clock, SystemClock};
pub use time_source::{extract_instant, HttpTimeSource, TimeSource};
