//! Background tasks module
//!
//! This module contains the task that drives the countdown alongside the
//! optional status server.

pub mod countdown_timer;

// Re-export main functions
pub use countdown_timer::{countdown_timer_task, TICK_PERIOD};
