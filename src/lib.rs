//! Final Countdown - A countdown to a target timestamp
//!
//! The remaining time is measured against a remote time source once, so a
//! skewed local clock does not matter, and each tick re-anchors on the
//! elapsed wall-clock time so timer jitter does not accumulate.

pub mod config;
pub mod error;
pub mod state;
pub mod api;
pub mod presenter;
pub mod services;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::{Config, CountdownConfig};
pub use error::{ConfigurationError, CountdownError, TimeSourceError};
pub use state::{AppState, CountdownEngine, CountdownEvent};
pub use api::create_router;
pub use utils::signals::shutdown_signal;
