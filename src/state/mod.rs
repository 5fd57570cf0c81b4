//! State management module
//!
//! Countdown arithmetic, the engine that drives it, and the shared view
//! served to status clients.

pub mod app_state;
pub mod countdown;
pub mod engine_state;
pub mod remaining;
pub mod snapshot;

// Re-export main types
pub use app_state::AppState;
pub use countdown::{Completion, CountdownEngine, CountdownEvent};
pub use engine_state::EngineState;
pub use remaining::{decompose, RemainingDuration};
pub use snapshot::CountdownSnapshot;
