//! Countdown lifecycle states

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle of a countdown
///
/// Transitions only move forward and `Complete` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineState {
    /// No engine has been constructed yet
    Uninitialized,
    /// Waiting for the remote time source
    Syncing,
    /// Periodic ticks are being emitted
    Running,
    /// Target reached, nothing further happens
    Complete,
}

impl EngineState {
    /// Whether moving to `next` respects the one-way lifecycle
    pub fn can_advance_to(self, next: EngineState) -> bool {
        use EngineState::*;
        matches!(
            (self, next),
            (Uninitialized, Syncing)
                | (Syncing, Running)
                | (Syncing, Complete)
                | (Running, Complete)
        )
    }

    pub fn is_terminal(self) -> bool {
        self == EngineState::Complete
    }
}

impl Default for EngineState {
    fn default() -> Self {
        EngineState::Uninitialized
    }
}

impl fmt::Display for EngineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EngineState::Uninitialized => "uninitialized",
            EngineState::Syncing => "syncing",
            EngineState::Running => "running",
            EngineState::Complete => "complete",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifecycle_only_moves_forward() {
        use EngineState::*;
        assert!(Uninitialized.can_advance_to(Syncing));
        assert!(Syncing.can_advance_to(Complete));
        assert!(Running.can_advance_to(Complete));
        assert!(!Complete.can_advance_to(Running));
        assert!(!Running.can_advance_to(Syncing));
        assert!(!Complete.can_advance_to(Complete));
        assert!(Complete.is_terminal());
    }
}
