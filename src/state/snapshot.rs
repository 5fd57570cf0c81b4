//! Presentable view of a countdown

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Completion, CountdownEvent, EngineState};

/// What a viewer of the countdown currently sees
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountdownSnapshot {
    pub state: EngineState,
    /// Target instant, known once the configuration has been validated
    pub target: Option<DateTime<Utc>>,
    pub intro_message: Option<String>,
    /// Latest rendered counter, including the zeroed final render
    pub display: Option<String>,
    pub complete_message: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl CountdownSnapshot {
    pub fn new() -> Self {
        Self {
            state: EngineState::Uninitialized,
            target: None,
            intro_message: None,
            display: None,
            complete_message: None,
            updated_at: None,
        }
    }

    /// Fold one engine event into the view
    pub fn apply(&mut self, event: &CountdownEvent) {
        match event {
            CountdownEvent::Intro(message) => {
                self.intro_message = Some(message.clone());
            }
            CountdownEvent::Tick(rendered) => {
                self.state = EngineState::Running;
                self.display = Some(rendered.clone());
            }
            CountdownEvent::Complete(Completion::Message(message)) => {
                // The message takes the place of both counter and intro
                self.state = EngineState::Complete;
                self.intro_message = None;
                self.display = None;
                self.complete_message = Some(message.clone());
            }
            CountdownEvent::Complete(Completion::Zeroed(rendered)) => {
                self.state = EngineState::Complete;
                self.display = Some(rendered.clone());
            }
        }
        self.updated_at = Some(Utc::now());
    }
}

impl Default for CountdownSnapshot {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_message_hides_counter_and_intro() {
        let mut snapshot = CountdownSnapshot::new();
        snapshot.apply(&CountdownEvent::Intro("Starts in ".into()));
        snapshot.apply(&CountdownEvent::Tick("00:00:00:01".into()));
        assert_eq!(snapshot.state, EngineState::Running);

        snapshot.apply(&CountdownEvent::Complete(Completion::Message("Go!".into())));
        assert_eq!(snapshot.state, EngineState::Complete);
        assert_eq!(snapshot.display, None);
        assert_eq!(snapshot.intro_message, None);
        assert_eq!(snapshot.complete_message.as_deref(), Some("Go!"));
    }

    #[test]
    fn zeroed_completion_keeps_intro() {
        let mut snapshot = CountdownSnapshot::new();
        snapshot.apply(&CountdownEvent::Intro("Starts in ".into()));
        snapshot.apply(&CountdownEvent::Complete(Completion::Zeroed("00:00:00:00".into())));
        assert_eq!(snapshot.display.as_deref(), Some("00:00:00:00"));
        assert_eq!(snapshot.intro_message.as_deref(), Some("Starts in "));
    }
}
