//! Publishes the countdown to the shared status snapshot

use std::sync::Arc;

use tracing::error;

use super::Presenter;
use crate::state::{AppState, Completion, CountdownEvent};

/// Feeds events into [`AppState`] so the HTTP API can report them
#[derive(Debug, Clone)]
pub struct StatusPresenter {
    state: Arc<AppState>,
}

impl StatusPresenter {
    pub fn new(state: Arc<AppState>) -> Self {
        Self { state }
    }

    fn publish(&self, event: CountdownEvent) {
        if let Err(e) = self.state.apply_event(&event) {
            error!("Failed to publish countdown event: {}", e);
        }
    }
}

impl Presenter for StatusPresenter {
    fn on_intro(&mut self, message: &str) {
        self.publish(CountdownEvent::Intro(message.to_string()));
    }

    fn on_tick(&mut self, rendered: &str) {
        self.publish(CountdownEvent::Tick(rendered.to_string()));
    }

    fn on_complete(&mut self, completion: &Completion) {
        self.publish(CountdownEvent::Complete(completion.clone()));
    }
}
