//! Presentation adapters
//!
//! The engine never renders anything itself. Every intro, tick and completion
//! is handed to a [`Presenter`], which decides where it shows up.

pub mod status;
pub mod terminal;

pub use status::StatusPresenter;
pub use terminal::TerminalPresenter;

use crate::state::{Completion, CountdownEvent};

/// Receives everything the countdown wants to show
pub trait Presenter: Send {
    fn on_intro(&mut self, message: &str);
    fn on_tick(&mut self, rendered: &str);
    fn on_complete(&mut self, completion: &Completion);

    /// Route one engine event to the matching callback
    fn present(&mut self, event: &CountdownEvent) {
        match event {
            CountdownEvent::Intro(message) => self.on_intro(message),
            CountdownEvent::Tick(rendered) => self.on_tick(rendered),
            CountdownEvent::Complete(completion) => self.on_complete(completion),
        }
    }
}

impl<P: Presenter + ?Sized> Presenter for &mut P {
    fn on_intro(&mut self, message: &str) {
        (**self).on_intro(message)
    }

    fn on_tick(&mut self, rendered: &str) {
        (**self).on_tick(rendered)
    }

    fn on_complete(&mut self, completion: &Completion) {
        (**self).on_complete(completion)
    }
}

/// Show the countdown in two places at once
impl<A: Presenter, B: Presenter> Presenter for (A, B) {
    fn on_intro(&mut self, message: &str) {
        self.0.on_intro(message);
        self.1.on_intro(message);
    }

    fn on_tick(&mut self, rendered: &str) {
        self.0.on_tick(rendered);
        self.1.on_tick(rendered);
    }

    fn on_complete(&mut self, completion: &Completion) {
        self.0.on_complete(completion);
        self.1.on_complete(completion);
    }
}
