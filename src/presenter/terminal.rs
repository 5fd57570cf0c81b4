//! Terminal rendering of the countdown

use std::io::{self, Write};

use tracing::warn;

use super::Presenter;
use crate::state::Completion;

/// Redraws the counter in place on a single line
pub struct TerminalPresenter<W: Write + Send> {
    out: W,
    /// A counter line is currently drawn and not yet terminated
    counter_drawn: bool,
}

impl TerminalPresenter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> TerminalPresenter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            counter_drawn: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write(&mut self, text: &str) {
        let result = self
            .out
            .write_all(text.as_bytes())
            .and_then(|_| self.out.flush());
        if let Err(e) = result {
            warn!("Failed to write countdown to terminal: {}", e);
        }
    }
}

impl<W: Write + Send> Presenter for TerminalPresenter<W> {
    fn on_intro(&mut self, message: &str) {
        self.write(&format!("{}\n", message));
    }

    fn on_tick(&mut self, rendered: &str) {
        // Clear the rest of the line in case the new render is shorter
        self.write(&format!("\r{}\x1b[K", rendered));
        self.counter_drawn = true;
    }

    fn on_complete(&mut self, completion: &Completion) {
        let text = match completion {
            // The message replaces the counter line
            Completion::Message(message) if self.counter_drawn => format!("\r\x1b[K{}\n", message),
            Completion::Message(message) => format!("{}\n", message),
            Completion::Zeroed(rendered) => format!("\r{}\x1b[K\n", rendered),
        };
        self.write(&text);
        self.counter_drawn = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(presenter: TerminalPresenter<Vec<u8>>) -> String {
        String::from_utf8(presenter.into_inner()).unwrap()
    }

    #[test]
    fn ticks_redraw_the_same_line() {
        let mut presenter = TerminalPresenter::new(Vec::new());
        presenter.on_intro("Starts in");
        presenter.on_tick("00:00:00:02");
        presenter.on_tick("00:00:00:01");
        presenter.on_complete(&Completion::Zeroed("00:00:00:00".into()));

        assert_eq!(
            output(presenter),
            "Starts in\n\r00:00:00:02\x1b[K\r00:00:00:01\x1b[K\r00:00:00:00\x1b[K\n"
        );
    }

    #[test]
    fn message_replaces_counter() {
        let mut presenter = TerminalPresenter::new(Vec::new());
        presenter.on_tick("00:00:00:01");
        presenter.on_complete(&Completion::Message("Open!".into()));

        assert_eq!(output(presenter), "\r00:00:00:01\x1b[K\r\x1b[KOpen!\n");
    }

    #[test]
    fn message_without_counter_is_a_plain_line() {
        let mut presenter = TerminalPresenter::new(Vec::new());
        presenter.on_complete(&Completion::Message("Open!".into()));
        assert_eq!(output(presenter), "Open!\n");
    }
}
