//! Countdown engine
//!
//! Owns everything that changes while counting down: the lifecycle state,
//! the remaining duration and the instant of the previous tick. Callers feed
//! it the authoritative "now" once and the local clock on every tick; it
//! answers with the events a presenter should show.

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use super::{
    remaining::{decompose, RemainingDuration},
    EngineState,
};
use crate::{
    config::CountdownConfig,
    error::{ConfigurationError, CountdownError},
    utils::iso8601,
};

/// How the countdown presents itself once it is over
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// The configured complete message replaces the counter
    Message(String),
    /// No message configured, the counter shows zeros
    Zeroed(String),
}

/// Output of the engine, consumed by a presenter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountdownEvent {
    Intro(String),
    Tick(String),
    Complete(Completion),
}

#[derive(Debug)]
pub struct CountdownEngine {
    config: CountdownConfig,
    target: DateTime<Utc>,
    state: EngineState,
    remaining: RemainingDuration,
    construction_instant: i64,
    last_tick_instant: i64,
}

impl CountdownEngine {
    /// Validate the options and start waiting for the time source
    ///
    /// `now_ms` is the local clock in epoch milliseconds.
    pub fn new(config: CountdownConfig, now_ms: i64) -> Result<Self, ConfigurationError> {
        let value = config
            .target_time
            .as_deref()
            .ok_or(ConfigurationError::MissingTargetTime)?;

        let target = iso8601::parse(value).map_err(|source| ConfigurationError::InvalidTargetTime {
            value: value.to_string(),
            source,
        })?;

        info!("Countdown target set to {}", target.to_rfc3339());

        Ok(Self {
            config,
            target,
            state: EngineState::Syncing,
            remaining: RemainingDuration::zero(),
            construction_instant: now_ms,
            last_tick_instant: now_ms,
        })
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn target(&self) -> DateTime<Utc> {
        self.target
    }

    pub fn remaining(&self) -> RemainingDuration {
        self.remaining
    }

    pub fn is_complete(&self) -> bool {
        self.state.is_terminal()
    }

    /// Apply the authoritative time and emit the opening events
    ///
    /// A target already in the past completes immediately without any tick.
    pub fn sync(
        &mut self,
        authoritative_now: DateTime<Utc>,
        now_ms: i64,
    ) -> Result<Vec<CountdownEvent>, CountdownError> {
        if self.state != EngineState::Syncing {
            return Err(CountdownError::NotSyncing(self.state));
        }

        let remaining_ms = self.target.timestamp_millis() - authoritative_now.timestamp_millis();
        let skew_ms = now_ms - authoritative_now.timestamp_millis();
        info!(
            "Synchronised with time source: {}ms remaining, local clock skew {}ms",
            remaining_ms, skew_ms
        );

        self.remaining = decompose(remaining_ms);
        if self.remaining.is_expired() {
            info!("Target already passed at synchronisation");
            return Ok(vec![self.complete()]);
        }

        self.last_tick_instant = self.construction_instant;
        self.advance(EngineState::Running);

        let mut events = Vec::with_capacity(2);
        if let Some(intro) = self.config.intro() {
            events.push(CountdownEvent::Intro(intro.to_string()));
        }
        events.extend(self.tick(now_ms));
        Ok(events)
    }

    /// Roll the counter over, render it, then re-anchor on the wall clock
    pub fn tick(&mut self, now_ms: i64) -> Vec<CountdownEvent> {
        if self.state != EngineState::Running {
            return Vec::new();
        }

        self.remaining.rollover();
        if self.remaining.is_expired() {
            // The negative frame is never shown; completion replaces it
            return vec![self.complete()];
        }

        let rendered = self.remaining.render(&self.config.labels);

        // A wall clock stepped backwards counts as no time passing
        let elapsed = (now_ms - self.last_tick_instant).max(0) as f64 / 1000.0;
        self.remaining.elapse(elapsed);
        self.last_tick_instant = now_ms;

        debug!("Tick {} (elapsed {:.3}s)", rendered, elapsed);
        vec![CountdownEvent::Tick(rendered)]
    }

    fn complete(&mut self) -> CountdownEvent {
        self.advance(EngineState::Complete);
        self.remaining = RemainingDuration::zero();

        info!("Countdown complete");
        match self.config.completion() {
            Some(message) => CountdownEvent::Complete(Completion::Message(message.to_string())),
            None => CountdownEvent::Complete(Completion::Zeroed(
                self.remaining.render(&self.config.labels),
            )),
        }
    }

    fn advance(&mut self, next: EngineState) {
        debug_assert!(self.state.can_advance_to(next), "{} -> {}", self.state, next);
        debug!("Countdown state {} -> {}", self.state, next);
        self.state = next;
    }
}
