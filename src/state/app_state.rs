//! Shared state read by the status API

use std::{
    sync::{Arc, Mutex},
    time::Instant,
};
use chrono::{DateTime, Utc};
use tracing::debug;

use super::{CountdownEvent, CountdownSnapshot, EngineState};

/// State shared between the countdown task and the HTTP handlers
#[derive(Debug)]
pub struct AppState {
    /// What the countdown currently shows
    pub snapshot: Arc<Mutex<CountdownSnapshot>>,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
}

impl AppState {
    pub fn new(port: u16, host: String) -> Self {
        Self {
            snapshot: Arc::new(Mutex::new(CountdownSnapshot::new())),
            start_time: Instant::now(),
            port,
            host,
        }
    }

    /// Apply a change to the snapshot
    pub fn update_snapshot<F>(&self, updater: F) -> Result<CountdownSnapshot, String>
    where
        F: FnOnce(&mut CountdownSnapshot),
    {
        let mut snapshot = self.snapshot.lock()
            .map_err(|e| format!("Failed to lock countdown snapshot: {}", e))?;

        updater(&mut *snapshot);
        Ok(snapshot.clone())
    }

    /// Record that an engine exists and is waiting for the time source
    pub fn mark_syncing(&self, target: DateTime<Utc>) -> Result<(), String> {
        self.update_snapshot(|snapshot| {
            snapshot.state = EngineState::Syncing;
            snapshot.target = Some(target);
        })?;
        debug!("Snapshot marked as syncing");
        Ok(())
    }

    /// Fold an engine event into the snapshot
    pub fn apply_event(&self, event: &CountdownEvent) -> Result<CountdownSnapshot, String> {
        self.update_snapshot(|snapshot| snapshot.apply(event))
    }

    /// Get current snapshot
    pub fn get_snapshot(&self) -> Result<CountdownSnapshot, String> {
        self.snapshot.lock()
            .map(|snapshot| snapshot.clone())
            .map_err(|e| format!("Failed to lock countdown snapshot: {}", e))
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }
}
