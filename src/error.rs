//! Error types for the countdown

use thiserror::Error;

use crate::{state::EngineState, utils::iso8601::ParseError};

/// The countdown options cannot produce a countdown
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("end time not specified")]
    MissingTargetTime,

    #[error("end time '{value}' is not a valid ISO-8601 instant")]
    InvalidTargetTime {
        value: String,
        #[source]
        source: ParseError,
    },
}

/// The remote time source could not supply an authoritative instant
#[derive(Debug, Error)]
pub enum TimeSourceError {
    /// Transport level failure
    #[error("failed to reach time source {endpoint}: {message}")]
    Request { endpoint: String, message: String },

    /// The endpoint answered with a non-success status
    #[error("time source {endpoint} answered with status {status}")]
    Status { endpoint: String, status: u16 },

    /// The body does not carry a parseable date-time
    #[error("malformed time source response: {0}")]
    MalformedResponse(String),
}

/// Any failure that stops the countdown
#[derive(Debug, Error)]
pub enum CountdownError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    TimeSource(#[from] TimeSourceError),

    /// Synchronisation happens once, before the countdown is running
    #[error("cannot synchronise a countdown that is {0}")]
    NotSyncing(EngineState),
}
