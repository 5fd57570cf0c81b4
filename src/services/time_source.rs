//! Remote time source
//!
//! The countdown trusts a remote clock over the local one when working out how
//! long is left. The source is consulted exactly once, with no retry and no
//! timeout.

use std::future::Future;

use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::{debug, info};

use crate::{error::TimeSourceError, utils::iso8601};

/// Supplies the authoritative current instant
pub trait TimeSource: Send + Sync {
    fn now(&self) -> impl Future<Output = Result<DateTime<Utc>, TimeSourceError>> + Send;
}

/// Fetches the current instant from a JSON endpoint
#[derive(Debug, Clone)]
pub struct HttpTimeSource {
    endpoint: String,
    field: String,
    http_client: reqwest::Client,
}

impl HttpTimeSource {
    /// `field` names the JSON property holding the date-time string
    pub fn new(endpoint: impl Into<String>, field: impl Into<String>) -> Result<Self, TimeSourceError> {
        let endpoint = endpoint.into();
        let http_client = reqwest::Client::builder()
            .build()
            .map_err(|e| TimeSourceError::Request {
                endpoint: endpoint.clone(),
                message: e.to_string(),
            })?;

        Ok(Self {
            endpoint,
            field: field.into(),
            http_client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl TimeSource for HttpTimeSource {
    async fn now(&self) -> Result<DateTime<Utc>, TimeSourceError> {
        debug!("Requesting current time from {}", self.endpoint);

        let request_error = |e: reqwest::Error| TimeSourceError::Request {
            endpoint: self.endpoint.clone(),
            message: e.to_string(),
        };

        let response = self
            .http_client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(request_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(TimeSourceError::Status {
                endpoint: self.endpoint.clone(),
                status: status.as_u16(),
            });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| TimeSourceError::MalformedResponse(format!("body is not JSON: {}", e)))?;

        let now = extract_instant(&body, &self.field)?;
        info!("Time source reports {}", now.to_rfc3339());
        Ok(now)
    }
}

/// Pull the date-time string out of a time source body
pub fn extract_instant(body: &Value, field: &str) -> Result<DateTime<Utc>, TimeSourceError> {
    let raw = body
        .get(field)
        .ok_or_else(|| TimeSourceError::MalformedResponse(format!("missing field '{}'", field)))?
        .as_str()
        .ok_or_else(|| TimeSourceError::MalformedResponse(format!("field '{}' is not a string", field)))?;

    iso8601::parse(raw).map_err(|e| TimeSourceError::MalformedResponse(e.to_string()))
}
