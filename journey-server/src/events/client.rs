//! Flight events HTTP client.
//!
//! Provides an async client for the flight events API. Handles
//! authentication, concurrency limiting, and conversion to domain types.

use std::sync::Arc;

use chrono::NaiveDate;
use reqwest::header::{HeaderMap, HeaderValue};
use tokio::sync::Semaphore;
use tracing::debug;

use crate::domain::FlightEvent;

use super::EventSource;
use super::error::EventsError;
use super::types::{FlightEventRecord, convert_records};

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 5;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the events API client.
#[derive(Debug, Clone)]
pub struct EventsApiConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Optional API key sent as an `x-api-key` header
    pub api_key: Option<String>,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl EventsApiConfig {
    /// Create a new config with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set an API key for authentication.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Flight events API client.
///
/// Fetches the flight events for a given departure date. Uses a
/// semaphore to limit concurrent requests and avoid rate limiting.
#[derive(Debug, Clone)]
pub struct EventsApiClient {
    http: reqwest::Client,
    base_url: String,
    semaphore: Arc<Semaphore>,
}

impl EventsApiClient {
    /// Create a new events client with the given configuration.
    pub fn new(config: EventsApiConfig) -> Result<Self, EventsError> {
        let mut headers = HeaderMap::new();

        if let Some(key) = &config.api_key {
            let api_key = HeaderValue::from_str(key).map_err(|_| EventsError::ApiError {
                status: 0,
                message: "Invalid API key format".to_string(),
            })?;
            headers.insert("x-api-key", api_key);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent)),
        })
    }
}

impl EventSource for EventsApiClient {
    /// Fetch the flight events for a departure date.
    ///
    /// Calls `GET {base_url}/events?date=YYYY-MM-DD` and converts the
    /// response to validated domain events. A single malformed record
    /// fails the whole fetch.
    async fn fetch_events(&self, date: NaiveDate) -> Result<Vec<FlightEvent>, EventsError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| EventsError::ApiError {
                status: 0,
                message: "Semaphore closed".to_string(),
            })?;

        let url = format!("{}/events", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[("date", date.format("%Y-%m-%d").to_string())])
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(EventsError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(EventsError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(EventsError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let records: Vec<FlightEventRecord> =
            serde_json::from_str(&body).map_err(|e| EventsError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        let events = convert_records(&records)?;

        debug!(date = %date, count = events.len(), "fetched flight events");

        Ok(events)
    }
}
