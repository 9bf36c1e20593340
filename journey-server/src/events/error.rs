//! Events provider error types.

use std::fmt;

use super::types::RecordError;

/// Errors from a flight events source.
#[derive(Debug)]
pub enum EventsError {
    /// HTTP request failed (network error, timeout, etc.)
    Http(reqwest::Error),

    /// JSON deserialization failed
    Json {
        message: String,
        body: Option<String>,
    },

    /// API returned an error status code
    ApiError { status: u16, message: String },

    /// Rate limited by the API
    RateLimited,

    /// Invalid API key or unauthorized
    Unauthorized,

    /// Upstream returned a record that fails domain validation
    InvalidRecord(RecordError),

    /// Fixture data could not be loaded
    Fixture(String),
}

impl fmt::Display for EventsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventsError::Http(e) => write!(f, "HTTP error: {e}"),
            EventsError::Json { message, body } => {
                write!(f, "JSON parse error: {message}")?;
                if let Some(body) = body {
                    write!(f, " (body: {body})")?;
                }
                Ok(())
            }
            EventsError::ApiError { status, message } => {
                write!(f, "API error {status}: {message}")
            }
            EventsError::RateLimited => write!(f, "rate limited by events API"),
            EventsError::Unauthorized => write!(f, "unauthorized (invalid API key)"),
            EventsError::InvalidRecord(e) => write!(f, "invalid flight event: {e}"),
            EventsError::Fixture(msg) => write!(f, "fixture error: {msg}"),
        }
    }
}

impl std::error::Error for EventsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EventsError::Http(e) => Some(e),
            EventsError::InvalidRecord(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for EventsError {
    fn from(err: reqwest::Error) -> Self {
        EventsError::Http(err)
    }
}

impl From<RecordError> for EventsError {
    fn from(err: RecordError) -> Self {
        EventsError::InvalidRecord(err)
    }
}
