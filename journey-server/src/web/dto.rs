//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{FlightEvent, Journey};

/// Timestamp rendering used in responses: UTC, minute precision, no
/// timezone suffix.
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Raw query parameters for journey search.
///
/// Every field is optional at the extraction step; the handler checks
/// presence and shape itself so that each failure reports as 422 with a
/// message naming the parameter, rather than axum's default 400.
#[derive(Debug, Deserialize)]
pub struct SearchJourneysRequest {
    /// Departure date (YYYY-MM-DD)
    pub date: Option<String>,

    /// Origin city code
    pub from: Option<String>,

    /// Destination city code
    pub to: Option<String>,
}

/// A single flight segment in a journey response.
#[derive(Debug, Serialize)]
pub struct SegmentDto {
    /// Flight number
    pub flight_number: String,

    /// Origin city code
    pub from: String,

    /// Destination city code
    pub to: String,

    /// Departure time, "YYYY-MM-DD HH:MM" in UTC
    pub departure_time: String,

    /// Arrival time, "YYYY-MM-DD HH:MM" in UTC
    pub arrival_time: String,
}

/// A journey in search responses.
#[derive(Debug, Serialize)]
pub struct JourneyDto {
    /// Number of flight segments (1 or 2)
    pub connections: usize,

    /// Ordered flight segments
    pub path: Vec<SegmentDto>,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,

    /// Individual validation failures, when there are several
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

impl SegmentDto {
    /// Create from a domain FlightEvent.
    pub fn from_event(event: &FlightEvent) -> Self {
        Self {
            flight_number: event.flight_number().to_string(),
            from: event.departure_city().to_string(),
            to: event.arrival_city().to_string(),
            departure_time: event.departure().format(TIME_FORMAT).to_string(),
            arrival_time: event.arrival().format(TIME_FORMAT).to_string(),
        }
    }
}

impl JourneyDto {
    /// Create from a domain Journey.
    pub fn from_journey(journey: &Journey) -> Self {
        Self {
            connections: journey.connections(),
            path: journey.legs().iter().map(SegmentDto::from_event).collect(),
        }
    }
}
