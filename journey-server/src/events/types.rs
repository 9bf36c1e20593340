//! Events API wire DTOs.
//!
//! These types map directly to the flight events API JSON responses.
//! Timestamps arrive as RFC 3339 strings with an explicit UTC offset.

use serde::Deserialize;

use crate::domain::{CityCode, DomainError, FlightEvent};

/// A flight event as returned by the events API.
#[derive(Debug, Clone, Deserialize)]
pub struct FlightEventRecord {
    /// Flight identifier (e.g., "IB1234").
    pub flight_number: String,

    /// Origin city code.
    pub departure_city: String,

    /// Destination city code.
    pub arrival_city: String,

    /// Departure instant, RFC 3339 with offset.
    pub departure_datetime: String,

    /// Arrival instant, RFC 3339 with offset.
    pub arrival_datetime: String,
}

/// Error during record to domain conversion.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RecordError {
    /// Failed to parse a city code
    #[error("invalid city code: {0:?}")]
    InvalidCity(String),

    /// Failed to parse a timestamp
    #[error("invalid timestamp: {0:?}")]
    InvalidTimestamp(String),

    /// Record fails a domain invariant
    #[error("invalid event: {0}")]
    InvalidEvent(DomainError),
}

/// Convert a wire record to a validated domain event.
///
/// City codes are normalized (trimmed, uppercased); timestamps must
/// carry an explicit offset and are normalized to UTC.
pub fn convert_record(record: &FlightEventRecord) -> Result<FlightEvent, RecordError> {
    let departure_city = CityCode::parse_normalized(&record.departure_city)
        .map_err(|_| RecordError::InvalidCity(record.departure_city.clone()))?;
    let arrival_city = CityCode::parse_normalized(&record.arrival_city)
        .map_err(|_| RecordError::InvalidCity(record.arrival_city.clone()))?;

    let departure = chrono::DateTime::parse_from_rfc3339(&record.departure_datetime)
        .map_err(|_| RecordError::InvalidTimestamp(record.departure_datetime.clone()))?;
    let arrival = chrono::DateTime::parse_from_rfc3339(&record.arrival_datetime)
        .map_err(|_| RecordError::InvalidTimestamp(record.arrival_datetime.clone()))?;

    FlightEvent::new(
        record.flight_number.clone(),
        departure_city,
        arrival_city,
        departure,
        arrival,
    )
    .map_err(RecordError::InvalidEvent)
}

/// Convert a batch of wire records, failing on the first invalid one.
///
/// A malformed record poisons the whole batch: serving partial data
/// would silently drop journeys, so the caller gets an error instead.
pub fn convert_records(records: &[FlightEventRecord]) -> Result<Vec<FlightEvent>, RecordError> {
    records.iter().map(convert_record).collect()
}
