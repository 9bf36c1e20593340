//! Fixture events source for development and testing.
//!
//! Serves a fixed set of flight events, either compiled in or loaded
//! from a JSON file, without needing real events API credentials.

use std::path::Path;
use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::FlightEvent;

use super::EventSource;
use super::error::EventsError;
use super::types::{FlightEventRecord, convert_record, convert_records};

/// Sample schedule covering direct, connecting, and overnight cases.
const BUILTIN_RECORDS: &[(&str, &str, &str, &str, &str)] = &[
    (
        "IB100",
        "BUE",
        "MAD",
        "2026-09-12T08:00:00Z",
        "2026-09-12T20:00:00Z",
    ),
    (
        "AR200",
        "BUE",
        "GRU",
        "2026-09-12T09:00:00Z",
        "2026-09-12T11:00:00Z",
    ),
    (
        "IB201",
        "GRU",
        "MAD",
        "2026-09-12T13:00:00Z",
        "2026-09-12T23:00:00Z",
    ),
    (
        "IB999",
        "GRU",
        "MAD",
        "2026-09-12T20:30:00Z",
        "2026-09-13T06:00:00Z",
    ),
];

/// Events source backed by an in-memory list.
#[derive(Clone)]
pub struct FixtureEvents {
    events: Arc<Vec<FlightEvent>>,
}

impl FixtureEvents {
    /// Creates a fixture serving the built-in sample schedule.
    pub fn builtin() -> Self {
        let events = BUILTIN_RECORDS
            .iter()
            .map(|&(flight_number, from, to, dep, arr)| FlightEventRecord {
                flight_number: flight_number.into(),
                departure_city: from.into(),
                arrival_city: to.into(),
                departure_datetime: dep.into(),
                arrival_datetime: arr.into(),
            })
            .filter_map(|record| convert_record(&record).ok())
            .collect();

        Self {
            events: Arc::new(events),
        }
    }

    /// Creates a fixture from a JSON file containing an array of records.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file cannot be read or parsed, or if any
    /// record fails domain validation.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, EventsError> {
        let path = path.as_ref();

        let json = std::fs::read_to_string(path)
            .map_err(|e| EventsError::Fixture(format!("failed to read {path:?}: {e}")))?;

        let records: Vec<FlightEventRecord> = serde_json::from_str(&json)
            .map_err(|e| EventsError::Fixture(format!("failed to parse {path:?}: {e}")))?;

        let events = convert_records(&records)?;

        Ok(Self {
            events: Arc::new(events),
        })
    }

    /// Creates a fixture from already-validated events.
    pub fn from_events(events: Vec<FlightEvent>) -> Self {
        Self {
            events: Arc::new(events),
        }
    }

    /// Returns the number of events served.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns true if the fixture serves no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSource for FixtureEvents {
    /// Date parameter is ignored: fixture data is static, and the
    /// search layer filters by departure date itself.
    async fn fetch_events(&self, _date: NaiveDate) -> Result<Vec<FlightEvent>, EventsError> {
        Ok(self.events.as_ref().clone())
    }
}
