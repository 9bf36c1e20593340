//! Flight events providers.
//!
//! This module defines the `EventSource` abstraction over "where do
//! flight events come from" and its implementations:
//!
//! - `EventsApiClient` fetches from the upstream HTTP events API
//! - `CachedEvents` wraps any source with a per-date TTL cache
//! - `FixtureEvents` serves a static list, for development and tests
//!
//! All sources hand back validated domain events; malformed upstream
//! records fail the fetch rather than being silently dropped.

use std::future::Future;

use chrono::NaiveDate;

use crate::domain::FlightEvent;

mod cache;
mod client;
mod error;
mod fixture;
mod types;

pub use cache::{CacheConfig, CachedEvents};
pub use client::{EventsApiClient, EventsApiConfig};
pub use error::EventsError;
pub use fixture::FixtureEvents;
pub use types::{FlightEventRecord, RecordError, convert_record, convert_records};

/// A source of flight events for a departure date.
///
/// `date` is a hint for sources that can filter server-side; callers
/// must not assume the returned events all depart on that date.
pub trait EventSource: Send + Sync {
    /// Fetch the flight events relevant to a departure date.
    fn fetch_events(
        &self,
        date: NaiveDate,
    ) -> impl Future<Output = Result<Vec<FlightEvent>, EventsError>> + Send;
}
