//! Journeys: ordered flight legs from an origin to a destination.

use chrono::{DateTime, Duration, Utc};

use super::{CityCode, DomainError, FlightEvent};

/// An ordered sequence of flight legs.
///
/// A journey is either direct (one leg) or connecting (two legs whose
/// cities chain). Construction enforces the chaining, so consumers can
/// rely on `legs()` being non-empty and contiguous.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Journey {
    legs: Vec<FlightEvent>,
}

impl Journey {
    /// Creates a direct journey from a single leg.
    pub fn direct(leg: FlightEvent) -> Self {
        Self { legs: vec![leg] }
    }

    /// Creates a connecting journey from two legs.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the first leg does not arrive at the city the
    /// second leg departs from.
    pub fn connecting(first: FlightEvent, second: FlightEvent) -> Result<Self, DomainError> {
        if first.arrival_city() != second.departure_city() {
            return Err(DomainError::LegsNotChained(
                first.arrival_city(),
                second.departure_city(),
            ));
        }
        Ok(Self {
            legs: vec![first, second],
        })
    }

    /// Returns the legs in travel order.
    pub fn legs(&self) -> &[FlightEvent] {
        &self.legs
    }

    /// Returns the number of legs: 1 for direct, 2 for connecting.
    pub fn connections(&self) -> usize {
        self.legs.len()
    }

    /// Returns true if this journey has a single leg.
    pub fn is_direct(&self) -> bool {
        self.legs.len() == 1
    }

    /// Returns the origin city.
    pub fn origin(&self) -> CityCode {
        // Safe: never empty by construction
        self.legs.first().unwrap().departure_city()
    }

    /// Returns the destination city.
    pub fn destination(&self) -> CityCode {
        // Safe: never empty by construction
        self.legs.last().unwrap().arrival_city()
    }

    /// Returns the departure instant of the first leg.
    pub fn first_departure(&self) -> DateTime<Utc> {
        // Safe: never empty by construction
        self.legs.first().unwrap().departure()
    }

    /// Returns the arrival instant of the last leg.
    pub fn final_arrival(&self) -> DateTime<Utc> {
        // Safe: never empty by construction
        self.legs.last().unwrap().arrival()
    }

    /// Returns the elapsed time from first departure to final arrival,
    /// ground time between legs included.
    pub fn total_duration(&self) -> Duration {
        self.final_arrival()
            .signed_duration_since(self.first_departure())
    }
}
