//! Domain error types.
//!
//! These errors represent validation failures in the domain layer.
//! They are distinct from API/IO errors.

use super::CityCode;

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DomainError {
    /// Flight event with arrival not strictly after departure
    #[error("flight {flight_number}: arrival must be after departure")]
    ArrivalNotAfterDeparture { flight_number: String },

    /// Consecutive legs don't share a connecting city
    #[error("legs do not chain: first leg arrives at {0}, second departs from {1}")]
    LegsNotChained(CityCode, CityCode),
}
