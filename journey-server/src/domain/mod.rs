//! Domain types for the flight journey search.
//!
//! This module contains the core domain model types that represent
//! validated flight data. All types enforce their invariants at
//! construction time, so code that receives these types can trust
//! their validity.

mod city;
mod error;
mod event;
mod journey;

pub use city::{CityCode, InvalidCityCode};
pub use error::DomainError;
pub use event::FlightEvent;
pub use journey::Journey;
