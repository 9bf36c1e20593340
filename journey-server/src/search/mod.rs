//! Journey search over flight events.
//!
//! This module implements the core search that answers: "which one or
//! two leg journeys take me from this origin city to that destination
//! city, departing on this date?"
//!
//! The search runs over an in-memory batch of events: one pass for
//! direct flights, one for two-leg connections.

mod config;
mod engine;

pub use config::SearchLimits;
pub use engine::JourneySearch;
