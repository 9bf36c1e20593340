//! Web layer for the flight journey search.
//!
//! Provides the HTTP endpoint for searching journeys and the small
//! amount of state it needs.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
