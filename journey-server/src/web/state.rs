//! Application state for the web layer.

use std::sync::Arc;

use crate::events::EventSource;
use crate::search::SearchLimits;

/// Shared application state.
///
/// Carries the services needed to handle requests. Generic over the
/// event source so production can wire the cached HTTP client while
/// tests use a fixture.
pub struct AppState<S> {
    /// Flight events source
    pub events: Arc<S>,

    /// Journey search limits
    pub limits: Arc<SearchLimits>,
}

impl<S: EventSource> AppState<S> {
    /// Create a new app state.
    pub fn new(events: S, limits: SearchLimits) -> Self {
        Self {
            events: Arc::new(events),
            limits: Arc::new(limits),
        }
    }
}

// Derived Clone would demand `S: Clone`; the fields are already Arcs.
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            events: self.events.clone(),
            limits: self.limits.clone(),
        }
    }
}
