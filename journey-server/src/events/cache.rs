//! Caching layer for flight events.
//!
//! The events listing for a departure date changes rarely within a
//! short window, so we cache per-date responses with a TTL instead of
//! hitting the upstream API on every search.

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use moka::future::Cache as MokaCache;

use crate::domain::FlightEvent;

use super::EventSource;
use super::error::EventsError;

/// Cached events entry, shared between cache and in-flight responses.
type EventsEntry = Arc<Vec<FlightEvent>>;

/// Configuration for the events cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached dates.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(60),
            max_capacity: 256,
        }
    }
}

/// Events source with per-date caching.
///
/// Wraps any `EventSource` and caches successful responses keyed by
/// date. Errors are not cached, so a failed fetch is retried on the
/// next request.
pub struct CachedEvents<S> {
    source: S,
    cache: MokaCache<NaiveDate, EventsEntry>,
}

impl<S: EventSource> CachedEvents<S> {
    /// Create a new cached source with the given configuration.
    pub fn new(source: S, config: &CacheConfig) -> Self {
        let cache = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { source, cache }
    }

    /// Access the underlying source for operations that bypass cache.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Get cache statistics (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }
}

impl<S: EventSource> EventSource for CachedEvents<S> {
    async fn fetch_events(&self, date: NaiveDate) -> Result<Vec<FlightEvent>, EventsError> {
        // Try cache first
        if let Some(cached) = self.cache.get(&date).await {
            return Ok(cached.as_ref().clone());
        }

        let events = self.source.fetch_events(date).await?;

        // Cache and return
        let entry = Arc::new(events);
        self.cache.insert(date, entry.clone()).await;

        Ok(entry.as_ref().clone())
    }
}
