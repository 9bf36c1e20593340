//! Search configuration for the journey search.

use chrono::Duration;

/// Configuration parameters for journey search.
#[derive(Debug, Clone)]
pub struct SearchLimits {
    /// Maximum total journey time, first departure to final arrival (hours).
    /// Journeys longer than this are excluded.
    pub max_journey_hours: i64,

    /// Maximum ground time between connecting legs (hours).
    /// Connections with a longer wait are excluded.
    pub max_connection_hours: i64,
}

impl SearchLimits {
    /// Create a new configuration with the given parameters.
    pub fn new(max_journey_hours: i64, max_connection_hours: i64) -> Self {
        Self {
            max_journey_hours,
            max_connection_hours,
        }
    }

    /// Returns the maximum journey time as a Duration.
    pub fn max_journey(&self) -> Duration {
        Duration::hours(self.max_journey_hours)
    }

    /// Returns the maximum connection time as a Duration.
    pub fn max_connection(&self) -> Duration {
        Duration::hours(self.max_connection_hours)
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            max_journey_hours: 24,
            max_connection_hours: 4,
        }
    }
}
