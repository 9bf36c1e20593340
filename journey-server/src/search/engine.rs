//! Two-pass journey search.
//!
//! Finds journeys from an origin to a destination on a departure date:
//! first direct flights, then two-leg combinations joined at an
//! intermediate city. Results are deduplicated by flight-number path
//! and sorted by first-leg departure.

use std::collections::HashSet;

use chrono::NaiveDate;
use tracing::debug;

use crate::domain::{CityCode, FlightEvent, Journey};

use super::config::SearchLimits;

/// Journey search over a batch of flight events.
pub struct JourneySearch<'a> {
    limits: &'a SearchLimits,
}

impl<'a> JourneySearch<'a> {
    /// Create a new search with the given limits.
    pub fn new(limits: &'a SearchLimits) -> Self {
        Self { limits }
    }

    /// Search for journeys from `origin` to `destination` departing on `date`.
    ///
    /// Departure dates are compared as UTC calendar dates. Only the
    /// first leg is constrained to the query date; a connection may
    /// continue past midnight. An event whose arrival city is already
    /// the destination is never extended with a second leg.
    ///
    /// The same flight-number path is returned at most once, direct and
    /// connecting passes sharing one seen-set. Results are sorted by
    /// first-leg departure, ties keeping pass order (direct first).
    pub fn search(
        &self,
        date: NaiveDate,
        origin: CityCode,
        destination: CityCode,
        events: &[FlightEvent],
    ) -> Vec<Journey> {
        let max_journey = self.limits.max_journey();
        let max_connection = self.limits.max_connection();

        let mut journeys = Vec::new();
        let mut seen: HashSet<Vec<String>> = HashSet::new();

        // Direct pass
        for event in events {
            if event.departure_city() != origin || event.arrival_city() != destination {
                continue;
            }
            if event.departure_date() != date {
                continue;
            }
            if event.duration() > max_journey {
                continue;
            }

            let key = vec![event.flight_number().to_string()];
            if seen.insert(key) {
                journeys.push(Journey::direct(event.clone()));
            }
        }

        // Connecting pass
        for first in events {
            if first.departure_city() != origin
                || first.arrival_city() == destination
                || first.departure_date() != date
            {
                continue;
            }

            for second in events {
                if second.departure_city() != first.arrival_city()
                    || second.arrival_city() != destination
                {
                    continue;
                }
                // Second leg must depart strictly after the first arrives
                if second.departure() <= first.arrival() {
                    continue;
                }
                let wait = second.departure().signed_duration_since(first.arrival());
                if wait > max_connection {
                    continue;
                }
                let total = second.arrival().signed_duration_since(first.departure());
                if total > max_journey {
                    continue;
                }

                let key = vec![
                    first.flight_number().to_string(),
                    second.flight_number().to_string(),
                ];
                if !seen.insert(key) {
                    continue;
                }

                // Safe to skip on Err: the city filter above guarantees the legs chain
                let Ok(journey) = Journey::connecting(first.clone(), second.clone()) else {
                    continue;
                };
                journeys.push(journey);
            }
        }

        // Stable sort keeps pass order for equal departures
        journeys.sort_by_key(|j| j.first_departure());

        debug!(
            date = %date,
            origin = %origin,
            destination = %destination,
            events = events.len(),
            journeys = journeys.len(),
            "journey search complete"
        );

        journeys
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    fn city(s: &str) -> CityCode {
        CityCode::parse(s).unwrap()
    }

    fn utc(d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 9, d, h, mi, 0).unwrap()
    }

    fn event(
        number: &str,
        from: &str,
        to: &str,
        dep: DateTime<Utc>,
        arr: DateTime<Utc>,
    ) -> FlightEvent {
        FlightEvent::new(number, city(from), city(to), dep, arr).unwrap()
    }

    fn search_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 9, 12).unwrap()
    }

    /// Search BUE -> MAD on 2026-09-12 with default limits.
    fn run_search(events: &[FlightEvent]) -> Vec<Journey> {
        let limits = SearchLimits::default();
        JourneySearch::new(&limits).search(search_date(), city("BUE"), city("MAD"), events)
    }

    fn flight_numbers(journey: &Journey) -> Vec<&str> {
        journey.legs().iter().map(|l| l.flight_number()).collect()
    }

    #[test]
    fn direct_flight_on_date() {
        let events = vec![event("XX100", "BUE", "MAD", utc(12, 8, 0), utc(12, 20, 0))];

        let results = run_search(&events);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].connections(), 1);
        assert_eq!(flight_numbers(&results[0]), vec!["XX100"]);
    }

    #[test]
    fn direct_flight_other_date_excluded() {
        let events = vec![event("XX100", "BUE", "MAD", utc(13, 8, 0), utc(13, 20, 0))];

        assert!(run_search(&events).is_empty());
    }

    #[test]
    fn direct_flight_wrong_route_excluded() {
        let events = vec![
            event("XX100", "BUE", "PMI", utc(12, 8, 0), utc(12, 20, 0)),
            event("XX101", "BCN", "MAD", utc(12, 8, 0), utc(12, 10, 0)),
        ];

        assert!(run_search(&events).is_empty());
    }

    #[test]
    fn direct_flight_over_24h_excluded() {
        let events = vec![event("XX100", "BUE", "MAD", utc(12, 8, 0), utc(13, 9, 0))];

        assert!(run_search(&events).is_empty());
    }

    #[test]
    fn direct_flight_exactly_24h_included() {
        let events = vec![event("XX100", "BUE", "MAD", utc(12, 8, 0), utc(13, 8, 0))];

        assert_eq!(run_search(&events).len(), 1);
    }

    #[test]
    fn connecting_flights_found() {
        let events = vec![
            event("XX200", "BUE", "GRU", utc(12, 9, 0), utc(12, 11, 0)),
            event("XX201", "GRU", "MAD", utc(12, 13, 0), utc(12, 23, 0)),
        ];

        let results = run_search(&events);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].connections(), 2);
        assert_eq!(flight_numbers(&results[0]), vec!["XX200", "XX201"]);
    }

    #[test]
    fn connection_gap_over_4h_excluded() {
        let events = vec![
            event("XX200", "BUE", "GRU", utc(12, 9, 0), utc(12, 11, 0)),
            event("XX201", "GRU", "MAD", utc(12, 15, 1), utc(12, 23, 0)),
        ];

        assert!(run_search(&events).is_empty());
    }

    #[test]
    fn connection_gap_exactly_4h_included() {
        let events = vec![
            event("XX200", "BUE", "GRU", utc(12, 9, 0), utc(12, 11, 0)),
            event("XX201", "GRU", "MAD", utc(12, 15, 0), utc(12, 23, 0)),
        ];

        assert_eq!(run_search(&events).len(), 1);
    }

    #[test]
    fn connection_zero_gap_excluded() {
        // Second departs at the exact instant the first arrives
        let events = vec![
            event("XX200", "BUE", "GRU", utc(12, 9, 0), utc(12, 11, 0)),
            event("XX201", "GRU", "MAD", utc(12, 11, 0), utc(12, 23, 0)),
        ];

        assert!(run_search(&events).is_empty());
    }

    #[test]
    fn connection_departing_before_arrival_excluded() {
        let events = vec![
            event("XX200", "BUE", "GRU", utc(12, 9, 0), utc(12, 11, 0)),
            event("XX201", "GRU", "MAD", utc(12, 10, 30), utc(12, 23, 0)),
        ];

        assert!(run_search(&events).is_empty());
    }

    #[test]
    fn connecting_total_over_24h_excluded() {
        // Legal wait, but first departure to final arrival is 24h30m
        let events = vec![
            event("XX200", "BUE", "GRU", utc(12, 8, 0), utc(12, 20, 0)),
            event("XX201", "GRU", "MAD", utc(12, 22, 0), utc(13, 8, 30)),
        ];

        assert!(run_search(&events).is_empty());
    }

    #[test]
    fn connecting_second_leg_may_cross_midnight() {
        let events = vec![
            event("XX200", "BUE", "GRU", utc(12, 23, 0), utc(13, 1, 0)),
            event("XX201", "GRU", "MAD", utc(13, 1, 30), utc(13, 11, 0)),
        ];

        let results = run_search(&events);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].connections(), 2);
    }

    #[test]
    fn first_leg_arriving_at_destination_not_extended() {
        // A leg already at MAD must not pick up a MAD -> MAD event
        let events = vec![
            event("XX100", "BUE", "MAD", utc(12, 8, 0), utc(12, 20, 0)),
            event("XX300", "MAD", "MAD", utc(12, 21, 0), utc(12, 22, 0)),
        ];

        let results = run_search(&events);

        assert_eq!(results.len(), 1);
        assert!(results[0].is_direct());
    }

    #[test]
    fn duplicate_direct_events_counted_once() {
        let events = vec![
            event("XX100", "BUE", "MAD", utc(12, 8, 0), utc(12, 20, 0)),
            event("XX100", "BUE", "MAD", utc(12, 8, 0), utc(12, 20, 0)),
        ];

        assert_eq!(run_search(&events).len(), 1);
    }

    #[test]
    fn duplicate_connecting_paths_counted_once() {
        let events = vec![
            event("XX200", "BUE", "GRU", utc(12, 9, 0), utc(12, 11, 0)),
            event("XX200", "BUE", "GRU", utc(12, 9, 0), utc(12, 11, 0)),
            event("XX201", "GRU", "MAD", utc(12, 13, 0), utc(12, 23, 0)),
        ];

        let results = run_search(&events);

        assert_eq!(results.len(), 1);
        assert_eq!(flight_numbers(&results[0]), vec!["XX200", "XX201"]);
    }

    #[test]
    fn results_sorted_by_first_departure() {
        let events = vec![
            event("XX102", "BUE", "MAD", utc(12, 18, 0), utc(12, 23, 0)),
            event("XX200", "BUE", "GRU", utc(12, 9, 0), utc(12, 11, 0)),
            event("XX100", "BUE", "MAD", utc(12, 12, 0), utc(12, 22, 0)),
            event("XX201", "GRU", "MAD", utc(12, 13, 0), utc(12, 23, 0)),
        ];

        let results = run_search(&events);

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].first_departure(), utc(12, 9, 0));
        assert_eq!(results[1].first_departure(), utc(12, 12, 0));
        assert_eq!(results[2].first_departure(), utc(12, 18, 0));
    }

    #[test]
    fn equal_departures_keep_direct_before_connecting() {
        let events = vec![
            event("XX200", "BUE", "GRU", utc(12, 9, 0), utc(12, 11, 0)),
            event("XX201", "GRU", "MAD", utc(12, 13, 0), utc(12, 23, 0)),
            event("XX100", "BUE", "MAD", utc(12, 9, 0), utc(12, 20, 0)),
        ];

        let results = run_search(&events);

        assert_eq!(results.len(), 2);
        assert!(results[0].is_direct());
        assert_eq!(results[1].connections(), 2);
    }

    #[test]
    fn no_events_no_results() {
        assert!(run_search(&[]).is_empty());
    }

    #[test]
    fn custom_limits_apply() {
        let limits = SearchLimits::new(6, 1);
        let search = JourneySearch::new(&limits);

        let events = vec![
            // 12h direct: over the 6h limit
            event("XX100", "BUE", "MAD", utc(12, 8, 0), utc(12, 20, 0)),
            // 2h wait: over the 1h limit
            event("XX200", "BUE", "GRU", utc(12, 9, 0), utc(12, 11, 0)),
            event("XX201", "GRU", "MAD", utc(12, 13, 0), utc(12, 14, 0)),
        ];

        let results = search.search(search_date(), city("BUE"), city("MAD"), &events);

        assert!(results.is_empty());
    }
}
