//! Flight event types.
//!
//! A `FlightEvent` is one scheduled flight as reported by the events
//! provider: a flight number, an origin/destination city pair, and the
//! departure/arrival instants.

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};

use super::{CityCode, DomainError};

/// A single flight event.
///
/// Timestamps are stored normalized to UTC. Construction requires
/// timezone-bearing datetimes and rejects events whose arrival is not
/// strictly after their departure, so any `FlightEvent` value satisfies
/// both invariants.
///
/// Flight numbers are plain identifiers and are not guaranteed unique
/// across a batch of events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightEvent {
    flight_number: String,
    departure_city: CityCode,
    arrival_city: CityCode,
    departure: DateTime<Utc>,
    arrival: DateTime<Utc>,
}

impl FlightEvent {
    /// Create a new flight event, normalizing timestamps to UTC.
    ///
    /// Accepts datetimes in any timezone (`Utc`, `FixedOffset`, ...);
    /// naive datetimes have no `DateTime` representation and so cannot
    /// reach this constructor.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `arrival` is not strictly after `departure`.
    pub fn new<Tz: TimeZone>(
        flight_number: impl Into<String>,
        departure_city: CityCode,
        arrival_city: CityCode,
        departure: DateTime<Tz>,
        arrival: DateTime<Tz>,
    ) -> Result<Self, DomainError> {
        let flight_number = flight_number.into();
        let departure = departure.with_timezone(&Utc);
        let arrival = arrival.with_timezone(&Utc);

        if arrival <= departure {
            return Err(DomainError::ArrivalNotAfterDeparture { flight_number });
        }

        Ok(Self {
            flight_number,
            departure_city,
            arrival_city,
            departure,
            arrival,
        })
    }

    /// Returns the flight number.
    pub fn flight_number(&self) -> &str {
        &self.flight_number
    }

    /// Returns the origin city.
    pub fn departure_city(&self) -> CityCode {
        self.departure_city
    }

    /// Returns the destination city.
    pub fn arrival_city(&self) -> CityCode {
        self.arrival_city
    }

    /// Returns the departure instant (UTC).
    pub fn departure(&self) -> DateTime<Utc> {
        self.departure
    }

    /// Returns the arrival instant (UTC).
    pub fn arrival(&self) -> DateTime<Utc> {
        self.arrival
    }

    /// Returns the UTC calendar date of departure.
    pub fn departure_date(&self) -> NaiveDate {
        self.departure.date_naive()
    }

    /// Returns the flight duration (always positive by construction).
    pub fn duration(&self) -> Duration {
        self.arrival.signed_duration_since(self.departure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn city(s: &str) -> CityCode {
        CityCode::parse(s).unwrap()
    }

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    #[test]
    fn construct_valid_event() {
        let event = FlightEvent::new(
            "IB100",
            city("BUE"),
            city("MAD"),
            utc(2026, 9, 12, 8, 0),
            utc(2026, 9, 12, 20, 0),
        )
        .unwrap();

        assert_eq!(event.flight_number(), "IB100");
        assert_eq!(event.departure_city(), city("BUE"));
        assert_eq!(event.arrival_city(), city("MAD"));
        assert_eq!(event.departure(), utc(2026, 9, 12, 8, 0));
        assert_eq!(event.arrival(), utc(2026, 9, 12, 20, 0));
    }

    #[test]
    fn reject_arrival_equal_to_departure() {
        let result = FlightEvent::new(
            "IB100",
            city("BUE"),
            city("MAD"),
            utc(2026, 9, 12, 8, 0),
            utc(2026, 9, 12, 8, 0),
        );

        assert!(matches!(
            result,
            Err(DomainError::ArrivalNotAfterDeparture { .. })
        ));
    }

    #[test]
    fn reject_arrival_before_departure() {
        let result = FlightEvent::new(
            "IB100",
            city("BUE"),
            city("MAD"),
            utc(2026, 9, 12, 20, 0),
            utc(2026, 9, 12, 8, 0),
        );

        assert!(matches!(
            result,
            Err(DomainError::ArrivalNotAfterDeparture { .. })
        ));
    }

    #[test]
    fn offset_timestamps_normalized_to_utc() {
        // 11:00 at +03:00 is 08:00 UTC
        let plus_three = FixedOffset::east_opt(3 * 3600).unwrap();
        let event = FlightEvent::new(
            "IB100",
            city("BUE"),
            city("MAD"),
            plus_three.with_ymd_and_hms(2026, 9, 12, 11, 0, 0).unwrap(),
            plus_three.with_ymd_and_hms(2026, 9, 12, 23, 0, 0).unwrap(),
        )
        .unwrap();

        assert_eq!(event.departure(), utc(2026, 9, 12, 8, 0));
        assert_eq!(event.arrival(), utc(2026, 9, 12, 20, 0));
    }

    #[test]
    fn ordering_compares_instants_across_offsets() {
        // 23:30 at -03:00 is 02:30 UTC next day: equal instants are rejected
        // even when the local wall clocks differ
        let minus_three = FixedOffset::west_opt(3 * 3600).unwrap();
        let result = FlightEvent::new(
            "AR200",
            city("BUE"),
            city("GRU"),
            minus_three.with_ymd_and_hms(2026, 9, 12, 23, 30, 0).unwrap(),
            minus_three.with_ymd_and_hms(2026, 9, 12, 23, 30, 0).unwrap(),
        );

        assert!(result.is_err());
    }

    #[test]
    fn departure_date_is_utc_calendar_date() {
        // 23:30 at -03:00 departs on the 13th in UTC
        let minus_three = FixedOffset::west_opt(3 * 3600).unwrap();
        let event = FlightEvent::new(
            "AR200",
            city("BUE"),
            city("GRU"),
            minus_three.with_ymd_and_hms(2026, 9, 12, 23, 30, 0).unwrap(),
            minus_three.with_ymd_and_hms(2026, 9, 13, 1, 30, 0).unwrap(),
        )
        .unwrap();

        assert_eq!(
            event.departure_date(),
            chrono::NaiveDate::from_ymd_opt(2026, 9, 13).unwrap()
        );
    }

    #[test]
    fn duration() {
        let event = FlightEvent::new(
            "IB100",
            city("BUE"),
            city("MAD"),
            utc(2026, 9, 12, 8, 0),
            utc(2026, 9, 12, 20, 0),
        )
        .unwrap();

        assert_eq!(event.duration(), Duration::hours(12));
    }

    #[test]
    fn overnight_duration_spans_dates() {
        let event = FlightEvent::new(
            "IB999",
            city("GRU"),
            city("MAD"),
            utc(2026, 9, 12, 20, 30),
            utc(2026, 9, 13, 6, 0),
        )
        .unwrap();

        assert_eq!(event.duration(), Duration::minutes(9 * 60 + 30));
    }
}
