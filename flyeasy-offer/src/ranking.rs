use std::cmp::Ordering;
use std::str::FromStr;

use flyeasy_core::{CoreError, FlightOffer};
use serde::{Deserialize, Serialize};

/// Field results are ordered by, always ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Price,
    Duration,
    #[serde(alias = "departureTime", alias = "departure")]
    DepartureTime,
    #[serde(alias = "arrivalTime", alias = "arrival")]
    ArrivalTime,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Price => "price",
            SortKey::Duration => "duration",
            SortKey::DepartureTime => "departure_time",
            SortKey::ArrivalTime => "arrival_time",
        }
    }

    /// Numeric compare for price and duration; `HH:MM` strings compare
    /// lexicographically.
    pub fn compare(&self, a: &FlightOffer, b: &FlightOffer) -> Ordering {
        match self {
            SortKey::Price => a.price.amount.total_cmp(&b.price.amount),
            SortKey::Duration => a.duration_minutes.cmp(&b.duration_minutes),
            SortKey::DepartureTime => a.departure.time.cmp(&b.departure.time),
            SortKey::ArrivalTime => a.arrival.time.cmp(&b.arrival.time),
        }
    }
}

impl FromStr for SortKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "price" => Ok(SortKey::Price),
            "duration" => Ok(SortKey::Duration),
            "departure_time" | "departureTime" | "departure" => Ok(SortKey::DepartureTime),
            "arrival_time" | "arrivalTime" | "arrival" => Ok(SortKey::ArrivalTime),
            other => Err(CoreError::ValidationError(format!("Unknown sort key: {}", other))),
        }
    }
}

/// Stable ascending sort; ties keep their incoming order.
pub fn sort_offers(mut offers: Vec<FlightOffer>, key: SortKey) -> Vec<FlightOffer> {
    offers.sort_by(|a, b| key.compare(a, b));
    offers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::offer;

    fn ids(offers: &[FlightOffer]) -> Vec<&str> {
        offers.iter().map(|o| o.id.as_str()).collect()
    }

    fn sample() -> Vec<FlightOffer> {
        vec![
            offer("a", 320.0, 300, "09:10", "14:10"),
            offer("b", 180.0, 300, "21:45", "01:30"),
            offer("c", 320.0, 95, "06:05", "07:40"),
            offer("d", 999.99, 480, "13:00", "21:00"),
        ]
    }

    #[test]
    fn test_price_is_non_decreasing_and_stable() {
        let sorted = sort_offers(sample(), SortKey::Price);
        assert_eq!(ids(&sorted), ["b", "a", "c", "d"]);
        for pair in sorted.windows(2) {
            assert!(pair[0].price.amount <= pair[1].price.amount);
        }
    }

    #[test]
    fn test_duration_ties_keep_order() {
        let sorted = sort_offers(sample(), SortKey::Duration);
        assert_eq!(ids(&sorted), ["c", "a", "b", "d"]);
    }

    #[test]
    fn test_time_keys_compare_clock_strings() {
        assert_eq!(ids(&sort_offers(sample(), SortKey::DepartureTime)), ["c", "a", "d", "b"]);
        assert_eq!(ids(&sort_offers(sample(), SortKey::ArrivalTime)), ["b", "c", "a", "d"]);
    }

    #[test]
    fn test_parse_sort_key() {
        assert_eq!("departureTime".parse::<SortKey>().unwrap(), SortKey::DepartureTime);
        assert_eq!("arrival_time".parse::<SortKey>().unwrap(), SortKey::ArrivalTime);
        assert!("cheapest".parse::<SortKey>().is_err());
    }
}
