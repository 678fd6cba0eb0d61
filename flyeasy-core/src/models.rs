use serde::{Deserialize, Serialize};

use crate::search::CabinClass;

/// One entry of the origin/destination autocomplete list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirportSuggestion {
    pub display_name: String,
    pub code: String,
    pub city_name: String,
    pub country_name: String,
}

/// Where an offer came from. Synthetic offers are placeholders generated
/// when the provider failed or returned nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OfferSource {
    Provider,
    Synthetic,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightEndpoint {
    pub airport_code: String,
    pub airport_name: String,
    /// `YYYY-MM-DD`, empty when the provider omitted it.
    pub date: String,
    /// `HH:MM` on a 24-hour clock, empty when the provider omitted it.
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airline {
    pub name: String,
    pub code: String,
    pub logo_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Price {
    pub amount: f64,
    pub currency: String,
}

/// A priced flight option. Built once by the provider normalizer or the
/// synthetic generator and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightOffer {
    pub id: String,
    pub departure: FlightEndpoint,
    pub arrival: FlightEndpoint,
    pub duration_minutes: u32,
    pub stop_count: u32,
    pub airline: Airline,
    pub flight_number: String,
    pub price: Price,
    pub cabin_class: CabinClass,
    pub source: OfferSource,
}

impl FlightOffer {
    pub fn is_direct(&self) -> bool {
        self.stop_count == 0
    }

    pub fn is_synthetic(&self) -> bool {
        self.source == OfferSource::Synthetic
    }
}
