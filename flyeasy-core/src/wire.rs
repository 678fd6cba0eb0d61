//! Response shapes of the remote services.
//!
//! Every field is optional: the providers omit or null fields freely, and
//! defaults are applied once in [`crate::normalize`] instead of leaking
//! loosely typed JSON into the rest of the workspace.

use serde::Deserialize;

// ============================================================================
// Sky Scrapper: airport search
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AirportSearchResponse {
    pub data: Option<Vec<AirportEntry>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AirportEntry {
    pub sky_id: Option<String>,
    pub entity_id: Option<String>,
    pub presentation: Option<Presentation>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Presentation {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub suggestion_title: Option<String>,
}

// ============================================================================
// Sky Scrapper: flight search
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FlightSearchResponse {
    pub data: Option<FlightSearchData>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FlightSearchData {
    pub result: Option<FlightSearchResult>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FlightSearchResult {
    pub itineraries: Option<Vec<Itinerary>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Itinerary {
    pub id: Option<String>,
    pub price: Option<ItineraryPrice>,
    pub legs: Option<Vec<Leg>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItineraryPrice {
    pub raw: Option<f64>,
    pub formatted: Option<String>,
    pub currency: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leg {
    pub id: Option<String>,
    pub duration_in_minutes: Option<u32>,
    pub segments: Option<Vec<Segment>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub departure: Option<SegmentPoint>,
    pub arrival: Option<SegmentPoint>,
    pub airline: Option<SegmentAirline>,
    pub flight_number: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SegmentPoint {
    pub airport: Option<SegmentAirport>,
    pub date: Option<String>,
    pub time: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SegmentAirport {
    pub code: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SegmentAirline {
    pub name: Option<String>,
    pub code: Option<String>,
}

// ============================================================================
// Nominatim: reverse geocoding
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReverseGeocodeResponse {
    pub address: Option<GeoAddress>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeoAddress {
    pub city: Option<String>,
    pub town: Option<String>,
    pub village: Option<String>,
    pub county: Option<String>,
}
