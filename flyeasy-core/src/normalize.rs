use uuid::Uuid;

use crate::iata::airline_logo_url;
use crate::models::{Airline, AirportSuggestion, FlightEndpoint, FlightOffer, OfferSource, Price};
use crate::search::CabinClass;
use crate::wire::{
    AirportSearchResponse, FlightSearchResponse, Itinerary, Leg, ReverseGeocodeResponse, SegmentPoint,
};

const UNKNOWN_AIRPORT: &str = "Unknown Airport";
const DEFAULT_CURRENCY: &str = "USD";

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn text(value: Option<&String>) -> String {
    value.cloned().unwrap_or_default()
}

pub fn suggestions_from_response(response: &AirportSearchResponse) -> Vec<AirportSuggestion> {
    let Some(entries) = response.data.as_ref() else {
        return Vec::new();
    };

    entries
        .iter()
        .map(|entry| {
            let presentation = entry.presentation.as_ref();
            AirportSuggestion {
                display_name: non_empty(presentation.and_then(|p| p.title.as_deref()))
                    .unwrap_or(UNKNOWN_AIRPORT)
                    .to_string(),
                code: text(entry.sky_id.as_ref()),
                city_name: text(presentation.and_then(|p| p.subtitle.as_ref())),
                country_name: String::new(),
            }
        })
        .collect()
}

/// Flattens `data.result.itineraries[].legs[]` into one offer per leg,
/// cheapest first. Legs without segments are skipped.
pub fn offers_from_response(response: &FlightSearchResponse, cabin_class: CabinClass) -> Vec<FlightOffer> {
    let Some(itineraries) = response
        .data
        .as_ref()
        .and_then(|d| d.result.as_ref())
        .and_then(|r| r.itineraries.as_ref())
    else {
        tracing::warn!("Flight search response has no itineraries");
        return Vec::new();
    };

    let mut offers: Vec<FlightOffer> = itineraries
        .iter()
        .flat_map(|itinerary| {
            itinerary
                .legs
                .iter()
                .flatten()
                .filter_map(move |leg| offer_from_leg(itinerary, leg, cabin_class))
        })
        .collect();

    tracing::debug!("Normalized {} provider offers", offers.len());
    offers.sort_by(|a, b| a.price.amount.total_cmp(&b.price.amount));
    offers
}

fn endpoint(point: Option<&SegmentPoint>) -> FlightEndpoint {
    let airport = point.and_then(|p| p.airport.as_ref());
    FlightEndpoint {
        airport_code: text(airport.and_then(|a| a.code.as_ref())),
        airport_name: text(airport.and_then(|a| a.name.as_ref())),
        date: text(point.and_then(|p| p.date.as_ref())),
        time: text(point.and_then(|p| p.time.as_ref())),
    }
}

fn offer_from_leg(itinerary: &Itinerary, leg: &Leg, cabin_class: CabinClass) -> Option<FlightOffer> {
    let segments = leg.segments.as_deref().filter(|s| !s.is_empty())?;
    let first = segments.first()?;
    let last = segments.last()?;

    let airline = first.airline.as_ref();
    let airline_code = text(airline.and_then(|a| a.code.as_ref()));
    let logo_url = non_empty(Some(airline_code.as_str())).map(airline_logo_url);

    let price = itinerary.price.as_ref();

    Some(FlightOffer {
        id: non_empty(leg.id.as_deref())
            .map(str::to_string)
            .unwrap_or_else(generated_flight_id),
        departure: endpoint(first.departure.as_ref()),
        arrival: endpoint(last.arrival.as_ref()),
        duration_minutes: leg.duration_in_minutes.unwrap_or(0),
        stop_count: (segments.len() - 1) as u32,
        airline: Airline {
            name: text(airline.and_then(|a| a.name.as_ref())),
            code: airline_code,
            logo_url,
        },
        flight_number: text(first.flight_number.as_ref()),
        price: Price {
            amount: price.and_then(|p| p.raw).unwrap_or(0.0),
            currency: non_empty(price.and_then(|p| p.currency.as_deref()))
                .unwrap_or(DEFAULT_CURRENCY)
                .to_string(),
        },
        cabin_class,
        source: OfferSource::Provider,
    })
}

fn generated_flight_id() -> String {
    let raw = Uuid::new_v4().simple().to_string();
    format!("flight-{}", &raw[..9])
}

/// Most specific settlement name in a reverse-geocoding answer.
pub fn place_name(response: &ReverseGeocodeResponse) -> Option<String> {
    let address = response.address.as_ref()?;
    [&address.city, &address.town, &address.village, &address.county]
        .into_iter()
        .find_map(|candidate| non_empty(candidate.as_deref()))
        .map(str::to_string)
}
