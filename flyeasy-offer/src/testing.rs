//! Test doubles shared by the unit tests of this crate.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use flyeasy_core::supplier::{FlightDataSupplier, ProviderError, ReverseGeocoder};
use flyeasy_core::wire::{AirportSearchResponse, FlightSearchResponse, ReverseGeocodeResponse};
use flyeasy_core::{Airline, CabinClass, FlightEndpoint, FlightOffer, FlightQuery, OfferSource, Price};

pub fn offer(id: &str, price: f64, duration: u32, departs: &str, arrives: &str) -> FlightOffer {
    let endpoint = |code: &str, time: &str| FlightEndpoint {
        airport_code: code.to_string(),
        airport_name: String::new(),
        date: "2024-12-20".to_string(),
        time: time.to_string(),
    };
    FlightOffer {
        id: id.to_string(),
        departure: endpoint("JFK", departs),
        arrival: endpoint("LHR", arrives),
        duration_minutes: duration,
        stop_count: 0,
        airline: Airline {
            name: "Test Air".to_string(),
            code: "TA".to_string(),
            logo_url: None,
        },
        flight_number: "TA100".to_string(),
        price: Price {
            amount: price,
            currency: "USD".to_string(),
        },
        cabin_class: CabinClass::Economy,
        source: OfferSource::Provider,
    }
}

/// Supplier returning canned JSON bodies or errors and recording calls.
pub struct StubSupplier {
    airports: Result<String, ProviderError>,
    flights: Result<String, ProviderError>,
    pub airport_calls: AtomicUsize,
    pub flight_queries: Mutex<Vec<FlightQuery>>,
}

impl StubSupplier {
    pub fn new(airports: Result<&str, ProviderError>, flights: Result<&str, ProviderError>) -> Self {
        Self {
            airports: airports.map(str::to_string),
            flights: flights.map(str::to_string),
            airport_calls: AtomicUsize::new(0),
            flight_queries: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self::new(
            Err(ProviderError::Transport("connection refused".into())),
            Err(ProviderError::Transport("connection refused".into())),
        )
    }

    pub fn airport_calls(&self) -> usize {
        self.airport_calls.load(Ordering::SeqCst)
    }

    pub fn flight_calls(&self) -> usize {
        self.flight_queries.lock().unwrap().len()
    }
}

fn decode<T: serde::de::DeserializeOwned>(body: &Result<String, ProviderError>) -> Result<T, ProviderError> {
    match body {
        Ok(json) => serde_json::from_str(json).map_err(|e| ProviderError::Decode(e.to_string())),
        Err(e) => Err(e.clone()),
    }
}

#[async_trait]
impl FlightDataSupplier for StubSupplier {
    async fn search_airports(&self, _query: &str) -> Result<AirportSearchResponse, ProviderError> {
        self.airport_calls.fetch_add(1, Ordering::SeqCst);
        decode(&self.airports)
    }

    async fn search_flights(&self, query: &FlightQuery) -> Result<FlightSearchResponse, ProviderError> {
        self.flight_queries.lock().unwrap().push(query.clone());
        decode(&self.flights)
    }
}

pub struct StubGeocoder(pub Result<&'static str, ProviderError>);

#[async_trait]
impl ReverseGeocoder for StubGeocoder {
    async fn reverse(&self, _latitude: f64, _longitude: f64) -> Result<ReverseGeocodeResponse, ProviderError> {
        match &self.0 {
            Ok(json) => serde_json::from_str(json).map_err(|e| ProviderError::Decode(e.to_string())),
            Err(e) => Err(e.clone()),
        }
    }
}
