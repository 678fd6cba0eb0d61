//! Test doubles for the page and handler tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use flyeasy_core::supplier::{FlightDataSupplier, ProviderError, ReverseGeocoder};
use flyeasy_core::wire::{
    AirportEntry, AirportSearchResponse, FlightSearchResponse, GeoAddress, Presentation, ReverseGeocodeResponse,
};
use flyeasy_core::FlightQuery;
use flyeasy_offer::{AirportSuggester, FlightSearchService, LocationResolver};
use flyeasy_store::app_config::SearchConfig;

use crate::page::SearchPage;

const DEFAULT_LATENCY: Duration = Duration::from_millis(10);

/// Answers airport lookups with one suggestion per query after a per-query
/// latency; flight searches fail after a per-origin latency.
pub struct DelayedSupplier {
    latency: HashMap<String, Duration>,
    flight_latency: HashMap<String, Duration>,
    queries: Mutex<Vec<String>>,
}

impl DelayedSupplier {
    pub fn new() -> Self {
        Self {
            latency: HashMap::new(),
            flight_latency: HashMap::new(),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn slow(mut self, query: &str, latency: Duration) -> Self {
        self.latency.insert(query.to_string(), latency);
        self
    }

    pub fn slow_flights(mut self, origin: &str, latency: Duration) -> Self {
        self.flight_latency.insert(origin.to_string(), latency);
        self
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl FlightDataSupplier for DelayedSupplier {
    async fn search_airports(&self, query: &str) -> Result<AirportSearchResponse, ProviderError> {
        self.queries.lock().unwrap().push(query.to_string());
        let latency = self.latency.get(query).copied().unwrap_or(DEFAULT_LATENCY);
        tokio::time::sleep(latency).await;

        Ok(AirportSearchResponse {
            data: Some(vec![AirportEntry {
                sky_id: Some(query.to_uppercase()),
                entity_id: None,
                presentation: Some(Presentation {
                    title: Some(format!("{} airport", query)),
                    subtitle: Some("Somewhere".to_string()),
                    suggestion_title: None,
                }),
            }]),
        })
    }

    async fn search_flights(&self, query: &FlightQuery) -> Result<FlightSearchResponse, ProviderError> {
        if let Some(latency) = self.flight_latency.get(&query.origin_sky) {
            tokio::time::sleep(*latency).await;
        }
        Err(ProviderError::Transport("offline".to_string()))
    }
}

pub struct StaticGeocoder(Option<String>);

impl StaticGeocoder {
    pub fn city(name: &str) -> Self {
        Self(Some(name.to_string()))
    }
}

#[async_trait]
impl ReverseGeocoder for StaticGeocoder {
    async fn reverse(&self, _latitude: f64, _longitude: f64) -> Result<ReverseGeocodeResponse, ProviderError> {
        Ok(ReverseGeocodeResponse {
            address: Some(GeoAddress {
                city: self.0.clone(),
                ..Default::default()
            }),
        })
    }
}

pub fn page_with(supplier: Arc<DelayedSupplier>, geocoder: StaticGeocoder) -> SearchPage {
    SearchPage::new(
        AirportSuggester::new(supplier.clone()),
        Arc::new(FlightSearchService::new(supplier, SearchConfig::default())),
        LocationResolver::new(Arc::new(geocoder)),
        Duration::from_millis(300),
    )
}
