use async_trait::async_trait;

use crate::search::FlightQuery;
use crate::wire::{AirportSearchResponse, FlightSearchResponse, ReverseGeocodeResponse};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProviderError {
    #[error("Transport failure: {0}")]
    Transport(String),
    #[error("Provider returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Could not decode provider response: {0}")]
    Decode(String),
}

/// External flight-data supplier (airport lookup and flight search).
#[async_trait]
pub trait FlightDataSupplier: Send + Sync {
    /// Look up airports and cities matching a partial place name
    async fn search_airports(&self, query: &str) -> Result<AirportSearchResponse, ProviderError>;

    /// Search priced itineraries
    async fn search_flights(&self, query: &FlightQuery) -> Result<FlightSearchResponse, ProviderError>;
}

/// Coordinates -> address lookup
#[async_trait]
pub trait ReverseGeocoder: Send + Sync {
    async fn reverse(&self, latitude: f64, longitude: f64) -> Result<ReverseGeocodeResponse, ProviderError>;
}
