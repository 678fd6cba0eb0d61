pub mod display;
pub mod iata;
pub mod models;
pub mod normalize;
pub mod search;
pub mod supplier;
pub mod wire;

pub use models::{Airline, AirportSuggestion, FlightEndpoint, FlightOffer, OfferSource, Price};
pub use search::{CabinClass, FlightQuery, SearchParams, TripType, ValidatedSearch};
pub use supplier::{FlightDataSupplier, ProviderError, ReverseGeocoder};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Flight data provider failed: {0}")]
    ProviderError(#[from] ProviderError),
    #[error("Internal service error: {0}")]
    InternalError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
