pub mod generator;
pub mod locate;
pub mod ranking;
pub mod search;
pub mod suggest;

#[cfg(test)]
pub(crate) mod testing;

pub use generator::SyntheticOfferGenerator;
pub use locate::{Coordinates, GeolocationError, LocationError, LocationResolver};
pub use ranking::{sort_offers, SortKey};
pub use search::{FallbackReason, FlightSearchService, SearchOutcome};
pub use suggest::AirportSuggester;
