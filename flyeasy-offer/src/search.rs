use std::sync::Arc;

use flyeasy_core::normalize::offers_from_response;
use flyeasy_core::supplier::{FlightDataSupplier, ProviderError};
use flyeasy_core::{CoreResult, FlightOffer, FlightQuery, SearchParams};
use flyeasy_store::app_config::SearchConfig;
use serde::Serialize;
use tracing::{info, warn};

use crate::generator::SyntheticOfferGenerator;

/// Why synthetic offers were served instead of provider results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum FallbackReason {
    Transport,
    Status { status: u16 },
    Decode,
    NoResults,
}

impl From<&ProviderError> for FallbackReason {
    fn from(err: &ProviderError) -> Self {
        match err {
            ProviderError::Transport(_) => FallbackReason::Transport,
            ProviderError::Status { status, .. } => FallbackReason::Status { status: *status },
            ProviderError::Decode(_) => FallbackReason::Decode,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchOutcome {
    pub offers: Vec<FlightOffer>,
    pub fallback: Option<FallbackReason>,
}

/// Flight search against the provider, with synthetic offers substituted
/// whenever the provider fails or has nothing to show.
pub struct FlightSearchService {
    supplier: Arc<dyn FlightDataSupplier>,
    generator: SyntheticOfferGenerator,
    config: SearchConfig,
}

impl FlightSearchService {
    pub fn new(supplier: Arc<dyn FlightDataSupplier>, config: SearchConfig) -> Self {
        Self {
            supplier,
            generator: SyntheticOfferGenerator::new(),
            config,
        }
    }

    /// Fails only with a validation error; the list is never empty otherwise.
    pub async fn search(&self, params: &SearchParams) -> CoreResult<Vec<FlightOffer>> {
        Ok(self.search_with_outcome(params).await?.offers)
    }

    pub async fn search_with_outcome(&self, params: &SearchParams) -> CoreResult<SearchOutcome> {
        let search = params.validate()?;
        info!(
            "Searching flights {} -> {} on {} ({:?}, {} pax, {})",
            search.origin,
            search.destination,
            search.departure_date,
            search.trip_type,
            search.passengers,
            search.cabin_class.as_api_str()
        );

        let query = FlightQuery::new(&search, &self.config.currency, &self.config.market);
        let reason = match self.supplier.search_flights(&query).await {
            Ok(response) => {
                let offers = offers_from_response(&response, search.cabin_class);
                if !offers.is_empty() {
                    info!("Provider returned {} offers", offers.len());
                    return Ok(SearchOutcome { offers, fallback: None });
                }
                info!("No results found, returning synthetic flight data");
                FallbackReason::NoResults
            }
            Err(e) => {
                warn!("Flight search failed, returning synthetic flight data: {}", e);
                FallbackReason::from(&e)
            }
        };

        let offers = self.generator.generate(
            &search.origin,
            &search.destination,
            search.departure_date,
            search.return_date,
            search.cabin_class,
        );
        Ok(SearchOutcome {
            offers,
            fallback: Some(reason),
        })
    }
}
