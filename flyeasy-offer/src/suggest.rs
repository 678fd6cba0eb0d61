use std::sync::Arc;

use flyeasy_core::normalize::suggestions_from_response;
use flyeasy_core::supplier::FlightDataSupplier;
use flyeasy_core::AirportSuggestion;
use tracing::{debug, warn};

/// Queries shorter than this never reach the network.
pub const MIN_QUERY_CHARS: usize = 2;

/// Airport autocomplete. Never fails: errors degrade to an empty list.
#[derive(Clone)]
pub struct AirportSuggester {
    supplier: Arc<dyn FlightDataSupplier>,
}

impl AirportSuggester {
    pub fn new(supplier: Arc<dyn FlightDataSupplier>) -> Self {
        Self { supplier }
    }

    pub fn is_searchable(query: &str) -> bool {
        query.trim().chars().count() >= MIN_QUERY_CHARS
    }

    pub async fn fetch(&self, query: &str) -> Vec<AirportSuggestion> {
        if !Self::is_searchable(query) {
            return Vec::new();
        }

        match self.supplier.search_airports(query.trim()).await {
            Ok(response) => {
                let suggestions = suggestions_from_response(&response);
                debug!("{} airport suggestions for {:?}", suggestions.len(), query);
                suggestions
            }
            Err(e) => {
                warn!("Error fetching airport suggestions for {:?}: {}", query, e);
                Vec::new()
            }
        }
    }
}
