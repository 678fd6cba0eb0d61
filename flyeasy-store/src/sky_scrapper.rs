use std::time::Duration;

use async_trait::async_trait;
use flyeasy_core::supplier::{FlightDataSupplier, ProviderError};
use flyeasy_core::wire::{AirportSearchResponse, FlightSearchResponse};
use flyeasy_core::FlightQuery;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::app_config::ProviderConfig;
use crate::StoreError;

const AIRPORT_SEARCH_PATH: &str = "/api/v1/flights/searchAirport";
const FLIGHT_SEARCH_PATH: &str = "/api/v1/flights/searchFlights";

/// Sky Scrapper API client (RapidAPI)
#[derive(Clone)]
pub struct SkyScrapperClient {
    client: Client,
    base_url: String,
    host: String,
    api_key: String,
}

impl SkyScrapperClient {
    pub fn new(config: &ProviderConfig) -> Result<Self, StoreError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        if config.api_key.is_empty() {
            warn!("No RapidAPI key configured; flight searches will fall back to synthetic data");
        }

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            host: config.host.clone(),
            api_key: config.api_key.clone(),
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ProviderError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("Fetching from: {} {:?}", url, query);

        let response = self
            .client
            .get(&url)
            .query(query)
            .header("X-RapidAPI-Key", &self.api_key)
            .header("X-RapidAPI-Host", &self.host)
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let status = response.status();
        debug!("Response status: {}", status);

        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| ProviderError::Decode(e.to_string()))
    }
}

#[async_trait]
impl FlightDataSupplier for SkyScrapperClient {
    async fn search_airports(&self, query: &str) -> Result<AirportSearchResponse, ProviderError> {
        self.get_json(AIRPORT_SEARCH_PATH, &[("query", query.to_string())]).await
    }

    async fn search_flights(&self, query: &FlightQuery) -> Result<FlightSearchResponse, ProviderError> {
        self.get_json(FLIGHT_SEARCH_PATH, &query.query_pairs()).await
    }
}
