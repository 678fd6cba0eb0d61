use std::time::Duration;

use async_trait::async_trait;
use flyeasy_core::supplier::{ProviderError, ReverseGeocoder};
use flyeasy_core::wire::ReverseGeocodeResponse;
use reqwest::Client;
use tracing::debug;

use crate::app_config::GeocodingConfig;
use crate::StoreError;

/// OpenStreetMap Nominatim reverse geocoder
#[derive(Clone)]
pub struct NominatimClient {
    client: Client,
    base_url: String,
}

impl NominatimClient {
    pub fn new(config: &GeocodingConfig) -> Result<Self, StoreError> {
        // Nominatim rejects requests without an identifying User-Agent
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl ReverseGeocoder for NominatimClient {
    async fn reverse(&self, latitude: f64, longitude: f64) -> Result<ReverseGeocodeResponse, ProviderError> {
        let url = format!("{}/reverse", self.base_url);
        debug!("Reverse geocoding {:.4}, {:.4}", latitude, longitude);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("format", "json".to_string()),
                ("lat", latitude.to_string()),
                ("lon", longitude.to_string()),
                ("zoom", "10".to_string()),
            ])
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<ReverseGeocodeResponse>()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))
    }
}
