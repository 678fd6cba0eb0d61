use std::sync::Arc;

use flyeasy_core::normalize::place_name;
use flyeasy_core::supplier::{ProviderError, ReverseGeocoder};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// `"51.5072, -0.1276"`
    pub fn label(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

/// Failure reported by the browser's geolocation API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(rename_all = "snake_case")]
pub enum GeolocationError {
    #[error("Location permission denied")]
    PermissionDenied,
    #[error("Location information unavailable")]
    PositionUnavailable,
    #[error("Location request timed out")]
    Timeout,
    #[error("Geolocation is not supported by your browser")]
    Unsupported,
    #[error("An unknown error occurred")]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LocationError {
    #[error(transparent)]
    Geolocation(#[from] GeolocationError),
    #[error("Failed to get your location name")]
    LookupFailed,
}

/// Turns a geolocation result into text for the origin field.
#[derive(Clone)]
pub struct LocationResolver {
    geocoder: Arc<dyn ReverseGeocoder>,
}

impl LocationResolver {
    pub fn new(geocoder: Arc<dyn ReverseGeocoder>) -> Self {
        Self { geocoder }
    }

    /// City (or town, village, county) name when the reverse lookup knows
    /// one, the raw coordinates when it answers without one or with a
    /// non-success status.
    pub async fn resolve(&self, position: Result<Coordinates, GeolocationError>) -> Result<String, LocationError> {
        let coords = position?;

        match self.geocoder.reverse(coords.latitude, coords.longitude).await {
            Ok(response) => {
                let place = place_name(&response).unwrap_or_else(|| coords.label());
                info!("Resolved location {} -> {}", coords.label(), place);
                Ok(place)
            }
            Err(ProviderError::Status { status, .. }) => {
                warn!("Reverse geocoding returned {}, using coordinates", status);
                Ok(coords.label())
            }
            Err(e) => {
                warn!("Error getting location: {}", e);
                Err(LocationError::LookupFailed)
            }
        }
    }
}
