use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use flyeasy_core::CoreError;
use flyeasy_offer::LocationError;
use serde_json::json;

use crate::page::PageError;

#[derive(Debug)]
pub enum AppError {
    ValidationError(String),
    NotFoundError(String),
    UpstreamError(String),
    InternalServerError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFoundError(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::UpstreamError(msg) => {
                tracing::warn!("Upstream failure: {}", msg);
                (StatusCode::BAD_GATEWAY, msg)
            }
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".to_string())
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ValidationError(msg) => AppError::ValidationError(msg),
            CoreError::ProviderError(e) => AppError::UpstreamError(e.to_string()),
            CoreError::InternalError(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl From<PageError> for AppError {
    fn from(err: PageError) -> Self {
        AppError::NotFoundError(err.to_string())
    }
}

impl From<LocationError> for AppError {
    fn from(err: LocationError) -> Self {
        match err {
            LocationError::Geolocation(e) => AppError::ValidationError(e.to_string()),
            LocationError::LookupFailed => AppError::UpstreamError(err.to_string()),
        }
    }
}
