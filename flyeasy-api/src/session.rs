//! Routes driving the single search page session.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use flyeasy_core::AirportSuggestion;
use flyeasy_offer::{Coordinates, GeolocationError, SortKey};
use serde::Deserialize;

use crate::error::AppError;
use crate::page::{FormUpdate, LocationField, OfferView, PageSnapshot};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct InputRequest {
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct SortRequest {
    pub key: SortKey,
}

/// Either a position or the geolocation error the browser reported.
#[derive(Debug, Deserialize)]
pub struct LocateRequest {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub error: Option<GeolocationError>,
}

impl LocateRequest {
    fn position(&self) -> Result<Coordinates, GeolocationError> {
        if let Some(error) = self.error {
            return Err(error);
        }
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Ok(Coordinates { latitude, longitude }),
            _ => Err(GeolocationError::Unknown),
        }
    }
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/page", get(snapshot))
        .route("/v1/page/form", put(update_form))
        .route("/v1/page/inputs/{field}", post(set_input))
        .route("/v1/page/suggestions/{field}/{index}", post(select_suggestion))
        .route("/v1/page/swap", post(swap))
        .route("/v1/page/search", post(submit))
        .route("/v1/page/sort", post(sort))
        .route("/v1/page/location", post(locate))
        .route("/v1/page/offers/{id}", post(select_offer))
        .route("/v1/page/selection", delete(close_details))
}

async fn snapshot(State(state): State<AppState>) -> Json<PageSnapshot> {
    Json(state.page.snapshot().await)
}

async fn update_form(State(state): State<AppState>, Json(update): Json<FormUpdate>) -> Json<PageSnapshot> {
    state.page.update_form(update).await;
    Json(state.page.snapshot().await)
}

/// Suggestions arrive later; poll the snapshot for them.
async fn set_input(
    State(state): State<AppState>,
    Path(field): Path<LocationField>,
    Json(req): Json<InputRequest>,
) -> StatusCode {
    // Fire and forget
    let _ = state.page.set_location_input(field, req.value).await;
    StatusCode::ACCEPTED
}

async fn select_suggestion(
    State(state): State<AppState>,
    Path((field, index)): Path<(LocationField, usize)>,
) -> Result<Json<AirportSuggestion>, AppError> {
    Ok(Json(state.page.select_suggestion(field, index).await?))
}

async fn swap(State(state): State<AppState>) -> Json<PageSnapshot> {
    state.page.swap_locations().await;
    Json(state.page.snapshot().await)
}

async fn submit(State(state): State<AppState>) -> Result<Json<PageSnapshot>, AppError> {
    state.page.submit().await?;
    Ok(Json(state.page.snapshot().await))
}

async fn sort(State(state): State<AppState>, Json(req): Json<SortRequest>) -> Json<PageSnapshot> {
    state.page.sort_by(req.key).await;
    Json(state.page.snapshot().await)
}

async fn locate(
    State(state): State<AppState>,
    Json(req): Json<LocateRequest>,
) -> Result<Json<PageSnapshot>, AppError> {
    let _ = state.page.apply_location(req.position()).await?;
    Ok(Json(state.page.snapshot().await))
}

async fn select_offer(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<OfferView>, AppError> {
    Ok(Json(state.page.select_offer(&id).await?))
}

async fn close_details(State(state): State<AppState>) -> StatusCode {
    state.page.close_details().await;
    StatusCode::NO_CONTENT
}
