use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use flyeasy_offer::Coordinates;
use serde::Serialize;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct PlaceResponse {
    pub place: String,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/location/reverse", get(reverse))
}

async fn reverse(
    State(state): State<AppState>,
    Query(coords): Query<Coordinates>,
) -> Result<Json<PlaceResponse>, AppError> {
    let place = state.locator.resolve(Ok(coords)).await?;
    Ok(Json(PlaceResponse { place }))
}
