use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use flyeasy_core::AirportSuggestion;
use serde::Deserialize;

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AirportQuery {
    #[serde(default)]
    pub query: String,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/airports", get(search_airports))
}

/// Always 200; short queries and provider failures give an empty list.
async fn search_airports(
    State(state): State<AppState>,
    Query(params): Query<AirportQuery>,
) -> Json<Vec<AirportSuggestion>> {
    Json(state.suggester.fetch(&params.query).await)
}
