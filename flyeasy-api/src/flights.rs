use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use flyeasy_core::{CabinClass, SearchParams, TripType};
use flyeasy_offer::{sort_offers, FallbackReason, SortKey};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::page::OfferView;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct FlightSearchQuery {
    #[serde(default)]
    pub origin: String,
    #[serde(default)]
    pub destination: String,
    pub departure_date: Option<String>,
    pub return_date: Option<String>,
    #[serde(alias = "passengers")]
    pub adults: Option<u32>,
    pub cabin_class: Option<CabinClass>,
    pub trip_type: Option<TripType>,
    pub sort: Option<SortKey>,
}

impl FlightSearchQuery {
    fn to_params(&self) -> SearchParams {
        SearchParams {
            origin: self.origin.clone(),
            destination: self.destination.clone(),
            departure_date: self.departure_date.clone().filter(|d| !d.is_empty()),
            return_date: self.return_date.clone().filter(|d| !d.is_empty()),
            passengers: self.adults.unwrap_or(1),
            cabin_class: self.cabin_class.unwrap_or_default(),
            trip_type: self.trip_type.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FlightSearchResponse {
    pub offers: Vec<OfferView>,
    pub count: usize,
    pub sort: SortKey,
    pub fallback: Option<FallbackReason>,
    /// True when the offers are synthetic.
    pub synthetic: bool,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/flights/search", get(search_flights))
}

async fn search_flights(
    State(state): State<AppState>,
    Query(query): Query<FlightSearchQuery>,
) -> Result<Json<FlightSearchResponse>, AppError> {
    let outcome = state.search.search_with_outcome(&query.to_params()).await?;
    let sort = query.sort.unwrap_or_default();
    let offers: Vec<OfferView> = sort_offers(outcome.offers, sort).iter().map(OfferView::from).collect();

    Ok(Json(FlightSearchResponse {
        count: offers.len(),
        offers,
        sort,
        synthetic: outcome.fallback.is_some(),
        fallback: outcome.fallback,
    }))
}
