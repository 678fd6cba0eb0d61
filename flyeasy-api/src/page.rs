//! The search page session: form fields, autocomplete lists, results and
//! the open detail view.
//!
//! Autocomplete is debounced per field. Each input change bumps that field's
//! sequence number; a pending debounce whose number is no longer current
//! never fires, and a response whose number is no longer current is dropped,
//! so a slow early response cannot overwrite a faster later one.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use flyeasy_core::display::{format_duration, format_price, format_stops, format_time};
use flyeasy_core::iata::suggestion_label;
use flyeasy_core::{AirportSuggestion, CabinClass, CoreError, FlightOffer, SearchParams, TripType};
use flyeasy_offer::{
    sort_offers, AirportSuggester, Coordinates, FallbackReason, FlightSearchService, GeolocationError,
    LocationError, LocationResolver, SortKey,
};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationField {
    Origin,
    Destination,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchForm {
    pub trip_type: TripType,
    pub passengers: u32,
    pub cabin_class: CabinClass,
    pub origin: String,
    pub destination: String,
    pub departure_date: Option<String>,
    pub return_date: Option<String>,
}

impl Default for SearchForm {
    fn default() -> Self {
        Self {
            trip_type: TripType::RoundTrip,
            passengers: 1,
            cabin_class: CabinClass::Economy,
            origin: String::new(),
            destination: String::new(),
            departure_date: None,
            return_date: None,
        }
    }
}

impl SearchForm {
    fn to_params(&self) -> SearchParams {
        SearchParams {
            origin: self.origin.clone(),
            destination: self.destination.clone(),
            departure_date: self.departure_date.clone(),
            return_date: self.return_date.clone(),
            passengers: self.passengers,
            cabin_class: self.cabin_class,
            trip_type: self.trip_type,
        }
    }
}

/// Partial form update; absent fields are left alone and an empty date
/// string clears that date.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormUpdate {
    pub trip_type: Option<TripType>,
    pub passengers: Option<u32>,
    pub cabin_class: Option<CabinClass>,
    pub departure_date: Option<String>,
    pub return_date: Option<String>,
}

/// An offer with its display strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OfferView {
    #[serde(flatten)]
    pub offer: FlightOffer,
    pub duration_label: String,
    pub price_label: String,
    pub departure_label: String,
    pub arrival_label: String,
    pub stops_label: String,
}

impl From<&FlightOffer> for OfferView {
    fn from(offer: &FlightOffer) -> Self {
        Self {
            duration_label: format_duration(offer.duration_minutes),
            price_label: format_price(offer.price.amount, &offer.price.currency),
            departure_label: format_time(&offer.departure.time),
            arrival_label: format_time(&offer.arrival.time),
            stops_label: format_stops(offer.stop_count),
            offer: offer.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PageSnapshot {
    pub form: SearchForm,
    pub origin_suggestions: Vec<AirportSuggestion>,
    pub destination_suggestions: Vec<AirportSuggestion>,
    pub results: Vec<OfferView>,
    pub sort_key: SortKey,
    pub selected: Option<OfferView>,
    pub fallback: Option<FallbackReason>,
    pub has_searched: bool,
    pub is_searching: bool,
    pub search_error: Option<String>,
    pub location_error: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("No {field:?} suggestion at position {index}")]
    NoSuchSuggestion { field: LocationField, index: usize },
    #[error("Offer not found: {0}")]
    NoSuchOffer(String),
}

#[derive(Default)]
struct PageState {
    form: SearchForm,
    origin_suggestions: Vec<AirportSuggestion>,
    destination_suggestions: Vec<AirportSuggestion>,
    results: Vec<FlightOffer>,
    sort_key: SortKey,
    selected_id: Option<String>,
    fallback: Option<FallbackReason>,
    has_searched: bool,
    is_searching: bool,
    search_error: Option<String>,
    location_error: Option<String>,
}

impl PageState {
    fn input_mut(&mut self, field: LocationField) -> &mut String {
        match field {
            LocationField::Origin => &mut self.form.origin,
            LocationField::Destination => &mut self.form.destination,
        }
    }

    fn suggestions_mut(&mut self, field: LocationField) -> &mut Vec<AirportSuggestion> {
        match field {
            LocationField::Origin => &mut self.origin_suggestions,
            LocationField::Destination => &mut self.destination_suggestions,
        }
    }

    fn selected(&self) -> Option<&FlightOffer> {
        let id = self.selected_id.as_deref()?;
        self.results.iter().find(|o| o.id == id)
    }
}

struct PageInner {
    state: RwLock<PageState>,
    suggester: AirportSuggester,
    search: Arc<FlightSearchService>,
    locator: LocationResolver,
    debounce: Duration,
    origin_seq: AtomicU64,
    destination_seq: AtomicU64,
    search_seq: AtomicU64,
}

impl PageInner {
    fn sequence(&self, field: LocationField) -> &AtomicU64 {
        match field {
            LocationField::Origin => &self.origin_seq,
            LocationField::Destination => &self.destination_seq,
        }
    }

    fn is_latest(&self, field: LocationField, seq: u64) -> bool {
        self.sequence(field).load(Ordering::SeqCst) == seq
    }

    /// Invalidates whatever is pending or in flight for `field`.
    fn next_sequence(&self, field: LocationField) -> u64 {
        self.sequence(field).fetch_add(1, Ordering::SeqCst) + 1
    }

    async fn debounced_fetch(self: Arc<Self>, field: LocationField, seq: u64, query: String) {
        tokio::time::sleep(self.debounce).await;
        if !self.is_latest(field, seq) {
            return;
        }

        let suggestions = if AirportSuggester::is_searchable(&query) {
            self.suggester.fetch(&query).await
        } else {
            Vec::new()
        };

        let mut state = self.state.write().await;
        if self.is_latest(field, seq) {
            *state.suggestions_mut(field) = suggestions;
        } else {
            debug!("Discarding stale {:?} suggestions for {:?}", field, query);
        }
    }
}

#[derive(Clone)]
pub struct SearchPage {
    inner: Arc<PageInner>,
}

impl SearchPage {
    pub fn new(
        suggester: AirportSuggester,
        search: Arc<FlightSearchService>,
        locator: LocationResolver,
        debounce: Duration,
    ) -> Self {
        Self {
            inner: Arc::new(PageInner {
                state: RwLock::new(PageState::default()),
                suggester,
                search,
                locator,
                debounce,
                origin_seq: AtomicU64::new(0),
                destination_seq: AtomicU64::new(0),
                search_seq: AtomicU64::new(0),
            }),
        }
    }

    /// Stores the typed text and schedules a debounced suggestion fetch.
    /// The handle resolves once that fetch has applied, been dropped as
    /// stale, or been superseded before firing.
    pub async fn set_location_input(&self, field: LocationField, value: String) -> JoinHandle<()> {
        let seq = {
            let mut state = self.inner.state.write().await;
            *state.input_mut(field) = value.clone();
            self.inner.next_sequence(field)
        };
        tokio::spawn(self.inner.clone().debounced_fetch(field, seq, value))
    }

    pub async fn select_suggestion(&self, field: LocationField, index: usize) -> Result<AirportSuggestion, PageError> {
        let mut state = self.inner.state.write().await;
        let suggestion = state
            .suggestions_mut(field)
            .get(index)
            .cloned()
            .ok_or(PageError::NoSuchSuggestion { field, index })?;

        self.inner.next_sequence(field);
        *state.input_mut(field) = suggestion_label(&suggestion.display_name, &suggestion.code);
        state.suggestions_mut(field).clear();
        Ok(suggestion)
    }

    pub async fn swap_locations(&self) {
        let mut state = self.inner.state.write().await;
        let PageState { form, .. } = &mut *state;
        std::mem::swap(&mut form.origin, &mut form.destination);

        for field in [LocationField::Origin, LocationField::Destination] {
            self.inner.next_sequence(field);
            state.suggestions_mut(field).clear();
        }
    }

    pub async fn update_form(&self, update: FormUpdate) {
        let mut state = self.inner.state.write().await;
        let form = &mut state.form;
        if let Some(trip_type) = update.trip_type {
            form.trip_type = trip_type;
        }
        if let Some(passengers) = update.passengers {
            form.passengers = passengers.max(1);
        }
        if let Some(cabin_class) = update.cabin_class {
            form.cabin_class = cabin_class;
        }
        if let Some(date) = update.departure_date {
            form.departure_date = Some(date).filter(|d| !d.trim().is_empty());
        }
        if let Some(date) = update.return_date {
            form.return_date = Some(date).filter(|d| !d.trim().is_empty());
        }
    }

    /// Runs the search for the current form. Validation failures are kept
    /// as the page's error message and returned. When a newer submit has
    /// started meanwhile, this one's outcome leaves the page untouched.
    pub async fn submit(&self) -> Result<(), CoreError> {
        let (seq, params) = {
            let mut state = self.inner.state.write().await;
            state.is_searching = true;
            state.search_error = None;
            let seq = self.inner.search_seq.fetch_add(1, Ordering::SeqCst) + 1;
            (seq, state.form.to_params())
        };

        let outcome = self.inner.search.search_with_outcome(&params).await;

        let mut state = self.inner.state.write().await;
        if self.inner.search_seq.load(Ordering::SeqCst) != seq {
            debug!("Discarding stale search results for {} -> {}", params.origin, params.destination);
            return outcome.map(|_| ());
        }
        state.is_searching = false;
        match outcome {
            Ok(outcome) => {
                info!("Search produced {} offers (fallback: {:?})", outcome.offers.len(), outcome.fallback);
                state.results = sort_offers(outcome.offers, state.sort_key);
                state.fallback = outcome.fallback;
                state.selected_id = None;
                state.has_searched = true;
                Ok(())
            }
            Err(e) => {
                state.search_error = Some(match &e {
                    CoreError::ValidationError(msg) => msg.clone(),
                    other => other.to_string(),
                });
                Err(e)
            }
        }
    }

    pub async fn sort_by(&self, key: SortKey) {
        let mut state = self.inner.state.write().await;
        state.sort_key = key;
        let results = std::mem::take(&mut state.results);
        state.results = sort_offers(results, key);
    }

    pub async fn select_offer(&self, id: &str) -> Result<OfferView, PageError> {
        let mut state = self.inner.state.write().await;
        let view = state
            .results
            .iter()
            .find(|o| o.id == id)
            .map(OfferView::from)
            .ok_or_else(|| PageError::NoSuchOffer(id.to_string()))?;
        state.selected_id = Some(id.to_string());
        Ok(view)
    }

    pub async fn close_details(&self) {
        self.inner.state.write().await.selected_id = None;
    }

    /// Prefills the origin from the user's position, or records why that
    /// was not possible.
    pub async fn apply_location(
        &self,
        position: Result<Coordinates, GeolocationError>,
    ) -> Result<JoinHandle<()>, LocationError> {
        self.inner.state.write().await.location_error = None;

        match self.inner.locator.resolve(position).await {
            Ok(place) => Ok(self.set_location_input(LocationField::Origin, place).await),
            Err(e) => {
                self.inner.state.write().await.location_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    pub async fn snapshot(&self) -> PageSnapshot {
        let state = self.inner.state.read().await;
        PageSnapshot {
            form: state.form.clone(),
            origin_suggestions: state.origin_suggestions.clone(),
            destination_suggestions: state.destination_suggestions.clone(),
            results: state.results.iter().map(OfferView::from).collect(),
            sort_key: state.sort_key,
            selected: state.selected().map(OfferView::from),
            fallback: state.fallback.clone(),
            has_searched: state.has_searched,
            is_searching: state.is_searching,
            search_error: state.search_error.clone(),
            location_error: state.location_error.clone(),
        }
    }
}
