use std::sync::Arc;
use std::time::Duration;

use flyeasy_core::supplier::{FlightDataSupplier, ReverseGeocoder};
use flyeasy_offer::{AirportSuggester, FlightSearchService, LocationResolver};
use flyeasy_store::app_config::{PageConfig, SearchConfig};
use flyeasy_store::{PreferenceStore, ThemeStore};

use crate::page::SearchPage;

#[derive(Clone)]
pub struct AppState {
    pub search: Arc<FlightSearchService>,
    pub suggester: AirportSuggester,
    pub locator: LocationResolver,
    pub theme: Arc<ThemeStore>,
    pub page: SearchPage,
}

impl AppState {
    pub fn new(
        supplier: Arc<dyn FlightDataSupplier>,
        geocoder: Arc<dyn ReverseGeocoder>,
        preferences: Arc<dyn PreferenceStore>,
        search: SearchConfig,
        page: &PageConfig,
    ) -> Self {
        let suggester = AirportSuggester::new(supplier.clone());
        let search = Arc::new(FlightSearchService::new(supplier, search));
        let locator = LocationResolver::new(geocoder);

        // The service hosts a single page session
        let page = SearchPage::new(
            suggester.clone(),
            search.clone(),
            locator.clone(),
            Duration::from_millis(page.debounce_ms),
        );

        Self {
            search,
            suggester,
            locator,
            theme: Arc::new(ThemeStore::load(preferences)),
            page,
        }
    }
}
