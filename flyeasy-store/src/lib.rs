pub mod app_config;
pub mod nominatim;
pub mod preferences;
pub mod sky_scrapper;
pub mod theme;

pub use nominatim::NominatimClient;
pub use preferences::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};
pub use sky_scrapper::SkyScrapperClient;
pub use theme::{Palette, Theme, ThemeStore};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Preference file error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Preference serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("HTTP client setup failed: {0}")]
    Http(#[from] reqwest::Error),
}
