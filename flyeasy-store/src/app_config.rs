use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub provider: ProviderConfig,
    pub geocoding: GeocodingConfig,
    #[serde(default)]
    pub search: SearchConfig,
    pub preferences: PreferencesConfig,
    #[serde(default)]
    pub page: PageConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

/// Sky Scrapper (RapidAPI) connection settings
#[derive(Debug, Deserialize, Clone)]
pub struct ProviderConfig {
    pub base_url: String,
    pub host: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GeocodingConfig {
    pub base_url: String,
    pub user_agent: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SearchConfig {
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_market")]
    pub market: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            market: default_market(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct PreferencesConfig {
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PageConfig {
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self { debounce_ms: default_debounce_ms() }
    }
}

fn default_timeout_seconds() -> u64 { 15 }
fn default_currency() -> String { "USD".to_string() }
fn default_market() -> String { "en-US".to_string() }
fn default_debounce_ms() -> u64 { 300 }

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // Per-environment overrides, optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Untracked local overrides
            .add_source(config::File::with_name("config/local").required(false))
            // FLYEASY__PROVIDER__API_KEY -> provider.api_key
            .add_source(config::Environment::with_prefix("FLYEASY").prefix_separator("__").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
        [server]
        port = 8080

        [provider]
        base_url = "https://sky-scrapper.p.rapidapi.com"
        host = "sky-scrapper.p.rapidapi.com"

        [geocoding]
        base_url = "https://nominatim.openstreetmap.org"
        user_agent = "flyeasy-test"

        [preferences]
        path = "data/preferences.json"
    "#;

    fn parse(toml: &str) -> Config {
        config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()
            .and_then(|c| c.try_deserialize())
            .expect("config should deserialize")
    }

    #[test]
    fn test_defaults_fill_optional_sections() {
        let config = parse(MINIMAL);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.provider.api_key, "");
        assert_eq!(config.provider.timeout_seconds, 15);
        assert_eq!(config.search.currency, "USD");
        assert_eq!(config.search.market, "en-US");
        assert_eq!(config.page.debounce_ms, 300);
    }

    #[test]
    fn test_explicit_values_override_defaults() {
        let toml = format!("{}\n[search]\ncurrency = \"EUR\"\n\n[page]\ndebounce_ms = 50\n", MINIMAL);
        let config = parse(&toml);
        assert_eq!(config.search.currency, "EUR");
        assert_eq!(config.search.market, "en-US");
        assert_eq!(config.page.debounce_ms, 50);
    }
}
