use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use flyeasy_api::{app, AppState};
use flyeasy_store::app_config::Config;
use flyeasy_store::{FilePreferenceStore, NominatimClient, SkyScrapperClient};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "flyeasy_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load config")?;
    tracing::info!("Starting FlyEasy on port {}", config.server.port);

    let supplier = Arc::new(SkyScrapperClient::new(&config.provider).context("Failed to build provider client")?);
    let geocoder = Arc::new(NominatimClient::new(&config.geocoding).context("Failed to build geocoding client")?);
    let preferences = Arc::new(FilePreferenceStore::new(&config.preferences.path));

    let app_state = AppState::new(supplier, geocoder, preferences, config.search.clone(), &config.page);
    let app = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
