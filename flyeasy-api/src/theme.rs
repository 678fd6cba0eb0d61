use std::convert::Infallible;

use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
    routing::{get, post},
    Json, Router,
};
use flyeasy_store::{Palette, Theme};
use serde::Serialize;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::{Stream, StreamExt};
use tracing::debug;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ThemeResponse {
    pub theme: Theme,
    pub dark_mode: bool,
    pub palette: Palette,
}

impl From<Theme> for ThemeResponse {
    fn from(theme: Theme) -> Self {
        Self {
            theme,
            dark_mode: theme.is_dark(),
            palette: theme.palette(),
        }
    }
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/theme", get(current_theme))
        .route("/v1/theme/toggle", post(toggle_theme))
        .route("/v1/theme/events", get(theme_events))
}

async fn current_theme(State(state): State<AppState>) -> Json<ThemeResponse> {
    Json(state.theme.current().into())
}

async fn toggle_theme(State(state): State<AppState>) -> Json<ThemeResponse> {
    Json(state.theme.toggle().await.into())
}

/// One `theme` event per toggle. Lagged receivers skip what they missed.
async fn theme_events(State(state): State<AppState>) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let stream = BroadcastStream::new(state.theme.subscribe()).filter_map(|change| match change {
        Ok(theme) => Some(Ok(Event::default().event("theme").data(theme.as_str()))),
        Err(e) => {
            debug!("Theme subscriber lagged: {}", e);
            None
        }
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}
