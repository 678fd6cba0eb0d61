use axum::{http::Method, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod airports;
pub mod error;
pub mod flights;
pub mod location;
pub mod page;
pub mod session;
pub mod shell;
pub mod state;
pub mod theme;

#[cfg(test)]
pub(crate) mod testing;

pub use page::SearchPage;
pub use state::AppState;

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([axum::http::header::CONTENT_TYPE, axum::http::header::ACCEPT]);

    Router::new()
        .merge(shell::routes())
        .merge(airports::routes())
        .merge(flights::routes())
        .merge(location::routes())
        .merge(theme::routes())
        .merge(session::routes())
        .fallback(shell::not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
