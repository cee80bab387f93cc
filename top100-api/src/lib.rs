//! top100-api library - ranking-table scraper service
//!
//! Serves the top 100 rows of two public ranking pages (country populations
//! and song streaming counts) as JSON. Each endpoint is an independent
//! fetch-parse-respond pipeline with no shared extraction core and no state
//! between requests.

use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::config::Config;

pub mod api;
pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;

pub use crate::error::{ApiError, ApiResult};

/// Application state shared across HTTP handlers
///
/// The HTTP client and resolved configuration are the only cross-request
/// objects; both are immutable after startup.
#[derive(Clone)]
pub struct AppState {
    /// Shared outbound HTTP client
    pub http: reqwest::Client,
    /// Resolved configuration (bind address, upstream URLs)
    pub config: Arc<Config>,
}

impl AppState {
    /// Create new application state
    pub fn new(http: reqwest::Client, config: Config) -> Self {
        Self {
            http,
            config: Arc::new(config),
        }
    }
}

/// Build application router
///
/// Routes are enumerated here once; handlers are pure functions over
/// `AppState`. CORS is permissive: the game front end is served from a
/// different origin.
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/api/population", get(api::get_population))
        .route("/api/songs", get(api::get_songs))
        .merge(api::health_routes())
        .with_state(state)
        .layer(CorsLayer::permissive())
}
