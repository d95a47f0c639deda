//! reelpick-ui library interface
//!
//! Exposes the application state and router for integration testing.

pub mod api;
pub mod error;
pub mod services;
pub mod store;

pub use crate::error::{ApiError, ApiResult};

use axum::Router;
use chrono::{DateTime, Utc};
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::services::TmdbClient;
use crate::store::{ReviewStore, WatchlistStore};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// TMDB catalog client; absent when no API key is configured, in
    /// which case catalog-backed endpoints answer with a config error
    pub tmdb: Option<Arc<TmdbClient>>,
    /// Watchlist flat-file store
    pub watchlist: WatchlistStore,
    /// Review flat-file store
    pub reviews: ReviewStore,
    /// Service startup timestamp for uptime tracking
    pub startup_time: DateTime<Utc>,
}

impl AppState {
    pub fn new(tmdb: Option<Arc<TmdbClient>>, data_folder: &Path) -> Self {
        Self {
            tmdb,
            watchlist: WatchlistStore::new(data_folder),
            reviews: ReviewStore::new(data_folder),
            startup_time: Utc::now(),
        }
    }

    /// The catalog client, or a config error when the key is missing
    pub fn tmdb(&self) -> ApiResult<&TmdbClient> {
        self.tmdb
            .as_deref()
            .ok_or_else(|| ApiError::Config("TMDB API key not configured".to_string()))
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(api::health_routes())
        .merge(api::movie_routes())
        .merge(api::quiz_routes())
        .merge(api::review_routes())
        .merge(api::watchlist_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
