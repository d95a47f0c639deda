//! reelpick-ui - Movie Discovery Web Service
//!
//! Proxies the TMDB catalog (listings, search, per-movie detail), serves
//! the five-question quiz recommendation endpoint, and keeps the
//! watchlist and review stores as flat JSON files under the data folder.

use anyhow::Result;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use reelpick_common::config;
use reelpick_ui::services::TmdbClient;
use reelpick_ui::AppState;

const BIND_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting reelpick-ui (Movie Discovery) service");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    // Resolve configuration: ENV overrides TOML overrides defaults
    let toml_config = config::load_toml_config();

    let data_folder = config::resolve_data_folder(&toml_config);
    config::ensure_data_folder(&data_folder)?;
    info!("Data folder: {}", data_folder.display());

    // A missing API key keeps the service up; catalog-backed endpoints
    // answer with a configuration error until a key is provided
    let tmdb = match config::resolve_tmdb_api_key(&toml_config) {
        Ok(api_key) => Some(Arc::new(TmdbClient::new(api_key)?)),
        Err(e) => {
            tracing::warn!("{}", e);
            None
        }
    };

    let state = AppState::new(tmdb, &data_folder);
    let app = reelpick_ui::build_router(state);

    let listener = tokio::net::TcpListener::bind(BIND_ADDR).await?;
    info!("Listening on http://{}", BIND_ADDR);
    info!("Health check: http://{}/health", BIND_ADDR);

    axum::serve(listener, app).await?;

    Ok(())
}
