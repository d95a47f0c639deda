//! Catalog and stored-record types shared across ReelPick crates

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Movie record as returned by the TMDB catalog
///
/// List endpoints omit `runtime`; it arrives via a per-movie detail lookup.
/// An absent runtime is treated as 0 minutes by the match engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogMovie {
    /// TMDB movie id
    pub id: u64,
    /// Movie title
    pub title: String,
    /// Plot summary
    #[serde(default)]
    pub overview: String,
    /// Poster image path (relative to the TMDB image base URL)
    #[serde(default)]
    pub poster_path: Option<String>,
    /// Backdrop image path
    #[serde(default)]
    pub backdrop_path: Option<String>,
    /// Release date in YYYY-MM-DD format
    #[serde(default)]
    pub release_date: String,
    /// Vote average on the 0-10 scale
    #[serde(default)]
    pub vote_average: f64,
    /// Number of votes behind the average
    #[serde(default)]
    pub vote_count: u64,
    /// TMDB popularity metric
    #[serde(default)]
    pub popularity: f64,
    /// Duration in minutes (absent in list responses)
    #[serde(default)]
    pub runtime: Option<u32>,
    /// TMDB genre ids
    #[serde(default)]
    pub genre_ids: Vec<u32>,
}

/// A stored user review
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieReview {
    pub id: Uuid,
    pub movie_id: u64,
    pub movie_title: String,
    pub user_name: String,
    pub email: String,
    pub rating: f64,
    pub review: String,
    /// RFC 3339 submission timestamp
    pub created_at: String,
}

/// A stored watchlist entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistItem {
    pub id: Uuid,
    pub movie_id: u64,
    pub movie_title: String,
    pub poster_path: Option<String>,
    /// RFC 3339 timestamp of when the entry was added
    pub added_at: String,
}
