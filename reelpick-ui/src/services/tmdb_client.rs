//! TMDB catalog API client
//!
//! Thin reqwest wrapper over the endpoints the service needs: category
//! listings, search, per-movie detail, and the discover query the quiz
//! recommendation pipeline is built on. Requests share an interval rate
//! limiter so bursts (the per-movie detail fan-out in particular) stay
//! under the catalog's request ceiling.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;
use tokio::sync::Mutex;

use reelpick_common::quiz::QuizSelections;
use reelpick_common::types::CatalogMovie;

const TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";
const USER_AGENT: &str = "ReelPick/0.1.0 (https://github.com/reelpick/reelpick)";
const RATE_LIMIT_MS: u64 = 25; // stay under TMDB's ~40 req/sec ceiling
const MIN_VOTE_COUNT: u32 = 100;

/// TMDB client errors
#[derive(Debug, Error)]
pub enum TmdbError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Movie not found: {0}")]
    MovieNotFound(u64),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("API error {0}: {1}")]
    Api(u16, String),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Catalog listing categories exposed by `/api/movies`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovieCategory {
    Popular,
    TopRated,
    NowPlaying,
    Upcoming,
}

impl MovieCategory {
    /// Parse the query-string form ("popular", "top_rated", ...)
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "popular" => Some(Self::Popular),
            "top_rated" => Some(Self::TopRated),
            "now_playing" => Some(Self::NowPlaying),
            "upcoming" => Some(Self::Upcoming),
            _ => None,
        }
    }

    fn path_segment(self) -> &'static str {
        match self {
            Self::Popular => "popular",
            Self::TopRated => "top_rated",
            Self::NowPlaying => "now_playing",
            Self::Upcoming => "upcoming",
        }
    }
}

impl fmt::Display for MovieCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}

/// Paginated movie list response (discover, search, and category listings)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieListResponse {
    pub page: u32,
    pub results: Vec<CatalogMovie>,
    pub total_pages: u32,
    pub total_results: u32,
}

/// Interval rate limiter shared by all requests through one client
struct RateLimiter {
    last_request: Mutex<Option<Instant>>,
    min_interval: Duration,
}

impl RateLimiter {
    fn new(min_interval_ms: u64) -> Self {
        Self {
            last_request: Mutex::new(None),
            min_interval: Duration::from_millis(min_interval_ms),
        }
    }

    /// Wait if necessary to comply with the rate limit
    async fn wait(&self) {
        let mut last = self.last_request.lock().await;

        if let Some(last_time) = *last {
            let elapsed = last_time.elapsed();
            if elapsed < self.min_interval {
                tokio::time::sleep(self.min_interval - elapsed).await;
            }
        }

        *last = Some(Instant::now());
    }
}

/// TMDB API client
pub struct TmdbClient {
    http_client: reqwest::Client,
    rate_limiter: Arc<RateLimiter>,
    api_key: String,
}

impl TmdbClient {
    pub fn new(api_key: String) -> Result<Self, TmdbError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| TmdbError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            rate_limiter: Arc::new(RateLimiter::new(RATE_LIMIT_MS)),
            api_key,
        })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, TmdbError> {
        self.rate_limiter.wait().await;

        let url = format!("{}{}", TMDB_BASE_URL, path);
        tracing::debug!(path = %path, "Querying TMDB API");

        let response = self
            .http_client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .query(query)
            .send()
            .await
            .map_err(|e| TmdbError::Network(e.to_string()))?;

        let status = response.status();

        if status == 429 {
            return Err(TmdbError::RateLimitExceeded);
        }

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(TmdbError::Api(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| TmdbError::Parse(e.to_string()))
    }

    /// List movies by category, one page at a time
    pub async fn list_movies(
        &self,
        category: MovieCategory,
        page: u32,
    ) -> Result<MovieListResponse, TmdbError> {
        self.get_json(
            &format!("/movie/{}", category.path_segment()),
            &[
                ("language", "en-US".to_string()),
                ("page", page.to_string()),
            ],
        )
        .await
    }

    /// Search movies by free-text query
    pub async fn search_movies(
        &self,
        query: &str,
        page: u32,
    ) -> Result<MovieListResponse, TmdbError> {
        self.get_json(
            "/search/movie",
            &[
                ("query", query.to_string()),
                ("language", "en-US".to_string()),
                ("page", page.to_string()),
            ],
        )
        .await
    }

    /// Lookup full movie detail (the only listing source carrying runtime)
    pub async fn movie_details(&self, movie_id: u64) -> Result<CatalogMovie, TmdbError> {
        let result: Result<CatalogMovie, TmdbError> =
            self.get_json(&format!("/movie/{}", movie_id), &[]).await;

        match result {
            Err(TmdbError::Api(404, _)) => Err(TmdbError::MovieNotFound(movie_id)),
            other => other,
        }
    }

    /// Discover movies matching the quiz selections
    ///
    /// The discover filters pre-narrow the catalog server-side; the match
    /// engine still applies the strict AND pass afterwards because discover
    /// cannot express every criterion exactly (runtime arrives separately).
    pub async fn discover_movies(
        &self,
        selections: &QuizSelections,
    ) -> Result<MovieListResponse, TmdbError> {
        self.get_json("/discover/movie", &discover_query(selections))
            .await
    }
}

/// Build the discover query parameters from quiz selections
fn discover_query(selections: &QuizSelections) -> Vec<(&'static str, String)> {
    // Union of genre and mood ids, first occurrence wins
    let mut all_genres: Vec<u32> = Vec::new();
    for id in selections.genres.iter().chain(selections.moods.iter()) {
        if !all_genres.contains(id) {
            all_genres.push(*id);
        }
    }
    let with_genres = all_genres
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",");

    vec![
        ("with_genres", with_genres),
        ("primary_release_date.gte", selections.era.gte.clone()),
        ("primary_release_date.lte", selections.era.lte.clone()),
        ("with_runtime.gte", selections.runtime.gte.to_string()),
        ("with_runtime.lte", selections.runtime.lte.to_string()),
        ("vote_average.gte", selections.rating.to_string()),
        ("sort_by", "popularity.desc".to_string()),
        ("vote_count.gte", MIN_VOTE_COUNT.to_string()),
        ("page", "1".to_string()),
    ]
}
