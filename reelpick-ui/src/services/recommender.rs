//! Quiz recommendation pipeline
//!
//! Discover a candidate page from the catalog, enrich each candidate with
//! its runtime via a concurrent per-movie detail fan-out, then run the
//! strict AND match engine and truncate to the display limit. A failed
//! detail lookup degrades that movie's runtime to absent; it never aborts
//! the batch.

use futures::future::join_all;
use serde::Serialize;
use tracing::{info, warn};

use reelpick_common::quiz::constants::RESULTS_LIMIT;
use reelpick_common::quiz::matching::match_movies;
use reelpick_common::quiz::{MovieRecommendation, QuizSelections};
use reelpick_common::types::CatalogMovie;

use super::tmdb_client::{TmdbClient, TmdbError};

/// Result of one recommendation run
///
/// `total_matches` counts the full filtered set before truncation to
/// [`RESULTS_LIMIT`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationSet {
    pub recommendations: Vec<MovieRecommendation>,
    pub total_matches: usize,
}

/// Compute recommendations for a validated selection set
pub async fn recommend(
    client: &TmdbClient,
    selections: &QuizSelections,
) -> Result<RecommendationSet, TmdbError> {
    let discovered = client.discover_movies(selections).await?;
    info!(
        candidates = discovered.results.len(),
        total_results = discovered.total_results,
        "Discover query returned candidates"
    );

    // Runtime only exists on the detail endpoint; fan out one lookup per
    // candidate and wait for all of them
    let enriched = join_all(
        discovered
            .results
            .iter()
            .map(|movie| enrich_with_runtime(client, movie)),
    )
    .await;

    let matched = match_movies(&enriched, selections);
    let total_matches = matched.len();
    let recommendations: Vec<MovieRecommendation> =
        matched.into_iter().take(RESULTS_LIMIT).collect();

    info!(
        total_matches,
        returned = recommendations.len(),
        "Strict AND matching complete"
    );

    Ok(RecommendationSet {
        recommendations,
        total_matches,
    })
}

/// Merge the detail endpoint's runtime into a discover record
async fn enrich_with_runtime(client: &TmdbClient, movie: &CatalogMovie) -> CatalogMovie {
    match client.movie_details(movie.id).await {
        Ok(details) => CatalogMovie {
            runtime: details.runtime,
            ..movie.clone()
        },
        Err(e) => {
            warn!(movie_id = movie.id, "Detail lookup failed: {} - runtime treated as absent", e);
            movie.clone()
        }
    }
}
