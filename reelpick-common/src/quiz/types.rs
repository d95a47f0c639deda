//! Type definitions for the movie discovery quiz
//!
//! Data structures for user selections, match results, and cache
//! persistence. Outbound and cached shapes serialize in camelCase so
//! stored payloads keep their original field names.

use serde::{Deserialize, Serialize};

use crate::types::CatalogMovie;

/// Inclusive ISO calendar date range (era selection)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub gte: String,
    pub lte: String,
}

/// Inclusive integer-minutes range (runtime selection)
///
/// Signed so that negative input survives deserialization and gets
/// rejected by validation instead of failing to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeRange {
    pub gte: i64,
    pub lte: i64,
}

/// Container for all user answers across the 5 questions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizSelections {
    /// Selected TMDB genre ids
    pub genres: Vec<u32>,
    /// Selected mood-mapped genre ids (same identifier space as genres)
    pub moods: Vec<u32>,
    /// Release date range
    pub era: DateRange,
    /// Runtime range in minutes
    pub runtime: RuntimeRange,
    /// Minimum rating threshold (0-10)
    pub rating: f64,
}

/// Partially answered quiz selections
///
/// What the session accumulates between questions and what the
/// recommendations endpoint accepts; the validator decides whether it
/// amounts to a usable [`QuizSelections`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectionsDraft {
    #[serde(default)]
    pub genres: Option<Vec<u32>>,
    #[serde(default)]
    pub moods: Option<Vec<u32>>,
    #[serde(default)]
    pub era: Option<DateRange>,
    #[serde(default)]
    pub runtime: Option<RuntimeRange>,
    #[serde(default)]
    pub rating: Option<f64>,
}

impl SelectionsDraft {
    /// Convert to a complete selection set, if all five answers are present
    /// and the collections are non-empty
    pub fn as_complete(&self) -> Option<QuizSelections> {
        let genres = self.genres.clone().filter(|g| !g.is_empty())?;
        let moods = self.moods.clone().filter(|m| !m.is_empty())?;
        Some(QuizSelections {
            genres,
            moods,
            era: self.era.clone()?,
            runtime: self.runtime?,
            rating: self.rating?,
        })
    }
}

impl From<QuizSelections> for SelectionsDraft {
    fn from(s: QuizSelections) -> Self {
        Self {
            genres: Some(s.genres),
            moods: Some(s.moods),
            era: Some(s.era),
            runtime: Some(s.runtime),
            rating: Some(s.rating),
        }
    }
}

/// One answer to one quiz question
///
/// The per-question payloads are heterogeneous, so the answer is a tagged
/// union routed into [`SelectionsDraft`] by the session.
#[derive(Debug, Clone, PartialEq)]
pub enum QuizAnswer {
    Genres(Vec<u32>),
    Moods(Vec<u32>),
    Era(DateRange),
    Runtime(RuntimeRange),
    Rating(f64),
}

/// Detailed breakdown showing which quiz criteria a movie matched
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchCriteria {
    /// Matched genre names
    pub genres: Vec<String>,
    /// Matched mood labels
    pub moods: Vec<String>,
    /// Matched decade label
    pub era: String,
    /// Matched runtime category
    pub runtime: String,
    /// Matched rating category
    pub rating: String,
}

/// A recommended movie with an explanation of why it matched
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieRecommendation {
    /// TMDB movie id
    pub id: u64,
    pub title: String,
    /// TMDB poster image path
    pub poster_path: Option<String>,
    /// ISO date (YYYY-MM-DD)
    pub release_date: String,
    /// Vote average (0-10)
    pub rating: f64,
    /// Duration in minutes (0 when the catalog had none)
    pub runtime: u32,
    pub overview: String,
    /// TMDB genre ids
    pub genre_ids: Vec<u32>,
    /// Human-readable match reason
    pub match_explanation: String,
    /// Detailed match breakdown
    pub match_criteria: MatchCriteria,
}

impl MovieRecommendation {
    /// Reshape a catalog record into a recommendation
    pub fn from_movie(
        movie: &CatalogMovie,
        match_explanation: String,
        match_criteria: MatchCriteria,
    ) -> Self {
        Self {
            id: movie.id,
            title: movie.title.clone(),
            poster_path: movie.poster_path.clone(),
            release_date: movie.release_date.clone(),
            rating: movie.vote_average,
            runtime: movie.runtime.unwrap_or(0),
            overview: movie.overview.clone(),
            genre_ids: movie.genre_ids.clone(),
            match_explanation,
            match_criteria,
        }
    }
}

/// A cached quiz result, the single slot owned by [`super::ResultCache`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedResult {
    /// Unix timestamp in milliseconds at save time
    pub timestamp: i64,
    /// Unix timestamp in milliseconds after which the entry is stale
    pub expires_at: i64,
    /// Cache schema version, compared by equality only
    pub version: String,
    pub selections: QuizSelections,
    pub recommendations: Vec<MovieRecommendation>,
    pub total_matches: usize,
}
