//! Match engine for movie recommendations
//!
//! Strict AND logic: a movie must satisfy every selected criterion
//! simultaneously. Pure and synchronous; performs no I/O and raises no
//! errors. A release date that fails to parse simply fails the era
//! predicate instead of aborting the run.

use chrono::{Datelike, NaiveDate};

use super::constants::{GENRE_MAP, GENRE_TO_MOOD};
use super::types::{MatchCriteria, MovieRecommendation, QuizSelections};
use crate::types::CatalogMovie;

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Title-case a hyphenated mood token ("thought-provoking" → "Thought-Provoking")
fn mood_label(mood: &str) -> String {
    mood.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join("-")
}

/// Generate human-readable match criteria labels for a movie
///
/// Genre labels are the names of the selected ids that are also present on
/// the movie, not all of the movie's genres. Mood labels come from the
/// genre-to-mood reverse mapping, deduplicated.
pub fn generate_match_criteria(
    movie: &CatalogMovie,
    selections: &QuizSelections,
) -> MatchCriteria {
    let matched_genres: Vec<String> = selections
        .genres
        .iter()
        .filter(|genre_id| movie.genre_ids.contains(genre_id))
        .map(|genre_id| {
            GENRE_MAP
                .get(genre_id)
                .map(|name| name.to_string())
                .unwrap_or_else(|| format!("Unknown ({})", genre_id))
        })
        .collect();

    let mut mood_labels: Vec<String> = Vec::new();
    for mood_genre_id in &selections.moods {
        if !movie.genre_ids.contains(mood_genre_id) {
            continue;
        }
        for mood in GENRE_TO_MOOD.get(mood_genre_id).into_iter().flatten() {
            let label = mood_label(mood);
            if !mood_labels.contains(&label) {
                mood_labels.push(label);
            }
        }
    }

    let era_label = match parse_date(&movie.release_date).map(|d| d.year()) {
        Some(1980..=1989) => "1980s",
        Some(1990..=1999) => "1990s",
        Some(2000..=2009) => "2000s",
        Some(2010..=2019) => "2010s",
        Some(2020..=2029) => "2020s",
        _ => "Unknown",
    };

    let runtime = movie.runtime.unwrap_or(0);
    let runtime_label = if runtime < 90 {
        "Short"
    } else if runtime <= 120 {
        "Medium"
    } else {
        "Long"
    };

    let rating = movie.vote_average;
    let rating_label = if rating >= 9.0 {
        "Masterpiece (9+)"
    } else if rating >= 8.0 {
        "Excellent (8+)"
    } else if rating >= 7.0 {
        "Very Good (7+)"
    } else if rating >= 6.0 {
        "Good (6+)"
    } else {
        "Unknown"
    };

    MatchCriteria {
        genres: matched_genres,
        moods: mood_labels,
        era: era_label.to_string(),
        runtime: runtime_label.to_string(),
        rating: rating_label.to_string(),
    }
}

/// Generate a human-readable match explanation from the criteria labels
///
/// Always mentions matched genres when present and the era when known;
/// degrades to a generic sentence when both are absent.
pub fn generate_match_explanation(criteria: &MatchCriteria) -> String {
    let mut parts: Vec<String> = Vec::new();

    if !criteria.genres.is_empty() {
        parts.push(criteria.genres.join(" and "));
    }

    if criteria.era != "Unknown" {
        parts.push(format!("{} films", criteria.era));
    }

    if parts.is_empty() {
        return "Matches your preferences".to_string();
    }

    format!("Based on your love of {}", parts.join(" and "))
}

/// Check whether a movie matches all quiz criteria (strict AND logic)
///
/// Short-circuits on the first failed predicate; order affects efficiency
/// only, never the result.
pub fn matches_all_criteria(movie: &CatalogMovie, selections: &QuizSelections) -> bool {
    // All selected genres must be present (movie may carry extras)
    if !selections
        .genres
        .iter()
        .all(|genre_id| movie.genre_ids.contains(genre_id))
    {
        return false;
    }

    // All selected mood genres must be present (same identifier space)
    if !selections
        .moods
        .iter()
        .all(|mood_genre_id| movie.genre_ids.contains(mood_genre_id))
    {
        return false;
    }

    // Release date within the era range, inclusive both ends.
    // An unparseable date on either side is a non-match, not a failure.
    let (Some(release_date), Some(era_start), Some(era_end)) = (
        parse_date(&movie.release_date),
        parse_date(&selections.era.gte),
        parse_date(&selections.era.lte),
    ) else {
        return false;
    };
    if release_date < era_start || release_date > era_end {
        return false;
    }

    // Runtime within range, inclusive; absent runtime counts as 0 minutes
    let runtime = i64::from(movie.runtime.unwrap_or(0));
    if runtime < selections.runtime.gte || runtime > selections.runtime.lte {
        return false;
    }

    // Rating meets the minimum threshold, inclusive
    if movie.vote_average < selections.rating {
        return false;
    }

    true
}

/// Filter a catalog batch and reshape the survivors into recommendations
///
/// Stable filter: input order is preserved and duplicates are not removed
/// (deduplicating across pages is the caller's concern).
pub fn match_movies(
    movies: &[CatalogMovie],
    selections: &QuizSelections,
) -> Vec<MovieRecommendation> {
    movies
        .iter()
        .filter(|movie| matches_all_criteria(movie, selections))
        .map(|movie| {
            let criteria = generate_match_criteria(movie, selections);
            let explanation = generate_match_explanation(&criteria);
            MovieRecommendation::from_movie(movie, explanation, criteria)
        })
        .collect()
}

/// Calculate a 0-100 match score (weighted blend of genre and mood match
/// fractions plus the vote average)
///
/// Not wired into the recommendation path, which is filter-only; retained
/// for future ranked output.
pub fn calculate_match_score(movie: &CatalogMovie, selections: &QuizSelections) -> f64 {
    let mut score = 0.0;

    let genre_matches = selections
        .genres
        .iter()
        .filter(|genre_id| movie.genre_ids.contains(genre_id))
        .count();
    if !selections.genres.is_empty() {
        score += genre_matches as f64 / selections.genres.len() as f64 * 20.0;
    }

    let mood_matches = selections
        .moods
        .iter()
        .filter(|mood_genre_id| movie.genre_ids.contains(mood_genre_id))
        .count();
    if !selections.moods.is_empty() {
        score += mood_matches as f64 / selections.moods.len() as f64 * 20.0;
    }

    score += movie.vote_average / 10.0 * 30.0;

    score.min(100.0)
}
