//! Constants for the movie discovery quiz
//!
//! Genre mappings, mood mappings, and the five question configurations.
//! The genre table is the fixed TMDB movie genre list; the mood table has
//! no catalog-side equivalent and exists only here.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::types::{DateRange, RuntimeRange};

/// Fixed storage key for the quiz result cache slot
pub const CACHE_KEY: &str = "quiz_result";

/// Cache schema version, compared by equality only
pub const CACHE_VERSION: &str = "v1";

/// Cache expiration window: 30 days in milliseconds
pub const CACHE_EXPIRATION_MS: i64 = 30 * 24 * 60 * 60 * 1000;

/// Maximum number of recommendations returned to the caller
pub const RESULTS_LIMIT: usize = 10;

/// Base URL for TMDB poster images
pub const TMDB_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

/// TMDB genre id to name mapping
///
/// Source: https://developer.themoviedb.org/reference/genre-movie-list
pub static GENRE_MAP: Lazy<HashMap<u32, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (28, "Action"),
        (12, "Adventure"),
        (16, "Animation"),
        (35, "Comedy"),
        (80, "Crime"),
        (99, "Documentary"),
        (18, "Drama"),
        (10751, "Family"),
        (14, "Fantasy"),
        (36, "History"),
        (27, "Horror"),
        (10402, "Music"),
        (9648, "Mystery"),
        (10749, "Romance"),
        (878, "Science Fiction"),
        (10770, "TV Movie"),
        (53, "Thriller"),
        (10752, "War"),
        (37, "Western"),
    ])
});

/// Mood label to TMDB genre id mapping
pub static MOOD_TO_GENRE: Lazy<HashMap<&'static str, Vec<u32>>> = Lazy::new(|| {
    HashMap::from([
        ("action-packed", vec![28]),          // Action
        ("heartwarming", vec![10749, 18]),    // Romance, Drama
        ("thought-provoking", vec![18, 878]), // Drama, Sci-Fi
        ("scary", vec![27, 53]),              // Horror, Thriller
        ("funny", vec![35]),                  // Comedy
        ("romantic", vec![10749]),            // Romance
    ])
});

/// Reverse mapping: TMDB genre id to mood label(s)
pub static GENRE_TO_MOOD: Lazy<HashMap<u32, Vec<&'static str>>> = Lazy::new(|| {
    HashMap::from([
        (28, vec!["action-packed"]),
        (10749, vec!["heartwarming", "romantic"]),
        (18, vec!["heartwarming", "thought-provoking"]),
        (878, vec!["thought-provoking"]),
        (27, vec!["scary"]),
        (53, vec!["scary"]),
        (35, vec!["funny"]),
    ])
});

/// Whether a question accepts one answer or several
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    MultiSelect,
    SingleSelect,
}

/// The payload a quiz option carries
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    GenreId(u32),
    GenreIds(Vec<u32>),
    Era(DateRange),
    Runtime(RuntimeRange),
    Rating(f64),
}

/// One answer choice within a quiz question
#[derive(Debug, Clone, PartialEq)]
pub struct QuizOption {
    pub id: &'static str,
    pub label: &'static str,
    pub value: OptionValue,
}

/// One question in the 5-question quiz flow
#[derive(Debug, Clone, PartialEq)]
pub struct QuizQuestion {
    /// Question number, 1-5
    pub id: u8,
    pub text: &'static str,
    pub kind: QuestionKind,
    pub options: Vec<QuizOption>,
}

fn date_range(gte: &str, lte: &str) -> OptionValue {
    OptionValue::Era(DateRange {
        gte: gte.to_string(),
        lte: lte.to_string(),
    })
}

/// The five quiz questions with their options
pub static QUIZ_QUESTIONS: Lazy<Vec<QuizQuestion>> = Lazy::new(|| {
    vec![
        QuizQuestion {
            id: 1,
            text: "What genres interest you?",
            kind: QuestionKind::MultiSelect,
            options: vec![
                QuizOption { id: "action", label: "Action", value: OptionValue::GenreId(28) },
                QuizOption { id: "comedy", label: "Comedy", value: OptionValue::GenreId(35) },
                QuizOption { id: "drama", label: "Drama", value: OptionValue::GenreId(18) },
                QuizOption { id: "horror", label: "Horror", value: OptionValue::GenreId(27) },
                QuizOption { id: "romance", label: "Romance", value: OptionValue::GenreId(10749) },
                QuizOption { id: "sci-fi", label: "Sci-Fi", value: OptionValue::GenreId(878) },
                QuizOption { id: "thriller", label: "Thriller", value: OptionValue::GenreId(53) },
                QuizOption { id: "adventure", label: "Adventure", value: OptionValue::GenreId(12) },
                QuizOption { id: "animation", label: "Animation", value: OptionValue::GenreId(16) },
                QuizOption { id: "crime", label: "Crime", value: OptionValue::GenreId(80) },
                QuizOption { id: "fantasy", label: "Fantasy", value: OptionValue::GenreId(14) },
                QuizOption { id: "mystery", label: "Mystery", value: OptionValue::GenreId(9648) },
            ],
        },
        QuizQuestion {
            id: 2,
            text: "What mood are you in?",
            kind: QuestionKind::MultiSelect,
            options: vec![
                QuizOption {
                    id: "action-packed",
                    label: "Action-packed",
                    value: OptionValue::GenreId(28),
                },
                QuizOption {
                    id: "heartwarming",
                    label: "Heartwarming",
                    value: OptionValue::GenreIds(vec![10749, 18]),
                },
                QuizOption {
                    id: "thought-provoking",
                    label: "Thought-provoking",
                    value: OptionValue::GenreIds(vec![18, 878]),
                },
                QuizOption {
                    id: "scary",
                    label: "Scary",
                    value: OptionValue::GenreIds(vec![27, 53]),
                },
                QuizOption { id: "funny", label: "Funny", value: OptionValue::GenreId(35) },
                QuizOption {
                    id: "romantic",
                    label: "Romantic",
                    value: OptionValue::GenreId(10749),
                },
            ],
        },
        QuizQuestion {
            id: 3,
            text: "Which era do you prefer?",
            kind: QuestionKind::SingleSelect,
            options: vec![
                QuizOption { id: "1980s", label: "1980s", value: date_range("1980-01-01", "1989-12-31") },
                QuizOption { id: "1990s", label: "1990s", value: date_range("1990-01-01", "1999-12-31") },
                QuizOption { id: "2000s", label: "2000s", value: date_range("2000-01-01", "2009-12-31") },
                QuizOption { id: "2010s", label: "2010s", value: date_range("2010-01-01", "2019-12-31") },
                QuizOption { id: "2020s", label: "2020s", value: date_range("2020-01-01", "2029-12-31") },
            ],
        },
        QuizQuestion {
            id: 4,
            text: "How long of a movie do you want?",
            kind: QuestionKind::SingleSelect,
            options: vec![
                QuizOption {
                    id: "short",
                    label: "Short (under 90 min)",
                    value: OptionValue::Runtime(RuntimeRange { gte: 0, lte: 89 }),
                },
                QuizOption {
                    id: "medium",
                    label: "Medium (90-120 min)",
                    value: OptionValue::Runtime(RuntimeRange { gte: 90, lte: 120 }),
                },
                QuizOption {
                    id: "long",
                    label: "Long (over 120 min)",
                    value: OptionValue::Runtime(RuntimeRange { gte: 121, lte: 300 }),
                },
            ],
        },
        QuizQuestion {
            id: 5,
            text: "Minimum rating?",
            kind: QuestionKind::SingleSelect,
            options: vec![
                QuizOption { id: "rating-6", label: "6+ (Good)", value: OptionValue::Rating(6.0) },
                QuizOption { id: "rating-7", label: "7+ (Very Good)", value: OptionValue::Rating(7.0) },
                QuizOption { id: "rating-8", label: "8+ (Excellent)", value: OptionValue::Rating(8.0) },
                QuizOption { id: "rating-9", label: "9+ (Masterpiece)", value: OptionValue::Rating(9.0) },
            ],
        },
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genre_map_covers_standard_catalog() {
        assert_eq!(GENRE_MAP.len(), 19);
        assert_eq!(GENRE_MAP.get(&18), Some(&"Drama"));
        assert_eq!(GENRE_MAP.get(&878), Some(&"Science Fiction"));
    }

    #[test]
    fn test_mood_mappings_are_mutual() {
        // Every mood's genre ids must point back at that mood
        for (mood, genre_ids) in MOOD_TO_GENRE.iter() {
            for genre_id in genre_ids {
                let moods = GENRE_TO_MOOD
                    .get(genre_id)
                    .unwrap_or_else(|| panic!("no reverse entry for genre {}", genre_id));
                assert!(moods.contains(mood), "{} missing from genre {}", mood, genre_id);
            }
        }
    }

    #[test]
    fn test_five_questions_in_order() {
        assert_eq!(QUIZ_QUESTIONS.len(), 5);
        for (i, q) in QUIZ_QUESTIONS.iter().enumerate() {
            assert_eq!(q.id as usize, i + 1);
            assert!(!q.options.is_empty());
        }
    }
}
