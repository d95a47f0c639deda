//! Movie discovery quiz core
//!
//! Five-question quiz with strict AND matching against the TMDB catalog:
//! criteria validation, the match engine, the file-backed result cache,
//! and the session state machine driving the question flow.

pub mod cache;
pub mod constants;
pub mod matching;
pub mod session;
pub mod types;
pub mod validation;

pub use cache::{CacheMetadata, ResultCache};
pub use session::{QuizPhase, QuizSession};
pub use types::{
    DateRange, MatchCriteria, MovieRecommendation, QuizAnswer, QuizSelections, RuntimeRange,
    SavedResult, SelectionsDraft,
};
pub use validation::{ValidationError, ValidationReport};
