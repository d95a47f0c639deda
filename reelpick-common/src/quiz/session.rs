//! Quiz session state machine
//!
//! Drives the five-question flow: Question(1..=5) → Submitting → Results
//! or Error. Step transitions are gated by [`validation::has_selection`];
//! submission requires [`validation::is_quiz_complete`]. Successful
//! results with at least one recommendation are written to the
//! [`ResultCache`]; a session started while a valid cache entry exists
//! jumps straight to Results with the cached payload.

use tracing::{debug, info};

use super::cache::ResultCache;
use super::constants::QUIZ_QUESTIONS;
use super::types::{MovieRecommendation, QuizAnswer, SelectionsDraft};
use super::validation::{self, has_selection};

/// Number of quiz questions
pub const STEP_COUNT: u8 = 5;

/// Where the session currently stands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizPhase {
    /// Answering question `step` (1-5)
    Question(u8),
    /// Waiting on the recommendations request
    Submitting,
    /// Showing recommendations
    Results,
    /// The recommendations request failed
    Error,
}

/// A user's current or completed quiz attempt
#[derive(Debug, Clone)]
pub struct QuizSession {
    phase: QuizPhase,
    selections: SelectionsDraft,
    recommendations: Vec<MovieRecommendation>,
    total_matches: usize,
    error: Option<String>,
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizSession {
    /// Fresh session at question 1
    pub fn new() -> Self {
        debug_assert_eq!(QUIZ_QUESTIONS.len(), STEP_COUNT as usize);
        Self {
            phase: QuizPhase::Question(1),
            selections: SelectionsDraft::default(),
            recommendations: Vec::new(),
            total_matches: 0,
            error: None,
        }
    }

    /// Start a session, resuming from the cache when a valid entry exists
    ///
    /// A fresh, version-matching cache entry bypasses the question flow
    /// entirely and lands directly on Results.
    pub fn resume_or_start(cache: &ResultCache) -> Self {
        match cache.get() {
            Some(saved) => {
                info!("Resuming quiz session from cached results");
                Self {
                    phase: QuizPhase::Results,
                    selections: saved.selections.into(),
                    recommendations: saved.recommendations,
                    total_matches: saved.total_matches,
                    error: None,
                }
            }
            None => Self::new(),
        }
    }

    pub fn phase(&self) -> &QuizPhase {
        &self.phase
    }

    pub fn selections(&self) -> &SelectionsDraft {
        &self.selections
    }

    pub fn recommendations(&self) -> &[MovieRecommendation] {
        &self.recommendations
    }

    pub fn total_matches(&self) -> usize {
        self.total_matches
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The answer recorded for a question step, if any
    pub fn answer_for(&self, step: u8) -> Option<QuizAnswer> {
        match step {
            1 => self.selections.genres.clone().map(QuizAnswer::Genres),
            2 => self.selections.moods.clone().map(QuizAnswer::Moods),
            3 => self.selections.era.clone().map(QuizAnswer::Era),
            4 => self.selections.runtime.map(QuizAnswer::Runtime),
            5 => self.selections.rating.map(QuizAnswer::Rating),
            _ => None,
        }
    }

    /// Record an answer; the tagged union routes itself into the draft
    pub fn answer(&mut self, answer: QuizAnswer) {
        match answer {
            QuizAnswer::Genres(ids) => self.selections.genres = Some(ids),
            QuizAnswer::Moods(ids) => self.selections.moods = Some(ids),
            QuizAnswer::Era(range) => self.selections.era = Some(range),
            QuizAnswer::Runtime(range) => self.selections.runtime = Some(range),
            QuizAnswer::Rating(rating) => self.selections.rating = Some(rating),
        }
    }

    /// Advance from the current question
    ///
    /// Refused (returns false) when the current step has no answer. Step 5
    /// additionally requires a complete answer set and moves to Submitting
    /// instead of a next question.
    pub fn next(&mut self) -> bool {
        let QuizPhase::Question(step) = self.phase else {
            return false;
        };

        if !has_selection(self.answer_for(step).as_ref()) {
            debug!(step, "Refusing to advance: no selection for current step");
            return false;
        }

        if step < STEP_COUNT {
            self.phase = QuizPhase::Question(step + 1);
            return true;
        }

        if !validation::is_quiz_complete(&self.selections) {
            debug!("Refusing to submit: quiz incomplete");
            return false;
        }

        self.phase = QuizPhase::Submitting;
        true
    }

    /// Go back one question; refused at question 1 and outside the flow
    pub fn back(&mut self) -> bool {
        match self.phase {
            QuizPhase::Question(step) if step > 1 => {
                self.phase = QuizPhase::Question(step - 1);
                true
            }
            _ => false,
        }
    }

    /// Record a successful recommendations response
    ///
    /// Moves to Results; a non-empty result set is written to the cache
    /// (a zero-result run is never cached).
    pub fn submit_succeeded(
        &mut self,
        recommendations: Vec<MovieRecommendation>,
        total_matches: usize,
        cache: &ResultCache,
    ) {
        if self.phase != QuizPhase::Submitting {
            debug!(phase = ?self.phase, "submit_succeeded outside Submitting phase");
        }

        if !recommendations.is_empty() {
            if let Some(selections) = self.selections.as_complete() {
                cache.set(&selections, &recommendations, total_matches);
            }
        }

        self.recommendations = recommendations;
        self.total_matches = total_matches;
        self.error = None;
        self.phase = QuizPhase::Results;
    }

    /// Record a failed recommendations request
    pub fn submit_failed(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.phase = QuizPhase::Error;
    }

    /// Retry after an error: full state reset, cache cleared
    pub fn retry(&mut self, cache: &ResultCache) {
        cache.clear();
        *self = Self::new();
    }

    /// Retake the quiz from Results: cache cleared, back to question 1
    pub fn retake(&mut self, cache: &ResultCache) {
        cache.clear();
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::types::{DateRange, MatchCriteria, QuizSelections, RuntimeRange};

    fn cache_in_tempdir() -> (tempfile::TempDir, ResultCache) {
        let dir = tempfile::tempdir().unwrap();
        let cache = ResultCache::new(dir.path());
        (dir, cache)
    }

    fn answer_all(session: &mut QuizSession) {
        session.answer(QuizAnswer::Genres(vec![18, 53]));
        session.answer(QuizAnswer::Moods(vec![18]));
        session.answer(QuizAnswer::Era(DateRange {
            gte: "1990-01-01".to_string(),
            lte: "1999-12-31".to_string(),
        }));
        session.answer(QuizAnswer::Runtime(RuntimeRange { gte: 121, lte: 300 }));
        session.answer(QuizAnswer::Rating(8.0));
    }

    fn recommendation() -> MovieRecommendation {
        MovieRecommendation {
            id: 550,
            title: "Fight Club".to_string(),
            poster_path: None,
            release_date: "1999-10-15".to_string(),
            rating: 8.4,
            runtime: 139,
            overview: String::new(),
            genre_ids: vec![18, 53],
            match_explanation: "Based on your love of Drama".to_string(),
            match_criteria: MatchCriteria {
                genres: vec!["Drama".to_string()],
                moods: vec![],
                era: "1990s".to_string(),
                runtime: "Long".to_string(),
                rating: "Excellent (8+)".to_string(),
            },
        }
    }

    #[test]
    fn test_next_requires_an_answer() {
        let mut session = QuizSession::new();
        assert_eq!(*session.phase(), QuizPhase::Question(1));

        assert!(!session.next(), "cannot advance without an answer");

        session.answer(QuizAnswer::Genres(vec![18]));
        assert!(session.next());
        assert_eq!(*session.phase(), QuizPhase::Question(2));
    }

    #[test]
    fn test_empty_collection_answer_does_not_advance() {
        let mut session = QuizSession::new();
        session.answer(QuizAnswer::Genres(vec![]));
        assert!(!session.next());
    }

    #[test]
    fn test_back_stops_at_question_one() {
        let mut session = QuizSession::new();
        assert!(!session.back());

        session.answer(QuizAnswer::Genres(vec![18]));
        session.next();
        assert!(session.back());
        assert_eq!(*session.phase(), QuizPhase::Question(1));
    }

    #[test]
    fn test_full_walk_reaches_submitting() {
        let mut session = QuizSession::new();
        answer_all(&mut session);

        for expected in 2..=5u8 {
            assert!(session.next());
            assert_eq!(*session.phase(), QuizPhase::Question(expected));
        }
        assert!(session.next());
        assert_eq!(*session.phase(), QuizPhase::Submitting);
    }

    #[test]
    fn test_successful_submission_caches_results() {
        let (_dir, cache) = cache_in_tempdir();
        let mut session = QuizSession::new();
        answer_all(&mut session);
        for _ in 0..5 {
            session.next();
        }

        session.submit_succeeded(vec![recommendation()], 4, &cache);
        assert_eq!(*session.phase(), QuizPhase::Results);
        assert_eq!(session.total_matches(), 4);
        assert!(cache.has_cached_results());
    }

    #[test]
    fn test_zero_result_submission_is_not_cached() {
        let (_dir, cache) = cache_in_tempdir();
        let mut session = QuizSession::new();
        answer_all(&mut session);
        for _ in 0..5 {
            session.next();
        }

        session.submit_succeeded(vec![], 0, &cache);
        assert_eq!(*session.phase(), QuizPhase::Results);
        assert!(!cache.has_cached_results());
    }

    #[test]
    fn test_failed_submission_and_retry_reset() {
        let (_dir, cache) = cache_in_tempdir();
        let mut session = QuizSession::new();
        answer_all(&mut session);
        for _ in 0..5 {
            session.next();
        }

        session.submit_failed("network down");
        assert_eq!(*session.phase(), QuizPhase::Error);
        assert_eq!(session.error(), Some("network down"));

        session.retry(&cache);
        assert_eq!(*session.phase(), QuizPhase::Question(1));
        assert!(session.selections().genres.is_none());
        assert!(session.error().is_none());
    }

    #[test]
    fn test_mount_resumes_from_valid_cache() {
        let (_dir, cache) = cache_in_tempdir();

        // First session completes and caches
        let mut first = QuizSession::new();
        answer_all(&mut first);
        for _ in 0..5 {
            first.next();
        }
        first.submit_succeeded(vec![recommendation()], 1, &cache);

        // Second session mounts straight into Results
        let second = QuizSession::resume_or_start(&cache);
        assert_eq!(*second.phase(), QuizPhase::Results);
        assert_eq!(second.recommendations().len(), 1);
        assert_eq!(second.total_matches(), 1);
        assert_eq!(
            second.selections().as_complete().unwrap(),
            QuizSelections {
                genres: vec![18, 53],
                moods: vec![18],
                era: DateRange {
                    gte: "1990-01-01".to_string(),
                    lte: "1999-12-31".to_string(),
                },
                runtime: RuntimeRange { gte: 121, lte: 300 },
                rating: 8.0,
            }
        );
    }

    #[test]
    fn test_mount_without_cache_starts_fresh() {
        let (_dir, cache) = cache_in_tempdir();
        let session = QuizSession::resume_or_start(&cache);
        assert_eq!(*session.phase(), QuizPhase::Question(1));
    }

    #[test]
    fn test_retake_clears_cache_and_resets() {
        let (_dir, cache) = cache_in_tempdir();
        let mut session = QuizSession::new();
        answer_all(&mut session);
        for _ in 0..5 {
            session.next();
        }
        session.submit_succeeded(vec![recommendation()], 1, &cache);
        assert!(cache.has_cached_results());

        session.retake(&cache);
        assert_eq!(*session.phase(), QuizPhase::Question(1));
        assert!(!cache.has_cached_results());
    }
}
