//! Validation for quiz selections
//!
//! Gates the question flow and the recommendations endpoint. Validation
//! never fails as an error: every rule is evaluated and the full list of
//! problems is reported so a caller can surface all of them at once.

use chrono::NaiveDate;
use serde::Serialize;

use super::types::{QuizAnswer, SelectionsDraft};

/// Validation error details for a single field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: &str) -> Self {
        Self {
            field,
            message: message.to_string(),
        }
    }
}

/// Validation result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Validate quiz selections before running the match engine
///
/// Rules, all evaluated independently (no short-circuit across fields):
/// - at least 1 genre and at least 1 mood selected
/// - era present with parseable dates and gte strictly before lte
/// - runtime present with non-negative bounds and gte strictly below lte
/// - rating present and within 0-10 inclusive
///
/// When an era date fails to parse it gets its own error and the ordering
/// check is skipped; the two parse errors are reported independently.
pub fn validate_selections(selections: &SelectionsDraft) -> ValidationReport {
    let mut errors = Vec::new();

    if selections.genres.as_ref().map_or(true, |g| g.is_empty()) {
        errors.push(ValidationError::new(
            "genres",
            "At least one genre must be selected",
        ));
    }

    if selections.moods.as_ref().map_or(true, |m| m.is_empty()) {
        errors.push(ValidationError::new(
            "moods",
            "At least one mood must be selected",
        ));
    }

    match &selections.era {
        None => {
            errors.push(ValidationError::new("era", "Era must be selected"));
        }
        Some(era) => {
            let start = parse_date(&era.gte);
            let end = parse_date(&era.lte);

            if start.is_none() {
                errors.push(ValidationError::new("era", "Invalid start date format"));
            }

            if end.is_none() {
                errors.push(ValidationError::new("era", "Invalid end date format"));
            }

            if let (Some(start), Some(end)) = (start, end) {
                if start >= end {
                    errors.push(ValidationError::new(
                        "era",
                        "Start date must be before end date",
                    ));
                }
            }
        }
    }

    match &selections.runtime {
        None => {
            errors.push(ValidationError::new(
                "runtime",
                "Runtime preference must be selected",
            ));
        }
        Some(runtime) => {
            if runtime.gte < 0 {
                errors.push(ValidationError::new(
                    "runtime",
                    "Runtime minimum cannot be negative",
                ));
            }

            if runtime.lte < 0 {
                errors.push(ValidationError::new(
                    "runtime",
                    "Runtime maximum cannot be negative",
                ));
            }

            if runtime.gte >= runtime.lte {
                errors.push(ValidationError::new(
                    "runtime",
                    "Runtime minimum must be less than maximum",
                ));
            }
        }
    }

    match selections.rating {
        None => {
            errors.push(ValidationError::new(
                "rating",
                "Rating preference must be selected",
            ));
        }
        Some(rating) => {
            if !(0.0..=10.0).contains(&rating) {
                errors.push(ValidationError::new(
                    "rating",
                    "Rating must be between 0 and 10",
                ));
            }
        }
    }

    ValidationReport {
        is_valid: errors.is_empty(),
        errors,
    }
}

/// Whether an answer counts as "made" for per-step gating
///
/// False for no answer and for empty collections; true for any scalar or
/// range answer.
pub fn has_selection(answer: Option<&QuizAnswer>) -> bool {
    match answer {
        None => false,
        Some(QuizAnswer::Genres(ids)) | Some(QuizAnswer::Moods(ids)) => !ids.is_empty(),
        Some(_) => true,
    }
}

/// Whether all 5 questions have been answered
///
/// Intentionally weaker than [`validate_selections`]: presence and
/// non-emptiness only, no range-ordering checks. Used to decide whether
/// submission should be attempted at all.
pub fn is_quiz_complete(selections: &SelectionsDraft) -> bool {
    selections.as_complete().is_some()
}
