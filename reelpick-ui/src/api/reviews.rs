//! Review submission and listing endpoints

use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::collections::BTreeMap;

use reelpick_common::types::MovieReview;

use crate::error::{ApiError, ApiResult};
use crate::store::NewReview;
use crate::AppState;

/// Loosely typed submission body so every field problem surfaces as a
/// validation error instead of a deserialization rejection
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSubmission {
    pub movie_id: Option<i64>,
    pub movie_title: Option<String>,
    pub user_name: Option<String>,
    pub email: Option<String>,
    pub rating: Option<f64>,
    pub review: Option<String>,
}

/// Minimal email shape check: local@domain.tld with no whitespace
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((name, tld)) => !name.is_empty() && !tld.is_empty(),
        None => false,
    }
}

fn validate_submission(body: &ReviewSubmission) -> BTreeMap<&'static str, String> {
    let mut errors = BTreeMap::new();

    if body.movie_id.is_none() {
        errors.insert("movieId", "Movie ID is required".to_string());
    }

    if body.movie_title.as_deref().map_or(true, str::is_empty) {
        errors.insert("movieTitle", "Movie title is required".to_string());
    }

    if body.user_name.as_deref().map_or(true, str::is_empty) {
        errors.insert("userName", "User name is required".to_string());
    }

    match body.email.as_deref() {
        None | Some("") => {
            errors.insert("email", "Email is required".to_string());
        }
        Some(email) if !is_valid_email(email) => {
            errors.insert("email", "Invalid email format".to_string());
        }
        Some(_) => {}
    }

    match body.rating {
        None => {
            errors.insert("rating", "Rating is required".to_string());
        }
        Some(rating) if !(1.0..=10.0).contains(&rating) => {
            errors.insert("rating", "Rating must be a number between 1 and 10".to_string());
        }
        Some(_) => {}
    }

    match body.review.as_deref() {
        None | Some("") => {
            errors.insert("review", "Review is required".to_string());
        }
        Some(review) if review.len() < 10 => {
            errors.insert("review", "Review must be at least 10 characters long".to_string());
        }
        Some(_) => {}
    }

    errors
}

/// GET /api/reviews
pub async fn list_reviews(State(state): State<AppState>) -> Json<Vec<MovieReview>> {
    Json(state.reviews.list())
}

/// POST /api/reviews
pub async fn submit_review(
    State(state): State<AppState>,
    Json(body): Json<ReviewSubmission>,
) -> ApiResult<(StatusCode, Json<serde_json::Value>)> {
    let errors = validate_submission(&body);
    if !errors.is_empty() {
        return Err(ApiError::FormValidation(errors));
    }

    let review = state.reviews.add(NewReview {
        movie_id: body.movie_id.unwrap_or_default().max(0) as u64,
        movie_title: body.movie_title.unwrap_or_default(),
        user_name: body.user_name.unwrap_or_default(),
        email: body.email.unwrap_or_default(),
        rating: body.rating.unwrap_or_default(),
        review: body.review.unwrap_or_default(),
    })?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Review submitted successfully",
            "review": review,
        })),
    ))
}

/// Build review routes
pub fn review_routes() -> Router<AppState> {
    Router::new().route("/api/reviews", get(list_reviews).post(submit_review))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("marla@example.com"));
        assert!(is_valid_email("a.b+c@sub.example.org"));
        assert!(!is_valid_email("no-at-sign"));
        assert!(!is_valid_email("two@@example.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@nodot"));
        assert!(!is_valid_email("user@.com"));
        assert!(!is_valid_email("spaced user@example.com"));
    }

    #[test]
    fn test_every_missing_field_is_reported() {
        let errors = validate_submission(&ReviewSubmission {
            movie_id: None,
            movie_title: None,
            user_name: None,
            email: None,
            rating: None,
            review: None,
        });

        for field in ["movieId", "movieTitle", "userName", "email", "rating", "review"] {
            assert!(errors.contains_key(field), "missing error for {}", field);
        }
    }

    #[test]
    fn test_rating_and_review_rules() {
        let base = ReviewSubmission {
            movie_id: Some(550),
            movie_title: Some("Fight Club".to_string()),
            user_name: Some("Marla".to_string()),
            email: Some("marla@example.com".to_string()),
            rating: Some(0.5),
            review: Some("too short".to_string()),
        };

        let errors = validate_submission(&base);
        assert_eq!(
            errors.get("rating").map(String::as_str),
            Some("Rating must be a number between 1 and 10")
        );
        assert_eq!(
            errors.get("review").map(String::as_str),
            Some("Review must be at least 10 characters long")
        );
    }

    #[test]
    fn test_valid_submission_has_no_errors() {
        let errors = validate_submission(&ReviewSubmission {
            movie_id: Some(550),
            movie_title: Some("Fight Club".to_string()),
            user_name: Some("Marla".to_string()),
            email: Some("marla@example.com".to_string()),
            rating: Some(9.0),
            review: Some("The first rule is great.".to_string()),
        });
        assert!(errors.is_empty());
    }
}
