//! Watchlist endpoints

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::collections::BTreeMap;

use reelpick_common::types::WatchlistItem;
use reelpick_common::Error;

use crate::error::{ApiError, ApiResult};
use crate::store::NewWatchlistEntry;
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistSubmission {
    pub movie_id: Option<i64>,
    pub movie_title: Option<String>,
    pub poster_path: Option<String>,
}

fn validate_submission(body: &WatchlistSubmission) -> BTreeMap<&'static str, String> {
    let mut errors = BTreeMap::new();

    match body.movie_id {
        None => {
            errors.insert("movieId", "Movie ID is required".to_string());
        }
        Some(id) if id <= 0 => {
            errors.insert("movieId", "Movie ID must be a positive integer".to_string());
        }
        Some(_) => {}
    }

    if body
        .movie_title
        .as_deref()
        .map_or(true, |t| t.trim().is_empty())
    {
        errors.insert("movieTitle", "Movie title is required".to_string());
    }

    errors
}

/// GET /api/watchlist
pub async fn list_watchlist(State(state): State<AppState>) -> Json<Vec<WatchlistItem>> {
    Json(state.watchlist.list())
}

/// POST /api/watchlist
pub async fn add_to_watchlist(
    State(state): State<AppState>,
    Json(body): Json<WatchlistSubmission>,
) -> ApiResult<(StatusCode, Json<serde_json::Value>)> {
    let errors = validate_submission(&body);
    if !errors.is_empty() {
        return Err(ApiError::FormValidation(errors));
    }

    let item = state
        .watchlist
        .add(NewWatchlistEntry {
            movie_id: body.movie_id.unwrap_or_default() as u64,
            movie_title: body.movie_title.unwrap_or_default(),
            poster_path: body.poster_path,
        })
        .map_err(|e| match e {
            Error::InvalidInput(msg) => ApiError::BadRequest(msg),
            other => ApiError::Common(other),
        })?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Added to watchlist successfully",
            "item": item,
        })),
    ))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveQuery {
    pub movie_id: Option<u64>,
}

/// DELETE /api/watchlist?movieId=550
pub async fn remove_from_watchlist(
    State(state): State<AppState>,
    Query(query): Query<RemoveQuery>,
) -> ApiResult<Json<serde_json::Value>> {
    let movie_id = query
        .movie_id
        .ok_or_else(|| ApiError::BadRequest("Movie ID is required".to_string()))?;

    state.watchlist.remove(movie_id)?;

    Ok(Json(json!({ "message": "Removed from watchlist" })))
}

/// Build watchlist routes
pub fn watchlist_routes() -> Router<AppState> {
    Router::new().route(
        "/api/watchlist",
        get(list_watchlist)
            .post(add_to_watchlist)
            .delete(remove_from_watchlist),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_are_reported() {
        let errors = validate_submission(&WatchlistSubmission {
            movie_id: None,
            movie_title: None,
            poster_path: None,
        });
        assert!(errors.contains_key("movieId"));
        assert!(errors.contains_key("movieTitle"));
    }

    #[test]
    fn test_non_positive_movie_id_is_rejected() {
        for bad in [0, -5] {
            let errors = validate_submission(&WatchlistSubmission {
                movie_id: Some(bad),
                movie_title: Some("Fight Club".to_string()),
                poster_path: None,
            });
            assert_eq!(
                errors.get("movieId").map(String::as_str),
                Some("Movie ID must be a positive integer")
            );
        }
    }

    #[test]
    fn test_valid_submission_has_no_errors() {
        let errors = validate_submission(&WatchlistSubmission {
            movie_id: Some(550),
            movie_title: Some("Fight Club".to_string()),
            poster_path: Some("/poster.jpg".to_string()),
        });
        assert!(errors.is_empty());
    }
}
