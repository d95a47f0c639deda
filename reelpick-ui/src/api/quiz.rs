//! Quiz recommendations endpoint

use axum::{extract::State, routing::post, Json, Router};
use serde::Serialize;

use reelpick_common::quiz::validation::validate_selections;
use reelpick_common::quiz::{MovieRecommendation, SelectionsDraft};

use crate::error::{ApiError, ApiResult};
use crate::services::recommend;
use crate::AppState;

/// Recommendations response body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationsResponse {
    pub recommendations: Vec<MovieRecommendation>,
    pub total_matches: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// POST /api/quiz/recommendations
///
/// Accepts quiz selections (possibly partial) and returns personalized
/// recommendations under strict AND matching. Validation failures come
/// back 400 with the full field-tagged error list.
pub async fn quiz_recommendations(
    State(state): State<AppState>,
    Json(draft): Json<SelectionsDraft>,
) -> ApiResult<Json<RecommendationsResponse>> {
    let report = validate_selections(&draft);
    if !report.is_valid {
        return Err(ApiError::QuizValidation(report));
    }

    // A draft that passed validation always completes
    let selections = draft
        .as_complete()
        .ok_or_else(|| ApiError::BadRequest("Invalid quiz selections".to_string()))?;

    let tmdb = state.tmdb()?;
    let result = recommend(tmdb, &selections).await?;

    let message = if result.recommendations.is_empty() {
        Some("No movies match all your preferences".to_string())
    } else {
        None
    };

    Ok(Json(RecommendationsResponse {
        recommendations: result.recommendations,
        total_matches: result.total_matches,
        message,
    }))
}

/// Build quiz routes
pub fn quiz_routes() -> Router<AppState> {
    Router::new().route("/api/quiz/recommendations", post(quiz_recommendations))
}
