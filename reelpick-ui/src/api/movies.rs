//! Movie listing and search endpoints (catalog proxy)

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::error::{ApiError, ApiResult};
use crate::services::{MovieCategory, MovieListResponse};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub category: Option<String>,
    pub page: Option<u32>,
}

/// GET /api/movies?category=popular&page=1
///
/// Paginated category listing; the category defaults to "popular".
pub async fn list_movies(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Json<MovieListResponse>> {
    let category_param = query.category.as_deref().unwrap_or("popular");
    let category = MovieCategory::parse(category_param).ok_or_else(|| {
        ApiError::BadRequest(format!("Unknown movie category: {}", category_param))
    })?;
    let page = query.page.unwrap_or(1).max(1);

    let tmdb = state.tmdb()?;
    let response = tmdb.list_movies(category, page).await?;
    Ok(Json(response))
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub query: Option<String>,
    pub page: Option<u32>,
}

/// GET /api/movies/search?query=...
pub async fn search_movies(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> ApiResult<Json<MovieListResponse>> {
    let text = query
        .query
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Search query is required".to_string()))?;
    let page = query.page.unwrap_or(1).max(1);

    let tmdb = state.tmdb()?;
    let response = tmdb.search_movies(text, page).await?;
    Ok(Json(response))
}

/// Build movie routes
pub fn movie_routes() -> Router<AppState> {
    Router::new()
        .route("/api/movies", get(list_movies))
        .route("/api/movies/search", get(search_movies))
}
