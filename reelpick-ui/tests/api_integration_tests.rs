//! HTTP API integration tests
//!
//! Drives the router directly with tower's oneshot; no network and no
//! TMDB key, so catalog-backed paths are exercised up to their
//! validation and configuration gates.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::util::ServiceExt;

use reelpick_ui::{build_router, AppState};

fn test_app() -> (tempfile::TempDir, axum::Router) {
    let dir = tempfile::tempdir().unwrap();
    let state = AppState::new(None, dir.path());
    let app = build_router(state);
    (dir, app)
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let (_dir, app) = test_app();

    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "reelpick-ui");
}

#[tokio::test]
async fn test_movies_unknown_category_is_rejected() {
    let (_dir, app) = test_app();

    let response = app
        .oneshot(get("/api/movies?category=bogus"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_movies_without_key_is_config_error() {
    let (_dir, app) = test_app();

    let response = app.oneshot(get("/api/movies?category=popular")).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Configuration error");
}

#[tokio::test]
async fn test_search_requires_query() {
    let (_dir, app) = test_app();

    let response = app.oneshot(get("/api/movies/search")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Search query is required");
}

#[tokio::test]
async fn test_quiz_validation_reports_every_missing_field() {
    let (_dir, app) = test_app();

    let response = app
        .oneshot(post_json("/api/quiz/recommendations", json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Validation error");
    let details = body["details"].as_array().unwrap();
    let fields: Vec<&str> = details
        .iter()
        .map(|d| d["field"].as_str().unwrap())
        .collect();
    for field in ["genres", "moods", "era", "runtime", "rating"] {
        assert!(fields.contains(&field), "missing detail for {}", field);
    }
}

#[tokio::test]
async fn test_quiz_validation_flags_bad_ranges() {
    let (_dir, app) = test_app();

    let response = app
        .oneshot(post_json(
            "/api/quiz/recommendations",
            json!({
                "genres": [18],
                "moods": [18],
                "era": { "gte": "1999-12-31", "lte": "1990-01-01" },
                "runtime": { "gte": 300, "lte": 121 },
                "rating": 11,
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    let fields: Vec<&str> = body["details"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["field"].as_str().unwrap())
        .collect();
    assert!(fields.contains(&"era"));
    assert!(fields.contains(&"runtime"));
    assert!(fields.contains(&"rating"));
}

#[tokio::test]
async fn test_quiz_valid_selections_without_key_is_config_error() {
    let (_dir, app) = test_app();

    let response = app
        .oneshot(post_json(
            "/api/quiz/recommendations",
            json!({
                "genres": [18, 53],
                "moods": [18],
                "era": { "gte": "1990-01-01", "lte": "1999-12-31" },
                "runtime": { "gte": 121, "lte": 300 },
                "rating": 8,
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Configuration error");
}

#[tokio::test]
async fn test_watchlist_round_trip() {
    let (_dir, app) = test_app();

    let response = app.clone().oneshot(get("/api/watchlist")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/watchlist",
            json!({ "movieId": 550, "movieTitle": "Fight Club", "posterPath": "/p.jpg" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Added to watchlist successfully");
    assert_eq!(body["item"]["movieId"], 550);

    let response = app.clone().oneshot(get("/api/watchlist")).await.unwrap();
    let items = body_json(response).await;
    assert_eq!(items.as_array().unwrap().len(), 1);

    let response = app
        .clone()
        .oneshot(delete("/api/watchlist?movieId=550"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(get("/api/watchlist")).await.unwrap();
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn test_watchlist_rejects_duplicates() {
    let (_dir, app) = test_app();

    let entry = json!({ "movieId": 550, "movieTitle": "Fight Club" });
    let response = app
        .clone()
        .oneshot(post_json("/api/watchlist", entry.clone()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .oneshot(post_json("/api/watchlist", entry))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Movie already in watchlist");
}

#[tokio::test]
async fn test_watchlist_validation_errors() {
    let (_dir, app) = test_app();

    let response = app
        .clone()
        .oneshot(post_json("/api/watchlist", json!({ "movieId": -1 })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Validation failed");
    assert_eq!(
        body["errors"]["movieId"],
        "Movie ID must be a positive integer"
    );
    assert_eq!(body["errors"]["movieTitle"], "Movie title is required");

    let response = app.oneshot(delete("/api/watchlist")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_reviews_round_trip() {
    let (_dir, app) = test_app();

    let response = app.clone().oneshot(get("/api/reviews")).await.unwrap();
    assert_eq!(body_json(response).await, json!([]));

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/reviews",
            json!({
                "movieId": 550,
                "movieTitle": "Fight Club",
                "userName": "Marla",
                "email": "marla@example.com",
                "rating": 9,
                "review": "The first rule is great.",
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Review submitted successfully");
    assert_eq!(body["review"]["movieTitle"], "Fight Club");

    let response = app.oneshot(get("/api/reviews")).await.unwrap();
    let reviews = body_json(response).await;
    assert_eq!(reviews.as_array().unwrap().len(), 1);
    assert_eq!(reviews[0]["userName"], "Marla");
}

#[tokio::test]
async fn test_reviews_validation_errors() {
    let (_dir, app) = test_app();

    let response = app
        .oneshot(post_json(
            "/api/reviews",
            json!({ "email": "not-an-email", "rating": 11, "review": "short" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Validation failed");
    assert_eq!(body["errors"]["email"], "Invalid email format");
    assert_eq!(
        body["errors"]["rating"],
        "Rating must be a number between 1 and 10"
    );
    assert_eq!(
        body["errors"]["review"],
        "Review must be at least 10 characters long"
    );
    assert_eq!(body["errors"]["movieId"], "Movie ID is required");
}
