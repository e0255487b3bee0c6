//! End-to-end tests driving the axum router.
//!
//! These tests exercise the complete HTTP stack (routing, extraction,
//! validation, persistence, serialization) against the in-memory repository.

#![cfg(feature = "http-server")]

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use std::sync::Arc;
use terms_rust::db::repositories::LocalRepository;
use terms_rust::db::repository::TermRepository;
use terms_rust::http::{create_router, AppState};
use tower::ServiceExt;

fn app() -> Router {
    let repo = Arc::new(LocalRepository::new()) as Arc<dyn TermRepository>;
    create_router(AppState::new(repo))
}

async fn read_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    (status, read_json(response).await)
}

async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    (status, read_json(response).await)
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = app();

    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], "v1");
    assert_eq!(body["database"], "connected");
}

#[tokio::test]
async fn test_create_and_list_semesters() {
    let app = app();

    let (status, created) = post_json(
        &app,
        "/v1/semesters",
        json!({"title": "Fall", "startDate": "2024-09-01", "endDate": "2024-12-15"}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], "sem-1");
    assert_eq!(created["title"], "Fall");
    assert_eq!(created["startDate"], "2024-09-01");
    assert_eq!(created["endDate"], "2024-12-15");

    let (status, body) = get(&app, "/v1/semesters").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);
    assert_eq!(body["semesters"][0]["id"], "sem-1");
}

#[tokio::test]
async fn test_overlapping_semester_is_unprocessable() {
    let app = app();

    post_json(
        &app,
        "/v1/semesters",
        json!({"title": "Fall", "startDate": "2024-09-01", "endDate": "2024-12-15"}),
    )
    .await;

    let (status, body) = post_json(
        &app,
        "/v1/semesters",
        json!({"title": "Spring", "startDate": "2024-12-15", "endDate": "2025-05-01"}),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "VALIDATION_FAILED");
    assert_eq!(
        body["errors"]["overlap"],
        "New semester must start after 2024-12-15"
    );

    // Nothing was stored.
    let (_, listing) = get(&app, "/v1/semesters").await;
    assert_eq!(listing["total"], 1);
}

#[tokio::test]
async fn test_missing_fields_reported_per_key() {
    let app = app();

    let (status, body) = post_json(&app, "/v1/semesters", json!({"title": "  "})).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["errors"]["title"], "Title is required");
    assert_eq!(body["errors"]["startDate"], "Start date is required");
    assert_eq!(body["errors"]["endDate"], "End date is required");
}

#[tokio::test]
async fn test_empty_date_string_treated_as_missing() {
    let app = app();

    let (status, body) = post_json(
        &app,
        "/v1/semesters",
        json!({"title": "Fall", "startDate": "", "endDate": "2024-12-15"}),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["errors"]["startDate"], "Start date is required");
}

#[tokio::test]
async fn test_malformed_date_is_bad_request() {
    let app = app();

    let (status, body) = post_json(
        &app,
        "/v1/semesters",
        json!({"title": "Fall", "startDate": "soonish", "endDate": "2024-12-15"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_quarter_flow_and_nested_terms() {
    let app = app();

    post_json(
        &app,
        "/v1/semesters",
        json!({"title": "Fall", "startDate": "2024-09-01", "endDate": "2024-12-15"}),
    )
    .await;

    let (status, created) = post_json(
        &app,
        "/v1/quarters",
        json!({
            "title": "Q1",
            "startDate": "2024-09-01",
            "endDate": "2024-10-15",
            "semesterId": "sem-1"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], "qtr-1");
    assert_eq!(created["semesterId"], "sem-1");

    let (status, body) = get(&app, "/v1/terms").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);
    assert_eq!(body["semesters"][0]["id"], "sem-1");
    assert_eq!(body["semesters"][0]["quarters"][0]["title"], "Q1");

    let (status, body) = get(&app, "/v1/quarters").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);
}

#[tokio::test]
async fn test_out_of_range_quarter_is_unprocessable() {
    let app = app();

    post_json(
        &app,
        "/v1/semesters",
        json!({"title": "Fall", "startDate": "2024-09-01", "endDate": "2024-12-15"}),
    )
    .await;

    let (status, body) = post_json(
        &app,
        "/v1/quarters",
        json!({
            "title": "Q0",
            "startDate": "2024-08-01",
            "endDate": "2024-09-15",
            "semesterId": "sem-1"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body["errors"]["range"],
        "Quarter must be within semester (2024-09-01 - 2024-12-15)"
    );
}

#[tokio::test]
async fn test_quarter_under_unknown_semester_is_not_found() {
    let app = app();

    let (status, body) = post_json(
        &app,
        "/v1/quarters",
        json!({
            "title": "Q1",
            "startDate": "2024-09-01",
            "endDate": "2024-10-15",
            "semesterId": "sem-404"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_overlapping_quarter_names_sibling_in_response() {
    let app = app();

    post_json(
        &app,
        "/v1/semesters",
        json!({"title": "Fall", "startDate": "2024-09-01", "endDate": "2024-12-15"}),
    )
    .await;
    post_json(
        &app,
        "/v1/quarters",
        json!({
            "title": "Q1",
            "startDate": "2024-09-01",
            "endDate": "2024-10-15",
            "semesterId": "sem-1"
        }),
    )
    .await;

    let (status, body) = post_json(
        &app,
        "/v1/quarters",
        json!({
            "title": "Q2",
            "startDate": "2024-10-01",
            "endDate": "2024-11-01",
            "semesterId": "sem-1"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body["errors"]["overlap"],
        "Quarter overlaps with \"Q1\" (2024-09-01 - 2024-10-15)"
    );
}
