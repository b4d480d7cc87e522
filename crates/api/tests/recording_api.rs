//! HTTP-level integration tests for the `/recordings` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, send, signup_and_login};
use sqlx::PgPool;

async fn start_recording(pool: &PgPool, token: &str, title: &str) -> serde_json::Value {
    let response = send(
        build_test_app(pool.clone()),
        "POST",
        "/api/v1/recordings",
        Some(token),
        Some(serde_json::json!({
            "title": title,
            "recording_data": { "events": [] },
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_new_recording_has_no_duration(pool: PgPool) {
    let token = signup_and_login(&pool, "alice").await;
    let recording = start_recording(&pool, &token, "Session capture").await;

    assert_eq!(recording["status_id"], 1); // Recording
    assert!(recording["completed_at"].is_null());
    assert!(recording["duration_secs"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_completion_stamps_duration(pool: PgPool) {
    let token = signup_and_login(&pool, "alice").await;
    let recording = start_recording(&pool, &token, "Session capture").await;
    let id = recording["id"].as_str().unwrap();

    let response = send(
        build_test_app(pool.clone()),
        "PUT",
        &format!("/api/v1/recordings/{id}"),
        Some(&token),
        Some(serde_json::json!({ "status_id": 3 })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let done = body_json(response).await;
    assert_eq!(done["status_id"], 3);
    assert!(done["completed_at"].is_string());
    assert!(done["duration_secs"].as_f64().unwrap() >= 0.0);

    // Completed is terminal: reopening is rejected.
    let response = send(
        build_test_app(pool),
        "PUT",
        &format!("/api/v1/recordings/{id}"),
        Some(&token),
        Some(serde_json::json!({ "status_id": 1 })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_recordings_are_owner_scoped(pool: PgPool) {
    let alice = signup_and_login(&pool, "alice").await;
    let bob = signup_and_login(&pool, "bob").await;
    let recording = start_recording(&pool, &alice, "Hers").await;
    let id = recording["id"].as_str().unwrap();

    let response = send(
        build_test_app(pool.clone()),
        "GET",
        &format!("/api/v1/recordings/{id}"),
        Some(&bob),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = send(
        build_test_app(pool),
        "GET",
        "/api/v1/recordings",
        Some(&bob),
        None,
    )
    .await;
    let json = body_json(response).await;
    assert!(json.as_array().unwrap().is_empty());
}
