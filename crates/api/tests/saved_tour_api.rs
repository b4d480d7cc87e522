//! HTTP-level integration tests for the `/saved-tours` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, create_tour, send, signup_and_login};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_save_list_and_delete(pool: PgPool) {
    let token = signup_and_login(&pool, "alice").await;
    let tour = create_tour(&pool, &token, "Exported").await;

    let response = send(
        build_test_app(pool.clone()),
        "POST",
        "/api/v1/saved-tours",
        Some(&token),
        Some(serde_json::json!({
            "tour_id": tour["id"],
            "name": "Quarterly export",
            "file_path": "exports/quarterly.json",
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let saved = body_json(response).await;
    let saved_id = saved["id"].as_i64().unwrap();

    let response = send(
        build_test_app(pool.clone()),
        "GET",
        "/api/v1/saved-tours",
        Some(&token),
        None,
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["name"], "Quarterly export");

    let response = send(
        build_test_app(pool.clone()),
        "DELETE",
        &format!("/api/v1/saved-tours/{saved_id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = send(
        build_test_app(pool),
        "GET",
        "/api/v1/saved-tours",
        Some(&token),
        None,
    )
    .await;
    let json = body_json(response).await;
    assert!(json.as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_saving_an_invisible_tour_is_not_found(pool: PgPool) {
    let alice = signup_and_login(&pool, "alice").await;
    let bob = signup_and_login(&pool, "bob").await;

    let tour = create_tour(&pool, &alice, "Hers").await;
    let id = tour["id"].as_str().unwrap();

    // Flip to private so Bob cannot see it at all.
    let response = send(
        build_test_app(pool.clone()),
        "PUT",
        &format!("/api/v1/tours/{id}"),
        Some(&alice),
        Some(serde_json::json!({ "privacy_id": 2 })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send(
        build_test_app(pool),
        "POST",
        "/api/v1/saved-tours",
        Some(&bob),
        Some(serde_json::json!({
            "tour_id": tour["id"],
            "name": "Not mine",
            "file_path": "exports/nope.json",
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_blank_name_is_rejected(pool: PgPool) {
    let token = signup_and_login(&pool, "alice").await;
    let tour = create_tour(&pool, &token, "Exported").await;

    let response = send(
        build_test_app(pool),
        "POST",
        "/api/v1/saved-tours",
        Some(&token),
        Some(serde_json::json!({
            "tour_id": tour["id"],
            "name": "   ",
            "file_path": "exports/blank.json",
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
