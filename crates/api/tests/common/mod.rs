//! Shared helpers for HTTP-level integration tests.
//!
//! Tests drive the full router via `tower::ServiceExt::oneshot`, so the
//! middleware stack matches production (built by the same
//! `build_app_router`).

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use tourcraft_api::auth::jwt::JwtConfig;
use tourcraft_api::config::ServerConfig;
use tourcraft_api::router::build_app_router;
use tourcraft_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults and a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "integration-test-secret-key".to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Send one request through the router. `token`, when given, is attached
/// as a Bearer credential; `body`, when given, is sent as JSON.
pub async fn send(
    app: Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
}

/// Create an account and log in, returning a usable access token.
pub async fn signup_and_login(pool: &PgPool, username: &str) -> String {
    let response = send(
        build_test_app(pool.clone()),
        "POST",
        "/api/v1/auth/signup",
        None,
        Some(serde_json::json!({
            "username": username,
            "email": format!("{username}@example.com"),
            "password": "test-password-123",
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = send(
        build_test_app(pool.clone()),
        "POST",
        "/api/v1/auth/login",
        None,
        Some(serde_json::json!({
            "username": username,
            "password": "test-password-123",
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    json["access_token"].as_str().unwrap().to_string()
}

/// Create a tour for the given token, returning its JSON representation.
pub async fn create_tour(pool: &PgPool, token: &str, title: &str) -> serde_json::Value {
    let response = send(
        build_test_app(pool.clone()),
        "POST",
        "/api/v1/tours",
        Some(token),
        Some(serde_json::json!({ "title": title })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

/// Append a step to a tour, returning its JSON representation.
pub async fn add_step(
    pool: &PgPool,
    token: &str,
    tour_id: &str,
    title: &str,
) -> serde_json::Value {
    let response = send(
        build_test_app(pool.clone()),
        "POST",
        &format!("/api/v1/tours/{tour_id}/steps"),
        Some(token),
        Some(serde_json::json!({ "title": title })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}
