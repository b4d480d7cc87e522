pub mod auth;
pub mod dashboard;
pub mod health;
pub mod recording;
pub mod saved_tour;
pub mod tour;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/signup                          create account (public)
/// /auth/login                           login (public)
/// /auth/refresh                         refresh (public)
/// /auth/logout                          logout (requires auth)
///
/// /tours                                list, create
/// /tours/{id}                           get, update, delete
/// /tours/{id}/duplicate                 deep copy (POST)
/// /tours/{id}/share                     allocate share uuid (POST)
/// /tours/{id}/steps                     list, append
/// /tours/{id}/steps/{step_id}           update, delete
/// /tours/public/{share_uuid}            anonymous public fetch (GET)
///
/// /dashboard/stats                      aggregated creator stats (GET)
///
/// /recordings                           list, create
/// /recordings/{id}                      get, update, delete
///
/// /saved-tours                          list, create
/// /saved-tours/{id}                     delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication routes (signup, login, refresh, logout).
        .nest("/auth", auth::router())
        // Tour routes (also nests steps, sharing, and the public path).
        .nest("/tours", tour::router())
        // Creator dashboard aggregation.
        .nest("/dashboard", dashboard::router())
        // Recording lifecycle.
        .nest("/recordings", recording::router())
        // Saved-tour bookmarks.
        .nest("/saved-tours", saved_tour::router())
}
