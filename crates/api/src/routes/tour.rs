//! Route definitions for the `/tours` resource.
//!
//! Also nests step routes under `/tours/{id}/steps/...` and mounts the
//! anonymous public path at `/tours/public/{share_uuid}`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{public, step, tour};
use crate::state::AppState;

/// Routes mounted at `/tours`.
///
/// ```text
/// GET    /                              -> list
/// POST   /                              -> create
/// GET    /public/{share_uuid}           -> public fetch (no auth)
/// GET    /{id}                          -> get_by_id
/// PUT    /{id}                          -> update
/// DELETE /{id}                          -> delete
/// POST   /{id}/duplicate                -> duplicate
/// POST   /{id}/share                    -> share
/// GET    /{id}/steps                    -> step list
/// POST   /{id}/steps                    -> step append
/// PUT    /{id}/steps/{step_id}          -> step update
/// DELETE /{id}/steps/{step_id}          -> step delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(tour::list).post(tour::create))
        // The static "public" segment takes priority over the {id} capture.
        .route("/public/{share_uuid}", get(public::get_by_share_uuid))
        .route(
            "/{id}",
            get(tour::get_by_id).put(tour::update).delete(tour::delete),
        )
        .route("/{id}/duplicate", post(tour::duplicate))
        .route("/{id}/share", post(tour::share))
        .route("/{id}/steps", get(step::list).post(step::create))
        .route(
            "/{id}/steps/{step_id}",
            axum::routing::put(step::update).delete(step::delete),
        )
}
