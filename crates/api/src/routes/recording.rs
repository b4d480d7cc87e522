//! Route definitions for the `/recordings` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::recording;
use crate::state::AppState;

/// Routes mounted at `/recordings`.
///
/// ```text
/// GET    /       -> list
/// POST   /       -> create
/// GET    /{id}   -> get_by_id
/// PUT    /{id}   -> update
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(recording::list).post(recording::create))
        .route(
            "/{id}",
            get(recording::get_by_id)
                .put(recording::update)
                .delete(recording::delete),
        )
}
