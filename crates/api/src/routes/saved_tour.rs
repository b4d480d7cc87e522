//! Route definitions for the `/saved-tours` resource.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::saved_tour;
use crate::state::AppState;

/// Routes mounted at `/saved-tours`.
///
/// ```text
/// GET    /       -> list
/// POST   /       -> create
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(saved_tour::list).post(saved_tour::create))
        .route("/{id}", delete(saved_tour::delete))
}
