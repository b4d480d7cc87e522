//! Handlers for the `/saved-tours` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tourcraft_core::error::CoreError;
use tourcraft_core::types::DbId;
use tourcraft_core::validation::MAX_SAVED_NAME_LEN;
use tourcraft_db::models::saved_tour::{CreateSavedTour, SavedTour};
use tourcraft_db::repositories::SavedTourRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::tour::fetch_visible_tour;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// POST /api/v1/saved-tours
///
/// The referenced tour must be visible to the caller; the bookmark itself
/// then lives independently of the tour's lifecycle.
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateSavedTour>,
) -> AppResult<(StatusCode, Json<SavedTour>)> {
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Name is required".into(),
        )));
    }
    if input.name.chars().count() > MAX_SAVED_NAME_LEN {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Name must be at most {MAX_SAVED_NAME_LEN} characters"
        ))));
    }

    fetch_visible_tour(&state, input.tour_id, &user).await?;

    let saved = SavedTourRepo::create(&state.pool, user.user_id, &input).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

/// GET /api/v1/saved-tours
pub async fn list(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<Vec<SavedTour>>> {
    let saved = SavedTourRepo::list_by_user(&state.pool, user.user_id).await?;
    Ok(Json(saved))
}

/// DELETE /api/v1/saved-tours/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = SavedTourRepo::delete_for_user(&state.pool, id, user.user_id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("SavedTour", id)))
    }
}
