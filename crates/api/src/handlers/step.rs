//! Handlers for the nested `/tours/{id}/steps` resource.
//!
//! Step positions are assigned by the repository's append policy; no
//! handler accepts a client-supplied step number.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tourcraft_core::error::CoreError;
use tourcraft_core::types::DbId;
use tourcraft_core::validation;
use tourcraft_db::models::tour_step::{CreateTourStep, TourStep, UpdateTourStep};
use tourcraft_db::repositories::{TourRepo, TourStepRepo};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::handlers::tour::fetch_visible_tour;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/v1/tours/{id}/steps
///
/// Ordered steps, with the same visibility rule as fetching the tour.
pub async fn list(
    State(state): State<AppState>,
    user: AuthUser,
    Path(tour_id): Path<Uuid>,
) -> AppResult<Json<Vec<TourStep>>> {
    let tour = fetch_visible_tour(&state, tour_id, &user).await?;
    let steps = TourStepRepo::list_by_tour(&state.pool, tour.id).await?;
    Ok(Json(steps))
}

/// POST /api/v1/tours/{id}/steps
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Path(tour_id): Path<Uuid>,
    Json(input): Json<CreateTourStep>,
) -> AppResult<(StatusCode, Json<TourStep>)> {
    validation::validate_step_title(&input.title)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    // Only the creator appends steps.
    let tour = TourRepo::find_by_id_for_creator(&state.pool, tour_id, user.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Tour", tour_id)))?;

    let step = TourStepRepo::add_step(&state.pool, tour.id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Tour", tour_id)))?;

    Ok((StatusCode::CREATED, Json(step)))
}

/// PUT /api/v1/tours/{id}/steps/{step_id}
///
/// Partial update; a step's position is immutable through this path.
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path((tour_id, step_id)): Path<(Uuid, DbId)>,
    Json(input): Json<UpdateTourStep>,
) -> AppResult<Json<TourStep>> {
    if let Some(title) = &input.title {
        validation::validate_step_title(title)
            .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
    }

    let tour = TourRepo::find_by_id_for_creator(&state.pool, tour_id, user.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Tour", tour_id)))?;

    let step = TourStepRepo::update(&state.pool, tour.id, step_id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Step", step_id)))?;
    Ok(Json(step))
}

/// DELETE /api/v1/tours/{id}/steps/{step_id}
///
/// Remaining steps are never renumbered; the gap persists.
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path((tour_id, step_id)): Path<(Uuid, DbId)>,
) -> AppResult<StatusCode> {
    let tour = TourRepo::find_by_id_for_creator(&state.pool, tour_id, user.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Tour", tour_id)))?;

    let deleted = TourStepRepo::delete(&state.pool, tour.id, step_id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("Step", step_id)))
    }
}
