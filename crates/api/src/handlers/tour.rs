//! Handlers for the `/tours` resource.
//!
//! Ownership and visibility are enforced here, at the boundary: private
//! tours resolve as NotFound for everyone but their creator, and a foreign
//! tour is never distinguishable from an absent one on mutating paths.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use tourcraft_core::error::CoreError;
use tourcraft_core::status::{TourPrivacy, TourStatus};
use tourcraft_core::{lifecycle, validation};
use tourcraft_db::models::tour::{CreateTour, Tour, UpdateTour};
use tourcraft_db::repositories::TourRepo;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Response body for `POST /tours/{id}/share`.
#[derive(Debug, Serialize)]
pub struct ShareResponse {
    /// The tour's stable public-sharing token.
    pub share_uuid: Uuid,
    /// Public path serving the shared tour.
    pub public_path: String,
}

/// POST /api/v1/tours
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateTour>,
) -> AppResult<(StatusCode, Json<Tour>)> {
    validation::validate_tour_title(&input.title)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
    if let Some(status_id) = input.status_id {
        if TourStatus::from_id(status_id).is_none() {
            return Err(AppError::Core(CoreError::Validation(format!(
                "Unknown tour status id {status_id}"
            ))));
        }
    }
    if let Some(privacy_id) = input.privacy_id {
        lifecycle::validate_privacy(privacy_id)
            .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
    }

    let tour = TourRepo::create(&state.pool, user.user_id, &input).await?;
    Ok((StatusCode::CREATED, Json(tour)))
}

/// GET /api/v1/tours
pub async fn list(State(state): State<AppState>, user: AuthUser) -> AppResult<Json<Vec<Tour>>> {
    let tours = TourRepo::list_by_creator(&state.pool, user.user_id).await?;
    Ok(Json(tours))
}

/// GET /api/v1/tours/{id}
///
/// Public tours are readable by any authenticated caller; private tours
/// only by their creator. Both misses produce the same NotFound.
pub async fn get_by_id(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Tour>> {
    let tour = fetch_visible_tour(&state, id, &user).await?;
    Ok(Json(tour))
}

/// PUT /api/v1/tours/{id}
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateTour>,
) -> AppResult<Json<Tour>> {
    if let Some(title) = &input.title {
        validation::validate_tour_title(title)
            .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
    }
    if let Some(privacy_id) = input.privacy_id {
        lifecycle::validate_privacy(privacy_id)
            .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
    }

    let current = TourRepo::find_by_id_for_creator(&state.pool, id, user.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Tour", id)))?;

    // Status changes go through the lifecycle rules; everything else is a
    // plain partial update.
    if let Some(status_id) = input.status_id {
        lifecycle::validate_status_transition(current.status_id, status_id)
            .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
    }

    let tour = TourRepo::update_for_creator(&state.pool, id, user.user_id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Tour", id)))?;
    Ok(Json(tour))
}

/// DELETE /api/v1/tours/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    let deleted = TourRepo::delete_for_creator(&state.pool, id, user.user_id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("Tour", id)))
    }
}

/// POST /api/v1/tours/{id}/duplicate
///
/// Duplication is not a shared operation: a caller who can see the tour
/// but does not own it gets Forbidden, not a copy.
pub async fn duplicate(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<(StatusCode, Json<Tour>)> {
    let source = TourRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Tour", id)))?;
    if source.creator_id != user.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the creator may duplicate a tour".into(),
        )));
    }

    let copy = TourRepo::duplicate(&state.pool, id, user.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Tour", id)))?;

    tracing::info!(source = %id, copy = %copy.id, "Tour duplicated");
    Ok((StatusCode::CREATED, Json(copy)))
}

/// POST /api/v1/tours/{id}/share
///
/// Allocates the public-sharing UUID on first call and returns the same
/// one forever after.
pub async fn share(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ShareResponse>> {
    let tour = TourRepo::ensure_share_uuid(&state.pool, id, user.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Tour", id)))?;

    // ensure_share_uuid always leaves a value behind.
    let share_uuid = tour
        .share_uuid
        .ok_or_else(|| AppError::InternalError("Share UUID missing after allocation".into()))?;

    Ok(Json(ShareResponse {
        share_uuid,
        public_path: format!("/api/v1/tours/public/{share_uuid}"),
    }))
}

/// Resolve a tour the caller is allowed to read, or NotFound.
pub(crate) async fn fetch_visible_tour(
    state: &AppState,
    id: Uuid,
    user: &AuthUser,
) -> AppResult<Tour> {
    let tour = TourRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Tour", id)))?;

    if tour.privacy_id == TourPrivacy::Private.id() && tour.creator_id != user.user_id {
        // Existence of a private tour is not disclosed.
        return Err(AppError::Core(CoreError::not_found("Tour", id)));
    }
    Ok(tour)
}
