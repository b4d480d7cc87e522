//! Handlers for the `/recordings` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tourcraft_core::error::CoreError;
use tourcraft_core::recording::validate_recording_transition;
use tourcraft_db::models::recording::{CreateRecording, RecordingResponse, UpdateRecording};
use tourcraft_db::repositories::RecordingRepo;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// POST /api/v1/recordings
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateRecording>,
) -> AppResult<(StatusCode, Json<RecordingResponse>)> {
    let recording = RecordingRepo::create(&state.pool, user.user_id, &input).await?;
    Ok((StatusCode::CREATED, Json(recording.into())))
}

/// GET /api/v1/recordings
pub async fn list(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<Vec<RecordingResponse>>> {
    let recordings = RecordingRepo::list_by_user(&state.pool, user.user_id).await?;
    Ok(Json(recordings.into_iter().map(Into::into).collect()))
}

/// GET /api/v1/recordings/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<RecordingResponse>> {
    let recording = RecordingRepo::find_by_id_for_user(&state.pool, id, user.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Recording", id)))?;
    Ok(Json(recording.into()))
}

/// PUT /api/v1/recordings/{id}
///
/// Status changes are validated against the recording lifecycle; moving
/// into Completed stamps `completed_at` exactly once (repository concern).
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateRecording>,
) -> AppResult<Json<RecordingResponse>> {
    let current = RecordingRepo::find_by_id_for_user(&state.pool, id, user.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Recording", id)))?;

    if let Some(status_id) = input.status_id {
        validate_recording_transition(current.status_id, status_id)
            .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
    }

    let recording = RecordingRepo::update_for_user(&state.pool, id, user.user_id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Recording", id)))?;
    Ok(Json(recording.into()))
}

/// DELETE /api/v1/recordings/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    let deleted = RecordingRepo::delete_for_user(&state.pool, id, user.user_id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("Recording", id)))
    }
}
