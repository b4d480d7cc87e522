//! Recording entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tourcraft_core::recording::duration_secs;
use tourcraft_core::status::StatusId;
use tourcraft_core::types::{DbId, Timestamp};
use uuid::Uuid;

/// A row from the `recordings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Recording {
    pub id: Uuid,
    pub user_id: DbId,
    pub title: String,
    pub status_id: StatusId,
    pub recording_data: Option<serde_json::Value>,
    pub created_at: Timestamp,
    /// Set exactly once, on the transition into Completed.
    pub completed_at: Option<Timestamp>,
}

/// API-facing recording representation with the derived duration.
#[derive(Debug, Clone, Serialize)]
pub struct RecordingResponse {
    pub id: Uuid,
    pub user_id: DbId,
    pub title: String,
    pub status_id: StatusId,
    pub recording_data: Option<serde_json::Value>,
    pub created_at: Timestamp,
    pub completed_at: Option<Timestamp>,
    /// `completed_at - created_at` in seconds; absent until completed.
    pub duration_secs: Option<f64>,
}

impl From<Recording> for RecordingResponse {
    fn from(r: Recording) -> Self {
        let duration_secs = duration_secs(r.created_at, r.completed_at);
        RecordingResponse {
            id: r.id,
            user_id: r.user_id,
            title: r.title,
            status_id: r.status_id,
            recording_data: r.recording_data,
            created_at: r.created_at,
            completed_at: r.completed_at,
            duration_secs,
        }
    }
}

/// DTO for starting a new recording.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRecording {
    /// Defaults to an empty title if omitted.
    pub title: Option<String>,
    pub recording_data: Option<serde_json::Value>,
}

/// DTO for updating a recording. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateRecording {
    pub title: Option<String>,
    pub status_id: Option<StatusId>,
    pub recording_data: Option<serde_json::Value>,
}
