//! Repository for the `recordings` table.

use sqlx::PgPool;
use tourcraft_core::status::RecordingStatus;
use tourcraft_core::types::DbId;
use uuid::Uuid;

use crate::models::recording::{CreateRecording, Recording, UpdateRecording};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, title, status_id, recording_data, created_at, completed_at";

/// Provides CRUD operations for recordings, scoped to their owner.
pub struct RecordingRepo;

impl RecordingRepo {
    /// Start a new recording (status Recording).
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateRecording,
    ) -> Result<Recording, sqlx::Error> {
        let query = format!(
            "INSERT INTO recordings (user_id, title, recording_data)
             VALUES ($1, COALESCE($2, ''), $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Recording>(&query)
            .bind(user_id)
            .bind(&input.title)
            .bind(&input.recording_data)
            .fetch_one(pool)
            .await
    }

    /// Find a recording owned by the given user.
    pub async fn find_by_id_for_user(
        pool: &PgPool,
        id: Uuid,
        user_id: DbId,
    ) -> Result<Option<Recording>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM recordings WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, Recording>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// List a user's recordings, most recent first.
    pub async fn list_by_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Recording>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM recordings WHERE user_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Recording>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Update a recording. Only non-`None` fields are applied.
    /// `completed_at` is stamped exactly once, when the status first
    /// becomes Completed; it is never cleared or moved afterwards.
    ///
    /// Returns `None` if `(id, user_id)` does not resolve.
    pub async fn update_for_user(
        pool: &PgPool,
        id: Uuid,
        user_id: DbId,
        input: &UpdateRecording,
    ) -> Result<Option<Recording>, sqlx::Error> {
        let query = format!(
            "UPDATE recordings SET
                title = COALESCE($3, title),
                status_id = COALESCE($4, status_id),
                recording_data = COALESCE($5, recording_data),
                completed_at = CASE
                    WHEN $4 = $6 AND completed_at IS NULL THEN NOW()
                    ELSE completed_at
                END
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Recording>(&query)
            .bind(id)
            .bind(user_id)
            .bind(&input.title)
            .bind(input.status_id)
            .bind(&input.recording_data)
            .bind(RecordingStatus::Completed.id())
            .fetch_optional(pool)
            .await
    }

    /// Delete a recording. Returns `true` if a row was removed.
    pub async fn delete_for_user(
        pool: &PgPool,
        id: Uuid,
        user_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM recordings WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
