//! Repository for the `saved_tours` table.

use sqlx::PgPool;
use tourcraft_core::types::DbId;

use crate::models::saved_tour::{CreateSavedTour, SavedTour};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, tour_id, name, file_path, created_at";

/// Provides CRUD operations for saved-tour bookmarks.
pub struct SavedTourRepo;

impl SavedTourRepo {
    /// Save a tour export for a user.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateSavedTour,
    ) -> Result<SavedTour, sqlx::Error> {
        let query = format!(
            "INSERT INTO saved_tours (user_id, tour_id, name, file_path)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SavedTour>(&query)
            .bind(user_id)
            .bind(input.tour_id)
            .bind(&input.name)
            .bind(&input.file_path)
            .fetch_one(pool)
            .await
    }

    /// List a user's saved tours, most recent first.
    pub async fn list_by_user(pool: &PgPool, user_id: DbId) -> Result<Vec<SavedTour>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM saved_tours WHERE user_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, SavedTour>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Remove a saved tour. Returns `true` if a row was removed.
    pub async fn delete_for_user(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM saved_tours WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
