//! Repository for the `tour_steps` table.
//!
//! Step numbers are assigned here, never by clients. Appending locks the
//! owning tour row so concurrent appends on the same tour serialise; the
//! `uq_tour_steps_tour_step` constraint remains as the final backstop.

use sqlx::PgPool;
use tourcraft_core::types::DbId;
use uuid::Uuid;

use crate::models::tour_step::{CreateTourStep, TourStep, UpdateTourStep};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, tour_id, step_number, title, content, screenshot_path, \
    highlight_area, created_at, updated_at";

/// Maintains the per-tour step sequence.
pub struct TourStepRepo;

impl TourStepRepo {
    /// Append a step to a tour at position `max(step_number) + 1` (1 for
    /// an empty tour).
    ///
    /// The position is computed and committed in one transaction, with the
    /// tour row locked `FOR UPDATE` for its duration, so two concurrent
    /// appends to the same tour cannot compute the same position.
    ///
    /// Returns `None` if the tour does not exist.
    pub async fn add_step(
        pool: &PgPool,
        tour_id: Uuid,
        input: &CreateTourStep,
    ) -> Result<Option<TourStep>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let tour_exists = sqlx::query_scalar::<_, Uuid>("SELECT id FROM tours WHERE id = $1 FOR UPDATE")
            .bind(tour_id)
            .fetch_optional(&mut *tx)
            .await?;
        if tour_exists.is_none() {
            return Ok(None);
        }

        let next_number = sqlx::query_scalar::<_, i32>(
            "SELECT COALESCE(MAX(step_number), 0) + 1 FROM tour_steps WHERE tour_id = $1",
        )
        .bind(tour_id)
        .fetch_one(&mut *tx)
        .await?;

        let insert = format!(
            "INSERT INTO tour_steps (tour_id, step_number, title, content, screenshot_path, highlight_area)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        let step = sqlx::query_as::<_, TourStep>(&insert)
            .bind(tour_id)
            .bind(next_number)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&input.screenshot_path)
            .bind(&input.highlight_area)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(step))
    }

    /// Find a step within a tour.
    pub async fn find_by_id(
        pool: &PgPool,
        tour_id: Uuid,
        step_id: DbId,
    ) -> Result<Option<TourStep>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tour_steps WHERE id = $1 AND tour_id = $2");
        sqlx::query_as::<_, TourStep>(&query)
            .bind(step_id)
            .bind(tour_id)
            .fetch_optional(pool)
            .await
    }

    /// List a tour's steps in presentation order (`step_number` ascending).
    pub async fn list_by_tour(pool: &PgPool, tour_id: Uuid) -> Result<Vec<TourStep>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tour_steps WHERE tour_id = $1 ORDER BY step_number ASC"
        );
        sqlx::query_as::<_, TourStep>(&query)
            .bind(tour_id)
            .fetch_all(pool)
            .await
    }

    /// Update a step. Only non-`None` fields in `input` are applied;
    /// `step_number` is never touched by this operation.
    ///
    /// Returns `None` if the step does not belong to the tour.
    pub async fn update(
        pool: &PgPool,
        tour_id: Uuid,
        step_id: DbId,
        input: &UpdateTourStep,
    ) -> Result<Option<TourStep>, sqlx::Error> {
        let query = format!(
            "UPDATE tour_steps SET
                title = COALESCE($3, title),
                content = COALESCE($4, content),
                screenshot_path = COALESCE($5, screenshot_path),
                highlight_area = COALESCE($6, highlight_area)
             WHERE id = $1 AND tour_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TourStep>(&query)
            .bind(step_id)
            .bind(tour_id)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&input.screenshot_path)
            .bind(&input.highlight_area)
            .fetch_optional(pool)
            .await
    }

    /// Delete a step. Remaining steps keep their numbers; the gap persists
    /// so cached orderings held by concurrent readers stay valid.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, tour_id: Uuid, step_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tour_steps WHERE id = $1 AND tour_id = $2")
            .bind(step_id)
            .bind(tour_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
