//! Repository for the `tours` table.
//!
//! Mutating methods take a `creator_id` and resolve `(id, creator_id)`
//! together, so a foreign tour and an absent tour are indistinguishable to
//! the caller.

use sqlx::PgPool;
use tourcraft_core::status::{TourPrivacy, TourStatus};
use tourcraft_core::types::DbId;
use uuid::Uuid;

use crate::models::tour::{CreateTour, Tour, UpdateTour};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, creator_id, privacy_id, status_id, \
    thumbnail_path, share_uuid, view_count, created_at, updated_at";

/// Provides CRUD, sharing, and duplication operations for tours.
pub struct TourRepo;

impl TourRepo {
    /// Insert a new tour, returning the created row.
    ///
    /// If `privacy_id` is `None`, defaults to 1 (Public). If `status_id`
    /// is `None`, defaults to 1 (Draft). `view_count` starts at 0.
    pub async fn create(
        pool: &PgPool,
        creator_id: DbId,
        input: &CreateTour,
    ) -> Result<Tour, sqlx::Error> {
        let query = format!(
            "INSERT INTO tours (title, description, creator_id, privacy_id, status_id, thumbnail_path)
             VALUES ($1, $2, $3, COALESCE($4, 1), COALESCE($5, 1), $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Tour>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(creator_id)
            .bind(input.privacy_id)
            .bind(input.status_id)
            .bind(&input.thumbnail_path)
            .fetch_one(pool)
            .await
    }

    /// Find a tour by ID regardless of owner. Visibility checks are the
    /// caller's responsibility.
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Tour>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tours WHERE id = $1");
        sqlx::query_as::<_, Tour>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a tour owned by the given creator.
    pub async fn find_by_id_for_creator(
        pool: &PgPool,
        id: Uuid,
        creator_id: DbId,
    ) -> Result<Option<Tour>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tours WHERE id = $1 AND creator_id = $2");
        sqlx::query_as::<_, Tour>(&query)
            .bind(id)
            .bind(creator_id)
            .fetch_optional(pool)
            .await
    }

    /// List a creator's tours, most recently created first.
    pub async fn list_by_creator(
        pool: &PgPool,
        creator_id: DbId,
    ) -> Result<Vec<Tour>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tours WHERE creator_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Tour>(&query)
            .bind(creator_id)
            .fetch_all(pool)
            .await
    }

    /// Update a tour. Only non-`None` fields in `input` are applied;
    /// `updated_at` is refreshed by trigger.
    ///
    /// Returns `None` if `(id, creator_id)` does not resolve.
    pub async fn update_for_creator(
        pool: &PgPool,
        id: Uuid,
        creator_id: DbId,
        input: &UpdateTour,
    ) -> Result<Option<Tour>, sqlx::Error> {
        let query = format!(
            "UPDATE tours SET
                title = COALESCE($3, title),
                description = COALESCE($4, description),
                privacy_id = COALESCE($5, privacy_id),
                status_id = COALESCE($6, status_id),
                thumbnail_path = COALESCE($7, thumbnail_path)
             WHERE id = $1 AND creator_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Tour>(&query)
            .bind(id)
            .bind(creator_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.privacy_id)
            .bind(input.status_id)
            .bind(&input.thumbnail_path)
            .fetch_optional(pool)
            .await
    }

    /// Delete a tour. Steps, view facts, and saved-tour rows go with it in
    /// the same statement via `ON DELETE CASCADE`.
    ///
    /// Returns `true` if a row was removed; a repeat call returns `false`.
    pub async fn delete_for_creator(
        pool: &PgPool,
        id: Uuid,
        creator_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tours WHERE id = $1 AND creator_id = $2")
            .bind(id)
            .bind(creator_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Lazily allocate the public-sharing UUID for a tour.
    ///
    /// The first call persists a fresh UUID; every later call returns the
    /// same one (`COALESCE` keeps the existing value).
    pub async fn ensure_share_uuid(
        pool: &PgPool,
        id: Uuid,
        creator_id: DbId,
    ) -> Result<Option<Tour>, sqlx::Error> {
        let query = format!(
            "UPDATE tours SET share_uuid = COALESCE(share_uuid, $3)
             WHERE id = $1 AND creator_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Tour>(&query)
            .bind(id)
            .bind(creator_id)
            .bind(Uuid::new_v4())
            .fetch_optional(pool)
            .await
    }

    /// Resolve a share UUID to its tour, applying the public-visibility
    /// gate in the query itself: only Published + Public tours resolve.
    pub async fn find_public_by_share_uuid(
        pool: &PgPool,
        share_uuid: Uuid,
    ) -> Result<Option<Tour>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tours
             WHERE share_uuid = $1 AND status_id = $2 AND privacy_id = $3"
        );
        sqlx::query_as::<_, Tour>(&query)
            .bind(share_uuid)
            .bind(TourStatus::Published.id())
            .bind(TourPrivacy::Public.id())
            .fetch_optional(pool)
            .await
    }

    /// Count one qualifying public view. Atomic in-database increment; the
    /// counter never decreases.
    pub async fn increment_view_count(pool: &PgPool, id: Uuid) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE tours SET view_count = view_count + 1 WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Deep-copy a tour and all of its steps into a new tour.
    ///
    /// The copy gets a fresh ID, the title suffixed with " (Copy)", status
    /// forced to Draft, privacy carried over, a zero view count, and no
    /// share UUID. Step numbers are copied verbatim (the uniqueness
    /// constraint is scoped per tour, so identical numbers are safe in the
    /// new sequence). Runs in a single transaction: an interrupted copy
    /// leaves nothing behind.
    ///
    /// Returns `None` if `(id, creator_id)` does not resolve.
    pub async fn duplicate(
        pool: &PgPool,
        id: Uuid,
        creator_id: DbId,
    ) -> Result<Option<Tour>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let select = format!(
            "SELECT {COLUMNS} FROM tours WHERE id = $1 AND creator_id = $2 FOR UPDATE"
        );
        let source = sqlx::query_as::<_, Tour>(&select)
            .bind(id)
            .bind(creator_id)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(source) = source else {
            return Ok(None);
        };

        let insert = format!(
            "INSERT INTO tours (title, description, creator_id, privacy_id, status_id, thumbnail_path)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        let copy = sqlx::query_as::<_, Tour>(&insert)
            .bind(format!("{} (Copy)", source.title))
            .bind(&source.description)
            .bind(source.creator_id)
            .bind(source.privacy_id)
            .bind(TourStatus::Draft.id())
            .bind(&source.thumbnail_path)
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query(
            "INSERT INTO tour_steps (tour_id, step_number, title, content, screenshot_path, highlight_area)
             SELECT $1, step_number, title, content, screenshot_path, highlight_area
             FROM tour_steps WHERE tour_id = $2",
        )
        .bind(copy.id)
        .bind(source.id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(Some(copy))
    }
}
