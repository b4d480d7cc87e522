//! Aggregation queries backing the dashboard.

use sqlx::PgPool;
use tourcraft_core::status::TourStatus;
use tourcraft_core::types::DbId;

use crate::models::dashboard::DashboardStats;
use crate::models::tour::Tour;

/// Read-only aggregation over a creator's tours.
pub struct DashboardRepo;

impl DashboardRepo {
    /// Compute tour counts and the view-count sum for one creator.
    ///
    /// `SUM(view_count)` is cast back to BIGINT (Postgres widens bigint
    /// sums to numeric).
    pub async fn stats_for_creator(
        pool: &PgPool,
        creator_id: DbId,
    ) -> Result<DashboardStats, sqlx::Error> {
        sqlx::query_as::<_, DashboardStats>(
            "SELECT
                COUNT(*) AS total_tours,
                COUNT(*) FILTER (WHERE status_id = $2) AS published_tours,
                COUNT(*) FILTER (WHERE status_id = $3) AS draft_tours,
                COALESCE(SUM(view_count), 0)::BIGINT AS total_views
             FROM tours
             WHERE creator_id = $1",
        )
        .bind(creator_id)
        .bind(TourStatus::Published.id())
        .bind(TourStatus::Draft.id())
        .fetch_one(pool)
        .await
    }

    /// The creator's most recently created tours.
    pub async fn recent_tours(
        pool: &PgPool,
        creator_id: DbId,
        limit: i64,
    ) -> Result<Vec<Tour>, sqlx::Error> {
        sqlx::query_as::<_, Tour>(
            "SELECT id, title, description, creator_id, privacy_id, status_id, \
                    thumbnail_path, share_uuid, view_count, created_at, updated_at
             FROM tours
             WHERE creator_id = $1
             ORDER BY created_at DESC
             LIMIT $2",
        )
        .bind(creator_id)
        .bind(limit)
        .fetch_all(pool)
        .await
    }
}
