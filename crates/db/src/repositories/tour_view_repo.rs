//! Repository for the `tour_views` table.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::tour_view::CreateTourView;

/// Records deduplicated visit facts. This is an accounting concern only;
/// it never gates whether content is served.
pub struct TourViewRepo;

impl TourViewRepo {
    /// Record a visit. At most one row exists per
    /// (tour, viewer-or-null, ip) triple; a repeat visit is a no-op.
    ///
    /// Returns `true` if a new fact was inserted.
    pub async fn record(pool: &PgPool, input: &CreateTourView) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO tour_views (tour_id, viewer_id, ip_address)
             VALUES ($1, $2, $3)
             ON CONFLICT ON CONSTRAINT uq_tour_views_tour_viewer_ip DO NOTHING",
        )
        .bind(input.tour_id)
        .bind(input.viewer_id)
        .bind(&input.ip_address)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count distinct recorded visits for a tour.
    pub async fn count_for_tour(pool: &PgPool, tour_id: Uuid) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM tour_views WHERE tour_id = $1")
            .bind(tour_id)
            .fetch_one(pool)
            .await
    }
}
