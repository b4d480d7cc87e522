//! Dashboard aggregation rows.

use serde::Serialize;
use sqlx::FromRow;

/// Aggregated per-creator tour statistics.
///
/// Computed live from the `tours` table; nothing here is stored.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DashboardStats {
    pub total_tours: i64,
    pub published_tours: i64,
    pub draft_tours: i64,
    pub total_views: i64,
}
