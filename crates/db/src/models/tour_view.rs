//! Deduplicated tour view facts.

use serde::Serialize;
use sqlx::FromRow;
use tourcraft_core::types::{DbId, Timestamp};
use uuid::Uuid;

/// A row from the `tour_views` table: one recorded visit per
/// (tour, viewer-or-null, ip) triple. Immutable once written.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TourView {
    pub id: DbId,
    pub tour_id: Uuid,
    pub viewer_id: Option<DbId>,
    pub ip_address: String,
    pub viewed_at: Timestamp,
}

/// DTO for recording a visit.
#[derive(Debug, Clone)]
pub struct CreateTourView {
    pub tour_id: Uuid,
    /// `None` for anonymous viewers.
    pub viewer_id: Option<DbId>,
    pub ip_address: String,
}
