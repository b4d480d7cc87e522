//! Tour entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tourcraft_core::status::StatusId;
use tourcraft_core::types::{DbId, Timestamp};
use uuid::Uuid;

/// A row from the `tours` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Tour {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub creator_id: DbId,
    pub privacy_id: StatusId,
    pub status_id: StatusId,
    pub thumbnail_path: Option<String>,
    /// Opaque public-sharing token. Assigned lazily on the first share
    /// request and never changed afterwards.
    pub share_uuid: Option<Uuid>,
    pub view_count: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new tour.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTour {
    pub title: String,
    pub description: Option<String>,
    /// Defaults to 1 (Public) if omitted.
    pub privacy_id: Option<StatusId>,
    /// Defaults to 1 (Draft) if omitted.
    pub status_id: Option<StatusId>,
    pub thumbnail_path: Option<String>,
}

/// DTO for updating an existing tour. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTour {
    pub title: Option<String>,
    pub description: Option<String>,
    pub privacy_id: Option<StatusId>,
    pub status_id: Option<StatusId>,
    pub thumbnail_path: Option<String>,
}
