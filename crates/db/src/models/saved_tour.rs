//! Saved-tour bookmark model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tourcraft_core::types::{DbId, Timestamp};
use uuid::Uuid;

/// A row from the `saved_tours` table: a named export of a tour kept by a
/// user, with an opaque reference to the stored file.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SavedTour {
    pub id: DbId,
    pub user_id: DbId,
    pub tour_id: Uuid,
    pub name: String,
    pub file_path: String,
    pub created_at: Timestamp,
}

/// DTO for saving a tour export.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSavedTour {
    pub tour_id: Uuid,
    pub name: String,
    pub file_path: String,
}
