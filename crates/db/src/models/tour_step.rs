//! Tour step entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tourcraft_core::types::{DbId, Timestamp};
use uuid::Uuid;

/// A row from the `tour_steps` table.
///
/// `(tour_id, step_number)` is unique; steps are presented in ascending
/// `step_number` order. Deleting a step leaves a gap in the numbering.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TourStep {
    pub id: DbId,
    pub tour_id: Uuid,
    pub step_number: i32,
    pub title: String,
    pub content: Option<String>,
    pub screenshot_path: Option<String>,
    /// Structured highlight region (coordinates or selector), stored opaque.
    pub highlight_area: Option<serde_json::Value>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for appending a step to a tour.
///
/// `step_number` is intentionally absent: positions are assigned by the
/// repository, never supplied by a client.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTourStep {
    pub title: String,
    pub content: Option<String>,
    pub screenshot_path: Option<String>,
    pub highlight_area: Option<serde_json::Value>,
}

/// DTO for editing a step. All fields are optional; `step_number` cannot
/// be changed through this DTO.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTourStep {
    pub title: Option<String>,
    pub content: Option<String>,
    pub screenshot_path: Option<String>,
    pub highlight_area: Option<serde_json::Value>,
}
