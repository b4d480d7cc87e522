//! The anonymous public tour path.
//!
//! `GET /tours/public/{share_uuid}` is the only route that serves traffic
//! without credentials. The visibility gate (Published + Public) is applied
//! in the lookup itself; everything that fails it is a plain NotFound so
//! existence is never disclosed. Each qualifying request counts one view;
//! the deduplicated view fact is a separate, best-effort accounting write.

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;
use serde::Serialize;
use tourcraft_core::error::CoreError;
use tourcraft_db::models::tour_view::CreateTourView;
use tourcraft_db::repositories::{TourRepo, TourStepRepo, TourViewRepo};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::OptionalAuthUser;
use crate::state::AppState;

/// Fallback when no client address can be determined.
const UNKNOWN_ADDR: &str = "0.0.0.0";

/// Publicly served view of a tour. Deliberately excludes the primary
/// identifier and the creator: the share token is the only handle an
/// anonymous viewer gets.
#[derive(Debug, Serialize)]
pub struct PublicTour {
    pub title: String,
    pub description: Option<String>,
    pub thumbnail_path: Option<String>,
    pub view_count: i64,
    pub steps: Vec<PublicStep>,
}

/// One step of a publicly served tour, in presentation order.
#[derive(Debug, Serialize)]
pub struct PublicStep {
    pub step_number: i32,
    pub title: String,
    pub content: Option<String>,
    pub screenshot_path: Option<String>,
    pub highlight_area: Option<serde_json::Value>,
}

/// GET /api/v1/tours/public/{share_uuid}
pub async fn get_by_share_uuid(
    State(state): State<AppState>,
    OptionalAuthUser(viewer): OptionalAuthUser,
    headers: HeaderMap,
    Path(share_uuid): Path<Uuid>,
) -> AppResult<Json<PublicTour>> {
    let tour = TourRepo::find_public_by_share_uuid(&state.pool, share_uuid)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Tour", share_uuid)))?;

    // Every qualifying request counts, with no dedup at this layer.
    TourRepo::increment_view_count(&state.pool, tour.id).await?;

    // The per-(tour, viewer, ip) fact is distinct accounting; losing it
    // must not fail the request.
    let fact = CreateTourView {
        tour_id: tour.id,
        viewer_id: viewer.map(|u| u.user_id),
        ip_address: client_ip(&headers),
    };
    if let Err(err) = TourViewRepo::record(&state.pool, &fact).await {
        tracing::warn!(tour_id = %tour.id, error = %err, "Failed to record view fact");
    }

    let steps = TourStepRepo::list_by_tour(&state.pool, tour.id).await?;

    Ok(Json(PublicTour {
        title: tour.title,
        description: tour.description,
        thumbnail_path: tour.thumbnail_path,
        // The fetch above counted one more view than the row we read.
        view_count: tour.view_count + 1,
        steps: steps
            .into_iter()
            .map(|s| PublicStep {
                step_number: s.step_number,
                title: s.title,
                content: s.content,
                screenshot_path: s.screenshot_path,
                highlight_area: s.highlight_area,
            })
            .collect(),
    }))
}

/// Best-effort client address: the first `X-Forwarded-For` entry when the
/// server sits behind a proxy, else a fixed placeholder.
fn client_ip(headers: &HeaderMap) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| UNKNOWN_ADDR.to_string())
}
