//! Handlers for the creator dashboard.
//!
//! Stats are computed live from the tour store; there are no stored or
//! mocked numbers anywhere in this path.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use tourcraft_db::models::dashboard::DashboardStats;
use tourcraft_db::models::tour::Tour;
use tourcraft_db::repositories::DashboardRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Number of tours shown in the dashboard's recent list.
const RECENT_TOURS_LIMIT: i64 = 5;

/// Aggregated dashboard payload for one creator.
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    #[serde(flatten)]
    pub stats: DashboardStats,
    pub recent_tours: Vec<Tour>,
}

/// GET /api/v1/dashboard/stats
pub async fn stats(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<DataResponse<DashboardResponse>>> {
    let stats = DashboardRepo::stats_for_creator(&state.pool, user.user_id).await?;
    let recent_tours =
        DashboardRepo::recent_tours(&state.pool, user.user_id, RECENT_TOURS_LIMIT).await?;

    Ok(Json(DataResponse {
        data: DashboardResponse {
            stats,
            recent_tours,
        },
    }))
}
