//! Dashboard API Module

use axum::{Json, Router, extract::State, routing::get};
use shared::models::DashboardStats;

use crate::core::ServerState;
use crate::utils::AppResult;

/// Dashboard router
pub fn router() -> Router<ServerState> {
    Router::new().route("/api/dashboard", get(stats))
}

/// GET /api/dashboard - 房态统计与今日餐饮营收
async fn stats(State(state): State<ServerState>) -> AppResult<Json<DashboardStats>> {
    Ok(Json(state.dashboard.stats().await?))
}
