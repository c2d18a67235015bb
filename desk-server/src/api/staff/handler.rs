//! Staff API Handlers

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use shared::models::{Staff, StaffCreate, StaffRole};

use crate::core::ServerState;
use crate::utils::AppResult;

#[derive(Debug, Deserialize)]
pub struct StaffQuery {
    pub role: Option<StaffRole>,
}

/// GET /api/staff?role=
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<StaffQuery>,
) -> AppResult<Json<Vec<Staff>>> {
    Ok(Json(state.staff.list_staff(query.role).await?))
}

/// POST /api/staff
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<StaffCreate>,
) -> AppResult<Json<Staff>> {
    Ok(Json(state.staff.create_staff(payload).await?))
}
