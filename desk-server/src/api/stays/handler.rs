//! Guest Stay API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use shared::models::{CheckInRequest, GuestStay, StayStatus, StayUpdate};

use crate::core::ServerState;
use crate::utils::AppResult;

#[derive(Debug, Deserialize)]
pub struct StayQuery {
    pub status: Option<StayStatus>,
}

/// GET /api/stays - 入住记录 (可按状态过滤)
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<StayQuery>,
) -> AppResult<Json<Vec<GuestStay>>> {
    Ok(Json(state.guests.list_stays(query.status).await?))
}

/// POST /api/stays - 入住
pub async fn check_in(
    State(state): State<ServerState>,
    Json(payload): Json<CheckInRequest>,
) -> AppResult<Json<GuestStay>> {
    Ok(Json(state.guests.check_in(payload).await?))
}

/// GET /api/stays/checkouts/today - 今日应退房
pub async fn todays_checkouts(State(state): State<ServerState>) -> AppResult<Json<Vec<GuestStay>>> {
    Ok(Json(state.guests.todays_checkouts().await?))
}

/// GET /api/stays/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<GuestStay>> {
    Ok(Json(state.guests.get_stay(id).await?))
}

/// PUT /api/stays/:id - 修改住客 / 账目字段
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<StayUpdate>,
) -> AppResult<Json<GuestStay>> {
    Ok(Json(state.guests.update_stay(id, payload).await?))
}

/// POST /api/stays/:id/checkout - 退房
pub async fn checkout(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<GuestStay>> {
    Ok(Json(state.guests.checkout(id).await?))
}
