//! Housekeeping API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use shared::models::{AssignStaffRequest, CleaningBoardRoom, CleaningRecord, CleaningRequest};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::utils::AppResult;

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub staff_id: Option<i64>,
    pub limit: Option<i64>,
}

/// GET /api/cleaning/board - 待清洁 / 清洁中房间
pub async fn board(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<Vec<CleaningBoardRoom>>> {
    Ok(Json(state.cleaning.board(user.id).await?))
}

/// GET /api/cleaning/history?staff_id=&limit=
pub async fn history(
    State(state): State<ServerState>,
    _user: CurrentUser,
    Query(query): Query<HistoryQuery>,
) -> AppResult<Json<Vec<CleaningRecord>>> {
    Ok(Json(state.cleaning.history(query.staff_id, query.limit).await?))
}

/// GET /api/cleaning/rooms/:number - 房间当前清洁任务
pub async fn active_task(
    State(state): State<ServerState>,
    _user: CurrentUser,
    Path(number): Path<String>,
) -> AppResult<Json<CleaningRecord>> {
    Ok(Json(state.cleaning.active_task(&number).await?))
}

/// POST /api/cleaning/task - 领取清洁任务
pub async fn start_task(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<CleaningRequest>,
) -> AppResult<Json<CleaningRecord>> {
    Ok(Json(state.cleaning.start_task(&payload.room_number, user.id).await?))
}

/// POST /api/cleaning/start - 开始清洁
pub async fn start_cleaning(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<CleaningRequest>,
) -> AppResult<Json<CleaningRecord>> {
    Ok(Json(
        state
            .cleaning
            .start_cleaning(&payload.room_number, user.id)
            .await?,
    ))
}

/// POST /api/cleaning/complete - 完成清洁
pub async fn complete_cleaning(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<CleaningRequest>,
) -> AppResult<Json<CleaningRecord>> {
    Ok(Json(
        state
            .cleaning
            .complete_cleaning(&payload.room_number, user.id)
            .await?,
    ))
}

/// POST /api/cleaning/assign - 管理员指派 (仅管理员)
pub async fn assign_staff(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<AssignStaffRequest>,
) -> AppResult<Json<CleaningRecord>> {
    Ok(Json(state.cleaning.assign_staff(&user, payload).await?))
}
