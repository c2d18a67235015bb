//! Room API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use shared::models::{
    GuestStay, Room, RoomCreate, RoomFilter, RoomOrders, RoomStatusCount, RoomStatusUpdate,
};

use crate::core::ServerState;
use crate::utils::AppResult;

/// GET /api/rooms - 房间列表 (可按 status / floor 过滤)
pub async fn list(
    State(state): State<ServerState>,
    Query(filter): Query<RoomFilter>,
) -> AppResult<Json<Vec<Room>>> {
    Ok(Json(state.rooms.list(&filter).await?))
}

/// POST /api/rooms - 新增房间
pub async fn provision(
    State(state): State<ServerState>,
    Json(payload): Json<RoomCreate>,
) -> AppResult<Json<Room>> {
    Ok(Json(state.rooms.provision(payload).await?))
}

/// GET /api/rooms/counts - 各房态数量
pub async fn counts(State(state): State<ServerState>) -> AppResult<Json<Vec<RoomStatusCount>>> {
    Ok(Json(state.rooms.count_by_status().await?))
}

/// GET /api/rooms/:number
pub async fn get_by_number(
    State(state): State<ServerState>,
    Path(number): Path<String>,
) -> AppResult<Json<Room>> {
    Ok(Json(state.rooms.get(&number).await?))
}

/// PUT /api/rooms/:number/status - 手动修改房态
pub async fn set_status(
    State(state): State<ServerState>,
    Path(number): Path<String>,
    Json(payload): Json<RoomStatusUpdate>,
) -> AppResult<Json<Room>> {
    Ok(Json(state.rooms.set_status(&number, payload).await?))
}

/// GET /api/rooms/:number/stay - 当前在住记录
pub async fn active_stay(
    State(state): State<ServerState>,
    Path(number): Path<String>,
) -> AppResult<Json<GuestStay>> {
    Ok(Json(state.guests.active_stay_for_room(&number).await?))
}

/// GET /api/rooms/:number/food-orders - 房间餐饮订单及汇总
pub async fn food_orders(
    State(state): State<ServerState>,
    Path(number): Path<String>,
) -> AppResult<Json<RoomOrders>> {
    Ok(Json(state.food_orders.orders_by_room(&number).await?))
}
