//! Food Order API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{FoodOrder, FoodOrderCreate, PaymentStatusUpdate};

use crate::core::ServerState;
use crate::utils::AppResult;

/// POST /api/food-orders - 下单 (现金订单计入住客账)
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<FoodOrderCreate>,
) -> AppResult<Json<FoodOrder>> {
    Ok(Json(state.food_orders.create_order(payload).await?))
}

/// GET /api/food-orders/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<FoodOrder>> {
    Ok(Json(state.food_orders.get_order(id).await?))
}

/// DELETE /api/food-orders/:id - 删除订单并冲回营收与住客账
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<FoodOrder>> {
    Ok(Json(state.food_orders.delete_order(id).await?))
}

/// PUT /api/food-orders/:id/payment-status
pub async fn update_payment_status(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<PaymentStatusUpdate>,
) -> AppResult<Json<FoodOrder>> {
    Ok(Json(
        state
            .food_orders
            .update_payment_status(id, payload.payment_status)
            .await?,
    ))
}

/// GET /api/food-orders/guest/:guest_id
pub async fn by_guest(
    State(state): State<ServerState>,
    Path(guest_id): Path<i64>,
) -> AppResult<Json<Vec<FoodOrder>>> {
    Ok(Json(state.food_orders.orders_by_guest(guest_id).await?))
}

/// GET /api/food-orders/date/:date - 按营业日
pub async fn by_date(
    State(state): State<ServerState>,
    Path(date): Path<String>,
) -> AppResult<Json<Vec<FoodOrder>>> {
    Ok(Json(state.food_orders.orders_by_date(&date).await?))
}
