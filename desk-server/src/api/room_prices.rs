//! Room Price API Module

use axum::{Json, Router, extract::State, routing::get};
use shared::models::{RoomPrices, RoomPricesUpdate};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::utils::AppResult;

/// Room price router
pub fn router() -> Router<ServerState> {
    Router::new().route("/api/room-prices", get(get_prices).put(update_prices))
}

/// GET /api/room-prices
async fn get_prices(State(state): State<ServerState>) -> AppResult<Json<RoomPrices>> {
    Ok(Json(state.room_prices.get().await?))
}

/// PUT /api/room-prices - 修改房价 (仅管理员)
async fn update_prices(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<RoomPricesUpdate>,
) -> AppResult<Json<RoomPrices>> {
    Ok(Json(state.room_prices.update(&user, payload).await?))
}
