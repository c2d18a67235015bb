//! Room API Module

mod handler;

use axum::{
    Router,
    routing::{get, put},
};

use crate::core::ServerState;

/// Room router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/rooms", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::provision))
        .route("/counts", get(handler::counts))
        .route("/{number}", get(handler::get_by_number))
        .route("/{number}/status", put(handler::set_status))
        .route("/{number}/stay", get(handler::active_stay))
        .route("/{number}/food-orders", get(handler::food_orders))
}
