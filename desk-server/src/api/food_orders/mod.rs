//! Food Order API Module

mod handler;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::core::ServerState;

/// Food order router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/food-orders", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", post(handler::create))
        .route("/{id}", get(handler::get_by_id).delete(handler::delete))
        .route("/{id}/payment-status", put(handler::update_payment_status))
        .route("/guest/{guest_id}", get(handler::by_guest))
        .route("/date/{date}", get(handler::by_date))
}
