//! Guest Stay API Module

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

/// Guest stay router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/stays", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::check_in))
        .route("/checkouts/today", get(handler::todays_checkouts))
        .route("/{id}", get(handler::get_by_id).put(handler::update))
        .route("/{id}/checkout", post(handler::checkout))
}
