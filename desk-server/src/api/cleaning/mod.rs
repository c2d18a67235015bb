//! Housekeeping API Module
//!
//! All routes act as the caller resolved from the identity headers.

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

/// Housekeeping router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/cleaning", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/board", get(handler::board))
        .route("/history", get(handler::history))
        .route("/rooms/{number}", get(handler::active_task))
        .route("/task", post(handler::start_task))
        .route("/start", post(handler::start_cleaning))
        .route("/complete", post(handler::complete_cleaning))
        .route("/assign", post(handler::assign_staff))
}
