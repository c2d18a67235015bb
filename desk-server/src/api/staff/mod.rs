//! Staff API Module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Staff router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/staff", routes())
}

fn routes() -> Router<ServerState> {
    Router::new().route("/", get(handler::list).post(handler::create))
}
