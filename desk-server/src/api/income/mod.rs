//! Income API Module

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

/// Income router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/income", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", post(handler::record))
        .route("/date/{date}", get(handler::by_date))
}
