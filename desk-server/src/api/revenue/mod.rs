//! Revenue API Module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Revenue report router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/revenue", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/daily/{date}", get(handler::daily_total))
        .route("/range", get(handler::range_totals))
        .route("/by-method/{date}", get(handler::daily_revenue))
        .route("/reconcile/{date}", get(handler::reconcile))
        .route("/recent", get(handler::recent_activity))
}
