//! Reservation API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use shared::models::{Reservation, ReservationCreate, ReservationUpdate};

use crate::core::ServerState;
use crate::utils::AppResult;

#[derive(Debug, Deserialize)]
pub struct ReservationQuery {
    /// Check-in date (YYYY-MM-DD)
    pub date: Option<String>,
}

/// GET /api/reservations?date= - 全部预订，或某日入住的预订
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ReservationQuery>,
) -> AppResult<Json<Vec<Reservation>>> {
    let reservations = match query.date {
        Some(date) => state.reservations.list_by_checkin_date(&date).await?,
        None => state.reservations.list().await?,
    };
    Ok(Json(reservations))
}

/// POST /api/reservations
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ReservationCreate>,
) -> AppResult<Json<Reservation>> {
    Ok(Json(state.reservations.create(payload).await?))
}

/// GET /api/reservations/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Reservation>> {
    Ok(Json(state.reservations.get(id).await?))
}

/// PUT /api/reservations/:id
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<ReservationUpdate>,
) -> AppResult<Json<Reservation>> {
    Ok(Json(state.reservations.update(id, payload).await?))
}

/// DELETE /api/reservations/:id
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i64>) -> AppResult<Json<bool>> {
    state.reservations.delete(id).await?;
    Ok(Json(true))
}
