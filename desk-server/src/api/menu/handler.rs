//! Menu API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use shared::models::{MenuItem, MenuItemCreate, MenuItemUpdate};

use crate::core::ServerState;
use crate::utils::AppResult;

#[derive(Debug, Deserialize)]
pub struct MenuQuery {
    pub search: Option<String>,
}

/// GET /api/menu?search= - 菜单 (名称模糊搜索)
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<MenuQuery>,
) -> AppResult<Json<Vec<MenuItem>>> {
    Ok(Json(state.menu.list(query.search.as_deref()).await?))
}

/// POST /api/menu
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<MenuItemCreate>,
) -> AppResult<Json<MenuItem>> {
    Ok(Json(state.menu.create(payload).await?))
}

/// GET /api/menu/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<MenuItem>> {
    Ok(Json(state.menu.get(id).await?))
}

/// PUT /api/menu/:id
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<MenuItemUpdate>,
) -> AppResult<Json<MenuItem>> {
    Ok(Json(state.menu.update(id, payload).await?))
}

/// DELETE /api/menu/:id
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i64>) -> AppResult<Json<bool>> {
    state.menu.delete(id).await?;
    Ok(Json(true))
}
