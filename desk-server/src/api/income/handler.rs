//! Income API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{Income, IncomeCreate};

use crate::core::ServerState;
use crate::utils::AppResult;

/// POST /api/income - 记录收入 (入住 / 续住 / 其他)
pub async fn record(
    State(state): State<ServerState>,
    Json(payload): Json<IncomeCreate>,
) -> AppResult<Json<Income>> {
    Ok(Json(state.revenue.record_income(payload).await?))
}

/// GET /api/income/date/:date
pub async fn by_date(
    State(state): State<ServerState>,
    Path(date): Path<String>,
) -> AppResult<Json<Vec<Income>>> {
    Ok(Json(state.revenue.income_by_date(&date).await?))
}
