//! Revenue API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use shared::models::{ActivityEntry, DailyRevenue, ReconcileEntry, RevenueTotals};

use crate::core::ServerState;
use crate::utils::AppResult;

#[derive(Debug, Deserialize)]
pub struct RangeQuery {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Deserialize)]
pub struct RecentQuery {
    pub limit: Option<i64>,
}

/// GET /api/revenue/daily/:date - 单日汇总 (房费 / 餐饮 / 其他)
pub async fn daily_total(
    State(state): State<ServerState>,
    Path(date): Path<String>,
) -> AppResult<Json<RevenueTotals>> {
    Ok(Json(state.revenue.daily_total(&date).await?))
}

/// GET /api/revenue/range?start=&end= - 区间内逐日汇总
pub async fn range_totals(
    State(state): State<ServerState>,
    Query(query): Query<RangeQuery>,
) -> AppResult<Json<Vec<RevenueTotals>>> {
    Ok(Json(state.revenue.range_totals(&query.start, &query.end).await?))
}

/// GET /api/revenue/by-method/:date - 按支付方式的日营收
pub async fn daily_revenue(
    State(state): State<ServerState>,
    Path(date): Path<String>,
) -> AppResult<Json<Vec<DailyRevenue>>> {
    Ok(Json(state.revenue.daily_revenue(&date).await?))
}

/// GET /api/revenue/reconcile/:date - 日营收与订单重算对账
pub async fn reconcile(
    State(state): State<ServerState>,
    Path(date): Path<String>,
) -> AppResult<Json<Vec<ReconcileEntry>>> {
    Ok(Json(state.revenue.reconcile(&date).await?))
}

/// GET /api/revenue/recent?limit= - 最近收入与订单
pub async fn recent_activity(
    State(state): State<ServerState>,
    Query(query): Query<RecentQuery>,
) -> AppResult<Json<Vec<ActivityEntry>>> {
    Ok(Json(state.revenue.recent_activity(query.limit).await?))
}
