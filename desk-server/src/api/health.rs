//! 健康检查路由
//!
//! | 路径 | 方法 | 说明 | 认证 |
//! |------|------|------|------|
//! | /health | GET | 健康检查 (含数据库探测) | 无 |

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::core::ServerState;

/// 健康检查路由 - 公共路由
pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

/// 健康检查响应
#[derive(Serialize)]
pub struct HealthResponse {
    /// 状态 (ok | degraded)
    status: &'static str,
    /// 版本号
    version: &'static str,
    /// 数据库是否可用
    database: bool,
    /// 营业时区
    timezone: String,
}

async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    let database = sqlx::query_scalar::<_, i64>("SELECT 1")
        .fetch_one(&state.pool)
        .await
        .inspect_err(|e| tracing::warn!(error = %e, "Health check database probe failed"))
        .is_ok();

    Json(HealthResponse {
        status: if database { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        database,
        timezone: state.config.timezone.to_string(),
    })
}
