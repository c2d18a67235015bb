//! 身份中间件
//!
//! 所有写操作 (非 GET/HEAD) 必须携带网关解析好的 `X-Caller-*` 身份。

use axum::{extract::Request, middleware::Next, response::Response};
use http::Method;
use shared::error::AppError;

use crate::auth::CurrentUser;

/// 要求写请求携带调用者身份
///
/// # 跳过的请求
///
/// - `OPTIONS *` (CORS 预检)
/// - 非 `/api/` 路径 (`/health` 等)
/// - `GET` / `HEAD` (只读报表与查询)
///
/// 解析成功后将 [`CurrentUser`] 注入请求扩展，处理器的提取器直接复用。
pub async fn require_identity(mut req: Request, next: Next) -> Result<Response, AppError> {
    let read_only = matches!(*req.method(), Method::GET | Method::HEAD | Method::OPTIONS);
    if read_only || !req.uri().path().starts_with("/api/") {
        return Ok(next.run(req).await);
    }

    let user = CurrentUser::from_headers(req.headers()).inspect_err(|e| {
        tracing::warn!(
            method = %req.method(),
            uri = %req.uri(),
            code = %e.code,
            "Mutating request without caller identity"
        );
    })?;

    tracing::debug!(
        caller_id = user.id,
        caller_role = user.role.as_str(),
        method = %req.method(),
        uri = %req.uri(),
        "Caller identified"
    );
    req.extensions_mut().insert(user);
    Ok(next.run(req).await)
}
