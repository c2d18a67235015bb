//! 调用者身份模块
//!
//! 凭证签发与校验由上游身份网关完成，本服务只消费已解析的身份：
//! - [`CurrentUser`] - 当前调用者 (员工 id / 名称 / 角色)
//! - [`extractor`] - 从 `X-Caller-*` 请求头解析 `CurrentUser`
//! - [`middleware`] - 写请求必须携带身份

pub mod extractor;
pub mod middleware;

use http::HeaderMap;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::StaffRole;

pub const CALLER_ID_HEADER: &str = "x-caller-id";
pub const CALLER_NAME_HEADER: &str = "x-caller-name";
pub const CALLER_ROLE_HEADER: &str = "x-caller-role";

/// 当前调用者
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    /// 员工 ID (清洁任务归属)
    pub id: i64,
    /// 显示名称
    pub name: String,
    /// 角色
    pub role: StaffRole,
}

impl CurrentUser {
    /// 是否管理员
    pub fn is_admin(&self) -> bool {
        self.role == StaffRole::Admin
    }

    /// 非管理员返回 `AdminRequired`
    pub fn require_admin(&self) -> AppResult<()> {
        if self.is_admin() {
            return Ok(());
        }
        tracing::warn!(
            caller_id = self.id,
            caller_role = self.role.as_str(),
            "Admin required"
        );
        Err(AppError::new(ErrorCode::AdminRequired))
    }

    /// 从 `X-Caller-Id` / `X-Caller-Name` / `X-Caller-Role` 解析
    ///
    /// 缺少 id 或角色返回 `NotAuthenticated`，格式错误返回 `InvalidIdentity`。
    pub fn from_headers(headers: &HeaderMap) -> AppResult<Self> {
        let header = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::trim)
                .filter(|v| !v.is_empty())
        };

        let (Some(raw_id), Some(raw_role)) = (header(CALLER_ID_HEADER), header(CALLER_ROLE_HEADER))
        else {
            return Err(AppError::not_authenticated());
        };

        let id = raw_id
            .parse::<i64>()
            .ok()
            .filter(|id| *id > 0)
            .ok_or_else(|| {
                AppError::with_message(
                    ErrorCode::InvalidIdentity,
                    format!("Invalid caller id: {raw_id}"),
                )
            })?;
        let role = raw_role.parse::<StaffRole>().map_err(|e| {
            AppError::with_message(ErrorCode::InvalidIdentity, format!("Invalid caller role: {e}"))
        })?;
        let name = header(CALLER_NAME_HEADER)
            .map(String::from)
            .unwrap_or_else(|| format!("staff-{id}"));

        Ok(Self { id, name, role })
    }
}
