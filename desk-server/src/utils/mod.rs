//! 工具模块 - 通用工具函数和类型
//!
//! # 内容
//!
//! - [`AppError`] / [`ApiResponse`] - 错误与响应类型 (from shared::error)
//! - [`logger`] - tracing 初始化
//! - [`time`] - 营业时区与日期边界
//! - [`money`] - 金额计算与校验
//! - [`validation`] - 文本长度校验

pub mod logger;
pub mod money;
pub mod time;
pub mod validation;

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode, ErrorKind};
