use chrono_tz::Tz;
use std::path::PathBuf;

use crate::core::{Result, ServerError};
use crate::utils::time::parse_timezone;

/// 服务器配置 - 前台服务的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | ./data | 工作目录 (数据库、日志) |
/// | DATABASE_PATH | <WORK_DIR>/innkeep.db | SQLite 文件 |
/// | HTTP_PORT | 8080 | HTTP 服务端口 |
/// | TIMEZONE | UTC | 营业时区 (IANA) |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | - | 日志目录 (按天滚动) |
/// | ENVIRONMENT | development | 运行环境 |
/// | DB_MAX_CONNECTIONS | 5 | 连接池大小 |
/// | DB_BUSY_TIMEOUT_MS | 5000 | SQLite busy timeout |
///
/// # 示例
///
/// ```ignore
/// WORK_DIR=/data/desk TIMEZONE=Asia/Yangon cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录
    pub work_dir: String,
    /// SQLite 数据库文件
    pub database_path: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 营业时区，所有 business_date 按此计算
    pub timezone: Tz,
    /// 日志级别
    pub log_level: String,
    /// 日志目录
    pub log_dir: Option<String>,
    /// 运行环境: development | production
    pub environment: String,
    /// 连接池大小
    pub db_max_connections: u32,
    /// 写锁等待时间 (毫秒)
    pub db_busy_timeout_ms: u64,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        let work_dir = std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into());
        let database_path = std::env::var("DATABASE_PATH").unwrap_or_else(|_| {
            PathBuf::from(&work_dir)
                .join("innkeep.db")
                .to_string_lossy()
                .into_owned()
        });
        let timezone = match std::env::var("TIMEZONE") {
            Ok(name) => parse_timezone(&name).unwrap_or_else(|| {
                tracing::warn!(timezone = %name, "Unknown TIMEZONE, falling back to UTC");
                chrono_tz::UTC
            }),
            Err(_) => chrono_tz::UTC,
        };

        Self {
            work_dir,
            database_path,
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            timezone,
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.trim().is_empty()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            db_max_connections: std::env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5),
            db_busy_timeout_ms: std::env::var("DB_BUSY_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
        }
    }

    /// 使用自定义数据库路径和时区覆盖配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(database_path: impl Into<String>, timezone: Tz) -> Self {
        let mut config = Self::from_env();
        config.database_path = database_path.into();
        config.timezone = timezone;
        config
    }

    /// 确保工作目录存在
    pub fn ensure_work_dir(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.work_dir)?;
        if let Some(parent) = PathBuf::from(&self.database_path).parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    /// 启动前校验
    pub fn validate(&self) -> Result<()> {
        if self.http_port == 0 {
            return Err(ServerError::Config("HTTP_PORT must be non-zero".into()));
        }
        if self.database_path.trim().is_empty() {
            return Err(ServerError::Config("DATABASE_PATH must not be empty".into()));
        }
        if self.db_max_connections == 0 {
            return Err(ServerError::Config("DB_MAX_CONNECTIONS must be at least 1".into()));
        }
        Ok(())
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
