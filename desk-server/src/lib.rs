//! Innkeep Desk Server - 酒店前台一致性引擎
//!
//! # 架构概述
//!
//! 房态、住客账目、餐饮订单、日营收与清洁任务之间的一致性全部由
//! SQLite 事务保证：每个跨表操作都是一个以条件写入开头的事务。
//!
//! - **数据库** (`db`): SQLite (WAL) 连接池、迁移与 repository
//! - **服务** (`services`): 房间、住客、餐饮、营收、清洁等核心组件
//! - **调用者身份** (`auth`): 由上游网关传入的员工身份
//! - **HTTP API** (`api`): axum 路由
//!
//! # 模块结构
//!
//! ```text
//! desk-server/src/
//! ├── core/          # 配置、状态、服务器、启动错误
//! ├── auth/          # 调用者身份
//! ├── services/      # 核心组件
//! ├── api/           # HTTP 路由和处理器
//! ├── utils/         # 日志、时间、金额、校验
//! └── db/            # 连接池与 repository
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use auth::CurrentUser;
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

// Re-export unified error types from shared
pub use utils::{ApiResponse, ErrorCategory, ErrorCode, ErrorKind};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 加载 `.env` 并按配置初始化日志
///
/// 生产环境输出 JSON，设置 `LOG_DIR` 时按天滚动写入文件。
pub fn setup_environment() -> Config {
    dotenv::dotenv().ok();
    let config = Config::from_env();
    init_logger_with_file(
        Some(&config.log_level),
        config.is_production(),
        config.log_dir.as_deref(),
    );
    config
}

pub fn print_banner() {
    println!(
        r#"
    ____
   /  _/___  ____  / /_____  ___  ____
   / // __ \/ __ \/ //_/ _ \/ _ \/ __ \
 _/ // / / / / / / ,< /  __/  __/ /_/ /
/___/_/ /_/_/ /_/_/|_|\___/\___/ .___/
                              /_/
        front desk server v{}
    "#,
        env!("CARGO_PKG_VERSION")
    );
}
