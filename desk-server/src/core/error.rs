use thiserror::Error;

/// 启动与运行期错误 (请求级错误使用 `AppError`)
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("配置错误: {0}")]
    Config(String),

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("数据库初始化失败: {0}")]
    Database(#[from] shared::error::AppError),

    #[error("内部服务器错误")]
    Internal(#[from] anyhow::Error),
}

/// 服务器 Result 类型别名
pub type Result<T> = std::result::Result<T, ServerError>;
