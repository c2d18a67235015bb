//! Repository Module
//!
//! Plain async functions over SQLite. Functions that take a
//! `&mut SqliteConnection` are meant to run inside a caller-owned
//! transaction (`&mut *tx`); the rest read straight from the pool.
//!
//! Conditional writes report their outcome through `rows_affected()` or
//! `Option` so the service layer can map a miss to the right domain error.

pub mod cleaning;
pub mod daily_revenue;
pub mod food_order;
pub mod guest_stay;
pub mod income;
pub mod menu;
pub mod reservation;
pub mod room;
pub mod room_price;
pub mod staff;

use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => RepoError::NotFound("row not found".into()),
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                RepoError::Duplicate(db_err.message().to_string())
            }
            sqlx::Error::Database(db_err) if db_err.is_check_violation() => {
                RepoError::Validation(db_err.message().to_string())
            }
            _ => RepoError::Database(err.to_string()),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::with_message(ErrorCode::NotFound, msg),
            RepoError::Duplicate(msg) => AppError::with_message(ErrorCode::AlreadyExists, msg),
            RepoError::Database(msg) => AppError::database(msg),
            RepoError::Validation(msg) => AppError::validation(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

#[cfg(test)]
pub(crate) mod testing {
    use sqlx::SqlitePool;
    use sqlx::sqlite::SqlitePoolOptions;

    /// In-memory database with the production schema.
    ///
    /// A single connection: every new `:memory:` connection is a fresh database.
    pub async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        sqlx::migrate!("./migrations").run(&pool).await.unwrap();
        pool
    }

    pub async fn seed_room(pool: &SqlitePool, number: &str, status: &str) {
        sqlx::query(
            "INSERT INTO room (room_number, floor, status, created_at, updated_at) VALUES (?, 1, ?, 0, 0)",
        )
        .bind(number)
        .bind(status)
        .execute(pool)
        .await
        .unwrap();
    }
}
