//! Database Module
//!
//! Handles the SQLite connection pool and migrations

pub mod repository;

use repository::RepoError;
use shared::error::{AppError, AppResult};
use sqlx::{Sqlite, SqlitePool, Transaction};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::str::FromStr;
use std::time::Duration;

/// Database service owning the SQLite connection pool
#[derive(Clone)]
pub struct DbService {
    pub pool: SqlitePool,
}

impl DbService {
    /// Open (or create) the database in WAL mode and apply migrations
    pub async fn new(
        db_path: &str,
        max_connections: u32,
        busy_timeout_ms: u64,
    ) -> Result<Self, AppError> {
        // WAL, foreign keys, normal sync; busy_timeout applies to every pooled connection
        let options = SqliteConnectOptions::from_str(&format!("sqlite:{db_path}"))
            .map_err(|e| AppError::database(format!("Invalid database path: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .foreign_keys(true)
            .busy_timeout(Duration::from_millis(busy_timeout_ms))
            .optimize_on_close(true, None);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .connect_with(options)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        tracing::info!(
            path = %db_path,
            max_connections,
            busy_timeout_ms,
            "Database connection established (SQLite WAL)"
        );

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to apply migrations: {e}")))?;
        tracing::info!("Database migrations applied");

        Ok(Self { pool })
    }
}

/// Pool-owned transaction; the first statement run on it should be a write
pub type Tx = Transaction<'static, Sqlite>;

pub async fn begin(pool: &SqlitePool) -> AppResult<Tx> {
    Ok(pool.begin().await.map_err(RepoError::from)?)
}

pub async fn commit(tx: Tx) -> AppResult<()> {
    tx.commit().await.map_err(RepoError::from)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_new_creates_file_and_migrates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("desk.db");
        let db = DbService::new(path.to_str().unwrap(), 2, 1000).await.unwrap();

        let tables = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name IN ('room', 'guest_stay', 'food_order', 'daily_revenue', 'cleaning_record')",
        )
        .fetch_one(&db.pool)
        .await
        .unwrap();
        assert_eq!(tables, 5);
        assert!(path.exists());
    }
}
