//! Daily Revenue Repository
//!
//! One row per (business_date, payment_method). Writers only ever add to
//! `revenue`; the UNIQUE constraint makes the upsert safe under concurrency.

use super::RepoResult;
use shared::models::{DailyRevenue, PaymentMethod};
use sqlx::{SqliteConnection, SqlitePool};

const COLUMNS: &str = "id, business_date, payment_method, revenue, updated_at";

/// Insert-if-absent-else-add as a single statement
pub async fn add(
    conn: &mut SqliteConnection,
    business_date: &str,
    method: PaymentMethod,
    amount: f64,
) -> RepoResult<()> {
    sqlx::query(
        "INSERT INTO daily_revenue (business_date, payment_method, revenue, updated_at) VALUES (?1, ?2, ?3, ?4) \
         ON CONFLICT (business_date, payment_method) DO UPDATE SET revenue = revenue + excluded.revenue, updated_at = excluded.updated_at",
    )
    .bind(business_date)
    .bind(method)
    .bind(amount)
    .bind(shared::util::now_millis())
    .execute(conn)
    .await?;
    Ok(())
}

/// Reverse a previous [`add`]. Returns `false` if the row does not exist.
pub async fn subtract(
    conn: &mut SqliteConnection,
    business_date: &str,
    method: PaymentMethod,
    amount: f64,
) -> RepoResult<bool> {
    let result = sqlx::query(
        "UPDATE daily_revenue SET revenue = revenue - ?1, updated_at = ?2 WHERE business_date = ?3 AND payment_method = ?4",
    )
    .bind(amount)
    .bind(shared::util::now_millis())
    .bind(business_date)
    .bind(method)
    .execute(conn)
    .await?;
    Ok(result.rows_affected() == 1)
}

pub async fn find_by_date(pool: &SqlitePool, business_date: &str) -> RepoResult<Vec<DailyRevenue>> {
    let rows = sqlx::query_as::<_, DailyRevenue>(&format!(
        "SELECT {COLUMNS} FROM daily_revenue WHERE business_date = ? ORDER BY payment_method"
    ))
    .bind(business_date)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn find_one(
    pool: &SqlitePool,
    business_date: &str,
    method: PaymentMethod,
) -> RepoResult<Option<DailyRevenue>> {
    let row = sqlx::query_as::<_, DailyRevenue>(&format!(
        "SELECT {COLUMNS} FROM daily_revenue WHERE business_date = ? AND payment_method = ?"
    ))
    .bind(business_date)
    .bind(method)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

/// Σ revenue over every method for one day
pub async fn total_for_date(pool: &SqlitePool, business_date: &str) -> RepoResult<f64> {
    let total = sqlx::query_scalar::<_, f64>(
        "SELECT CAST(COALESCE(SUM(revenue), 0) AS REAL) FROM daily_revenue WHERE business_date = ?",
    )
    .bind(business_date)
    .fetch_one(pool)
    .await?;
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::testing::test_pool;

    #[tokio::test]
    async fn test_add_creates_then_accumulates() {
        let pool = test_pool().await;
        let mut conn = pool.acquire().await.unwrap();
        add(&mut conn, "2026-03-01", PaymentMethod::Cash, 5000.0).await.unwrap();
        add(&mut conn, "2026-03-01", PaymentMethod::Cash, 2500.0).await.unwrap();
        add(&mut conn, "2026-03-01", PaymentMethod::Kpay, 1000.0).await.unwrap();
        drop(conn);

        let cash = find_one(&pool, "2026-03-01", PaymentMethod::Cash)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(cash.revenue, 7500.0);
        assert_eq!(find_by_date(&pool, "2026-03-01").await.unwrap().len(), 2);
        assert_eq!(total_for_date(&pool, "2026-03-01").await.unwrap(), 8500.0);
        assert_eq!(total_for_date(&pool, "2026-03-02").await.unwrap(), 0.0);
    }

    #[tokio::test]
    async fn test_subtract_missing_row() {
        let pool = test_pool().await;
        let mut conn = pool.acquire().await.unwrap();
        assert!(!subtract(&mut conn, "2026-03-01", PaymentMethod::Cash, 1.0).await.unwrap());
        add(&mut conn, "2026-03-01", PaymentMethod::Cash, 5000.0).await.unwrap();
        assert!(subtract(&mut conn, "2026-03-01", PaymentMethod::Cash, 5000.0).await.unwrap());
    }
}
