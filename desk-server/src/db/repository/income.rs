//! Income Repository

use super::RepoResult;
use shared::models::{Income, IncomeCreate, IncomeKind, PaymentMethod};
use sqlx::SqlitePool;

const COLUMNS: &str = "id, kind, guest_id, room_number, amount, revenue_type, payment_method, business_date, created_at";

/// Income summed per (date, kind, effective payment method)
///
/// The effective method is the income's own method, else the guest's payment type.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct IncomeSum {
    pub business_date: String,
    pub kind: IncomeKind,
    pub method: Option<PaymentMethod>,
    pub amount: f64,
}

pub async fn insert(
    pool: &SqlitePool,
    data: &IncomeCreate,
    business_date: &str,
) -> RepoResult<Income> {
    let income = sqlx::query_as::<_, Income>(&format!(
        "INSERT INTO income (kind, guest_id, room_number, amount, revenue_type, payment_method, business_date, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8) RETURNING {COLUMNS}"
    ))
    .bind(data.kind)
    .bind(data.guest_id)
    .bind(&data.room_number)
    .bind(data.amount)
    .bind(&data.revenue_type)
    .bind(data.payment_method)
    .bind(business_date)
    .bind(shared::util::now_millis())
    .fetch_one(pool)
    .await?;
    Ok(income)
}

pub async fn find_by_date(pool: &SqlitePool, business_date: &str) -> RepoResult<Vec<Income>> {
    let rows = sqlx::query_as::<_, Income>(&format!(
        "SELECT {COLUMNS} FROM income WHERE business_date = ? ORDER BY created_at DESC, id DESC"
    ))
    .bind(business_date)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn find_recent(pool: &SqlitePool, limit: i64) -> RepoResult<Vec<Income>> {
    let rows = sqlx::query_as::<_, Income>(&format!(
        "SELECT {COLUMNS} FROM income ORDER BY created_at DESC, id DESC LIMIT ?"
    ))
    .bind(limit)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Grouped income for business dates in `[start, end]`
pub async fn sums_between(pool: &SqlitePool, start: &str, end: &str) -> RepoResult<Vec<IncomeSum>> {
    let rows = sqlx::query_as::<_, IncomeSum>(
        "SELECT i.business_date AS business_date, i.kind AS kind, COALESCE(i.payment_method, g.payment_type) AS method, CAST(SUM(i.amount) AS REAL) AS amount \
         FROM income i LEFT JOIN guest_stay g ON g.id = i.guest_id \
         WHERE i.business_date >= ?1 AND i.business_date <= ?2 \
         GROUP BY i.business_date, i.kind, COALESCE(i.payment_method, g.payment_type)",
    )
    .bind(start)
    .bind(end)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
