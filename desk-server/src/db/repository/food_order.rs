//! Food Order Repository

use super::RepoResult;
use shared::models::{FoodOrder, PaymentMethod, PaymentStatus};
use sqlx::{SqliteConnection, SqlitePool};

const COLUMNS: &str = "id, guest_id, room_number, food_name, price, quantity, payment_method, payment_status, business_date, order_time, created_at";

/// Validated order row, ready to insert
#[derive(Debug, Clone)]
pub struct NewFoodOrder<'a> {
    pub guest_id: i64,
    pub room_number: &'a str,
    pub food_name: &'a str,
    pub price: f64,
    pub quantity: i64,
    pub payment_method: PaymentMethod,
    pub business_date: &'a str,
}

/// Insert a PAID order if the room exists. `None` means the room is unknown.
pub async fn insert(
    conn: &mut SqliteConnection,
    data: &NewFoodOrder<'_>,
    now: i64,
) -> RepoResult<Option<FoodOrder>> {
    let order = sqlx::query_as::<_, FoodOrder>(&format!(
        "INSERT INTO food_order (guest_id, room_number, food_name, price, quantity, payment_method, payment_status, business_date, order_time, created_at) \
         SELECT ?1, ?2, ?3, ?4, ?5, ?6, 'PAID', ?7, ?8, ?8 \
         WHERE EXISTS (SELECT 1 FROM room WHERE room_number = ?2) \
         RETURNING {COLUMNS}"
    ))
    .bind(data.guest_id)
    .bind(data.room_number)
    .bind(data.food_name)
    .bind(data.price)
    .bind(data.quantity)
    .bind(data.payment_method)
    .bind(data.business_date)
    .bind(now)
    .fetch_optional(conn)
    .await?;
    Ok(order)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<FoodOrder>> {
    let order = sqlx::query_as::<_, FoodOrder>(&format!(
        "SELECT {COLUMNS} FROM food_order WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(order)
}

/// Delete and return the removed row in one statement
pub async fn delete_returning(
    conn: &mut SqliteConnection,
    id: i64,
) -> RepoResult<Option<FoodOrder>> {
    let order = sqlx::query_as::<_, FoodOrder>(&format!(
        "DELETE FROM food_order WHERE id = ? RETURNING {COLUMNS}"
    ))
    .bind(id)
    .fetch_optional(conn)
    .await?;
    Ok(order)
}

pub async fn find_by_room(pool: &SqlitePool, room_number: &str) -> RepoResult<Vec<FoodOrder>> {
    let orders = sqlx::query_as::<_, FoodOrder>(&format!(
        "SELECT {COLUMNS} FROM food_order WHERE room_number = ? ORDER BY order_time DESC, id DESC"
    ))
    .bind(room_number)
    .fetch_all(pool)
    .await?;
    Ok(orders)
}

pub async fn find_by_guest(pool: &SqlitePool, guest_id: i64) -> RepoResult<Vec<FoodOrder>> {
    let orders = sqlx::query_as::<_, FoodOrder>(&format!(
        "SELECT {COLUMNS} FROM food_order WHERE guest_id = ? ORDER BY order_time DESC, id DESC"
    ))
    .bind(guest_id)
    .fetch_all(pool)
    .await?;
    Ok(orders)
}

pub async fn find_by_date(pool: &SqlitePool, business_date: &str) -> RepoResult<Vec<FoodOrder>> {
    let orders = sqlx::query_as::<_, FoodOrder>(&format!(
        "SELECT {COLUMNS} FROM food_order WHERE business_date = ? ORDER BY order_time DESC, id DESC"
    ))
    .bind(business_date)
    .fetch_all(pool)
    .await?;
    Ok(orders)
}

pub async fn find_recent(pool: &SqlitePool, limit: i64) -> RepoResult<Vec<FoodOrder>> {
    let orders = sqlx::query_as::<_, FoodOrder>(&format!(
        "SELECT {COLUMNS} FROM food_order ORDER BY created_at DESC, id DESC LIMIT ?"
    ))
    .bind(limit)
    .fetch_all(pool)
    .await?;
    Ok(orders)
}

pub async fn update_payment_status(
    pool: &SqlitePool,
    id: i64,
    status: PaymentStatus,
) -> RepoResult<Option<FoodOrder>> {
    let order = sqlx::query_as::<_, FoodOrder>(&format!(
        "UPDATE food_order SET payment_status = ? WHERE id = ? RETURNING {COLUMNS}"
    ))
    .bind(status)
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(order)
}

/// Σ line totals (each rounded to cents) per payment method for one business date
pub async fn sum_by_method(
    pool: &SqlitePool,
    business_date: &str,
) -> RepoResult<Vec<(PaymentMethod, f64)>> {
    let rows = sqlx::query_as::<_, (PaymentMethod, f64)>(
        "SELECT payment_method, CAST(SUM(ROUND(price * quantity, 2)) AS REAL) FROM food_order WHERE business_date = ? GROUP BY payment_method",
    )
    .bind(business_date)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Σ line totals (each rounded to cents) per business date in `[start, end]`
pub async fn sum_by_date(
    pool: &SqlitePool,
    start: &str,
    end: &str,
) -> RepoResult<Vec<(String, f64)>> {
    let rows = sqlx::query_as::<_, (String, f64)>(
        "SELECT business_date, CAST(SUM(ROUND(price * quantity, 2)) AS REAL) FROM food_order WHERE business_date >= ?1 AND business_date <= ?2 GROUP BY business_date",
    )
    .bind(start)
    .bind(end)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
