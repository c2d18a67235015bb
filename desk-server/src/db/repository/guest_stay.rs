//! Guest Stay Repository

use super::RepoResult;
use shared::models::{CheckInRequest, GuestStay, StayStatus, StayUpdate};
use sqlx::{SqliteConnection, SqlitePool};

const COLUMNS: &str = "id, guest_name, national_id, phone, room_type, room_number, checkin_at, checkout_date, extra_bed, payment_type, amount_paid, extra_charges, food_charges, paid, status, created_at, updated_at";

/// Insert an ACTIVE stay only if the room is AVAILABLE and has no ACTIVE stay.
///
/// Check and insert are one statement. `None` means the guard failed.
pub async fn insert_if_vacant(
    conn: &mut SqliteConnection,
    data: &CheckInRequest,
    now: i64,
) -> RepoResult<Option<GuestStay>> {
    let stay = sqlx::query_as::<_, GuestStay>(&format!(
        "INSERT INTO guest_stay (guest_name, national_id, phone, room_type, room_number, checkin_at, checkout_date, extra_bed, payment_type, amount_paid, extra_charges, food_charges, paid, status, created_at, updated_at) \
         SELECT ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, 0, ?12, 'ACTIVE', ?6, ?6 \
         WHERE EXISTS (SELECT 1 FROM room WHERE room_number = ?5 AND status = 'AVAILABLE') \
           AND NOT EXISTS (SELECT 1 FROM guest_stay WHERE room_number = ?5 AND status = 'ACTIVE') \
         RETURNING {COLUMNS}"
    ))
    .bind(&data.guest_name)
    .bind(&data.national_id)
    .bind(&data.phone)
    .bind(data.room_type)
    .bind(&data.room_number)
    .bind(now)
    .bind(data.checkout_date)
    .bind(data.extra_bed)
    .bind(data.payment_type)
    .bind(data.amount_paid)
    .bind(data.extra_charges)
    .bind(data.paid)
    .fetch_optional(conn)
    .await?;
    Ok(stay)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<GuestStay>> {
    let stay = sqlx::query_as::<_, GuestStay>(&format!(
        "SELECT {COLUMNS} FROM guest_stay WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(stay)
}

pub async fn find_by_id_in(conn: &mut SqliteConnection, id: i64) -> RepoResult<Option<GuestStay>> {
    let stay = sqlx::query_as::<_, GuestStay>(&format!(
        "SELECT {COLUMNS} FROM guest_stay WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(conn)
    .await?;
    Ok(stay)
}

pub async fn find_active_by_room(pool: &SqlitePool, number: &str) -> RepoResult<Option<GuestStay>> {
    let stay = sqlx::query_as::<_, GuestStay>(&format!(
        "SELECT {COLUMNS} FROM guest_stay WHERE room_number = ? AND status = 'ACTIVE'"
    ))
    .bind(number)
    .fetch_optional(pool)
    .await?;
    Ok(stay)
}

pub async fn has_active_in(conn: &mut SqliteConnection, number: &str) -> RepoResult<bool> {
    let count = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM guest_stay WHERE room_number = ? AND status = 'ACTIVE'",
    )
    .bind(number)
    .fetch_one(conn)
    .await?;
    Ok(count > 0)
}

pub async fn list(pool: &SqlitePool, status: Option<StayStatus>) -> RepoResult<Vec<GuestStay>> {
    let stays = sqlx::query_as::<_, GuestStay>(&format!(
        "SELECT {COLUMNS} FROM guest_stay WHERE (?1 IS NULL OR status = ?1) ORDER BY checkin_at DESC"
    ))
    .bind(status)
    .fetch_all(pool)
    .await?;
    Ok(stays)
}

/// ACTIVE stays whose checkout falls in `[start, end)`
pub async fn find_active_checkouts_between(
    pool: &SqlitePool,
    start: i64,
    end: i64,
) -> RepoResult<Vec<GuestStay>> {
    let stays = sqlx::query_as::<_, GuestStay>(&format!(
        "SELECT {COLUMNS} FROM guest_stay WHERE status = 'ACTIVE' AND checkout_date >= ?1 AND checkout_date < ?2 ORDER BY checkout_date, room_number"
    ))
    .bind(start)
    .bind(end)
    .fetch_all(pool)
    .await?;
    Ok(stays)
}

pub async fn update(pool: &SqlitePool, id: i64, data: &StayUpdate) -> RepoResult<Option<GuestStay>> {
    let stay = sqlx::query_as::<_, GuestStay>(&format!(
        "UPDATE guest_stay SET guest_name = COALESCE(?1, guest_name), national_id = COALESCE(?2, national_id), phone = COALESCE(?3, phone), checkout_date = COALESCE(?4, checkout_date), extra_bed = COALESCE(?5, extra_bed), payment_type = COALESCE(?6, payment_type), amount_paid = COALESCE(?7, amount_paid), extra_charges = COALESCE(?8, extra_charges), paid = COALESCE(?9, paid), updated_at = ?10 WHERE id = ?11 RETURNING {COLUMNS}"
    ))
    .bind(&data.guest_name)
    .bind(&data.national_id)
    .bind(&data.phone)
    .bind(data.checkout_date)
    .bind(data.extra_bed)
    .bind(data.payment_type)
    .bind(data.amount_paid)
    .bind(data.extra_charges)
    .bind(data.paid)
    .bind(shared::util::now_millis())
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(stay)
}

/// ACTIVE → CHECKED_OUT; `None` when the stay is missing or already closed
pub async fn close_active(
    conn: &mut SqliteConnection,
    id: i64,
    now: i64,
) -> RepoResult<Option<GuestStay>> {
    let stay = sqlx::query_as::<_, GuestStay>(&format!(
        "UPDATE guest_stay SET status = 'CHECKED_OUT', checkout_date = ?1, updated_at = ?1 WHERE id = ?2 AND status = 'ACTIVE' RETURNING {COLUMNS}"
    ))
    .bind(now)
    .bind(id)
    .fetch_optional(conn)
    .await?;
    Ok(stay)
}

/// Atomic `food_charges += amount` on the ACTIVE stay `id` in `room_number`
pub async fn add_food_charge(
    conn: &mut SqliteConnection,
    id: i64,
    room_number: &str,
    amount: f64,
) -> RepoResult<bool> {
    let result = sqlx::query(
        "UPDATE guest_stay SET food_charges = food_charges + ?1, updated_at = ?2 WHERE id = ?3 AND room_number = ?4 AND status = 'ACTIVE'",
    )
    .bind(amount)
    .bind(shared::util::now_millis())
    .bind(id)
    .bind(room_number)
    .execute(conn)
    .await?;
    Ok(result.rows_affected() == 1)
}

/// Atomic `food_charges -= amount`, floored at zero
pub async fn subtract_food_charge(
    conn: &mut SqliteConnection,
    id: i64,
    amount: f64,
) -> RepoResult<bool> {
    let result = sqlx::query(
        "UPDATE guest_stay SET food_charges = MAX(food_charges - ?1, 0), updated_at = ?2 WHERE id = ?3",
    )
    .bind(amount)
    .bind(shared::util::now_millis())
    .bind(id)
    .execute(conn)
    .await?;
    Ok(result.rows_affected() == 1)
}
