//! Reservation Repository

use super::RepoResult;
use shared::models::{Reservation, ReservationCreate, ReservationStatus, ReservationUpdate};
use sqlx::SqlitePool;

const COLUMNS: &str = "id, guest_name, national_id, phone, room_type, guest_count, room_count, checkin_date, checkout_date, status, extra_bed, amount_paid, notes, created_at, updated_at";

pub async fn create(pool: &SqlitePool, data: &ReservationCreate) -> RepoResult<Reservation> {
    let now = shared::util::now_millis();
    let reservation = sqlx::query_as::<_, Reservation>(&format!(
        "INSERT INTO reservation (guest_name, national_id, phone, room_type, guest_count, room_count, checkin_date, checkout_date, status, extra_bed, amount_paid, notes, created_at, updated_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?13) RETURNING {COLUMNS}"
    ))
    .bind(&data.guest_name)
    .bind(&data.national_id)
    .bind(&data.phone)
    .bind(data.room_type)
    .bind(data.guest_count)
    .bind(data.room_count)
    .bind(&data.checkin_date)
    .bind(&data.checkout_date)
    .bind(ReservationStatus::Confirmed)
    .bind(data.extra_bed)
    .bind(data.amount_paid)
    .bind(&data.notes)
    .bind(now)
    .fetch_one(pool)
    .await?;
    Ok(reservation)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Reservation>> {
    let reservation = sqlx::query_as::<_, Reservation>(&format!(
        "SELECT {COLUMNS} FROM reservation WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(reservation)
}

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Reservation>> {
    let reservations = sqlx::query_as::<_, Reservation>(&format!(
        "SELECT {COLUMNS} FROM reservation ORDER BY checkin_date DESC, id DESC"
    ))
    .fetch_all(pool)
    .await?;
    Ok(reservations)
}

pub async fn find_by_checkin_date(pool: &SqlitePool, date: &str) -> RepoResult<Vec<Reservation>> {
    let reservations = sqlx::query_as::<_, Reservation>(&format!(
        "SELECT {COLUMNS} FROM reservation WHERE checkin_date = ? ORDER BY id"
    ))
    .bind(date)
    .fetch_all(pool)
    .await?;
    Ok(reservations)
}

pub async fn update(
    pool: &SqlitePool,
    id: i64,
    data: &ReservationUpdate,
) -> RepoResult<Option<Reservation>> {
    let reservation = sqlx::query_as::<_, Reservation>(&format!(
        "UPDATE reservation SET \
            guest_name = COALESCE(?1, guest_name), \
            national_id = COALESCE(?2, national_id), \
            phone = COALESCE(?3, phone), \
            room_type = COALESCE(?4, room_type), \
            guest_count = COALESCE(?5, guest_count), \
            room_count = COALESCE(?6, room_count), \
            checkin_date = COALESCE(?7, checkin_date), \
            checkout_date = COALESCE(?8, checkout_date), \
            status = COALESCE(?9, status), \
            extra_bed = COALESCE(?10, extra_bed), \
            amount_paid = COALESCE(?11, amount_paid), \
            notes = COALESCE(?12, notes), \
            updated_at = ?13 \
         WHERE id = ?14 RETURNING {COLUMNS}"
    ))
    .bind(&data.guest_name)
    .bind(&data.national_id)
    .bind(&data.phone)
    .bind(data.room_type)
    .bind(data.guest_count)
    .bind(data.room_count)
    .bind(&data.checkin_date)
    .bind(&data.checkout_date)
    .bind(data.status)
    .bind(data.extra_bed)
    .bind(data.amount_paid)
    .bind(&data.notes)
    .bind(shared::util::now_millis())
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(reservation)
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let result = sqlx::query("DELETE FROM reservation WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::RoomType;
    use crate::db::repository::testing::test_pool;

    fn booking(name: &str, checkin: &str) -> ReservationCreate {
        ReservationCreate {
            guest_name: name.into(),
            national_id: None,
            phone: Some("09-555".into()),
            room_type: RoomType::FullNight,
            guest_count: 2,
            room_count: 1,
            checkin_date: checkin.into(),
            checkout_date: "2026-03-10".into(),
            extra_bed: false,
            amount_paid: 0.0,
            notes: None,
        }
    }

    #[tokio::test]
    async fn test_create_and_list_by_checkin() {
        let pool = test_pool().await;
        let first = create(&pool, &booking("Hla Hla", "2026-03-05")).await.unwrap();
        create(&pool, &booking("Mya Mya", "2026-03-06")).await.unwrap();
        assert_eq!(first.status, ReservationStatus::Confirmed);

        let on_fifth = find_by_checkin_date(&pool, "2026-03-05").await.unwrap();
        assert_eq!(on_fifth.len(), 1);
        assert_eq!(on_fifth[0].id, first.id);
        assert_eq!(find_all(&pool).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let pool = test_pool().await;
        let created = create(&pool, &booking("Hla Hla", "2026-03-05")).await.unwrap();

        let updated = update(
            &pool,
            created.id,
            &ReservationUpdate {
                status: Some(ReservationStatus::Cancelled),
                notes: Some("called to cancel".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
        assert_eq!(updated.status, ReservationStatus::Cancelled);
        assert_eq!(updated.guest_name, "Hla Hla");

        assert!(delete(&pool, created.id).await.unwrap());
        assert!(update(&pool, created.id, &ReservationUpdate::default())
            .await
            .unwrap()
            .is_none());
    }
}
