//! Reservations
//!
//! Bookings are independent of rooms until check-in; dates are calendar days
//! in the operating timezone.

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Reservation, ReservationCreate, ReservationUpdate};
use sqlx::SqlitePool;

use crate::db::repository::reservation;
use crate::utils::time;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, validate_amount, validate_optional_text,
    validate_required_text,
};

#[derive(Clone)]
pub struct Reservations {
    pool: SqlitePool,
}

impl Reservations {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, data: ReservationCreate) -> AppResult<Reservation> {
        validate_required_text(&data.guest_name, "guest_name", MAX_NAME_LEN)?;
        validate_optional_text(&data.national_id, "national_id", MAX_SHORT_TEXT_LEN)?;
        validate_optional_text(&data.phone, "phone", MAX_SHORT_TEXT_LEN)?;
        validate_optional_text(&data.notes, "notes", MAX_NOTE_LEN)?;
        validate_counts(Some(data.guest_count), Some(data.room_count))?;
        validate_amount(data.amount_paid, "amount_paid")?;
        validate_dates(&data.checkin_date, &data.checkout_date)?;

        let created = reservation::create(&self.pool, &data).await?;
        tracing::info!(
            reservation_id = created.id,
            checkin_date = %created.checkin_date,
            room_count = created.room_count,
            "Reservation created"
        );
        Ok(created)
    }

    pub async fn get(&self, id: i64) -> AppResult<Reservation> {
        reservation::find_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| reservation_not_found(id))
    }

    pub async fn list(&self) -> AppResult<Vec<Reservation>> {
        Ok(reservation::find_all(&self.pool).await?)
    }

    pub async fn list_by_checkin_date(&self, date: &str) -> AppResult<Vec<Reservation>> {
        let date = time::format_date(time::parse_date(date)?);
        Ok(reservation::find_by_checkin_date(&self.pool, &date).await?)
    }

    /// Patch a reservation; the resulting date pair is re-checked against the stored one
    pub async fn update(&self, id: i64, patch: ReservationUpdate) -> AppResult<Reservation> {
        if let Some(name) = &patch.guest_name {
            validate_required_text(name, "guest_name", MAX_NAME_LEN)?;
        }
        validate_optional_text(&patch.national_id, "national_id", MAX_SHORT_TEXT_LEN)?;
        validate_optional_text(&patch.phone, "phone", MAX_SHORT_TEXT_LEN)?;
        validate_optional_text(&patch.notes, "notes", MAX_NOTE_LEN)?;
        validate_counts(patch.guest_count, patch.room_count)?;
        if let Some(amount) = patch.amount_paid {
            validate_amount(amount, "amount_paid")?;
        }

        if patch.checkin_date.is_some() || patch.checkout_date.is_some() {
            let current = self.get(id).await?;
            let checkin = patch.checkin_date.as_deref().unwrap_or(&current.checkin_date);
            let checkout = patch.checkout_date.as_deref().unwrap_or(&current.checkout_date);
            validate_dates(checkin, checkout)?;
        }

        let updated = reservation::update(&self.pool, id, &patch)
            .await?
            .ok_or_else(|| reservation_not_found(id))?;
        tracing::info!(reservation_id = id, status = ?updated.status, "Reservation updated");
        Ok(updated)
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        if !reservation::delete(&self.pool, id).await? {
            return Err(reservation_not_found(id));
        }
        tracing::info!(reservation_id = id, "Reservation deleted");
        Ok(())
    }
}

fn validate_dates(checkin: &str, checkout: &str) -> AppResult<()> {
    let checkin_date = time::parse_date(checkin)?;
    let checkout_date = time::parse_date(checkout)?;
    if checkout_date < checkin_date {
        return Err(AppError::with_message(
            ErrorCode::InvalidStayDates,
            format!("Checkout {checkout} precedes check-in {checkin}"),
        ));
    }
    Ok(())
}

fn validate_counts(guest_count: Option<i64>, room_count: Option<i64>) -> AppResult<()> {
    for (value, field) in [(guest_count, "guest_count"), (room_count, "room_count")] {
        if let Some(value) = value
            && value < 1
        {
            return Err(AppError::validation(format!("{field} must be at least 1")));
        }
    }
    Ok(())
}

fn reservation_not_found(id: i64) -> AppError {
    AppError::with_message(
        ErrorCode::ReservationNotFound,
        format!("Reservation {id} not found"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::testing::test_pool;
    use shared::models::{ReservationStatus, RoomType};

    fn booking(checkin: &str, checkout: &str) -> ReservationCreate {
        ReservationCreate {
            guest_name: "U Ba".into(),
            national_id: None,
            phone: Some("09-123456".into()),
            room_type: RoomType::FullNight,
            guest_count: 2,
            room_count: 1,
            checkin_date: checkin.into(),
            checkout_date: checkout.into(),
            extra_bed: false,
            amount_paid: 0.0,
            notes: None,
        }
    }

    #[tokio::test]
    async fn test_reservation_lifecycle() {
        let reservations = Reservations::new(test_pool().await);
        let created = reservations
            .create(booking("2026-03-01", "2026-03-03"))
            .await
            .unwrap();
        assert_eq!(created.status, ReservationStatus::Confirmed);

        let on_day = reservations.list_by_checkin_date("2026-03-01").await.unwrap();
        assert_eq!(on_day.len(), 1);
        assert!(reservations
            .list_by_checkin_date("2026-03-02")
            .await
            .unwrap()
            .is_empty());

        let updated = reservations
            .update(
                created.id,
                ReservationUpdate {
                    status: Some(ReservationStatus::CheckedIn),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.status, ReservationStatus::CheckedIn);

        reservations.delete(created.id).await.unwrap();
        let err = reservations.get(created.id).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ReservationNotFound);
    }

    #[tokio::test]
    async fn test_reservation_dates_checked() {
        let reservations = Reservations::new(test_pool().await);
        let err = reservations
            .create(booking("2026-03-03", "2026-03-01"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidStayDates);

        let err = reservations
            .create(booking("03/01/2026", "2026-03-04"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);

        let created = reservations
            .create(booking("2026-03-01", "2026-03-03"))
            .await
            .unwrap();
        let err = reservations
            .update(
                created.id,
                ReservationUpdate {
                    checkout_date: Some("2026-02-28".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidStayDates);
    }

    #[tokio::test]
    async fn test_counts_must_be_positive() {
        let reservations = Reservations::new(test_pool().await);
        let mut data = booking("2026-03-01", "2026-03-02");
        data.room_count = 0;
        let err = reservations.create(data).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }
}
