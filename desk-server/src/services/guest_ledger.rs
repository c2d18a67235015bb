//! Guest Ledger
//!
//! Check-in and checkout are single transactions that move both the stay and
//! the room. The "no other ACTIVE stay" rule lives in the insert's `WHERE`
//! clause, backed by `uq_guest_stay_active_room`.

use chrono_tz::Tz;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{CheckInRequest, GuestStay, RoomStatus, StayStatus, StayUpdate};
use sqlx::SqlitePool;

use crate::db::repository::{RepoError, guest_stay, room};
use crate::db::{self, Tx};
use crate::services::room_registry::room_not_found;
use crate::utils::time;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_amount, validate_optional_text,
    validate_required_text,
};

const OCCUPIED: [RoomStatus; 3] = [
    RoomStatus::FullNight,
    RoomStatus::DayCaution,
    RoomStatus::Session,
];

#[derive(Clone)]
pub struct GuestLedger {
    pool: SqlitePool,
    tz: Tz,
}

impl GuestLedger {
    pub fn new(pool: SqlitePool, tz: Tz) -> Self {
        Self { pool, tz }
    }

    /// Open an ACTIVE stay and move the room to the occupancy status of its type
    pub async fn check_in(&self, data: CheckInRequest) -> AppResult<GuestStay> {
        validate_check_in(&data)?;

        let now = shared::util::now_millis();
        let mut tx = db::begin(&self.pool).await?;

        let inserted = guest_stay::insert_if_vacant(&mut *tx, &data, now)
            .await
            .map_err(|e| match e {
                RepoError::Duplicate(_) => room_occupied(&data.room_number),
                other => other.into(),
            })?;
        let Some(stay) = inserted else {
            let err = diagnose_check_in_miss(&mut tx, &data.room_number).await?;
            return Err(err);
        };

        let occupancy = data.room_type.occupancy_status();
        if !room::transition(&mut *tx, &stay.room_number, &[RoomStatus::Available], occupancy)
            .await?
        {
            return Err(AppError::with_message(
                ErrorCode::RoomStatusConflict,
                format!("Room {} changed during check-in", stay.room_number),
            ));
        }
        db::commit(tx).await?;

        tracing::info!(
            stay_id = stay.id,
            room_number = %stay.room_number,
            room_status = %occupancy,
            "Guest checked in"
        );
        Ok(stay)
    }

    pub async fn update_stay(&self, id: i64, patch: StayUpdate) -> AppResult<GuestStay> {
        if let Some(name) = &patch.guest_name {
            validate_required_text(name, "guest_name", MAX_NAME_LEN)?;
        }
        validate_optional_text(&patch.national_id, "national_id", MAX_SHORT_TEXT_LEN)?;
        validate_optional_text(&patch.phone, "phone", MAX_SHORT_TEXT_LEN)?;
        for (value, field) in [
            (patch.amount_paid, "amount_paid"),
            (patch.extra_charges, "extra_charges"),
        ] {
            if let Some(v) = value {
                validate_amount(v, field)?;
            }
        }
        if patch.is_empty() {
            return self.get_stay(id).await;
        }

        let stay = guest_stay::update(&self.pool, id, &patch)
            .await?
            .ok_or_else(|| stay_not_found(id))?;
        tracing::info!(stay_id = id, "Stay updated");
        Ok(stay)
    }

    /// Close the stay and hand the room to housekeeping, atomically
    pub async fn checkout(&self, id: i64) -> AppResult<GuestStay> {
        let now = shared::util::now_millis();
        let mut tx = db::begin(&self.pool).await?;

        let Some(stay) = guest_stay::close_active(&mut *tx, id, now).await? else {
            let err = match guest_stay::find_by_id_in(&mut *tx, id).await? {
                Some(_) => AppError::with_message(
                    ErrorCode::AlreadyCheckedOut,
                    format!("Stay {id} is already checked out"),
                ),
                None => stay_not_found(id),
            };
            return Err(err);
        };

        if !room::transition(&mut *tx, &stay.room_number, &OCCUPIED, RoomStatus::Housekeeping)
            .await?
        {
            return Err(AppError::with_message(
                ErrorCode::RoomStatusConflict,
                format!("Room {} is not occupied", stay.room_number),
            ));
        }
        db::commit(tx).await?;

        tracing::info!(
            stay_id = stay.id,
            room_number = %stay.room_number,
            food_charges = stay.food_charges,
            "Guest checked out, room sent to housekeeping"
        );
        Ok(stay)
    }

    pub async fn get_stay(&self, id: i64) -> AppResult<GuestStay> {
        guest_stay::find_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| stay_not_found(id))
    }

    pub async fn list_stays(&self, status: Option<StayStatus>) -> AppResult<Vec<GuestStay>> {
        Ok(guest_stay::list(&self.pool, status).await?)
    }

    pub async fn active_stay_for_room(&self, number: &str) -> AppResult<GuestStay> {
        guest_stay::find_active_by_room(&self.pool, number)
            .await?
            .ok_or_else(|| {
                AppError::with_message(
                    ErrorCode::StayNotFound,
                    format!("No active stay in room {number}"),
                )
                .with_detail("room_number", number)
            })
    }

    /// ACTIVE stays whose planned checkout falls on today (operating timezone)
    pub async fn todays_checkouts(&self) -> AppResult<Vec<GuestStay>> {
        let today = time::today(self.tz);
        let start = time::day_start_millis(today, self.tz);
        let end = time::day_end_millis(today, self.tz);
        Ok(guest_stay::find_active_checkouts_between(&self.pool, start, end).await?)
    }
}

fn validate_check_in(data: &CheckInRequest) -> AppResult<()> {
    validate_required_text(&data.guest_name, "guest_name", MAX_NAME_LEN)?;
    validate_required_text(&data.room_number, "room_number", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&data.national_id, "national_id", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&data.phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validate_amount(data.amount_paid, "amount_paid")?;
    validate_amount(data.extra_charges, "extra_charges")?;
    if data.checkout_date <= 0 {
        return Err(AppError::with_message(
            ErrorCode::InvalidStayDates,
            "checkout_date must be a Unix millis timestamp",
        ));
    }
    Ok(())
}

async fn diagnose_check_in_miss(tx: &mut Tx, number: &str) -> AppResult<AppError> {
    let Some(current) = room::find_by_number_in(&mut **tx, number).await? else {
        return Ok(room_not_found(number));
    };
    if current.status.is_occupied() || guest_stay::has_active_in(&mut **tx, number).await? {
        return Ok(room_occupied(number));
    }
    Ok(AppError::with_message(
        ErrorCode::RoomNotAvailable,
        format!("Room {number} is {}", current.status),
    )
    .with_detail("current_status", current.status.as_str()))
}

fn room_occupied(number: &str) -> AppError {
    AppError::with_message(ErrorCode::RoomOccupied, format!("Room {number} is occupied"))
        .with_detail("room_number", number)
}

pub(crate) fn stay_not_found(id: i64) -> AppError {
    AppError::with_message(ErrorCode::StayNotFound, format!("Stay {id} not found"))
        .with_detail("stay_id", id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::testing::{seed_room, test_pool};
    use shared::models::RoomType;

    fn check_in_request(room: &str, room_type: RoomType) -> CheckInRequest {
        CheckInRequest {
            guest_name: "U Ba".into(),
            national_id: Some("12/ABC(N)123456".into()),
            phone: None,
            room_type,
            room_number: room.into(),
            checkout_date: shared::util::now_millis() + 86_400_000,
            extra_bed: false,
            payment_type: None,
            amount_paid: 0.0,
            extra_charges: 0.0,
            paid: false,
        }
    }

    async fn room_status(pool: &SqlitePool, number: &str) -> RoomStatus {
        room::find_by_number(pool, number)
            .await
            .unwrap()
            .unwrap()
            .status
    }

    #[tokio::test]
    async fn test_check_in_occupies_room() {
        let pool = test_pool().await;
        seed_room(&pool, "101", "AVAILABLE").await;
        let ledger = GuestLedger::new(pool.clone(), chrono_tz::UTC);

        let stay = ledger
            .check_in(check_in_request("101", RoomType::DayCaution))
            .await
            .unwrap();
        assert_eq!(stay.status, StayStatus::Active);
        assert_eq!(stay.food_charges, 0.0);
        assert_eq!(room_status(&pool, "101").await, RoomStatus::DayCaution);
        assert_eq!(ledger.active_stay_for_room("101").await.unwrap().id, stay.id);
    }

    #[tokio::test]
    async fn test_second_check_in_is_room_occupied() {
        let pool = test_pool().await;
        seed_room(&pool, "101", "AVAILABLE").await;
        let ledger = GuestLedger::new(pool, chrono_tz::UTC);

        ledger
            .check_in(check_in_request("101", RoomType::FullNight))
            .await
            .unwrap();
        let err = ledger
            .check_in(check_in_request("101", RoomType::Session))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::RoomOccupied);
    }

    #[tokio::test]
    async fn test_check_in_rejects_unready_and_missing_rooms() {
        let pool = test_pool().await;
        seed_room(&pool, "102", "HOUSEKEEPING").await;
        let ledger = GuestLedger::new(pool, chrono_tz::UTC);

        let err = ledger
            .check_in(check_in_request("102", RoomType::FullNight))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::RoomNotAvailable);

        let err = ledger
            .check_in(check_in_request("404", RoomType::FullNight))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::RoomNotFound);
    }

    #[tokio::test]
    async fn test_check_in_validates_before_writing() {
        let pool = test_pool().await;
        seed_room(&pool, "101", "AVAILABLE").await;
        let ledger = GuestLedger::new(pool.clone(), chrono_tz::UTC);

        let mut req = check_in_request("101", RoomType::FullNight);
        req.guest_name = "  ".into();
        let err = ledger.check_in(req).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(room_status(&pool, "101").await, RoomStatus::Available);
    }

    #[tokio::test]
    async fn test_checkout_then_again() {
        let pool = test_pool().await;
        seed_room(&pool, "101", "AVAILABLE").await;
        let ledger = GuestLedger::new(pool.clone(), chrono_tz::UTC);
        let stay = ledger
            .check_in(check_in_request("101", RoomType::FullNight))
            .await
            .unwrap();

        let closed = ledger.checkout(stay.id).await.unwrap();
        assert_eq!(closed.status, StayStatus::CheckedOut);
        assert_eq!(room_status(&pool, "101").await, RoomStatus::Housekeeping);

        let err = ledger.checkout(stay.id).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::AlreadyCheckedOut);
        let err = ledger.checkout(9999).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::StayNotFound);
    }

    #[tokio::test]
    async fn test_update_stay_patches_fields() {
        let pool = test_pool().await;
        seed_room(&pool, "101", "AVAILABLE").await;
        let ledger = GuestLedger::new(pool, chrono_tz::UTC);
        let stay = ledger
            .check_in(check_in_request("101", RoomType::FullNight))
            .await
            .unwrap();

        let updated = ledger
            .update_stay(
                stay.id,
                StayUpdate {
                    amount_paid: Some(63000.0),
                    paid: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.amount_paid, 63000.0);
        assert!(updated.paid);
        assert_eq!(updated.guest_name, "U Ba");

        let err = ledger
            .update_stay(
                9999,
                StayUpdate {
                    paid: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::StayNotFound);
    }

    #[tokio::test]
    async fn test_todays_checkouts_only_lists_today() {
        let pool = test_pool().await;
        seed_room(&pool, "101", "AVAILABLE").await;
        seed_room(&pool, "102", "AVAILABLE").await;
        let ledger = GuestLedger::new(pool, chrono_tz::UTC);

        let today = time::today(chrono_tz::UTC);
        let mut leaving = check_in_request("101", RoomType::FullNight);
        leaving.checkout_date = time::day_start_millis(today, chrono_tz::UTC) + 12 * 3_600_000;
        let leaving = ledger.check_in(leaving).await.unwrap();

        let mut staying = check_in_request("102", RoomType::FullNight);
        staying.checkout_date = time::day_end_millis(today, chrono_tz::UTC) + 3_600_000;
        ledger.check_in(staying).await.unwrap();

        let due = ledger.todays_checkouts().await.unwrap();
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].id, leaving.id);
    }
}
