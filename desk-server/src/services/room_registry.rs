//! Room Registry
//!
//! Owns `room.status`. Manual status changes go through [`RoomRegistry::set_status`];
//! occupancy and cleaning statuses are only written by the guest ledger and the
//! cleaning coordinator inside their own transactions.

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Room, RoomCreate, RoomFilter, RoomStatus, RoomStatusCount, RoomStatusUpdate};
use sqlx::SqlitePool;

use crate::db::repository::{RepoError, cleaning, guest_stay, room};
use crate::db::{self, Tx};
use crate::utils::validation::{MAX_SHORT_TEXT_LEN, validate_required_text};

#[derive(Clone)]
pub struct RoomRegistry {
    pool: SqlitePool,
}

impl RoomRegistry {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Add a room in `AVAILABLE`
    pub async fn provision(&self, data: RoomCreate) -> AppResult<Room> {
        validate_required_text(&data.room_number, "room_number", MAX_SHORT_TEXT_LEN)?;
        let data = RoomCreate {
            room_number: data.room_number.trim().to_string(),
            floor: data.floor,
        };
        let created = room::create(&self.pool, &data).await.map_err(|e| match e {
            RepoError::Duplicate(_) => AppError::with_message(
                ErrorCode::RoomNumberExists,
                format!("Room {} already exists", data.room_number),
            ),
            other => other.into(),
        })?;
        tracing::info!(room_number = %created.room_number, floor = created.floor, "Room provisioned");
        Ok(created)
    }

    pub async fn get(&self, number: &str) -> AppResult<Room> {
        room::find_by_number(&self.pool, number)
            .await?
            .ok_or_else(|| room_not_found(number))
    }

    pub async fn list(&self, filter: &RoomFilter) -> AppResult<Vec<Room>> {
        Ok(room::list(&self.pool, filter).await?)
    }

    /// Room count for every status, zeros included
    pub async fn count_by_status(&self) -> AppResult<Vec<RoomStatusCount>> {
        let stored = room::count_by_status(&self.pool).await?;
        Ok(RoomStatus::ALL
            .iter()
            .map(|status| RoomStatusCount {
                status: *status,
                count: stored
                    .iter()
                    .find(|c| c.status == *status)
                    .map(|c| c.count)
                    .unwrap_or(0),
            })
            .collect())
    }

    /// Manual status change with optional compare-and-swap on the current status.
    ///
    /// Occupancy statuses and `CLEANING_IN_PROGRESS` are rejected outright; a room
    /// holding an ACTIVE stay or an open cleaning task is never touched.
    pub async fn set_status(&self, number: &str, update: RoomStatusUpdate) -> AppResult<Room> {
        let target = update.status;
        if target.is_occupied() || target == RoomStatus::CleaningInProgress {
            return Err(AppError::with_message(
                ErrorCode::InvalidStatusTransition,
                format!("{target} is set by check-in or cleaning, not directly"),
            ));
        }

        let from = RoomStatus::predecessors_of(target);
        let mut tx = db::begin(&self.pool).await?;
        let updated =
            room::set_status_guarded(&mut *tx, number, &from, target, update.expected_status)
                .await?;

        let Some(updated) = updated else {
            let err = diagnose_status_miss(&mut tx, number, target, update.expected_status).await?;
            return Err(err);
        };
        db::commit(tx).await?;

        tracing::info!(room_number = %number, status = %target, "Room status updated");
        Ok(updated)
    }
}

/// Work out why a guarded status write matched no row. Runs in the same
/// transaction, after the write attempt, so the answer is not stale.
async fn diagnose_status_miss(
    tx: &mut Tx,
    number: &str,
    target: RoomStatus,
    expected: Option<RoomStatus>,
) -> AppResult<AppError> {
    let Some(current) = room::find_by_number_in(&mut **tx, number).await? else {
        return Ok(room_not_found(number));
    };
    if let Some(expected) = expected
        && expected != current.status
    {
        return Ok(AppError::with_message(
            ErrorCode::RoomStatusConflict,
            format!("Room {number} is {}, expected {expected}", current.status),
        )
        .with_detail("current_status", current.status.as_str()));
    }
    if guest_stay::has_active_in(&mut **tx, number).await? {
        return Ok(AppError::with_message(
            ErrorCode::RoomOccupied,
            format!("Room {number} has an active stay"),
        ));
    }
    if cleaning::find_open_by_room_in(&mut **tx, number).await?.is_some() {
        return Ok(AppError::with_message(
            ErrorCode::AlreadyTasked,
            format!("Room {number} has an open cleaning task"),
        ));
    }
    Ok(AppError::with_message(
        ErrorCode::InvalidStatusTransition,
        format!("Room {number} cannot move from {} to {target}", current.status),
    )
    .with_detail("current_status", current.status.as_str()))
}

pub(crate) fn room_not_found(number: &str) -> AppError {
    AppError::with_message(ErrorCode::RoomNotFound, format!("Room {number} not found"))
        .with_detail("room_number", number)
}
