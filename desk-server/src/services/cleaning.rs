//! Cleaning Task Coordinator
//!
//! Every housekeeping action is one transaction that moves the cleaning
//! record and the room together. A room is `CLEANING_IN_PROGRESS` exactly
//! while one `IN_PROGRESS` record references it.

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{
    AssignStaffRequest, CleaningBoardRoom, CleaningRecord, CleaningStatus, RoomStatus,
};
use sqlx::SqlitePool;

use crate::auth::CurrentUser;
use crate::db::repository::{RepoError, cleaning, room, staff};
use crate::db::{self, Tx};
use crate::services::room_registry::room_not_found;

const DEFAULT_HISTORY_LIMIT: i64 = 50;
const MAX_HISTORY_LIMIT: i64 = 500;

#[derive(Clone)]
pub struct CleaningCoordinator {
    pool: SqlitePool,
}

impl CleaningCoordinator {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Claim a HOUSEKEEPING room. The room keeps its status until cleaning starts.
    pub async fn start_task(&self, room_number: &str, staff_id: i64) -> AppResult<CleaningRecord> {
        let now = shared::util::now_millis();
        let mut tx = db::begin(&self.pool).await?;

        let inserted = cleaning::insert_if_eligible(
            &mut *tx,
            room_number,
            staff_id,
            CleaningStatus::TaskStarted,
            now,
        )
        .await
        .map_err(|e| tasked_on_duplicate(e, room_number))?;
        let Some(record) = inserted else {
            let err = diagnose_task_miss(&mut tx, room_number).await?;
            return Err(err);
        };
        db::commit(tx).await?;

        tracing::info!(
            record_id = record.id,
            room_number = %room_number,
            staff_id,
            "Cleaning task started"
        );
        Ok(record)
    }

    /// Begin cleaning: promote the caller's claimed task, or open one directly,
    /// and move the room to `CLEANING_IN_PROGRESS` in the same transaction.
    pub async fn start_cleaning(
        &self,
        room_number: &str,
        staff_id: i64,
    ) -> AppResult<CleaningRecord> {
        let now = shared::util::now_millis();
        let mut tx = db::begin(&self.pool).await?;

        let record = match cleaning::promote_started(&mut *tx, room_number, staff_id, now).await? {
            Some(record) => record,
            None => {
                let inserted = cleaning::insert_if_eligible(
                    &mut *tx,
                    room_number,
                    staff_id,
                    CleaningStatus::InProgress,
                    now,
                )
                .await
                .map_err(|e| tasked_on_duplicate(e, room_number))?;
                match inserted {
                    Some(record) => record,
                    None => {
                        let err = diagnose_task_miss(&mut tx, room_number).await?;
                        return Err(err);
                    }
                }
            }
        };

        enter_cleaning(&mut tx, room_number).await?;
        db::commit(tx).await?;

        tracing::info!(
            record_id = record.id,
            room_number = %room_number,
            staff_id,
            "Cleaning in progress"
        );
        Ok(record)
    }

    /// Finish the caller's IN_PROGRESS task and release the room as AVAILABLE
    pub async fn complete_cleaning(
        &self,
        room_number: &str,
        staff_id: i64,
    ) -> AppResult<CleaningRecord> {
        let now = shared::util::now_millis();
        let mut tx = db::begin(&self.pool).await?;

        let completed =
            cleaning::complete_in_progress(&mut *tx, room_number, staff_id, now).await?;
        let Some(record) = completed else {
            if room::find_by_number_in(&mut *tx, room_number).await?.is_none() {
                return Err(room_not_found(room_number));
            }
            return Err(AppError::with_message(
                ErrorCode::NoActiveCleaning,
                format!("Staff {staff_id} has no cleaning in progress for room {room_number}"),
            )
            .with_detail("room_number", room_number)
            .with_detail("staff_id", staff_id));
        };

        if !room::transition(
            &mut *tx,
            room_number,
            &[RoomStatus::CleaningInProgress],
            RoomStatus::Available,
        )
        .await?
        {
            return Err(status_conflict(room_number, "completion"));
        }
        db::commit(tx).await?;

        tracing::info!(
            record_id = record.id,
            room_number = %room_number,
            staff_id,
            "Cleaning completed"
        );
        Ok(record)
    }

    /// Admin override: open an IN_PROGRESS task for `staff_id` directly
    pub async fn assign_staff(
        &self,
        caller: &CurrentUser,
        req: AssignStaffRequest,
    ) -> AppResult<CleaningRecord> {
        caller.require_admin()?;
        if staff::find_by_id(&self.pool, req.staff_id).await?.is_none() {
            return Err(AppError::with_message(
                ErrorCode::StaffNotFound,
                format!("Staff {} not found", req.staff_id),
            ));
        }

        let now = shared::util::now_millis();
        let mut tx = db::begin(&self.pool).await?;

        let inserted = cleaning::insert_if_eligible(
            &mut *tx,
            &req.room_number,
            req.staff_id,
            CleaningStatus::InProgress,
            now,
        )
        .await
        .map_err(|e| tasked_on_duplicate(e, &req.room_number))?;
        let Some(record) = inserted else {
            let err = diagnose_task_miss(&mut tx, &req.room_number).await?;
            return Err(err);
        };
        enter_cleaning(&mut tx, &req.room_number).await?;
        db::commit(tx).await?;

        tracing::info!(
            record_id = record.id,
            room_number = %req.room_number,
            staff_id = req.staff_id,
            assigned_by = caller.id,
            "Cleaning assigned"
        );
        Ok(record)
    }

    /// Rooms awaiting or under cleaning, flagged for the caller
    pub async fn board(&self, staff_id: i64) -> AppResult<Vec<CleaningBoardRoom>> {
        Ok(cleaning::board(&self.pool, staff_id).await?)
    }

    pub async fn history(
        &self,
        staff_id: Option<i64>,
        limit: Option<i64>,
    ) -> AppResult<Vec<CleaningRecord>> {
        let limit = limit
            .unwrap_or(DEFAULT_HISTORY_LIMIT)
            .clamp(1, MAX_HISTORY_LIMIT);
        Ok(cleaning::history(&self.pool, staff_id, limit).await?)
    }

    pub async fn active_task(&self, room_number: &str) -> AppResult<CleaningRecord> {
        if let Some(record) = cleaning::find_open_by_room(&self.pool, room_number).await? {
            return Ok(record);
        }
        if room::find_by_number(&self.pool, room_number).await?.is_none() {
            return Err(room_not_found(room_number));
        }
        Err(AppError::with_message(
            ErrorCode::CleaningTaskNotFound,
            format!("Room {room_number} has no open cleaning task"),
        ))
    }
}

/// HOUSEKEEPING -> CLEANING_IN_PROGRESS inside the caller's transaction
async fn enter_cleaning(tx: &mut Tx, room_number: &str) -> AppResult<()> {
    if room::transition(
        &mut **tx,
        room_number,
        &[RoomStatus::Housekeeping],
        RoomStatus::CleaningInProgress,
    )
    .await?
    {
        Ok(())
    } else {
        Err(status_conflict(room_number, "cleaning start"))
    }
}

/// Why a conditional task insert matched nothing. Open tasks win over room
/// status so a racing second caller sees `AlreadyTasked`.
async fn diagnose_task_miss(tx: &mut Tx, room_number: &str) -> AppResult<AppError> {
    let Some(current) = room::find_by_number_in(&mut **tx, room_number).await? else {
        return Ok(room_not_found(room_number));
    };
    if let Some(open) = cleaning::find_open_by_room_in(&mut **tx, room_number).await? {
        return Ok(already_tasked(room_number).with_detail("staff_id", open.staff_id));
    }
    Ok(AppError::with_message(
        ErrorCode::RoomNotEligible,
        format!("Room {room_number} is {}, not HOUSEKEEPING", current.status),
    )
    .with_detail("current_status", current.status.as_str()))
}

fn tasked_on_duplicate(err: RepoError, room_number: &str) -> AppError {
    match err {
        RepoError::Duplicate(_) => already_tasked(room_number),
        other => other.into(),
    }
}

fn already_tasked(room_number: &str) -> AppError {
    AppError::with_message(
        ErrorCode::AlreadyTasked,
        format!("Room {room_number} already has an open cleaning task"),
    )
    .with_detail("room_number", room_number)
}

fn status_conflict(room_number: &str, during: &str) -> AppError {
    AppError::with_message(
        ErrorCode::RoomStatusConflict,
        format!("Room {room_number} changed during {during}"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::testing::{seed_room, test_pool};
    use shared::models::{StaffCreate, StaffRole};

    async fn room_status(pool: &SqlitePool, number: &str) -> RoomStatus {
        room::find_by_number(pool, number).await.unwrap().unwrap().status
    }

    fn admin() -> CurrentUser {
        CurrentUser {
            id: 1,
            name: "Boss".into(),
            role: StaffRole::Admin,
        }
    }

    #[tokio::test]
    async fn test_task_then_clean_then_complete() {
        let pool = test_pool().await;
        seed_room(&pool, "101", "HOUSEKEEPING").await;
        let coordinator = CleaningCoordinator::new(pool.clone());

        let task = coordinator.start_task("101", 7).await.unwrap();
        assert_eq!(task.status, CleaningStatus::TaskStarted);
        assert_eq!(room_status(&pool, "101").await, RoomStatus::Housekeeping);

        let started = coordinator.start_cleaning("101", 7).await.unwrap();
        assert_eq!(started.id, task.id);
        assert_eq!(started.status, CleaningStatus::InProgress);
        assert_eq!(room_status(&pool, "101").await, RoomStatus::CleaningInProgress);

        let done = coordinator.complete_cleaning("101", 7).await.unwrap();
        assert_eq!(done.status, CleaningStatus::Completed);
        assert!(done.end_time.is_some());
        assert_eq!(room_status(&pool, "101").await, RoomStatus::Available);
    }

    #[tokio::test]
    async fn test_start_cleaning_without_claim() {
        let pool = test_pool().await;
        seed_room(&pool, "101", "HOUSEKEEPING").await;
        let coordinator = CleaningCoordinator::new(pool.clone());

        let record = coordinator.start_cleaning("101", 9).await.unwrap();
        assert_eq!(record.status, CleaningStatus::InProgress);
        assert_eq!(room_status(&pool, "101").await, RoomStatus::CleaningInProgress);
    }

    #[tokio::test]
    async fn test_start_task_errors() {
        let pool = test_pool().await;
        seed_room(&pool, "101", "HOUSEKEEPING").await;
        seed_room(&pool, "102", "AVAILABLE").await;
        let coordinator = CleaningCoordinator::new(pool);

        coordinator.start_task("101", 7).await.unwrap();
        let err = coordinator.start_task("101", 8).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::AlreadyTasked);

        let err = coordinator.start_task("102", 7).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::RoomNotEligible);

        let err = coordinator.start_task("404", 7).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::RoomNotFound);
    }

    #[tokio::test]
    async fn test_other_staff_cannot_take_claimed_room() {
        let pool = test_pool().await;
        seed_room(&pool, "101", "HOUSEKEEPING").await;
        let coordinator = CleaningCoordinator::new(pool.clone());

        coordinator.start_task("101", 7).await.unwrap();
        let err = coordinator.start_cleaning("101", 8).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::AlreadyTasked);
        assert_eq!(room_status(&pool, "101").await, RoomStatus::Housekeeping);
    }

    #[tokio::test]
    async fn test_complete_requires_owner() {
        let pool = test_pool().await;
        seed_room(&pool, "101", "HOUSEKEEPING").await;
        let coordinator = CleaningCoordinator::new(pool.clone());

        coordinator.start_cleaning("101", 7).await.unwrap();
        let err = coordinator.complete_cleaning("101", 8).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NoActiveCleaning);
        assert_eq!(room_status(&pool, "101").await, RoomStatus::CleaningInProgress);

        coordinator.complete_cleaning("101", 7).await.unwrap();
        let err = coordinator.complete_cleaning("101", 7).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NoActiveCleaning);
    }

    #[tokio::test]
    async fn test_assign_staff() {
        let pool = test_pool().await;
        seed_room(&pool, "101", "HOUSEKEEPING").await;
        let maid = staff::create(
            &pool,
            &StaffCreate {
                name: "Ma Hla".into(),
                role: StaffRole::Housekeeping,
            },
        )
        .await
        .unwrap();
        let coordinator = CleaningCoordinator::new(pool.clone());

        let clerk = CurrentUser {
            role: StaffRole::Receptionist,
            ..admin()
        };
        let req = AssignStaffRequest {
            room_number: "101".into(),
            staff_id: maid.id,
        };
        let err = coordinator.assign_staff(&clerk, req.clone()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::AdminRequired);

        let missing = AssignStaffRequest {
            room_number: "101".into(),
            staff_id: 999,
        };
        let err = coordinator.assign_staff(&admin(), missing).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::StaffNotFound);

        let record = coordinator.assign_staff(&admin(), req.clone()).await.unwrap();
        assert_eq!(record.staff_id, maid.id);
        assert_eq!(record.status, CleaningStatus::InProgress);
        assert_eq!(room_status(&pool, "101").await, RoomStatus::CleaningInProgress);

        let err = coordinator.assign_staff(&admin(), req).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::AlreadyTasked);
    }

    #[tokio::test]
    async fn test_active_task_and_history() {
        let pool = test_pool().await;
        seed_room(&pool, "101", "HOUSEKEEPING").await;
        seed_room(&pool, "102", "AVAILABLE").await;
        let coordinator = CleaningCoordinator::new(pool);

        let err = coordinator.active_task("102").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::CleaningTaskNotFound);
        let err = coordinator.active_task("404").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::RoomNotFound);

        coordinator.start_cleaning("101", 7).await.unwrap();
        assert_eq!(coordinator.active_task("101").await.unwrap().staff_id, 7);

        let board = coordinator.board(7).await.unwrap();
        assert_eq!(board.len(), 1);
        assert!(board[0].assigned_to_me);

        coordinator.complete_cleaning("101", 7).await.unwrap();
        assert_eq!(coordinator.history(Some(7), None).await.unwrap().len(), 1);
        assert!(coordinator.history(Some(8), None).await.unwrap().is_empty());
    }
}
