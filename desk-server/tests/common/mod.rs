//! Shared fixtures: a temp-file database opened with the production pool settings

#![allow(dead_code)]

use desk_server::db::DbService;
use desk_server::{Config, ServerState};
use shared::models::{CheckInRequest, GuestStay, RoomCreate, RoomStatus, RoomStatusUpdate, RoomType};
use tempfile::TempDir;

pub struct TestDesk {
    pub state: ServerState,
    _dir: TempDir,
}

pub async fn desk() -> TestDesk {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("desk.db");
    let path = path.to_str().unwrap();
    let db = DbService::new(path, 8, 5000).await.unwrap();
    let config = Config::with_overrides(path, chrono_tz::UTC);
    TestDesk {
        state: ServerState::from_pool(config, db.pool),
        _dir: dir,
    }
}

/// Provision a room and move it to `status` through the registry
pub async fn room(state: &ServerState, number: &str, status: RoomStatus) {
    state
        .rooms
        .provision(RoomCreate {
            room_number: number.into(),
            floor: 1,
        })
        .await
        .unwrap();
    if status != RoomStatus::Available {
        state
            .rooms
            .set_status(
                number,
                RoomStatusUpdate {
                    status,
                    expected_status: None,
                },
            )
            .await
            .unwrap();
    }
}

pub fn check_in_request(room_number: &str, guest_name: &str) -> CheckInRequest {
    CheckInRequest {
        guest_name: guest_name.into(),
        national_id: None,
        phone: None,
        room_type: RoomType::FullNight,
        room_number: room_number.into(),
        checkout_date: shared::util::now_millis() + 86_400_000,
        extra_bed: false,
        payment_type: None,
        amount_paid: 0.0,
        extra_charges: 0.0,
        paid: false,
    }
}

pub async fn checked_in(state: &ServerState, room_number: &str) -> GuestStay {
    state
        .guests
        .check_in(check_in_request(room_number, "Daw Aye"))
        .await
        .unwrap()
}

pub async fn active_stays(state: &ServerState, room_number: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM guest_stay WHERE room_number = ? AND status = 'ACTIVE'",
    )
    .bind(room_number)
    .fetch_one(&state.pool)
    .await
    .unwrap()
}

pub async fn open_tasks(state: &ServerState, room_number: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM cleaning_record WHERE room_number = ? AND status IN ('TASK_STARTED', 'IN_PROGRESS')",
    )
    .bind(room_number)
    .fetch_one(&state.pool)
    .await
    .unwrap()
}

pub fn today() -> String {
    chrono::Utc::now().format("%Y-%m-%d").to_string()
}
