//! Housekeeping Models (客房清洁)

use serde::{Deserialize, Serialize};

use super::room::RoomStatus;

/// Cleaning task status; `COMPLETED` is terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum CleaningStatus {
    TaskStarted,
    InProgress,
    Completed,
}

impl CleaningStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::TaskStarted => "TASK_STARTED",
            Self::InProgress => "IN_PROGRESS",
            Self::Completed => "COMPLETED",
        }
    }

    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed)
    }

    pub const fn can_transition_to(&self, next: CleaningStatus) -> bool {
        use CleaningStatus::*;
        match (self, next) {
            (TaskStarted, InProgress) | (InProgress, Completed) => true,
            (TaskStarted, TaskStarted | Completed) => false,
            (InProgress, TaskStarted | InProgress) => false,
            (Completed, _) => false,
        }
    }
}

/// Cleaning record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct CleaningRecord {
    pub id: i64,
    pub room_number: String,
    pub staff_id: i64,
    pub start_time: i64,
    pub end_time: Option<i64>,
    pub status: CleaningStatus,
}

/// Room on the housekeeping board
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct CleaningBoardRoom {
    pub room_number: String,
    pub floor: i64,
    pub status: RoomStatus,
    pub cleaning_status: Option<CleaningStatus>,
    pub staff_id: Option<i64>,
    pub start_time: Option<i64>,
    pub assigned_to_me: bool,
}

/// Room-scoped housekeeping action payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleaningRequest {
    pub room_number: String,
}

/// Admin assignment payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignStaffRequest {
    pub room_number: String,
    pub staff_id: i64,
}
