//! Room Model (客房)
//!
//! A room's `status` is the single source of truth for occupancy and
//! housekeeping visibility. Legal moves between statuses are listed in
//! [`RoomStatus::can_transition_to`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Room status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum RoomStatus {
    Available,
    FullNight,
    DayCaution,
    Session,
    Housekeeping,
    Maintenance,
    CleaningInProgress,
}

impl RoomStatus {
    pub const ALL: [RoomStatus; 7] = [
        Self::Available,
        Self::FullNight,
        Self::DayCaution,
        Self::Session,
        Self::Housekeeping,
        Self::Maintenance,
        Self::CleaningInProgress,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "AVAILABLE",
            Self::FullNight => "FULL_NIGHT",
            Self::DayCaution => "DAY_CAUTION",
            Self::Session => "SESSION",
            Self::Housekeeping => "HOUSEKEEPING",
            Self::Maintenance => "MAINTENANCE",
            Self::CleaningInProgress => "CLEANING_IN_PROGRESS",
        }
    }

    /// A guest stay holds the room.
    pub const fn is_occupied(&self) -> bool {
        matches!(self, Self::FullNight | Self::DayCaution | Self::Session)
    }

    /// Rooms shown on the housekeeping board.
    pub const fn is_cleaning_visible(&self) -> bool {
        matches!(self, Self::Housekeeping | Self::CleaningInProgress)
    }

    /// Exhaustive transition table.
    ///
    /// | from \ to            | occupied | HOUSEKEEPING | CLEANING_IN_PROGRESS | AVAILABLE | MAINTENANCE |
    /// |----------------------|----------|--------------|----------------------|-----------|-------------|
    /// | AVAILABLE            | yes      | yes          | -                    | -         | yes         |
    /// | occupied             | yes      | yes          | -                    | yes       | yes         |
    /// | HOUSEKEEPING         | -        | -            | yes                  | yes       | yes         |
    /// | CLEANING_IN_PROGRESS | -        | -            | -                    | yes       | -           |
    /// | MAINTENANCE          | -        | yes          | -                    | yes       | -           |
    pub const fn can_transition_to(&self, next: RoomStatus) -> bool {
        use RoomStatus::*;
        match (self, next) {
            (Available, FullNight | DayCaution | Session | Housekeeping | Maintenance) => true,
            (Available, Available | CleaningInProgress) => false,

            (
                FullNight | DayCaution | Session,
                FullNight | DayCaution | Session | Housekeeping | Available | Maintenance,
            ) => true,
            (FullNight | DayCaution | Session, CleaningInProgress) => false,

            (Housekeeping, CleaningInProgress | Available | Maintenance) => true,
            (Housekeeping, FullNight | DayCaution | Session | Housekeeping) => false,

            (CleaningInProgress, Available) => true,
            (
                CleaningInProgress,
                FullNight | DayCaution | Session | Housekeeping | Maintenance | CleaningInProgress,
            ) => false,

            (Maintenance, Available | Housekeeping) => true,
            (
                Maintenance,
                FullNight | DayCaution | Session | Maintenance | CleaningInProgress,
            ) => false,
        }
    }

    /// Statuses from which `next` is reachable in one step.
    pub fn predecessors_of(next: RoomStatus) -> Vec<RoomStatus> {
        Self::ALL
            .into_iter()
            .filter(|from| from.can_transition_to(next))
            .collect()
    }
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoomStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown room status: {s}"))
    }
}

/// How a guest occupies the room; decides the occupancy status on check-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum RoomType {
    FullNight,
    DayCaution,
    Session,
}

impl RoomType {
    pub const fn occupancy_status(&self) -> RoomStatus {
        match self {
            Self::FullNight => RoomStatus::FullNight,
            Self::DayCaution => RoomStatus::DayCaution,
            Self::Session => RoomStatus::Session,
        }
    }
}

/// Room entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Room {
    pub id: i64,
    pub room_number: String,
    pub floor: i64,
    pub status: RoomStatus,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Provision room payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomCreate {
    pub room_number: String,
    pub floor: i64,
}

/// Manual status change. `expected_status` turns the write into a compare-and-swap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomStatusUpdate {
    pub status: RoomStatus,
    pub expected_status: Option<RoomStatus>,
}

/// Room list filter
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoomFilter {
    pub status: Option<RoomStatus>,
    pub floor: Option<i64>,
}

/// Number of rooms in one status
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct RoomStatusCount {
    pub status: RoomStatus,
    pub count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serde_names() {
        let json = serde_json::to_string(&RoomStatus::CleaningInProgress).unwrap();
        assert_eq!(json, "\"CLEANING_IN_PROGRESS\"");
        let status: RoomStatus = serde_json::from_str("\"FULL_NIGHT\"").unwrap();
        assert_eq!(status, RoomStatus::FullNight);
    }

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!("housekeeping".parse::<RoomStatus>(), Ok(RoomStatus::Housekeeping));
        assert!("DIRTY".parse::<RoomStatus>().is_err());
    }

    #[test]
    fn test_cleaning_only_reachable_from_housekeeping() {
        assert_eq!(
            RoomStatus::predecessors_of(RoomStatus::CleaningInProgress),
            vec![RoomStatus::Housekeeping]
        );
    }

    #[test]
    fn test_cleaning_in_progress_only_exits_to_available() {
        for next in RoomStatus::ALL {
            assert_eq!(
                RoomStatus::CleaningInProgress.can_transition_to(next),
                next == RoomStatus::Available
            );
        }
    }

    #[test]
    fn test_occupancy_from_available_or_occupied() {
        let preds = RoomStatus::predecessors_of(RoomStatus::Session);
        assert_eq!(
            preds,
            vec![
                RoomStatus::Available,
                RoomStatus::FullNight,
                RoomStatus::DayCaution,
                RoomStatus::Session,
            ]
        );
        assert!(!RoomStatus::Housekeeping.can_transition_to(RoomStatus::FullNight));
    }

    #[test]
    fn test_room_type_occupancy() {
        assert_eq!(RoomType::DayCaution.occupancy_status(), RoomStatus::DayCaution);
        assert!(RoomType::FullNight.occupancy_status().is_occupied());
    }
}
