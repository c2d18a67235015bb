//! Reservation Model (预订)

use serde::{Deserialize, Serialize};

use super::room::RoomType;

/// Reservation status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum ReservationStatus {
    Confirmed,
    CheckedIn,
    Cancelled,
}

impl Default for ReservationStatus {
    fn default() -> Self {
        Self::Confirmed
    }
}

/// Reservation entity. Dates are operating-timezone calendar days (YYYY-MM-DD).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Reservation {
    pub id: i64,
    pub guest_name: String,
    pub national_id: Option<String>,
    pub phone: Option<String>,
    pub room_type: RoomType,
    pub guest_count: i64,
    pub room_count: i64,
    pub checkin_date: String,
    pub checkout_date: String,
    pub status: ReservationStatus,
    pub extra_bed: bool,
    pub amount_paid: f64,
    pub notes: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create reservation payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationCreate {
    pub guest_name: String,
    pub national_id: Option<String>,
    pub phone: Option<String>,
    pub room_type: RoomType,
    #[serde(default = "default_one")]
    pub guest_count: i64,
    #[serde(default = "default_one")]
    pub room_count: i64,
    pub checkin_date: String,
    pub checkout_date: String,
    #[serde(default)]
    pub extra_bed: bool,
    #[serde(default)]
    pub amount_paid: f64,
    pub notes: Option<String>,
}

fn default_one() -> i64 {
    1
}

/// Update reservation payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReservationUpdate {
    pub guest_name: Option<String>,
    pub national_id: Option<String>,
    pub phone: Option<String>,
    pub room_type: Option<RoomType>,
    pub guest_count: Option<i64>,
    pub room_count: Option<i64>,
    pub checkin_date: Option<String>,
    pub checkout_date: Option<String>,
    pub status: Option<ReservationStatus>,
    pub extra_bed: Option<bool>,
    pub amount_paid: Option<f64>,
    pub notes: Option<String>,
}
