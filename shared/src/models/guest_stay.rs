//! Guest Stay Model (住客登记)

use serde::{Deserialize, Serialize};

use super::payment::PaymentMethod;
use super::room::RoomType;

/// Stay status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum StayStatus {
    Active,
    CheckedOut,
}

impl StayStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::CheckedOut => "CHECKED_OUT",
        }
    }
}

/// One guest's occupancy of a room
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct GuestStay {
    pub id: i64,
    pub guest_name: String,
    pub national_id: Option<String>,
    pub phone: Option<String>,
    pub room_type: RoomType,
    pub room_number: String,
    /// Check-in time (Unix millis)
    pub checkin_at: i64,
    /// Planned checkout while ACTIVE, actual checkout afterwards (Unix millis)
    pub checkout_date: i64,
    pub extra_bed: bool,
    /// `None` until the guest settles
    pub payment_type: Option<PaymentMethod>,
    pub amount_paid: f64,
    pub extra_charges: f64,
    /// Only written by the food order protocol
    pub food_charges: f64,
    pub paid: bool,
    pub status: StayStatus,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Check-in payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckInRequest {
    pub guest_name: String,
    pub national_id: Option<String>,
    pub phone: Option<String>,
    pub room_type: RoomType,
    pub room_number: String,
    /// Planned checkout (Unix millis)
    pub checkout_date: i64,
    #[serde(default)]
    pub extra_bed: bool,
    pub payment_type: Option<PaymentMethod>,
    #[serde(default)]
    pub amount_paid: f64,
    #[serde(default)]
    pub extra_charges: f64,
    #[serde(default)]
    pub paid: bool,
}

/// Partial stay update (`food_charges` is not patchable)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StayUpdate {
    pub guest_name: Option<String>,
    pub national_id: Option<String>,
    pub phone: Option<String>,
    pub checkout_date: Option<i64>,
    pub extra_bed: Option<bool>,
    pub payment_type: Option<PaymentMethod>,
    pub amount_paid: Option<f64>,
    pub extra_charges: Option<f64>,
    pub paid: Option<bool>,
}

impl StayUpdate {
    pub fn is_empty(&self) -> bool {
        self.guest_name.is_none()
            && self.national_id.is_none()
            && self.phone.is_none()
            && self.checkout_date.is_none()
            && self.extra_bed.is_none()
            && self.payment_type.is_none()
            && self.amount_paid.is_none()
            && self.extra_charges.is_none()
            && self.paid.is_none()
    }
}
