//! Revenue Models (营收)
//!
//! `DailyRevenue` is the running per-day, per-method food total kept by the
//! order protocol. `Income` rows are room and miscellaneous revenue events.
//! Report totals are always recomputed from `FoodOrder` and `Income` rows.

use serde::{Deserialize, Serialize};

use super::payment::PaymentMethod;

/// Running food revenue for one (business_date, payment_method)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct DailyRevenue {
    pub id: i64,
    pub business_date: String,
    pub payment_method: PaymentMethod,
    pub revenue: f64,
    pub updated_at: i64,
}

/// Income kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum IncomeKind {
    CheckedIn,
    ExtendStay,
    Food,
    EmployeeFood,
    GuestFood,
    Other,
}

/// Report bucket an income row falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevenueBucket {
    Room,
    Food,
    Other,
}

impl IncomeKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CheckedIn => "CHECKED_IN",
            Self::ExtendStay => "EXTEND_STAY",
            Self::Food => "FOOD",
            Self::EmployeeFood => "EMPLOYEE_FOOD",
            Self::GuestFood => "GUEST_FOOD",
            Self::Other => "OTHER",
        }
    }

    pub const fn bucket(&self) -> RevenueBucket {
        match self {
            Self::CheckedIn | Self::ExtendStay => RevenueBucket::Room,
            Self::Food | Self::EmployeeFood | Self::GuestFood => RevenueBucket::Food,
            Self::Other => RevenueBucket::Other,
        }
    }
}

/// Income event
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Income {
    pub id: i64,
    pub kind: IncomeKind,
    pub guest_id: Option<i64>,
    pub room_number: Option<String>,
    pub amount: f64,
    pub revenue_type: Option<String>,
    /// Falls back to the guest's payment type when absent
    pub payment_method: Option<PaymentMethod>,
    pub business_date: String,
    pub created_at: i64,
}

/// Record income payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomeCreate {
    pub kind: IncomeKind,
    pub guest_id: Option<i64>,
    pub room_number: Option<String>,
    pub amount: f64,
    pub revenue_type: Option<String>,
    pub payment_method: Option<PaymentMethod>,
}

/// Revenue totals for one day
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RevenueTotals {
    pub date: String,
    pub room: f64,
    pub room_cash: f64,
    pub room_online: f64,
    pub food: f64,
    pub other: f64,
    pub total: f64,
}

/// Recorded vs recomputed food revenue for one payment method
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconcileEntry {
    pub payment_method: PaymentMethod,
    pub recorded: f64,
    pub recomputed: f64,
    pub difference: f64,
}

/// Activity feed source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityKind {
    Income,
    FoodOrder,
}

/// One entry of the recent activity feed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub kind: ActivityKind,
    pub ref_id: i64,
    pub room_number: Option<String>,
    pub description: String,
    pub amount: f64,
    pub created_at: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_income_buckets() {
        assert_eq!(IncomeKind::CheckedIn.bucket(), RevenueBucket::Room);
        assert_eq!(IncomeKind::ExtendStay.bucket(), RevenueBucket::Room);
        assert_eq!(IncomeKind::GuestFood.bucket(), RevenueBucket::Food);
        assert_eq!(IncomeKind::Other.bucket(), RevenueBucket::Other);
    }

    #[test]
    fn test_income_kind_serde() {
        let kind: IncomeKind = serde_json::from_str("\"EXTEND_STAY\"").unwrap();
        assert_eq!(kind, IncomeKind::ExtendStay);
    }

    #[test]
    fn test_income_kind_as_str_matches_wire_name() {
        for kind in [
            IncomeKind::CheckedIn,
            IncomeKind::ExtendStay,
            IncomeKind::Food,
            IncomeKind::EmployeeFood,
            IncomeKind::GuestFood,
            IncomeKind::Other,
        ] {
            let wire = serde_json::to_value(kind).unwrap();
            assert_eq!(wire, kind.as_str());
        }
    }
}
