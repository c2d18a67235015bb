//! Food Order & Menu Models (点餐)

use serde::{Deserialize, Serialize};

use super::payment::PaymentMethod;

/// Food order payment status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum PaymentStatus {
    Pending,
    Paid,
    Failed,
    Cancelled,
}

/// Food order. Immutable after creation except `payment_status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct FoodOrder {
    pub id: i64,
    /// Guest stay ID
    pub guest_id: i64,
    pub room_number: String,
    pub food_name: String,
    pub price: f64,
    pub quantity: i64,
    pub payment_method: PaymentMethod,
    pub payment_status: PaymentStatus,
    /// Operating-timezone day the order was booked into (YYYY-MM-DD)
    pub business_date: String,
    pub order_time: i64,
    pub created_at: i64,
}

/// Create food order payload
///
/// `payment_method` stays a raw string so an unknown method is reported
/// as a domain error rather than a body parse failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodOrderCreate {
    pub guest_id: i64,
    pub room_number: String,
    pub food_name: String,
    pub price: f64,
    pub quantity: i64,
    pub payment_method: Option<String>,
}

/// Update payment status payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentStatusUpdate {
    pub payment_status: PaymentStatus,
}

/// Orders of one room with summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomOrders {
    pub orders: Vec<FoodOrder>,
    pub total_orders: i64,
    pub pending_payments: i64,
    /// Sum over PAID orders only
    pub total_amount: f64,
}

/// Menu item
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct MenuItem {
    pub id: i64,
    pub food_name: String,
    pub food_price: f64,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create menu item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemCreate {
    pub food_name: String,
    pub food_price: f64,
}

/// Update menu item payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuItemUpdate {
    pub food_name: Option<String>,
    pub food_price: Option<f64>,
}
