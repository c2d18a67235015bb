//! Room Price Model (房价)

use serde::{Deserialize, Serialize};

/// Price list (single row)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct RoomPrices {
    pub full_night: f64,
    pub day_caution: f64,
    pub session: f64,
    pub extra_bed: f64,
    pub hourly: f64,
    pub updated_at: i64,
}

impl Default for RoomPrices {
    fn default() -> Self {
        Self {
            full_night: 63000.0,
            day_caution: 42000.0,
            session: 30000.0,
            extra_bed: 20000.0,
            hourly: 10000.0,
            updated_at: 0,
        }
    }
}

/// Update price list payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoomPricesUpdate {
    pub full_night: Option<f64>,
    pub day_caution: Option<f64>,
    pub session: Option<f64>,
    pub extra_bed: Option<f64>,
    pub hourly: Option<f64>,
}
