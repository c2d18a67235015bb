//! Dashboard Model (前台总览)

use serde::{Deserialize, Serialize};

/// Dashboard rollup
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_rooms: i64,
    pub available: i64,
    pub full_night: i64,
    pub day_caution: i64,
    pub session: i64,
    pub housekeeping: i64,
    pub maintenance: i64,
    pub cleaning_in_progress: i64,
    pub food_revenue_today: f64,
}
