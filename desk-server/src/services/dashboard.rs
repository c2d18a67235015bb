//! Dashboard projection

use chrono_tz::Tz;
use shared::error::AppResult;
use shared::models::{DashboardStats, RoomStatus};
use sqlx::SqlitePool;

use crate::db::repository::{daily_revenue, room};
use crate::utils::time;

#[derive(Clone)]
pub struct Dashboard {
    pool: SqlitePool,
    tz: Tz,
}

impl Dashboard {
    pub fn new(pool: SqlitePool, tz: Tz) -> Self {
        Self { pool, tz }
    }

    /// Room counts per status plus today's food revenue across all methods
    pub async fn stats(&self) -> AppResult<DashboardStats> {
        let counts = room::count_by_status(&self.pool).await?;
        let today = time::format_date(time::today(self.tz));

        let mut stats = DashboardStats {
            food_revenue_today: daily_revenue::total_for_date(&self.pool, &today).await?,
            ..Default::default()
        };
        for entry in counts {
            stats.total_rooms += entry.count;
            let slot = match entry.status {
                RoomStatus::Available => &mut stats.available,
                RoomStatus::FullNight => &mut stats.full_night,
                RoomStatus::DayCaution => &mut stats.day_caution,
                RoomStatus::Session => &mut stats.session,
                RoomStatus::Housekeeping => &mut stats.housekeeping,
                RoomStatus::Maintenance => &mut stats.maintenance,
                RoomStatus::CleaningInProgress => &mut stats.cleaning_in_progress,
            };
            *slot += entry.count;
        }
        Ok(stats)
    }
}
