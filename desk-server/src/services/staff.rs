//! Staff directory

use shared::error::AppResult;
use shared::models::{Staff, StaffCreate, StaffRole};
use sqlx::SqlitePool;

use crate::db::repository::staff;
use crate::utils::validation::{MAX_NAME_LEN, validate_required_text};

#[derive(Clone)]
pub struct StaffDirectory {
    pool: SqlitePool,
}

impl StaffDirectory {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create_staff(&self, data: StaffCreate) -> AppResult<Staff> {
        validate_required_text(&data.name, "name", MAX_NAME_LEN)?;
        let data = StaffCreate {
            name: data.name.trim().to_string(),
            role: data.role,
        };
        let created = staff::create(&self.pool, &data).await?;
        tracing::info!(staff_id = created.id, role = created.role.as_str(), "Staff created");
        Ok(created)
    }

    pub async fn list_staff(&self, role: Option<StaffRole>) -> AppResult<Vec<Staff>> {
        Ok(staff::find_all(&self.pool, role).await?)
    }
}
