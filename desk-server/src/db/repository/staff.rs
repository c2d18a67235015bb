//! Staff Repository

use super::RepoResult;
use shared::models::{Staff, StaffCreate, StaffRole};
use sqlx::SqlitePool;

const COLUMNS: &str = "id, name, role, created_at";

pub async fn create(pool: &SqlitePool, data: &StaffCreate) -> RepoResult<Staff> {
    let staff = sqlx::query_as::<_, Staff>(&format!(
        "INSERT INTO staff (name, role, created_at) VALUES (?, ?, ?) RETURNING {COLUMNS}"
    ))
    .bind(&data.name)
    .bind(data.role)
    .bind(shared::util::now_millis())
    .fetch_one(pool)
    .await?;
    Ok(staff)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Staff>> {
    let staff = sqlx::query_as::<_, Staff>(&format!(
        "SELECT {COLUMNS} FROM staff WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(staff)
}

pub async fn find_all(pool: &SqlitePool, role: Option<StaffRole>) -> RepoResult<Vec<Staff>> {
    let staff = sqlx::query_as::<_, Staff>(&format!(
        "SELECT {COLUMNS} FROM staff WHERE (?1 IS NULL OR role = ?1) ORDER BY name"
    ))
    .bind(role)
    .fetch_all(pool)
    .await?;
    Ok(staff)
}
