//! Cleaning Record Repository
//!
//! Open tasks (`TASK_STARTED` / `IN_PROGRESS`) are capped at one per room by
//! `uq_cleaning_record_open_room`; the conditional inserts below check the
//! same thing so the common case is a clean miss instead of a constraint error.

use super::RepoResult;
use shared::models::{CleaningBoardRoom, CleaningRecord, CleaningStatus};
use sqlx::{SqliteConnection, SqlitePool};

const COLUMNS: &str = "id, room_number, staff_id, start_time, end_time, status";

/// Open a task on a HOUSEKEEPING room that has none.
///
/// `None` means the room is missing, not in HOUSEKEEPING, or already tasked.
pub async fn insert_if_eligible(
    conn: &mut SqliteConnection,
    room_number: &str,
    staff_id: i64,
    status: CleaningStatus,
    now: i64,
) -> RepoResult<Option<CleaningRecord>> {
    let record = sqlx::query_as::<_, CleaningRecord>(&format!(
        "INSERT INTO cleaning_record (room_number, staff_id, start_time, status) \
         SELECT ?1, ?2, ?3, ?4 \
         WHERE EXISTS (SELECT 1 FROM room WHERE room_number = ?1 AND status = 'HOUSEKEEPING') \
           AND NOT EXISTS (SELECT 1 FROM cleaning_record WHERE room_number = ?1 AND status IN ('TASK_STARTED', 'IN_PROGRESS')) \
         RETURNING {COLUMNS}"
    ))
    .bind(room_number)
    .bind(staff_id)
    .bind(now)
    .bind(status)
    .fetch_optional(conn)
    .await?;
    Ok(record)
}

/// TASK_STARTED → IN_PROGRESS for the staff member who owns the task
pub async fn promote_started(
    conn: &mut SqliteConnection,
    room_number: &str,
    staff_id: i64,
    now: i64,
) -> RepoResult<Option<CleaningRecord>> {
    let record = sqlx::query_as::<_, CleaningRecord>(&format!(
        "UPDATE cleaning_record SET status = 'IN_PROGRESS', start_time = ?1 \
         WHERE room_number = ?2 AND staff_id = ?3 AND status = 'TASK_STARTED' \
         RETURNING {COLUMNS}"
    ))
    .bind(now)
    .bind(room_number)
    .bind(staff_id)
    .fetch_optional(conn)
    .await?;
    Ok(record)
}

/// IN_PROGRESS → COMPLETED, only for the owning staff member
pub async fn complete_in_progress(
    conn: &mut SqliteConnection,
    room_number: &str,
    staff_id: i64,
    now: i64,
) -> RepoResult<Option<CleaningRecord>> {
    let record = sqlx::query_as::<_, CleaningRecord>(&format!(
        "UPDATE cleaning_record SET status = 'COMPLETED', end_time = ?1 \
         WHERE room_number = ?2 AND staff_id = ?3 AND status = 'IN_PROGRESS' \
         RETURNING {COLUMNS}"
    ))
    .bind(now)
    .bind(room_number)
    .bind(staff_id)
    .fetch_optional(conn)
    .await?;
    Ok(record)
}

pub async fn find_open_by_room(
    pool: &SqlitePool,
    room_number: &str,
) -> RepoResult<Option<CleaningRecord>> {
    let record = sqlx::query_as::<_, CleaningRecord>(&format!(
        "SELECT {COLUMNS} FROM cleaning_record WHERE room_number = ? AND status IN ('TASK_STARTED', 'IN_PROGRESS')"
    ))
    .bind(room_number)
    .fetch_optional(pool)
    .await?;
    Ok(record)
}

/// Same as [`find_open_by_room`], inside a transaction
pub async fn find_open_by_room_in(
    conn: &mut SqliteConnection,
    room_number: &str,
) -> RepoResult<Option<CleaningRecord>> {
    let record = sqlx::query_as::<_, CleaningRecord>(&format!(
        "SELECT {COLUMNS} FROM cleaning_record WHERE room_number = ? AND status IN ('TASK_STARTED', 'IN_PROGRESS')"
    ))
    .bind(room_number)
    .fetch_optional(conn)
    .await?;
    Ok(record)
}

/// Rooms in HOUSEKEEPING or CLEANING_IN_PROGRESS with their open task, if any
pub async fn board(pool: &SqlitePool, staff_id: i64) -> RepoResult<Vec<CleaningBoardRoom>> {
    let rooms = sqlx::query_as::<_, CleaningBoardRoom>(
        "SELECT r.room_number AS room_number, r.floor AS floor, r.status AS status, \
                c.status AS cleaning_status, c.staff_id AS staff_id, c.start_time AS start_time, \
                CASE WHEN c.staff_id = ?1 THEN 1 ELSE 0 END AS assigned_to_me \
         FROM room r \
         LEFT JOIN cleaning_record c ON c.room_number = r.room_number AND c.status IN ('TASK_STARTED', 'IN_PROGRESS') \
         WHERE r.status IN ('HOUSEKEEPING', 'CLEANING_IN_PROGRESS') \
         ORDER BY r.floor, r.room_number",
    )
    .bind(staff_id)
    .fetch_all(pool)
    .await?;
    Ok(rooms)
}

/// Records newest first, optionally for one staff member
pub async fn history(
    pool: &SqlitePool,
    staff_id: Option<i64>,
    limit: i64,
) -> RepoResult<Vec<CleaningRecord>> {
    let records = sqlx::query_as::<_, CleaningRecord>(&format!(
        "SELECT {COLUMNS} FROM cleaning_record WHERE (?1 IS NULL OR staff_id = ?1) ORDER BY start_time DESC, id DESC LIMIT ?2"
    ))
    .bind(staff_id)
    .bind(limit)
    .fetch_all(pool)
    .await?;
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::testing::{seed_room, test_pool};

    #[tokio::test]
    async fn test_insert_requires_housekeeping_room() {
        let pool = test_pool().await;
        seed_room(&pool, "101", "AVAILABLE").await;
        seed_room(&pool, "102", "HOUSEKEEPING").await;
        let mut conn = pool.acquire().await.unwrap();

        let missed = insert_if_eligible(&mut conn, "101", 7, CleaningStatus::TaskStarted, 1)
            .await
            .unwrap();
        assert!(missed.is_none());

        let task = insert_if_eligible(&mut conn, "102", 7, CleaningStatus::TaskStarted, 1)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(task.status, CleaningStatus::TaskStarted);
        assert_eq!(task.end_time, None);

        let again = insert_if_eligible(&mut conn, "102", 8, CleaningStatus::InProgress, 2)
            .await
            .unwrap();
        assert!(again.is_none());
    }

    #[tokio::test]
    async fn test_promote_and_complete_are_owner_only() {
        let pool = test_pool().await;
        seed_room(&pool, "102", "HOUSEKEEPING").await;
        let mut conn = pool.acquire().await.unwrap();
        insert_if_eligible(&mut conn, "102", 7, CleaningStatus::TaskStarted, 1)
            .await
            .unwrap();

        assert!(promote_started(&mut conn, "102", 8, 2).await.unwrap().is_none());
        let started = promote_started(&mut conn, "102", 7, 2).await.unwrap().unwrap();
        assert_eq!(started.status, CleaningStatus::InProgress);
        assert_eq!(started.start_time, 2);

        assert!(complete_in_progress(&mut conn, "102", 8, 3).await.unwrap().is_none());
        let done = complete_in_progress(&mut conn, "102", 7, 3).await.unwrap().unwrap();
        assert_eq!(done.status, CleaningStatus::Completed);
        assert_eq!(done.end_time, Some(3));
        assert!(find_open_by_room_in(&mut conn, "102").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_board_and_history() {
        let pool = test_pool().await;
        seed_room(&pool, "101", "AVAILABLE").await;
        seed_room(&pool, "102", "HOUSEKEEPING").await;
        seed_room(&pool, "103", "HOUSEKEEPING").await;
        let mut conn = pool.acquire().await.unwrap();
        insert_if_eligible(&mut conn, "103", 7, CleaningStatus::TaskStarted, 1)
            .await
            .unwrap();
        drop(conn);

        let rooms = board(&pool, 7).await.unwrap();
        assert_eq!(rooms.len(), 2);
        let tasked = rooms.iter().find(|r| r.room_number == "103").unwrap();
        assert!(tasked.assigned_to_me);
        assert_eq!(tasked.cleaning_status, Some(CleaningStatus::TaskStarted));
        let idle = rooms.iter().find(|r| r.room_number == "102").unwrap();
        assert!(!idle.assigned_to_me);
        assert_eq!(idle.staff_id, None);

        assert_eq!(history(&pool, Some(7), 50).await.unwrap().len(), 1);
        assert!(history(&pool, Some(8), 50).await.unwrap().is_empty());
        assert_eq!(history(&pool, None, 50).await.unwrap().len(), 1);
    }
}
