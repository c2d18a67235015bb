//! Room Repository

use super::RepoResult;
use shared::models::{Room, RoomCreate, RoomFilter, RoomStatus, RoomStatusCount};
use sqlx::{SqliteConnection, SqlitePool};

const COLUMNS: &str = "id, room_number, floor, status, created_at, updated_at";

/// `?, ?, ?` for an `IN (...)` clause
pub(crate) fn placeholders(n: usize) -> String {
    vec!["?"; n].join(", ")
}

pub async fn create(pool: &SqlitePool, data: &RoomCreate) -> RepoResult<Room> {
    let now = shared::util::now_millis();
    let room = sqlx::query_as::<_, Room>(&format!(
        "INSERT INTO room (room_number, floor, status, created_at, updated_at) VALUES (?1, ?2, 'AVAILABLE', ?3, ?3) RETURNING {COLUMNS}"
    ))
    .bind(&data.room_number)
    .bind(data.floor)
    .bind(now)
    .fetch_one(pool)
    .await?;
    Ok(room)
}

pub async fn find_by_number(pool: &SqlitePool, number: &str) -> RepoResult<Option<Room>> {
    let room = sqlx::query_as::<_, Room>(&format!(
        "SELECT {COLUMNS} FROM room WHERE room_number = ?"
    ))
    .bind(number)
    .fetch_optional(pool)
    .await?;
    Ok(room)
}

/// Same as [`find_by_number`], inside a transaction
pub async fn find_by_number_in(
    conn: &mut SqliteConnection,
    number: &str,
) -> RepoResult<Option<Room>> {
    let room = sqlx::query_as::<_, Room>(&format!(
        "SELECT {COLUMNS} FROM room WHERE room_number = ?"
    ))
    .bind(number)
    .fetch_optional(conn)
    .await?;
    Ok(room)
}

pub async fn list(pool: &SqlitePool, filter: &RoomFilter) -> RepoResult<Vec<Room>> {
    let rooms = sqlx::query_as::<_, Room>(&format!(
        "SELECT {COLUMNS} FROM room WHERE (?1 IS NULL OR status = ?1) AND (?2 IS NULL OR floor = ?2) ORDER BY floor, room_number"
    ))
    .bind(filter.status)
    .bind(filter.floor)
    .fetch_all(pool)
    .await?;
    Ok(rooms)
}

pub async fn count_by_status(pool: &SqlitePool) -> RepoResult<Vec<RoomStatusCount>> {
    let counts = sqlx::query_as::<_, RoomStatusCount>(
        "SELECT status, COUNT(*) AS count FROM room GROUP BY status",
    )
    .fetch_all(pool)
    .await?;
    Ok(counts)
}

/// Move a room to `to` only if its current status is one of `from`.
///
/// Returns `false` when the room is missing or in another status.
pub async fn transition(
    conn: &mut SqliteConnection,
    number: &str,
    from: &[RoomStatus],
    to: RoomStatus,
) -> RepoResult<bool> {
    let sql = format!(
        "UPDATE room SET status = ?, updated_at = ? WHERE room_number = ? AND status IN ({})",
        placeholders(from.len())
    );
    let mut query = sqlx::query(&sql)
        .bind(to)
        .bind(shared::util::now_millis())
        .bind(number);
    for status in from {
        query = query.bind(*status);
    }
    let result = query.execute(conn).await?;
    Ok(result.rows_affected() == 1)
}

/// Manual status change as one conditional write.
///
/// The row is updated only when the current status is in `from`, matches
/// `expected` (if given), and the room holds neither an ACTIVE stay nor an
/// open cleaning task.
pub async fn set_status_guarded(
    conn: &mut SqliteConnection,
    number: &str,
    from: &[RoomStatus],
    to: RoomStatus,
    expected: Option<RoomStatus>,
) -> RepoResult<Option<Room>> {
    let sql = format!(
        "UPDATE room SET status = ?, updated_at = ? \
         WHERE room_number = ? AND status IN ({}) \
           AND (? IS NULL OR status = ?) \
           AND NOT EXISTS (SELECT 1 FROM guest_stay g WHERE g.room_number = room.room_number AND g.status = 'ACTIVE') \
           AND NOT EXISTS (SELECT 1 FROM cleaning_record c WHERE c.room_number = room.room_number AND c.status IN ('TASK_STARTED', 'IN_PROGRESS')) \
         RETURNING {COLUMNS}",
        placeholders(from.len())
    );
    let mut query = sqlx::query_as::<_, Room>(&sql)
        .bind(to)
        .bind(shared::util::now_millis())
        .bind(number);
    for status in from {
        query = query.bind(*status);
    }
    let room = query
        .bind(expected)
        .bind(expected)
        .fetch_optional(conn)
        .await?;
    Ok(room)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::testing::{seed_room, test_pool};

    #[tokio::test]
    async fn test_create_and_find() {
        let pool = test_pool().await;
        let room = create(
            &pool,
            &RoomCreate {
                room_number: "201".into(),
                floor: 2,
            },
        )
        .await
        .unwrap();
        assert_eq!(room.status, RoomStatus::Available);

        let found = find_by_number(&pool, "201").await.unwrap().unwrap();
        assert_eq!(found.id, room.id);
        assert_eq!(found.floor, 2);
        assert!(find_by_number(&pool, "999").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_filter() {
        let pool = test_pool().await;
        seed_room(&pool, "101", "AVAILABLE").await;
        seed_room(&pool, "102", "HOUSEKEEPING").await;
        seed_room(&pool, "103", "HOUSEKEEPING").await;

        let all = list(&pool, &RoomFilter::default()).await.unwrap();
        assert_eq!(all.len(), 3);

        let dirty = list(
            &pool,
            &RoomFilter {
                status: Some(RoomStatus::Housekeeping),
                floor: None,
            },
        )
        .await
        .unwrap();
        assert_eq!(dirty.len(), 2);
        assert!(dirty.iter().all(|r| r.status == RoomStatus::Housekeeping));
    }

    #[tokio::test]
    async fn test_transition_requires_source_status() {
        let pool = test_pool().await;
        seed_room(&pool, "101", "HOUSEKEEPING").await;
        let mut conn = pool.acquire().await.unwrap();

        let moved = transition(&mut conn, "101", &[RoomStatus::Available], RoomStatus::FullNight)
            .await
            .unwrap();
        assert!(!moved);

        let moved = transition(
            &mut conn,
            "101",
            &[RoomStatus::Housekeeping],
            RoomStatus::CleaningInProgress,
        )
        .await
        .unwrap();
        assert!(moved);
        drop(conn);

        let room = find_by_number(&pool, "101").await.unwrap().unwrap();
        assert_eq!(room.status, RoomStatus::CleaningInProgress);
    }

    #[tokio::test]
    async fn test_set_status_guarded_expected_mismatch() {
        let pool = test_pool().await;
        seed_room(&pool, "101", "AVAILABLE").await;
        let mut conn = pool.acquire().await.unwrap();

        let from = RoomStatus::predecessors_of(RoomStatus::Maintenance);
        let missed = set_status_guarded(
            &mut conn,
            "101",
            &from,
            RoomStatus::Maintenance,
            Some(RoomStatus::Housekeeping),
        )
        .await
        .unwrap();
        assert!(missed.is_none());

        let room = set_status_guarded(
            &mut conn,
            "101",
            &from,
            RoomStatus::Maintenance,
            Some(RoomStatus::Available),
        )
        .await
        .unwrap()
        .unwrap();
        assert_eq!(room.status, RoomStatus::Maintenance);
    }

    #[tokio::test]
    async fn test_count_by_status() {
        let pool = test_pool().await;
        seed_room(&pool, "101", "AVAILABLE").await;
        seed_room(&pool, "102", "AVAILABLE").await;
        seed_room(&pool, "103", "MAINTENANCE").await;

        let counts = count_by_status(&pool).await.unwrap();
        let available = counts
            .iter()
            .find(|c| c.status == RoomStatus::Available)
            .unwrap();
        assert_eq!(available.count, 2);
    }
}
