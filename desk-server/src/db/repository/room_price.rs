//! Room Price Repository
//!
//! A single row (`id = 1`), seeded with defaults on first read.

use super::RepoResult;
use shared::models::{RoomPrices, RoomPricesUpdate};
use sqlx::SqlitePool;

const COLUMNS: &str = "full_night, day_caution, session, extra_bed, hourly, updated_at";

async fn ensure_seeded(pool: &SqlitePool) -> RepoResult<()> {
    let defaults = RoomPrices::default();
    sqlx::query(
        "INSERT OR IGNORE INTO room_prices (id, full_night, day_caution, session, extra_bed, hourly, updated_at) VALUES (1, ?, ?, ?, ?, ?, ?)",
    )
    .bind(defaults.full_night)
    .bind(defaults.day_caution)
    .bind(defaults.session)
    .bind(defaults.extra_bed)
    .bind(defaults.hourly)
    .bind(shared::util::now_millis())
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn get(pool: &SqlitePool) -> RepoResult<RoomPrices> {
    ensure_seeded(pool).await?;
    let prices = sqlx::query_as::<_, RoomPrices>(&format!(
        "SELECT {COLUMNS} FROM room_prices WHERE id = 1"
    ))
    .fetch_one(pool)
    .await?;
    Ok(prices)
}

pub async fn update(pool: &SqlitePool, data: &RoomPricesUpdate) -> RepoResult<RoomPrices> {
    ensure_seeded(pool).await?;
    let prices = sqlx::query_as::<_, RoomPrices>(&format!(
        "UPDATE room_prices SET \
            full_night = COALESCE(?1, full_night), \
            day_caution = COALESCE(?2, day_caution), \
            session = COALESCE(?3, session), \
            extra_bed = COALESCE(?4, extra_bed), \
            hourly = COALESCE(?5, hourly), \
            updated_at = ?6 \
         WHERE id = 1 RETURNING {COLUMNS}"
    ))
    .bind(data.full_night)
    .bind(data.day_caution)
    .bind(data.session)
    .bind(data.extra_bed)
    .bind(data.hourly)
    .bind(shared::util::now_millis())
    .fetch_one(pool)
    .await?;
    Ok(prices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::testing::test_pool;

    #[tokio::test]
    async fn test_get_seeds_defaults() {
        let pool = test_pool().await;
        let prices = get(&pool).await.unwrap();
        assert_eq!(prices.full_night, 63000.0);
        assert_eq!(prices.hourly, 10000.0);
    }

    #[tokio::test]
    async fn test_partial_update() {
        let pool = test_pool().await;
        let prices = update(
            &pool,
            &RoomPricesUpdate {
                session: Some(35000.0),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(prices.session, 35000.0);
        assert_eq!(prices.full_night, 63000.0);
        assert_eq!(get(&pool).await.unwrap().session, 35000.0);
    }
}
