//! Menu Item Repository

use super::RepoResult;
use shared::models::{MenuItem, MenuItemCreate, MenuItemUpdate};
use sqlx::SqlitePool;

const COLUMNS: &str = "id, food_name, food_price, created_at, updated_at";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<MenuItem>> {
    let items = sqlx::query_as::<_, MenuItem>(&format!(
        "SELECT {COLUMNS} FROM menu_item ORDER BY food_name"
    ))
    .fetch_all(pool)
    .await?;
    Ok(items)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<MenuItem>> {
    let item = sqlx::query_as::<_, MenuItem>(&format!(
        "SELECT {COLUMNS} FROM menu_item WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(item)
}

/// Case-insensitive substring match on the name
pub async fn search(pool: &SqlitePool, term: &str) -> RepoResult<Vec<MenuItem>> {
    let pattern = format!("%{}%", term.to_lowercase());
    let items = sqlx::query_as::<_, MenuItem>(&format!(
        "SELECT {COLUMNS} FROM menu_item WHERE LOWER(food_name) LIKE ? ORDER BY food_name"
    ))
    .bind(pattern)
    .fetch_all(pool)
    .await?;
    Ok(items)
}

pub async fn create(pool: &SqlitePool, data: &MenuItemCreate) -> RepoResult<MenuItem> {
    let now = shared::util::now_millis();
    let item = sqlx::query_as::<_, MenuItem>(&format!(
        "INSERT INTO menu_item (food_name, food_price, created_at, updated_at) VALUES (?1, ?2, ?3, ?3) RETURNING {COLUMNS}"
    ))
    .bind(&data.food_name)
    .bind(data.food_price)
    .bind(now)
    .fetch_one(pool)
    .await?;
    Ok(item)
}

pub async fn update(
    pool: &SqlitePool,
    id: i64,
    data: &MenuItemUpdate,
) -> RepoResult<Option<MenuItem>> {
    let item = sqlx::query_as::<_, MenuItem>(&format!(
        "UPDATE menu_item SET food_name = COALESCE(?1, food_name), food_price = COALESCE(?2, food_price), updated_at = ?3 WHERE id = ?4 RETURNING {COLUMNS}"
    ))
    .bind(&data.food_name)
    .bind(data.food_price)
    .bind(shared::util::now_millis())
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(item)
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let result = sqlx::query("DELETE FROM menu_item WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::RepoError;
    use crate::db::repository::testing::test_pool;

    fn item(name: &str, price: f64) -> MenuItemCreate {
        MenuItemCreate {
            food_name: name.into(),
            food_price: price,
        }
    }

    #[tokio::test]
    async fn test_crud() {
        let pool = test_pool().await;
        let rice = create(&pool, &item("Fried Rice", 3500.0)).await.unwrap();
        create(&pool, &item("Mohinga", 2000.0)).await.unwrap();
        assert_eq!(find_all(&pool).await.unwrap().len(), 2);

        let updated = update(
            &pool,
            rice.id,
            &MenuItemUpdate {
                food_name: None,
                food_price: Some(4000.0),
            },
        )
        .await
        .unwrap()
        .unwrap();
        assert_eq!(updated.food_name, "Fried Rice");
        assert_eq!(updated.food_price, 4000.0);

        assert!(delete(&pool, rice.id).await.unwrap());
        assert!(!delete(&pool, rice.id).await.unwrap());
        assert!(find_by_id(&pool, rice.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_name() {
        let pool = test_pool().await;
        create(&pool, &item("Tea", 500.0)).await.unwrap();
        let err = create(&pool, &item("Tea", 600.0)).await.unwrap_err();
        assert!(matches!(err, RepoError::Duplicate(_)));
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive() {
        let pool = test_pool().await;
        create(&pool, &item("Fried Rice", 3500.0)).await.unwrap();
        create(&pool, &item("Fried Noodle", 3000.0)).await.unwrap();
        create(&pool, &item("Tea", 500.0)).await.unwrap();

        assert_eq!(search(&pool, "FRIED").await.unwrap().len(), 2);
        assert_eq!(search(&pool, "tea").await.unwrap().len(), 1);
        assert!(search(&pool, "soup").await.unwrap().is_empty());
    }
}
