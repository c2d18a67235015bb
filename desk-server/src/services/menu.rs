//! Menu catalog

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{MenuItem, MenuItemCreate, MenuItemUpdate};
use sqlx::SqlitePool;

use crate::db::repository::{RepoError, menu};
use crate::utils::money::validate_price;
use crate::utils::validation::{MAX_NAME_LEN, validate_required_text};

#[derive(Clone)]
pub struct MenuCatalog {
    pool: SqlitePool,
}

impl MenuCatalog {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, data: MenuItemCreate) -> AppResult<MenuItem> {
        validate_required_text(&data.food_name, "food_name", MAX_NAME_LEN)?;
        validate_price(data.food_price)?;
        let data = MenuItemCreate {
            food_name: data.food_name.trim().to_string(),
            food_price: data.food_price,
        };
        let item = menu::create(&self.pool, &data)
            .await
            .map_err(|e| exists_on_duplicate(e, &data.food_name))?;
        tracing::info!(item_id = item.id, food_name = %item.food_name, "Menu item created");
        Ok(item)
    }

    /// All items, or those whose name contains `search` (case-insensitive)
    pub async fn list(&self, search: Option<&str>) -> AppResult<Vec<MenuItem>> {
        match search.map(str::trim).filter(|s| !s.is_empty()) {
            Some(term) => Ok(menu::search(&self.pool, term).await?),
            None => Ok(menu::find_all(&self.pool).await?),
        }
    }

    pub async fn get(&self, id: i64) -> AppResult<MenuItem> {
        menu::find_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| item_not_found(id))
    }

    pub async fn update(&self, id: i64, data: MenuItemUpdate) -> AppResult<MenuItem> {
        if let Some(name) = &data.food_name {
            validate_required_text(name, "food_name", MAX_NAME_LEN)?;
        }
        if let Some(price) = data.food_price {
            validate_price(price)?;
        }
        let data = MenuItemUpdate {
            food_name: data.food_name.map(|n| n.trim().to_string()),
            food_price: data.food_price,
        };
        let name = data.food_name.clone().unwrap_or_default();
        let item = menu::update(&self.pool, id, &data)
            .await
            .map_err(|e| exists_on_duplicate(e, &name))?
            .ok_or_else(|| item_not_found(id))?;
        tracing::info!(item_id = id, "Menu item updated");
        Ok(item)
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        if !menu::delete(&self.pool, id).await? {
            return Err(item_not_found(id));
        }
        tracing::info!(item_id = id, "Menu item deleted");
        Ok(())
    }
}

fn exists_on_duplicate(err: RepoError, name: &str) -> AppError {
    match err {
        RepoError::Duplicate(_) => AppError::with_message(
            ErrorCode::MenuItemExists,
            format!("Menu item '{name}' already exists"),
        ),
        other => other.into(),
    }
}

fn item_not_found(id: i64) -> AppError {
    AppError::with_message(ErrorCode::MenuItemNotFound, format!("Menu item {id} not found"))
}
