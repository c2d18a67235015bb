//! Room price book

use shared::error::AppResult;
use shared::models::{RoomPrices, RoomPricesUpdate};
use sqlx::SqlitePool;

use crate::auth::CurrentUser;
use crate::db::repository::room_price;
use crate::utils::money::validate_price;

#[derive(Clone)]
pub struct RoomPriceBook {
    pool: SqlitePool,
}

impl RoomPriceBook {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Current prices; defaults are seeded on first read
    pub async fn get(&self) -> AppResult<RoomPrices> {
        Ok(room_price::get(&self.pool).await?)
    }

    pub async fn update(&self, caller: &CurrentUser, patch: RoomPricesUpdate) -> AppResult<RoomPrices> {
        caller.require_admin()?;
        for price in [
            patch.full_night,
            patch.day_caution,
            patch.session,
            patch.extra_bed,
            patch.hourly,
        ]
        .into_iter()
        .flatten()
        {
            validate_price(price)?;
        }

        let prices = room_price::update(&self.pool, &patch).await?;
        tracing::info!(
            updated_by = caller.id,
            full_night = prices.full_night,
            day_caution = prices.day_caution,
            session = prices.session,
            "Room prices updated"
        );
        Ok(prices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::testing::test_pool;
    use shared::error::ErrorCode;
    use shared::models::StaffRole;

    fn caller(role: StaffRole) -> CurrentUser {
        CurrentUser {
            id: 1,
            name: "Daw Mya".into(),
            role,
        }
    }

    #[tokio::test]
    async fn test_defaults_then_update() {
        let book = RoomPriceBook::new(test_pool().await);
        let prices = book.get().await.unwrap();
        assert_eq!(prices.full_night, 63000.0);
        assert_eq!(prices.hourly, 10000.0);

        let updated = book
            .update(
                &caller(StaffRole::Admin),
                RoomPricesUpdate {
                    session: Some(32000.0),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.session, 32000.0);
        assert_eq!(updated.full_night, 63000.0);
    }

    #[tokio::test]
    async fn test_update_requires_admin_and_valid_prices() {
        let book = RoomPriceBook::new(test_pool().await);
        let err = book
            .update(&caller(StaffRole::Receptionist), RoomPricesUpdate::default())
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::AdminRequired);

        let err = book
            .update(
                &caller(StaffRole::Admin),
                RoomPricesUpdate {
                    hourly: Some(f64::NAN),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }
}
