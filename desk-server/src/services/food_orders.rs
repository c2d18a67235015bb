//! Food Order Subsystem
//!
//! `create_order` writes the order, the daily revenue increment and (for CASH)
//! the guest's food charge in one transaction. `delete_order` reverses all
//! three the same way.

use chrono_tz::Tz;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{FoodOrder, FoodOrderCreate, PaymentMethod, PaymentStatus, RoomOrders};
use sqlx::SqlitePool;

use crate::db;
use crate::db::repository::food_order::{self, NewFoodOrder};
use crate::db::repository::{daily_revenue, guest_stay};
use crate::services::room_registry::room_not_found;
use crate::utils::validation::{MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_required_text};
use crate::utils::{money, time};

#[derive(Clone)]
pub struct FoodOrders {
    pool: SqlitePool,
    tz: Tz,
}

impl FoodOrders {
    pub fn new(pool: SqlitePool, tz: Tz) -> Self {
        Self { pool, tz }
    }

    /// Record a PAID order and fold its amount into revenue and, for CASH, the stay
    pub async fn create_order(&self, data: FoodOrderCreate) -> AppResult<FoodOrder> {
        let method = resolve_payment_method(data.payment_method.as_deref())?;
        validate_required_text(&data.food_name, "food_name", MAX_NAME_LEN)?;
        validate_required_text(&data.room_number, "room_number", MAX_SHORT_TEXT_LEN)?;
        money::validate_price(data.price)?;
        money::validate_quantity(data.quantity)?;
        if data.guest_id <= 0 {
            return Err(AppError::validation("guest_id must be positive"));
        }

        let amount = money::line_total(data.price, data.quantity);
        // One "today" for the order row and the revenue upsert
        let business_date = time::format_date(time::today(self.tz));
        let now = shared::util::now_millis();
        let row = NewFoodOrder {
            guest_id: data.guest_id,
            room_number: data.room_number.trim(),
            food_name: data.food_name.trim(),
            price: data.price,
            quantity: data.quantity,
            payment_method: method,
            business_date: &business_date,
        };

        let mut tx = db::begin(&self.pool).await?;
        let order = food_order::insert(&mut *tx, &row, now)
            .await?
            .ok_or_else(|| room_not_found(row.room_number))?;

        daily_revenue::add(&mut *tx, &business_date, method, amount).await?;

        if method == PaymentMethod::Cash
            && !guest_stay::add_food_charge(&mut *tx, order.guest_id, &order.room_number, amount)
                .await?
        {
            return Err(AppError::with_message(
                ErrorCode::StayNotFound,
                format!(
                    "No active stay {} in room {} to charge",
                    order.guest_id, order.room_number
                ),
            )
            .with_detail("guest_id", order.guest_id));
        }
        db::commit(tx).await?;

        tracing::info!(
            order_id = order.id,
            guest_id = order.guest_id,
            room_number = %order.room_number,
            payment_method = %method,
            amount,
            business_date = %business_date,
            "Food order created"
        );
        Ok(order)
    }

    /// Delete an order and reverse its revenue increment and, for CASH, the guest charge
    pub async fn delete_order(&self, id: i64) -> AppResult<FoodOrder> {
        let mut tx = db::begin(&self.pool).await?;
        let order = food_order::delete_returning(&mut *tx, id)
            .await?
            .ok_or_else(|| order_not_found(id))?;
        let amount = money::line_total(order.price, order.quantity);

        if !daily_revenue::subtract(&mut *tx, &order.business_date, order.payment_method, amount)
            .await?
        {
            tracing::warn!(
                order_id = id,
                business_date = %order.business_date,
                payment_method = %order.payment_method,
                "No daily revenue row to reverse"
            );
        }

        if order.payment_method == PaymentMethod::Cash
            && !guest_stay::subtract_food_charge(&mut *tx, order.guest_id, amount).await?
        {
            tracing::warn!(
                order_id = id,
                guest_id = order.guest_id,
                "Guest for deleted order not found, charge treated as reconciled"
            );
        }
        db::commit(tx).await?;

        tracing::info!(
            order_id = id,
            room_number = %order.room_number,
            amount,
            "Food order deleted"
        );
        Ok(order)
    }

    pub async fn get_order(&self, id: i64) -> AppResult<FoodOrder> {
        food_order::find_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| order_not_found(id))
    }

    /// Orders for a room with a summary; `total_amount` counts PAID orders only
    pub async fn orders_by_room(&self, room_number: &str) -> AppResult<RoomOrders> {
        let orders = food_order::find_by_room(&self.pool, room_number).await?;
        Ok(summarize(orders))
    }

    pub async fn orders_by_guest(&self, guest_id: i64) -> AppResult<Vec<FoodOrder>> {
        Ok(food_order::find_by_guest(&self.pool, guest_id).await?)
    }

    pub async fn orders_by_date(&self, date: &str) -> AppResult<Vec<FoodOrder>> {
        let date = time::format_date(time::parse_date(date)?);
        Ok(food_order::find_by_date(&self.pool, &date).await?)
    }

    /// Changes `payment_status` only; amounts already folded into revenue stay put
    pub async fn update_payment_status(
        &self,
        id: i64,
        status: PaymentStatus,
    ) -> AppResult<FoodOrder> {
        let order = food_order::update_payment_status(&self.pool, id, status)
            .await?
            .ok_or_else(|| order_not_found(id))?;
        tracing::info!(order_id = id, payment_status = ?status, "Food order payment status updated");
        Ok(order)
    }
}

/// Absent or blank means CASH; anything else must be a known method
fn resolve_payment_method(raw: Option<&str>) -> AppResult<PaymentMethod> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(PaymentMethod::Cash),
        Some(name) => PaymentMethod::parse(name).ok_or_else(|| {
            AppError::with_message(
                ErrorCode::InvalidPaymentMethod,
                format!("Unknown payment method: {name}"),
            )
            .with_detail("payment_method", name)
        }),
    }
}

fn summarize(orders: Vec<FoodOrder>) -> RoomOrders {
    let pending_payments = orders
        .iter()
        .filter(|o| o.payment_status == PaymentStatus::Pending)
        .count() as i64;
    let total_amount = money::sum(
        orders
            .iter()
            .filter(|o| o.payment_status == PaymentStatus::Paid)
            .map(|o| money::line_total(o.price, o.quantity)),
    );
    RoomOrders {
        total_orders: orders.len() as i64,
        pending_payments,
        total_amount,
        orders,
    }
}

fn order_not_found(id: i64) -> AppError {
    AppError::with_message(ErrorCode::FoodOrderNotFound, format!("Food order {id} not found"))
        .with_detail("order_id", id)
}
