//! Revenue Aggregator
//!
//! Report totals are recomputed from `food_order` and `income` rows; the
//! running `daily_revenue` table is only read back for the raw view and for
//! reconciliation against those rows.

use std::collections::HashMap;

use chrono_tz::Tz;
use rust_decimal::Decimal;
use shared::error::{AppError, AppResult};
use shared::models::{
    ActivityEntry, ActivityKind, DailyRevenue, Income, IncomeCreate, PaymentMethod,
    ReconcileEntry, RevenueBucket, RevenueTotals,
};
use sqlx::SqlitePool;

use crate::db::repository::{daily_revenue, food_order, income};
use crate::utils::money::{self, to_decimal, to_f64};
use crate::utils::time;
use crate::utils::validation::{MAX_SHORT_TEXT_LEN, validate_amount, validate_optional_text};

const DEFAULT_ACTIVITY_LIMIT: i64 = 20;
const MAX_ACTIVITY_LIMIT: i64 = 200;

#[derive(Clone)]
pub struct Revenue {
    pool: SqlitePool,
    tz: Tz,
}

/// Running sums for one day
#[derive(Default)]
struct DayAccumulator {
    room: Decimal,
    room_online: Decimal,
    food: Decimal,
    other: Decimal,
}

impl DayAccumulator {
    fn into_totals(self, date: String) -> RevenueTotals {
        let total = self.room + self.food + self.other;
        RevenueTotals {
            date,
            room: to_f64(self.room),
            room_cash: to_f64(self.room - self.room_online),
            room_online: to_f64(self.room_online),
            food: to_f64(self.food),
            other: to_f64(self.other),
            total: to_f64(total),
        }
    }
}

impl Revenue {
    pub fn new(pool: SqlitePool, tz: Tz) -> Self {
        Self { pool, tz }
    }

    /// Record a room or miscellaneous income event on today's business date
    pub async fn record_income(&self, data: IncomeCreate) -> AppResult<Income> {
        validate_amount(data.amount, "amount")?;
        validate_optional_text(&data.room_number, "room_number", MAX_SHORT_TEXT_LEN)?;
        validate_optional_text(&data.revenue_type, "revenue_type", MAX_SHORT_TEXT_LEN)?;

        let business_date = time::format_date(time::today(self.tz));
        let recorded = income::insert(&self.pool, &data, &business_date).await?;
        tracing::info!(
            income_id = recorded.id,
            kind = ?recorded.kind,
            amount = recorded.amount,
            business_date = %business_date,
            "Income recorded"
        );
        Ok(recorded)
    }

    pub async fn income_by_date(&self, date: &str) -> AppResult<Vec<Income>> {
        let date = time::format_date(time::parse_date(date)?);
        Ok(income::find_by_date(&self.pool, &date).await?)
    }

    pub async fn daily_total(&self, date: &str) -> AppResult<RevenueTotals> {
        let totals = self.range_totals(date, date).await?;
        totals
            .into_iter()
            .next()
            .ok_or_else(|| AppError::internal("empty single-day range"))
    }

    /// One entry per calendar day in `[start, end]`, zero days included
    pub async fn range_totals(&self, start: &str, end: &str) -> AppResult<Vec<RevenueTotals>> {
        let days = time::dates_in_range(time::parse_date(start)?, time::parse_date(end)?)?;
        let (Some(first), Some(last)) = (days.first(), days.last()) else {
            return Ok(Vec::new());
        };
        let start = time::format_date(*first);
        let end = time::format_date(*last);

        let mut by_day: HashMap<String, DayAccumulator> = HashMap::new();

        for (date, amount) in food_order::sum_by_date(&self.pool, &start, &end).await? {
            by_day.entry(date).or_default().food += to_decimal(amount);
        }

        for row in income::sums_between(&self.pool, &start, &end).await? {
            let acc = by_day.entry(row.business_date).or_default();
            let amount = to_decimal(row.amount);
            match row.kind.bucket() {
                RevenueBucket::Room => {
                    acc.room += amount;
                    if row.method.is_some_and(|m| m.is_online()) {
                        acc.room_online += amount;
                    }
                }
                RevenueBucket::Food => acc.food += amount,
                RevenueBucket::Other => acc.other += amount,
            }
        }

        Ok(days
            .into_iter()
            .map(|day| {
                let date = time::format_date(day);
                by_day.remove(&date).unwrap_or_default().into_totals(date)
            })
            .collect())
    }

    /// Raw running totals kept by the order protocol
    pub async fn daily_revenue(&self, date: &str) -> AppResult<Vec<DailyRevenue>> {
        let date = time::format_date(time::parse_date(date)?);
        Ok(daily_revenue::find_by_date(&self.pool, &date).await?)
    }

    /// Compare `daily_revenue` with Σ order line totals for every payment method
    pub async fn reconcile(&self, date: &str) -> AppResult<Vec<ReconcileEntry>> {
        let date = time::format_date(time::parse_date(date)?);
        let recorded = daily_revenue::find_by_date(&self.pool, &date).await?;
        let recomputed = food_order::sum_by_method(&self.pool, &date).await?;

        let entries: Vec<ReconcileEntry> = PaymentMethod::ALL
            .into_iter()
            .map(|method| {
                let recorded = recorded
                    .iter()
                    .find(|r| r.payment_method == method)
                    .map(|r| r.revenue)
                    .unwrap_or(0.0);
                let recomputed = recomputed
                    .iter()
                    .find(|(m, _)| *m == method)
                    .map(|(_, v)| to_f64(to_decimal(*v)))
                    .unwrap_or(0.0);
                ReconcileEntry {
                    payment_method: method,
                    recorded,
                    recomputed,
                    difference: money::sub(recorded, recomputed),
                }
            })
            .collect();

        for entry in entries.iter().filter(|e| !money::money_eq(e.difference, 0.0)) {
            tracing::warn!(
                business_date = %date,
                payment_method = %entry.payment_method,
                recorded = entry.recorded,
                recomputed = entry.recomputed,
                "Daily revenue does not match food orders"
            );
        }
        Ok(entries)
    }

    /// Income events and food orders, newest first
    pub async fn recent_activity(&self, limit: Option<i64>) -> AppResult<Vec<ActivityEntry>> {
        let limit = limit
            .unwrap_or(DEFAULT_ACTIVITY_LIMIT)
            .clamp(1, MAX_ACTIVITY_LIMIT);

        let incomes = income::find_recent(&self.pool, limit).await?;
        let orders = food_order::find_recent(&self.pool, limit).await?;

        let mut entries: Vec<ActivityEntry> = incomes
            .into_iter()
            .map(|i| ActivityEntry {
                kind: ActivityKind::Income,
                ref_id: i.id,
                room_number: i.room_number,
                description: format!("{} income", i.kind.as_str()),
                amount: i.amount,
                created_at: i.created_at,
            })
            .chain(orders.into_iter().map(|o| ActivityEntry {
                kind: ActivityKind::FoodOrder,
                ref_id: o.id,
                amount: money::line_total(o.price, o.quantity),
                description: format!("{} x{} ({})", o.food_name, o.quantity, o.payment_method),
                room_number: Some(o.room_number),
                created_at: o.created_at,
            }))
            .collect();

        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        entries.truncate(limit as usize);
        Ok(entries)
    }
}
