//! Money calculation utilities using rust_decimal for precision
//!
//! Amounts are stored as `f64`; arithmetic goes through `Decimal` and is
//! rounded to 2 decimal places (half away from zero) on the way back.

use rust_decimal::prelude::*;

use crate::utils::AppError;

const DECIMAL_PLACES: u32 = 2;

/// Maximum allowed unit price
pub const MAX_PRICE: f64 = 1_000_000_000.0;
/// Maximum allowed quantity per order line
pub const MAX_QUANTITY: i64 = 9999;

/// Tolerance for monetary comparisons (0.01)
pub const MONEY_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Convert f64 to Decimal; non-finite input becomes zero
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        tracing::error!(value = ?value, "Non-finite f64 in monetary calculation, defaulting to zero");
        Decimal::ZERO
    })
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// price × quantity
pub fn line_total(price: f64, quantity: i64) -> f64 {
    to_f64(to_decimal(price) * Decimal::from(quantity))
}

/// Σ of amounts without f64 drift
pub fn sum<I: IntoIterator<Item = f64>>(amounts: I) -> f64 {
    to_f64(amounts.into_iter().map(to_decimal).sum())
}

/// a − b
pub fn sub(a: f64, b: f64) -> f64 {
    to_f64(to_decimal(a) - to_decimal(b))
}

/// Compare two monetary values for equality (within 0.01 tolerance)
pub fn money_eq(a: f64, b: f64) -> bool {
    (to_decimal(a) - to_decimal(b)).abs() < MONEY_TOLERANCE
}

/// Unit price must be finite, non-negative, at most [`MAX_PRICE`] and
/// whole cents, so a line total never needs rounding
pub fn validate_price(price: f64) -> Result<(), AppError> {
    if !price.is_finite() {
        return Err(AppError::validation(format!(
            "price must be a finite number, got {price}"
        )));
    }
    if price < 0.0 {
        return Err(AppError::validation(format!(
            "price must be non-negative, got {price}"
        )));
    }
    if price > MAX_PRICE {
        return Err(AppError::validation(format!(
            "price exceeds maximum allowed ({MAX_PRICE}), got {price}"
        )));
    }
    let exact = to_decimal(price);
    if exact != exact.round_dp(DECIMAL_PLACES) {
        return Err(AppError::validation(format!(
            "price must have at most {DECIMAL_PLACES} decimal places, got {price}"
        )));
    }
    Ok(())
}

/// Quantity must be in `1..=MAX_QUANTITY`
pub fn validate_quantity(quantity: i64) -> Result<(), AppError> {
    if !(1..=MAX_QUANTITY).contains(&quantity) {
        return Err(AppError::validation(format!(
            "quantity must be between 1 and {MAX_QUANTITY}, got {quantity}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_total_rounds() {
        assert_eq!(line_total(2500.0, 3), 7500.0);
        assert_eq!(line_total(0.1, 3), 0.3);
    }

    #[test]
    fn test_sum_avoids_drift() {
        assert_eq!(sum([0.1, 0.2]), 0.3);
        assert_eq!(sum(Vec::<f64>::new()), 0.0);
        assert_eq!(sub(0.3, 0.1), 0.2);
    }

    #[test]
    fn test_money_eq() {
        assert!(money_eq(100.0, 100.0));
        assert!(money_eq(100.004, 100.006));
        assert!(!money_eq(100.0, 100.02));
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(0.0).is_ok());
        assert!(validate_price(2500.0).is_ok());
        assert!(validate_price(-1.0).is_err());
        assert!(validate_price(f64::INFINITY).is_err());
        assert!(validate_price(MAX_PRICE + 1.0).is_err());
    }

    #[test]
    fn test_validate_price_rejects_sub_cent() {
        assert!(validate_price(19.99).is_ok());
        assert!(validate_price(0.1).is_ok());
        assert!(validate_price(0.125).is_err());
        assert!(validate_price(2500.001).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(9999).is_ok());
        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-2).is_err());
        assert!(validate_quantity(10_000).is_err());
    }
}
