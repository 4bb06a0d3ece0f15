//! Monetary rounding.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places every monetary result is rounded to.
pub const MONEY_PRECISION: u32 = 2;

/// Rounds a value to `precision` decimal places, ties away from zero.
///
/// The result always carries exactly `precision` decimal places, so `0`
/// rounds to `0.00` at money precision.
///
/// # Examples
///
/// ```
/// use br_payroll::calculation::round;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round(Decimal::from_str("47.619").unwrap(), 2), Decimal::from_str("47.62").unwrap());
/// assert_eq!(round(Decimal::from_str("0.125").unwrap(), 2), Decimal::from_str("0.13").unwrap());
/// assert_eq!(round(Decimal::from_str("-0.125").unwrap(), 2), Decimal::from_str("-0.13").unwrap());
/// ```
pub fn round(value: Decimal, precision: u32) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(precision);
    rounded
}

/// Rounds a monetary value to cents.
pub fn round_money(value: Decimal) -> Decimal {
    round(value, MONEY_PRECISION)
}
