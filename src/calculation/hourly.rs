//! Hourly rate derived from a monthly salary.

use rust_decimal::Decimal;
use tracing::warn;

use crate::error::{PayrollError, PayrollResult};

use super::rounding::round_money;

fn require_positive(field: &str, value: u32) -> PayrollResult<Decimal> {
    if value == 0 {
        warn!(field, "Rejected zero divisor for hourly rate");
        return Err(PayrollError::InvalidInput {
            field: field.to_string(),
            message: "must be greater than zero".to_string(),
        });
    }
    Ok(Decimal::from(value))
}

/// Computes the hourly rate: `(salary / days_worked) / hours_per_day`,
/// rounded to cents.
///
/// # Errors
///
/// Returns `InvalidInput` if `days_worked` or `hours_per_day` is zero.
///
/// # Examples
///
/// ```
/// use br_payroll::calculation::salary_per_hour;
/// use rust_decimal::Decimal;
///
/// let rate = salary_per_hour(Decimal::new(800000, 2), 21, 8).unwrap();
/// assert_eq!(rate, Decimal::new(4762, 2));
/// ```
pub fn salary_per_hour(
    salary: Decimal,
    days_worked: u32,
    hours_per_day: u32,
) -> PayrollResult<Decimal> {
    let days = require_positive("days_worked", days_worked)?;
    let hours = require_positive("hours_per_day", hours_per_day)?;
    Ok(round_money(salary / days / hours))
}
