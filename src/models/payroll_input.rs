//! Payroll input model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The figures an employee's payroll is computed from.
///
/// Every field except `salary` is optional when deserializing and defaults
/// to zero.
///
/// # Example
///
/// ```
/// use br_payroll::models::PayrollInput;
/// use rust_decimal::Decimal;
///
/// let input = PayrollInput {
///     dependants: 2,
///     food_pension: Decimal::new(10000, 2),
///     ..PayrollInput::new(Decimal::new(800000, 2))
/// };
/// assert_eq!(input.extra_hours, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PayrollInput {
    /// Gross monthly salary.
    pub salary: Decimal,
    /// Benefit value discounted from the net salary.
    #[serde(default)]
    pub benefit: Decimal,
    /// Food or alimony pension, deductible from the IRRF base.
    #[serde(default)]
    pub food_pension: Decimal,
    /// Any other discount applied to the net salary.
    #[serde(default)]
    pub other_discounts: Decimal,
    /// Multiplier paid on extra hours (1.5 for +50%).
    #[serde(default)]
    pub extra_percentage: Decimal,
    /// Number of dependants declared for IRRF.
    #[serde(default)]
    pub dependants: u32,
    /// Number of extra hours worked in the period.
    #[serde(default)]
    pub extra_hours: u32,
    /// Days worked in the period, used to derive the hourly rate.
    #[serde(default)]
    pub days_worked: u32,
    /// Hours worked per day, used to derive the hourly rate.
    #[serde(default)]
    pub hours_per_day: u32,
}

impl PayrollInput {
    /// Creates an input with the given salary and every other field zeroed.
    pub fn new(salary: Decimal) -> Self {
        Self {
            salary,
            ..Self::default()
        }
    }

    /// Returns true if extra hours were worked in the period.
    pub fn has_extra_hours(&self) -> bool {
        self.extra_hours > 0
    }
}
