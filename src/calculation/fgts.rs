//! FGTS monthly deposit.

use rust_decimal::Decimal;

use crate::config::TaxTables;

use super::rounding::round_money;

/// Computes the monthly FGTS deposit: a flat rate on the salary, no brackets.
///
/// # Examples
///
/// ```
/// use br_payroll::calculation::fgts_per_month;
/// use br_payroll::config::TaxTables;
/// use rust_decimal::Decimal;
///
/// let deposit = fgts_per_month(Decimal::new(1000000, 2), TaxTables::current());
/// assert_eq!(deposit, Decimal::new(80000, 2));
/// ```
pub fn fgts_per_month(salary: Decimal, tables: &TaxTables) -> Decimal {
    round_money(salary * tables.constants().fgts_rate)
}
