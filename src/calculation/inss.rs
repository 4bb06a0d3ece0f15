//! INSS social-security contribution.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::TaxTables;

use super::brackets::cumulative_tax;

/// Computes the INSS contribution on a gross salary.
///
/// The INSS table is charged progressively from zero with no deductions.
/// Salaries above the last cutoff pay the ceiling contribution.
///
/// # Examples
///
/// ```
/// use br_payroll::calculation::inss_tax;
/// use br_payroll::config::TaxTables;
/// use rust_decimal::Decimal;
///
/// let tables = TaxTables::current();
/// assert_eq!(inss_tax(Decimal::new(100000, 2), tables), Decimal::new(7500, 2));
/// ```
pub fn inss_tax(salary: Decimal, tables: &TaxTables) -> Decimal {
    let tax = cumulative_tax(tables.inss(), salary);
    debug!(salary = %salary, tax = %tax, "Computed INSS contribution");
    tax
}
