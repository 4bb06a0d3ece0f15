//! Thirteenth salary.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::TaxTables;

use super::inss::inss_tax;
use super::irrf::irrf_salary_tax;
use super::rounding::round_money;

/// Months in a full year of service.
pub const MONTHS_PER_YEAR: u32 = 12;

/// Computes the thirteenth salary for `worked_months` of service.
///
/// The payment is `salary / 12 x worked_months`, less INSS and IRRF computed
/// on the full monthly salary. No food pension is deducted from the IRRF
/// base. A `worked_months` of zero means a full year.
///
/// # Examples
///
/// ```
/// use br_payroll::calculation::thirteenth_salary;
/// use br_payroll::config::TaxTables;
/// use rust_decimal::Decimal;
///
/// let pay = thirteenth_salary(Decimal::new(350000, 2), 0, 12, TaxTables::current());
/// assert_eq!(pay, Decimal::new(312775, 2));
/// ```
pub fn thirteenth_salary(
    salary: Decimal,
    dependants: u32,
    worked_months: u32,
    tables: &TaxTables,
) -> Decimal {
    let worked_months = if worked_months == 0 {
        MONTHS_PER_YEAR
    } else {
        worked_months
    };

    let accrued = salary / Decimal::from(MONTHS_PER_YEAR) * Decimal::from(worked_months);
    let inss = inss_tax(salary, tables);
    let irrf = irrf_salary_tax(salary, Decimal::ZERO, dependants, tables);
    let pay = round_money(accrued - inss - irrf);

    debug!(
        salary = %salary,
        worked_months,
        inss = %inss,
        irrf = %irrf,
        pay = %pay,
        "Computed thirteenth salary"
    );

    pay
}
