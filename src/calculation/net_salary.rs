//! Monthly net salary.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::TaxTables;
use crate::error::PayrollResult;
use crate::models::PayrollInput;

use super::hourly::salary_per_hour;
use super::inss::inss_tax;
use super::irrf::irrf_salary_tax;
use super::rounding::round_money;

/// Pay earned for extra hours in the period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtraHoursPay {
    /// The hourly rate, already rounded to cents.
    pub hourly_rate: Decimal,
    /// `hourly_rate x extra_hours x extra_percentage`, unrounded.
    pub amount: Decimal,
}

/// Computes the pay for the input's extra hours, if any were worked.
///
/// The hourly rate is rounded to cents before it is multiplied.
///
/// # Errors
///
/// Returns `InvalidInput` if extra hours were worked but `days_worked` or
/// `hours_per_day` is zero.
pub fn extra_hours_pay(input: &PayrollInput) -> PayrollResult<Option<ExtraHoursPay>> {
    if !input.has_extra_hours() {
        return Ok(None);
    }

    let hourly_rate = salary_per_hour(input.salary, input.days_worked, input.hours_per_day)?;
    let amount = hourly_rate * Decimal::from(input.extra_hours) * input.extra_percentage;

    Ok(Some(ExtraHoursPay {
        hourly_rate,
        amount,
    }))
}

/// Computes the monthly net salary.
///
/// Extra hours pay is added to the salary before taxes, so it is taxed as
/// ordinary salary. INSS and IRRF are then withheld, followed by the benefit
/// and other discounts.
///
/// # Errors
///
/// Returns `InvalidInput` if extra hours were worked but `days_worked` or
/// `hours_per_day` is zero. Without extra hours those fields are ignored.
///
/// # Examples
///
/// ```
/// use br_payroll::calculation::net_salary;
/// use br_payroll::config::TaxTables;
/// use br_payroll::models::PayrollInput;
/// use rust_decimal::Decimal;
///
/// let input = PayrollInput::new(Decimal::new(800000, 2));
/// let net = net_salary(&input, TaxTables::current()).unwrap();
/// assert_eq!(net, Decimal::new(602204, 2));
/// ```
pub fn net_salary(input: &PayrollInput, tables: &TaxTables) -> PayrollResult<Decimal> {
    let mut salary = input.salary;
    if let Some(extra) = extra_hours_pay(input)? {
        salary += extra.amount;
    }

    let inss = inss_tax(salary, tables);
    let irrf = irrf_salary_tax(salary, input.food_pension, input.dependants, tables);
    let net = round_money(salary - inss - irrf - input.benefit - input.other_discounts);

    debug!(salary = %salary, inss = %inss, irrf = %irrf, net = %net, "Computed net salary");

    Ok(net)
}
