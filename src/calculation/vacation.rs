//! Vacation pay, full and pro-rated.
//!
//! Vacation pay adds the constitutional one-third bonus to the salary before
//! INSS and IRRF are withheld. The bonus is rounded to cents before it is
//! added.
//!
//! Neither formula subtracts `other_discounts`, unlike
//! [`net_salary`](fn@super::net_salary).

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::TaxTables;
use crate::models::PayrollInput;

use super::inss::inss_tax;
use super::irrf::irrf_salary_tax;
use super::rounding::round_money;

/// Days in the month vacation pay is pro-rated against.
pub const DAYS_PER_MONTH: u32 = 30;

/// The vacation bonus is one third of the salary.
const VACATION_BONUS_DIVISOR: u32 = 3;

/// Returns the salary plus its rounded one-third vacation bonus.
fn with_vacation_bonus(salary: Decimal) -> Decimal {
    salary + round_money(salary / Decimal::from(VACATION_BONUS_DIVISOR))
}

/// Withholds INSS, IRRF and the benefit from a vacation salary.
fn net_of_withholdings(salary: Decimal, input: &PayrollInput, tables: &TaxTables) -> Decimal {
    let inss = inss_tax(salary, tables);
    let irrf = irrf_salary_tax(salary, input.food_pension, input.dependants, tables);
    round_money(salary - inss - irrf - input.benefit)
}

/// Computes the net pay for a full vacation month.
///
/// Uses `salary`, `benefit`, `food_pension` and `dependants` from the input.
///
/// # Examples
///
/// ```
/// use br_payroll::calculation::vacation_salary;
/// use br_payroll::config::TaxTables;
/// use br_payroll::models::PayrollInput;
/// use rust_decimal::Decimal;
///
/// let input = PayrollInput::new(Decimal::new(450000, 2));
/// assert_eq!(vacation_salary(&input, TaxTables::current()), Decimal::new(477504, 2));
/// ```
pub fn vacation_salary(input: &PayrollInput, tables: &TaxTables) -> Decimal {
    let salary = with_vacation_bonus(input.salary);
    let net = net_of_withholdings(salary, input, tables);
    debug!(salary = %salary, net = %net, "Computed vacation salary");
    net
}

/// Computes the net pay for `requested_days` of vacation.
///
/// The bonus-inclusive salary is divided by [`DAYS_PER_MONTH`] and multiplied
/// by the requested days before withholdings.
pub fn vacation_fractionated_salary(
    input: &PayrollInput,
    requested_days: u32,
    tables: &TaxTables,
) -> Decimal {
    let salary = with_vacation_bonus(input.salary) / Decimal::from(DAYS_PER_MONTH)
        * Decimal::from(requested_days);
    let net = net_of_withholdings(salary, input, tables);
    debug!(
        salary = %salary,
        requested_days,
        net = %net,
        "Computed fractionated vacation salary"
    );
    net
}
