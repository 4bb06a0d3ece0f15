//! IRRF withheld income tax, on salaries and on profit sharing (PLR).

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use crate::config::TaxTables;

use super::brackets::{BracketTaxResult, cumulative_tax, progressive_tax};
use super::inss::inss_tax;

/// The IRRF salary calculation with its deduction step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IrrfSalaryResult {
    /// The INSS contribution deducted from the base.
    pub inss: Decimal,
    /// INSS + food pension + dependants deduction.
    pub itemized_deduction: Decimal,
    /// The deduction actually used: the itemized one, or the simplified
    /// deduction when that is larger.
    pub deduction: Decimal,
    /// Whether the simplified deduction replaced the itemized one.
    pub simplified_deduction_applied: bool,
    /// The bracket walk over `salary - deduction`.
    pub bracket: BracketTaxResult,
    /// The withheld tax, rounded to cents.
    pub tax: Decimal,
}

/// Computes the IRRF on a salary, returning every intermediate figure.
///
/// The itemized deduction is the INSS contribution plus the food pension
/// plus the per-dependant deduction for each dependant. When that falls short
/// of the simplified deduction, the simplified deduction is used instead.
/// The IRRF table is then applied to the salary net of the deduction.
pub fn irrf_salary_breakdown(
    salary: Decimal,
    food_pension: Decimal,
    dependants: u32,
    tables: &TaxTables,
) -> IrrfSalaryResult {
    let inss = inss_tax(salary, tables);
    irrf_salary_breakdown_with_inss(salary, inss, food_pension, dependants, tables)
}

/// Computes the IRRF breakdown with an INSS contribution the caller already
/// has for the same salary.
pub(crate) fn irrf_salary_breakdown_with_inss(
    salary: Decimal,
    inss: Decimal,
    food_pension: Decimal,
    dependants: u32,
    tables: &TaxTables,
) -> IrrfSalaryResult {
    let constants = tables.constants();
    let itemized_deduction =
        inss + food_pension + Decimal::from(dependants) * constants.per_dependant_deduction;

    let simplified_deduction_applied = itemized_deduction < constants.simplified_deduction;
    let deduction = if simplified_deduction_applied {
        constants.simplified_deduction
    } else {
        itemized_deduction
    };

    let bracket = progressive_tax(tables.irrf(), salary - deduction);
    let tax = bracket.tax;

    debug!(
        salary = %salary,
        deduction = %deduction,
        simplified = simplified_deduction_applied,
        tax = %tax,
        "Computed IRRF on salary"
    );

    IrrfSalaryResult {
        inss,
        itemized_deduction,
        deduction,
        simplified_deduction_applied,
        bracket,
        tax,
    }
}

/// Computes the IRRF withheld on a salary.
///
/// # Examples
///
/// ```
/// use br_payroll::calculation::irrf_salary_tax;
/// use br_payroll::config::TaxTables;
/// use rust_decimal::Decimal;
///
/// let tax = irrf_salary_tax(Decimal::new(290000, 2), Decimal::ZERO, 0, TaxTables::current());
/// assert_eq!(tax, Decimal::new(570, 2));
/// ```
pub fn irrf_salary_tax(
    salary: Decimal,
    food_pension: Decimal,
    dependants: u32,
    tables: &TaxTables,
) -> Decimal {
    irrf_salary_breakdown(salary, food_pension, dependants, tables).tax
}

/// Computes the IRRF on a profit-sharing (PLR) payment.
///
/// PLR is taxed on its own exclusive table with no deductions.
///
/// # Examples
///
/// ```
/// use br_payroll::calculation::irrf_plr_tax;
/// use br_payroll::config::TaxTables;
/// use rust_decimal::Decimal;
///
/// let tax = irrf_plr_tax(Decimal::new(900000, 2), TaxTables::current());
/// assert_eq!(tax, Decimal::new(10194, 2));
/// ```
pub fn irrf_plr_tax(value: Decimal, tables: &TaxTables) -> Decimal {
    let tax = cumulative_tax(tables.irrf_plr(), value);
    debug!(value = %value, tax = %tax, "Computed IRRF on profit sharing");
    tax
}
