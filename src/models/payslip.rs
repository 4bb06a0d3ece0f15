//! Payslip models.
//!
//! This module contains the [`Payslip`] type returned by the payslip
//! calculation, and the [`AuditStep`] records explaining how each figure was
//! reached.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The full breakdown of a monthly net salary calculation.
///
/// `net_salary` is always
/// `taxable_salary - inss - irrf - benefit - other_discounts`, rounded to
/// cents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payslip {
    /// The gross salary before extra hours.
    pub gross_salary: Decimal,
    /// The hourly rate used for extra hours, if any were worked.
    pub hourly_rate: Option<Decimal>,
    /// The amount paid for extra hours.
    pub extra_hours_pay: Decimal,
    /// The gross salary plus extra hours pay; the base for INSS, IRRF and FGTS.
    pub taxable_salary: Decimal,
    /// The INSS contribution.
    pub inss: Decimal,
    /// The deduction subtracted from the IRRF base.
    pub irrf_deduction: Decimal,
    /// Whether the simplified deduction replaced the itemized deductions.
    pub simplified_deduction_applied: bool,
    /// The withheld income tax.
    pub irrf: Decimal,
    /// The benefit value discounted.
    pub benefit: Decimal,
    /// Other discounts applied.
    pub other_discounts: Decimal,
    /// The resulting net salary.
    pub net_salary: Decimal,
    /// The employer FGTS deposit on the taxable salary.
    pub fgts: Decimal,
    /// The sequence of calculation steps.
    pub audit_trace: Vec<AuditStep>,
}

impl Payslip {
    /// Returns the sum of every amount withheld from the taxable salary.
    pub fn total_discounts(&self) -> Decimal {
        self.inss + self.irrf + self.benefit + self.other_discounts
    }
}
