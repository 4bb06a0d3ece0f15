//! Payslip calculation with an audit trace.
//!
//! This module runs the net salary formula step by step and records each
//! step, so a caller can show how every figure on the payslip was reached.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::TaxTables;
use crate::error::PayrollResult;
use crate::models::{AuditStep, PayrollInput, Payslip};

use super::brackets::{BandCharge, progressive_tax};
use super::fgts::fgts_per_month;
use super::irrf::irrf_salary_breakdown_with_inss;
use super::net_salary::extra_hours_pay;
use super::rounding::round_money;

fn charges_json(charges: &[BandCharge]) -> serde_json::Value {
    charges
        .iter()
        .map(|c| {
            serde_json::json!({
                "lower": c.lower.to_string(),
                "upper": c.upper.map(|u| u.to_string()),
                "rate": c.rate.normalize().to_string(),
                "taxed_amount": c.taxed_amount.to_string(),
                "tax": c.tax.to_string()
            })
        })
        .collect()
}

/// Computes a full payslip for the input.
///
/// `net_salary` on the result equals
/// [`net_salary`](fn@super::net_salary) for the same input and tables. FGTS is
/// computed on the taxable salary, extra hours included.
///
/// The audit trace holds, in order: extra hours (only when worked), INSS,
/// IRRF, net salary and FGTS.
///
/// # Errors
///
/// Returns `InvalidInput` if extra hours were worked but `days_worked` or
/// `hours_per_day` is zero.
///
/// # Examples
///
/// ```
/// use br_payroll::calculation::calculate_payslip;
/// use br_payroll::config::TaxTables;
/// use br_payroll::models::PayrollInput;
/// use rust_decimal::Decimal;
///
/// let input = PayrollInput::new(Decimal::new(800000, 2));
/// let payslip = calculate_payslip(&input, TaxTables::current()).unwrap();
///
/// assert_eq!(payslip.net_salary, Decimal::new(602204, 2));
/// assert_eq!(payslip.fgts, Decimal::new(64000, 2));
/// assert_eq!(payslip.audit_trace.len(), 4);
/// ```
pub fn calculate_payslip(input: &PayrollInput, tables: &TaxTables) -> PayrollResult<Payslip> {
    let mut steps: Vec<AuditStep> = Vec::new();

    let extra = extra_hours_pay(input)?;
    let extra_amount = extra.map_or(Decimal::ZERO, |e| e.amount);
    if let Some(extra) = extra {
        steps.push(AuditStep {
            step_number: steps.len() as u32 + 1,
            rule_id: "extra_hours".to_string(),
            rule_name: "Extra Hours".to_string(),
            input: serde_json::json!({
                "salary": input.salary.to_string(),
                "days_worked": input.days_worked,
                "hours_per_day": input.hours_per_day,
                "extra_hours": input.extra_hours,
                "extra_percentage": input.extra_percentage.to_string()
            }),
            output: serde_json::json!({
                "hourly_rate": extra.hourly_rate.to_string(),
                "amount": extra.amount.to_string()
            }),
            reasoning: format!(
                "R$ {} / {} days / {} hours = R$ {}; R$ {} x {} hours x {} = R$ {}",
                input.salary,
                input.days_worked,
                input.hours_per_day,
                extra.hourly_rate,
                extra.hourly_rate,
                input.extra_hours,
                input.extra_percentage.normalize(),
                extra.amount
            ),
        });
    }

    let taxable_salary = input.salary + extra_amount;

    let inss = progressive_tax(tables.inss(), taxable_salary);
    steps.push(AuditStep {
        step_number: steps.len() as u32 + 1,
        rule_id: "inss".to_string(),
        rule_name: "INSS Contribution".to_string(),
        input: serde_json::json!({
            "taxable_salary": taxable_salary.to_string()
        }),
        output: serde_json::json!({
            "bands": charges_json(&inss.charges),
            "tax": inss.tax.to_string()
        }),
        reasoning: format!(
            "Progressive {} table over R$ {} across {} band(s) = R$ {}",
            tables.inss().name(),
            taxable_salary,
            inss.charges.len(),
            inss.tax
        ),
    });

    let irrf = irrf_salary_breakdown_with_inss(
        taxable_salary,
        inss.tax,
        input.food_pension,
        input.dependants,
        tables,
    );
    let deduction_reasoning = if irrf.simplified_deduction_applied {
        format!(
            "itemized deduction R$ {} is below the simplified deduction, using R$ {}",
            irrf.itemized_deduction, irrf.deduction
        )
    } else {
        format!("itemized deduction R$ {}", irrf.deduction)
    };
    steps.push(AuditStep {
        step_number: steps.len() as u32 + 1,
        rule_id: "irrf".to_string(),
        rule_name: "IRRF Withholding".to_string(),
        input: serde_json::json!({
            "taxable_salary": taxable_salary.to_string(),
            "inss": irrf.inss.to_string(),
            "food_pension": input.food_pension.to_string(),
            "dependants": input.dependants
        }),
        output: serde_json::json!({
            "itemized_deduction": irrf.itemized_deduction.to_string(),
            "deduction": irrf.deduction.to_string(),
            "simplified_deduction_applied": irrf.simplified_deduction_applied,
            "base": irrf.bracket.base.to_string(),
            "bands": charges_json(&irrf.bracket.charges),
            "tax": irrf.tax.to_string()
        }),
        reasoning: format!(
            "{}; {} table over R$ {} = R$ {}",
            deduction_reasoning,
            tables.irrf().name(),
            irrf.bracket.base,
            irrf.tax
        ),
    });

    let net_salary =
        round_money(taxable_salary - inss.tax - irrf.tax - input.benefit - input.other_discounts);
    steps.push(AuditStep {
        step_number: steps.len() as u32 + 1,
        rule_id: "net_salary".to_string(),
        rule_name: "Net Salary".to_string(),
        input: serde_json::json!({
            "taxable_salary": taxable_salary.to_string(),
            "inss": inss.tax.to_string(),
            "irrf": irrf.tax.to_string(),
            "benefit": input.benefit.to_string(),
            "other_discounts": input.other_discounts.to_string()
        }),
        output: serde_json::json!({
            "net_salary": net_salary.to_string()
        }),
        reasoning: format!(
            "R$ {} - R$ {} - R$ {} - R$ {} - R$ {} = R$ {}",
            taxable_salary,
            inss.tax,
            irrf.tax,
            input.benefit,
            input.other_discounts,
            net_salary
        ),
    });

    let fgts = fgts_per_month(taxable_salary, tables);
    steps.push(AuditStep {
        step_number: steps.len() as u32 + 1,
        rule_id: "fgts".to_string(),
        rule_name: "FGTS Deposit".to_string(),
        input: serde_json::json!({
            "taxable_salary": taxable_salary.to_string(),
            "rate": tables.constants().fgts_rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "fgts": fgts.to_string()
        }),
        reasoning: format!(
            "R$ {} x {} = R$ {}",
            taxable_salary,
            tables.constants().fgts_rate.normalize(),
            fgts
        ),
    });

    debug!(
        taxable_salary = %taxable_salary,
        net_salary = %net_salary,
        steps = steps.len(),
        "Computed payslip"
    );

    Ok(Payslip {
        gross_salary: input.salary,
        hourly_rate: extra.map(|e| e.hourly_rate),
        extra_hours_pay: extra_amount,
        taxable_salary,
        inss: inss.tax,
        irrf_deduction: irrf.deduction,
        simplified_deduction_applied: irrf.simplified_deduction_applied,
        irrf: irrf.tax,
        benefit: input.benefit,
        other_discounts: input.other_discounts,
        net_salary,
        fgts,
        audit_trace: steps,
    })
}
