//! Integration tests for the payroll engine.
//!
//! This test suite exercises the public API end to end:
//! - INSS, IRRF and IRRF-PLR across every bracket
//! - Net salary with extra hours, pensions, dependants and discounts
//! - Vacation pay, full and pro-rated
//! - Thirteenth salary
//! - FGTS and hourly rate
//! - The payslip breakdown
//! - The shipped YAML tables
//! - Error cases

use rust_decimal::Decimal;
use std::str::FromStr;

use br_payroll::calculation::{
    calculate_payslip, fgts_per_month, inss_tax, irrf_plr_tax, irrf_salary_tax, net_salary,
    salary_per_hour, thirteenth_salary, vacation_fractionated_salary, vacation_salary,
};
use br_payroll::config::{ConfigLoader, TaxTables};
use br_payroll::error::PayrollError;
use br_payroll::models::PayrollInput;

// =============================================================================
// Test Helpers
// =============================================================================

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn tables() -> &'static TaxTables {
    TaxTables::current()
}

fn loaded_tables() -> TaxTables {
    ConfigLoader::load("./config/current")
        .expect("Failed to load config")
        .into_tables()
}

fn payroll(salary: &str) -> PayrollInput {
    PayrollInput::new(decimal(salary))
}

fn with_extra_time(salary: &str) -> PayrollInput {
    PayrollInput {
        extra_percentage: decimal("1.50"),
        extra_hours: 8,
        days_worked: 8,
        hours_per_day: 21,
        ..payroll(salary)
    }
}

// =============================================================================
// Documented scenarios
// =============================================================================

#[test]
fn test_documented_scenarios() {
    assert_eq!(inss_tax(decimal("1000.00"), tables()), decimal("75.00"));
    assert_eq!(inss_tax(decimal("3000.00"), tables()), decimal("253.41"));
    assert_eq!(
        irrf_salary_tax(decimal("2900.00"), Decimal::ZERO, 0, tables()),
        decimal("5.70")
    );
    assert_eq!(irrf_plr_tax(decimal("9000.00"), tables()), decimal("101.94"));
    assert_eq!(fgts_per_month(decimal("10000.00"), tables()), decimal("800.00"));
    assert_eq!(
        salary_per_hour(decimal("8000.00"), 21, 8).unwrap(),
        decimal("47.62")
    );
    assert_eq!(
        net_salary(&payroll("8000.00"), tables()).unwrap(),
        decimal("6022.04")
    );
}

// =============================================================================
// INSS / IRRF asymmetry
// =============================================================================

#[test]
fn test_inss_taxes_first_band_while_irrf_exempts_it() {
    // Both tables see an amount below their first cutoff
    let amount = decimal("1500.00");

    assert_eq!(inss_tax(amount, tables()), decimal("112.50"));
    assert_eq!(irrf_plr_tax(amount, tables()), Decimal::ZERO);
}

#[test]
fn test_inss_is_capped_while_irrf_keeps_growing() {
    let inss_at_ceiling = inss_tax(decimal("8157.41"), tables());
    let irrf_at_8200 = irrf_salary_tax(decimal("8200.00"), Decimal::ZERO, 0, tables());
    let irrf_at_12000 = irrf_salary_tax(decimal("12000.00"), Decimal::ZERO, 0, tables());

    assert_eq!(inss_tax(decimal("20000.00"), tables()), inss_at_ceiling);
    assert_eq!(irrf_at_8200, decimal("1097.30"));
    assert_eq!(irrf_at_12000, decimal("2142.30"));
}

// =============================================================================
// Net salary
// =============================================================================

#[test]
fn test_net_salary_scenarios() {
    let cases = vec![
        ("plain", payroll("8000.00"), "6022.04"),
        ("extra time", with_extra_time("8000.00"), "6420.36"),
        (
            "food pension and extra time",
            PayrollInput {
                food_pension: decimal("100.00"),
                ..with_extra_time("8000.00")
            },
            "6447.86",
        ),
        (
            "benefits, food pension and extra time",
            PayrollInput {
                benefit: decimal("100.00"),
                food_pension: decimal("100.00"),
                ..with_extra_time("8000.00")
            },
            "6347.86",
        ),
        (
            "food pension and dependants",
            PayrollInput {
                food_pension: decimal("100.00"),
                dependants: 2,
                ..payroll("8000.00")
            },
            "6153.82",
        ),
        (
            "benefits, food pension, other discounts and extra time",
            PayrollInput {
                benefit: decimal("100.00"),
                food_pension: decimal("100.00"),
                other_discounts: decimal("100.00"),
                ..with_extra_time("8000.00")
            },
            "6247.86",
        ),
    ];

    for (name, input, expected) in cases {
        assert_eq!(
            net_salary(&input, tables()).unwrap(),
            decimal(expected),
            "scenario: {}",
            name
        );
    }
}

#[test]
fn test_net_salary_from_json_input() {
    let json = r#"{
        "salary": "8000.00",
        "food_pension": "100.00",
        "dependants": 2
    }"#;

    let input: PayrollInput = serde_json::from_str(json).unwrap();
    assert_eq!(net_salary(&input, tables()).unwrap(), decimal("6153.82"));
}

#[test]
fn test_net_salary_with_extra_hours_and_no_days_is_an_error() {
    let input = PayrollInput {
        days_worked: 0,
        ..with_extra_time("8000.00")
    };

    let result = net_salary(&input, tables());
    assert!(matches!(
        result,
        Err(PayrollError::InvalidInput { ref field, .. }) if field == "days_worked"
    ));
}

// =============================================================================
// Vacation and thirteenth salary
// =============================================================================

#[test]
fn test_vacation_salary() {
    assert_eq!(
        vacation_salary(&payroll("4500.00"), tables()),
        decimal("4775.04")
    );
}

#[test]
fn test_vacation_fractionated_salary() {
    assert_eq!(
        vacation_fractionated_salary(&payroll("3500.00"), 20, tables()),
        decimal("2822.83")
    );
}

#[test]
fn test_vacation_pay_does_not_subtract_other_discounts() {
    let input = PayrollInput {
        other_discounts: decimal("300.00"),
        ..payroll("4500.00")
    };

    assert_eq!(vacation_salary(&input, tables()), decimal("4775.04"));
    assert_ne!(
        net_salary(&input, tables()).unwrap(),
        net_salary(&payroll("4500.00"), tables()).unwrap()
    );
}

#[test]
fn test_thirteenth_salary() {
    assert_eq!(
        thirteenth_salary(decimal("3500.00"), 0, 12, tables()),
        decimal("3127.75")
    );
    assert_eq!(
        thirteenth_salary(decimal("3500.00"), 0, 0, tables()),
        decimal("3127.75")
    );
}

// =============================================================================
// Payslip
// =============================================================================

#[test]
fn test_payslip_agrees_with_individual_calculations() {
    let input = PayrollInput {
        benefit: decimal("100.00"),
        food_pension: decimal("100.00"),
        other_discounts: decimal("100.00"),
        ..with_extra_time("8000.00")
    };

    let payslip = calculate_payslip(&input, tables()).unwrap();

    assert_eq!(payslip.net_salary, net_salary(&input, tables()).unwrap());
    assert_eq!(payslip.inss, inss_tax(payslip.taxable_salary, tables()));
    assert_eq!(
        payslip.irrf,
        irrf_salary_tax(payslip.taxable_salary, input.food_pension, 0, tables())
    );
    assert_eq!(
        payslip.fgts,
        fgts_per_month(payslip.taxable_salary, tables())
    );
}

#[test]
fn test_payslip_serializes_to_json() {
    let payslip = calculate_payslip(&with_extra_time("8000.00"), tables()).unwrap();
    let json = serde_json::to_value(&payslip).unwrap();

    assert_eq!(json["net_salary"], "6420.36");
    assert_eq!(json["hourly_rate"], "47.62");
    assert_eq!(json["audit_trace"].as_array().unwrap().len(), 5);
    assert_eq!(json["audit_trace"][0]["rule_id"], "extra_hours");
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_shipped_yaml_tables_match_built_in_tables() {
    let loaded = loaded_tables();

    assert_eq!(loaded.inss(), tables().inss());
    assert_eq!(loaded.irrf(), tables().irrf());
    assert_eq!(loaded.irrf_plr(), tables().irrf_plr());
    assert_eq!(loaded.constants(), tables().constants());
}

#[test]
fn test_calculations_with_loaded_tables() {
    let loaded = loaded_tables();

    assert_eq!(inss_tax(decimal("3000.00"), &loaded), decimal("253.41"));
    assert_eq!(
        net_salary(&with_extra_time("8000.00"), &loaded).unwrap(),
        decimal("6420.36")
    );
    assert_eq!(
        thirteenth_salary(decimal("3500.00"), 0, 12, &loaded),
        decimal("3127.75")
    );
}

#[test]
fn test_tables_are_shared_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| inss_tax(decimal("3000.00"), TaxTables::current())))
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), decimal("253.41"));
    }
}
