//! Payroll calculation engine for Brazilian salaries.
//!
//! This crate computes the mandatory social-security contribution (INSS), the
//! withheld income tax (IRRF), the profit-sharing income tax (IRRF-PLR), FGTS
//! deposits, and the derived payroll figures built on them: net salary,
//! vacation pay, and the thirteenth salary.
//!
//! # Example
//!
//! ```
//! use br_payroll::calculation::{inss_tax, net_salary};
//! use br_payroll::config::TaxTables;
//! use br_payroll::models::PayrollInput;
//! use rust_decimal::Decimal;
//!
//! let tables = TaxTables::current();
//!
//! assert_eq!(inss_tax(Decimal::new(100000, 2), tables), Decimal::new(7500, 2));
//!
//! let input = PayrollInput::new(Decimal::new(800000, 2));
//! assert_eq!(net_salary(&input, tables).unwrap(), Decimal::new(602204, 2));
//! ```

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
