//! Core data models for the payroll engine.
//!
//! This module contains the payroll input and the payslip produced from it.

mod payroll_input;
mod payslip;

pub use payroll_input::PayrollInput;
pub use payslip::{AuditStep, Payslip};
