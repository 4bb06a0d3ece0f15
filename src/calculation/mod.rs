//! Calculation logic for the payroll engine.
//!
//! This module contains monetary rounding, the progressive bracket engine,
//! the INSS, IRRF and IRRF-PLR taxes built on it, and the derived payroll
//! formulas: hourly rate, FGTS, net salary, vacation pay, thirteenth salary,
//! and the full payslip with its audit trace.
//!
//! Every calculation takes the [`TaxTables`](crate::config::TaxTables) it
//! runs against; pass [`TaxTables::current`](crate::config::TaxTables::current)
//! for the built-in tables.

mod brackets;
mod fgts;
mod hourly;
mod inss;
mod irrf;
mod net_salary;
mod payslip;
mod rounding;
mod thirteenth;
mod vacation;

pub use brackets::{BandCharge, BracketTaxResult, cumulative_tax, progressive_tax};
pub use fgts::fgts_per_month;
pub use hourly::salary_per_hour;
pub use inss::inss_tax;
pub use irrf::{IrrfSalaryResult, irrf_plr_tax, irrf_salary_breakdown, irrf_salary_tax};
pub use net_salary::{ExtraHoursPay, extra_hours_pay, net_salary};
pub use payslip::calculate_payslip;
pub use rounding::{MONEY_PRECISION, round, round_money};
pub use thirteenth::{MONTHS_PER_YEAR, thirteenth_salary};
pub use vacation::{DAYS_PER_MONTH, vacation_fractionated_salary, vacation_salary};
