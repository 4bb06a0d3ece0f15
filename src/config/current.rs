//! The built-in tax tables.
//!
//! These figures are compiled into the crate and exposed through
//! [`TaxTables::current`]. The YAML files under `config/current/` carry the
//! same values.

use once_cell::sync::Lazy;
use rust_decimal::Decimal;

use super::types::{Bracket, BracketMode, PayrollConstants, TablesMetadata, TaxTable, TaxTables};
use crate::error::PayrollResult;

static CURRENT: Lazy<TaxTables> =
    Lazy::new(|| build().expect("built-in tax tables must be well-formed"));

impl TaxTables {
    /// Returns the built-in tables currently in force.
    ///
    /// The tables are validated on first access and shared read-only
    /// afterwards.
    ///
    /// # Example
    ///
    /// ```
    /// use br_payroll::config::TaxTables;
    /// use rust_decimal::Decimal;
    ///
    /// let tables = TaxTables::current();
    /// assert_eq!(tables.constants().simplified_deduction, Decimal::new(56480, 2));
    /// ```
    pub fn current() -> &'static TaxTables {
        &CURRENT
    }
}

/// Builds a bracket from a cutoff in cents and a rate in thousandths.
fn bracket(cutoff_cents: i64, rate_thousandths: i64) -> Bracket {
    Bracket::new(
        Decimal::new(cutoff_cents, 2),
        Decimal::new(rate_thousandths, 3),
    )
}

fn build() -> PayrollResult<TaxTables> {
    let inss = TaxTable::new(
        "INSS",
        BracketMode::CappedContribution,
        vec![
            bracket(1_518_00, 75),
            bracket(2_793_88, 90),
            bracket(4_190_83, 120),
            bracket(8_157_41, 140),
        ],
    )?;

    let irrf = TaxTable::new(
        "IRRF",
        BracketMode::ExemptThreshold,
        vec![
            bracket(2_259_20, 75),
            bracket(2_826_65, 150),
            bracket(3_751_05, 225),
            bracket(4_664_68, 275),
        ],
    )?;

    let irrf_plr = TaxTable::new(
        "IRRF-PLR",
        BracketMode::ExemptThreshold,
        vec![
            bracket(7_640_80, 75),
            bracket(9_922_28, 150),
            bracket(13_167_00, 225),
            bracket(16_380_38, 275),
        ],
    )?;

    let constants = PayrollConstants {
        simplified_deduction: Decimal::new(564_80, 2),
        per_dependant_deduction: Decimal::new(189_59, 2),
        fgts_rate: Decimal::new(8, 2),
    };

    let metadata = TablesMetadata {
        name: "Brazilian payroll tables".to_string(),
        effective_from: "2025-05-01".to_string(),
        source: "Receita Federal / INSS published tables".to_string(),
    };

    TaxTables::new(metadata, inss, irrf, irrf_plr, constants)
}
