//! Configuration types for the payroll tax tables.
//!
//! The raw `*Config` structures are deserialized from YAML files and then
//! validated into the strongly-typed tables used by the calculations.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};

/// How the rates of a table relate to its cutoffs.
///
/// INSS and the two IRRF tables read the same `(cutoff, rate)` pairs
/// differently, so the table carries the interpretation with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BracketMode {
    /// Each rate applies to the band ending at its cutoff, starting from zero.
    /// Income above the last cutoff is not taxed (the contribution ceiling).
    CappedContribution,
    /// Income up to the first cutoff is exempt. Each rate applies to the band
    /// starting at its cutoff; the last rate has no upper bound.
    ExemptThreshold,
}

/// A single `(cutoff, rate)` entry of a tax table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bracket {
    /// The bracket cutoff value.
    pub cutoff: Decimal,
    /// The marginal rate as a fraction (0.075 for 7.5%).
    pub rate: Decimal,
}

impl Bracket {
    /// Creates a bracket from a cutoff and a rate.
    pub fn new(cutoff: Decimal, rate: Decimal) -> Self {
        Self { cutoff, rate }
    }
}

/// A taxed band of income, as walked by the bracket engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Band {
    /// The inclusive upper bound, or `None` for an open-ended top band.
    pub upper: Option<Decimal>,
    /// The marginal rate for income inside the band.
    pub rate: Decimal,
}

/// A tax table as it appears in a YAML file.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxTableConfig {
    /// The table name used in errors and logs.
    pub name: String,
    /// How rates relate to cutoffs.
    pub mode: BracketMode,
    /// The brackets in ascending cutoff order.
    pub brackets: Vec<Bracket>,
}

/// A validated, immutable progressive tax table.
///
/// # Example
///
/// ```
/// use br_payroll::config::{Bracket, BracketMode, TaxTable};
/// use rust_decimal::Decimal;
///
/// let table = TaxTable::new(
///     "example",
///     BracketMode::ExemptThreshold,
///     vec![
///         Bracket::new(Decimal::new(1000, 0), Decimal::new(10, 2)),
///         Bracket::new(Decimal::new(2000, 0), Decimal::new(20, 2)),
///     ],
/// )
/// .unwrap();
/// assert_eq!(table.bands().len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxTable {
    name: String,
    mode: BracketMode,
    brackets: Vec<Bracket>,
}

impl TaxTable {
    /// Creates a table, rejecting malformed bracket lists.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTaxTable` if the table is empty, the first cutoff is
    /// not positive, cutoffs are not strictly increasing, a rate lies outside
    /// `[0, 1]`, or rates decrease.
    pub fn new(
        name: impl Into<String>,
        mode: BracketMode,
        brackets: Vec<Bracket>,
    ) -> PayrollResult<Self> {
        let name = name.into();
        let invalid = |message: String| PayrollError::InvalidTaxTable {
            table: name.clone(),
            message,
        };

        let first = brackets
            .first()
            .ok_or_else(|| invalid("table has no brackets".to_string()))?;
        if first.cutoff <= Decimal::ZERO {
            return Err(invalid(format!(
                "first cutoff must be positive, got {}",
                first.cutoff
            )));
        }

        for bracket in &brackets {
            if bracket.rate < Decimal::ZERO || bracket.rate > Decimal::ONE {
                return Err(invalid(format!(
                    "rate {} at cutoff {} is outside [0, 1]",
                    bracket.rate, bracket.cutoff
                )));
            }
        }

        for pair in brackets.windows(2) {
            if pair[1].cutoff <= pair[0].cutoff {
                return Err(invalid(format!(
                    "cutoffs must be strictly increasing ({} follows {})",
                    pair[1].cutoff, pair[0].cutoff
                )));
            }
            if pair[1].rate < pair[0].rate {
                return Err(invalid(format!(
                    "rates must not decrease ({} follows {})",
                    pair[1].rate, pair[0].rate
                )));
            }
        }

        Ok(Self {
            name,
            mode,
            brackets,
        })
    }

    /// Validates a table read from a configuration file.
    pub fn from_config(config: TaxTableConfig) -> PayrollResult<Self> {
        Self::new(config.name, config.mode, config.brackets)
    }

    /// Returns the table name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the bracket mode.
    pub fn mode(&self) -> BracketMode {
        self.mode
    }

    /// Returns the brackets in ascending cutoff order.
    pub fn brackets(&self) -> &[Bracket] {
        &self.brackets
    }

    /// Expands the brackets into the bands walked by the bracket engine.
    ///
    /// A capped table yields one band per bracket. An exempt-threshold table
    /// yields a zero-rate band up to the first cutoff, one band between each
    /// pair of cutoffs, and an open-ended band at the last rate.
    pub fn bands(&self) -> Vec<Band> {
        match self.mode {
            BracketMode::CappedContribution => self
                .brackets
                .iter()
                .map(|b| Band {
                    upper: Some(b.cutoff),
                    rate: b.rate,
                })
                .collect(),
            BracketMode::ExemptThreshold => {
                let mut bands = Vec::with_capacity(self.brackets.len() + 1);
                bands.push(Band {
                    upper: Some(self.brackets[0].cutoff),
                    rate: Decimal::ZERO,
                });
                for pair in self.brackets.windows(2) {
                    bands.push(Band {
                        upper: Some(pair[1].cutoff),
                        rate: pair[0].rate,
                    });
                }
                if let Some(last) = self.brackets.last() {
                    bands.push(Band {
                        upper: None,
                        rate: last.rate,
                    });
                }
                bands
            }
        }
    }
}

/// Flat payroll constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollConstants {
    /// Flat IRRF deduction granted when itemized deductions are smaller.
    pub simplified_deduction: Decimal,
    /// IRRF deduction per dependant.
    pub per_dependant_deduction: Decimal,
    /// FGTS deposit rate as a fraction of the salary.
    pub fgts_rate: Decimal,
}

impl PayrollConstants {
    fn validate(&self) -> PayrollResult<()> {
        let invalid = |message: &str| PayrollError::InvalidTaxTable {
            table: "constants".to_string(),
            message: message.to_string(),
        };

        if self.simplified_deduction < Decimal::ZERO {
            return Err(invalid("simplified_deduction must not be negative"));
        }
        if self.per_dependant_deduction < Decimal::ZERO {
            return Err(invalid("per_dependant_deduction must not be negative"));
        }
        if self.fgts_rate < Decimal::ZERO || self.fgts_rate > Decimal::ONE {
            return Err(invalid("fgts_rate must be within [0, 1]"));
        }
        Ok(())
    }
}

/// Descriptive metadata about a table set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TablesMetadata {
    /// Human-readable name of the table set.
    pub name: String,
    /// The date the tables took effect, as written by the publisher.
    pub effective_from: String,
    /// Where the figures were taken from.
    pub source: String,
}

/// The complete set of tables and constants a calculation runs against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxTables {
    metadata: TablesMetadata,
    inss: TaxTable,
    irrf: TaxTable,
    irrf_plr: TaxTable,
    constants: PayrollConstants,
}

impl TaxTables {
    /// Assembles a table set.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTaxTable` if a constant is out of range.
    pub fn new(
        metadata: TablesMetadata,
        inss: TaxTable,
        irrf: TaxTable,
        irrf_plr: TaxTable,
        constants: PayrollConstants,
    ) -> PayrollResult<Self> {
        constants.validate()?;
        Ok(Self {
            metadata,
            inss,
            irrf,
            irrf_plr,
            constants,
        })
    }

    /// Returns the table set metadata.
    pub fn metadata(&self) -> &TablesMetadata {
        &self.metadata
    }

    /// Returns the INSS contribution table.
    pub fn inss(&self) -> &TaxTable {
        &self.inss
    }

    /// Returns the IRRF salary table.
    pub fn irrf(&self) -> &TaxTable {
        &self.irrf
    }

    /// Returns the IRRF profit-sharing table.
    pub fn irrf_plr(&self) -> &TaxTable {
        &self.irrf_plr
    }

    /// Returns the flat payroll constants.
    pub fn constants(&self) -> &PayrollConstants {
        &self.constants
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn bracket(cutoff: &str, rate: &str) -> Bracket {
        Bracket::new(dec(cutoff), dec(rate))
    }

    fn expect_invalid(result: PayrollResult<TaxTable>, fragment: &str) {
        match result {
            Err(PayrollError::InvalidTaxTable { table, message }) => {
                assert_eq!(table, "test");
                assert!(
                    message.contains(fragment),
                    "message '{}' does not mention '{}'",
                    message,
                    fragment
                );
            }
            other => panic!("Expected InvalidTaxTable, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_table_is_rejected() {
        expect_invalid(
            TaxTable::new("test", BracketMode::CappedContribution, vec![]),
            "no brackets",
        );
    }

    #[test]
    fn test_non_increasing_cutoffs_are_rejected() {
        expect_invalid(
            TaxTable::new(
                "test",
                BracketMode::CappedContribution,
                vec![bracket("2000", "0.1"), bracket("2000", "0.2")],
            ),
            "strictly increasing",
        );
    }

    #[test]
    fn test_decreasing_rates_are_rejected() {
        expect_invalid(
            TaxTable::new(
                "test",
                BracketMode::ExemptThreshold,
                vec![bracket("1000", "0.2"), bracket("2000", "0.1")],
            ),
            "must not decrease",
        );
    }

    #[test]
    fn test_rate_above_one_is_rejected() {
        expect_invalid(
            TaxTable::new(
                "test",
                BracketMode::ExemptThreshold,
                vec![bracket("1000", "1.5")],
            ),
            "outside [0, 1]",
        );
    }

    #[test]
    fn test_non_positive_first_cutoff_is_rejected() {
        expect_invalid(
            TaxTable::new(
                "test",
                BracketMode::CappedContribution,
                vec![bracket("0", "0.1")],
            ),
            "must be positive",
        );
    }

    #[test]
    fn test_capped_bands_follow_brackets() {
        let table = TaxTable::new(
            "test",
            BracketMode::CappedContribution,
            vec![bracket("1000", "0.1"), bracket("2000", "0.2")],
        )
        .unwrap();

        assert_eq!(
            table.bands(),
            vec![
                Band {
                    upper: Some(dec("1000")),
                    rate: dec("0.1")
                },
                Band {
                    upper: Some(dec("2000")),
                    rate: dec("0.2")
                },
            ]
        );
    }

    #[test]
    fn test_exempt_bands_shift_rates_up_one_cutoff() {
        let table = TaxTable::new(
            "test",
            BracketMode::ExemptThreshold,
            vec![bracket("1000", "0.1"), bracket("2000", "0.2")],
        )
        .unwrap();

        assert_eq!(
            table.bands(),
            vec![
                Band {
                    upper: Some(dec("1000")),
                    rate: Decimal::ZERO
                },
                Band {
                    upper: Some(dec("2000")),
                    rate: dec("0.1")
                },
                Band {
                    upper: None,
                    rate: dec("0.2")
                },
            ]
        );
    }

    #[test]
    fn test_bracket_mode_deserializes_snake_case() {
        let mode: BracketMode = serde_yaml::from_str("exempt_threshold").unwrap();
        assert_eq!(mode, BracketMode::ExemptThreshold);

        let mode: BracketMode = serde_yaml::from_str("capped_contribution").unwrap();
        assert_eq!(mode, BracketMode::CappedContribution);
    }

    #[test]
    fn test_negative_fgts_rate_is_rejected() {
        let constants = PayrollConstants {
            simplified_deduction: dec("564.80"),
            per_dependant_deduction: dec("189.59"),
            fgts_rate: dec("-0.08"),
        };

        match constants.validate() {
            Err(PayrollError::InvalidTaxTable { table, .. }) => assert_eq!(table, "constants"),
            other => panic!("Expected InvalidTaxTable, got {:?}", other),
        }
    }
}
