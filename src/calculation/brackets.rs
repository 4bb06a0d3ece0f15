//! Progressive bracket engine.
//!
//! This module walks a [`TaxTable`] to compute cumulative marginal tax. It is
//! the single routine behind the INSS, IRRF, and IRRF-PLR calculations; the
//! differences between those tables live in their [`BracketMode`](crate::config::BracketMode).

use rust_decimal::Decimal;
use serde::Serialize;

use crate::config::TaxTable;

use super::rounding::round_money;

/// The tax charged inside one band of a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BandCharge {
    /// Where the band starts.
    pub lower: Decimal,
    /// Where the band ends, or `None` for an open-ended top band.
    pub upper: Option<Decimal>,
    /// The marginal rate of the band.
    pub rate: Decimal,
    /// The portion of the base that fell inside the band.
    pub taxed_amount: Decimal,
    /// The unrounded tax charged on that portion.
    pub tax: Decimal,
}

/// The result of running the bracket engine over an amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BracketTaxResult {
    /// The amount that was taxed.
    pub base: Decimal,
    /// One charge per band the base reached, in ascending order.
    pub charges: Vec<BandCharge>,
    /// The total tax, rounded to cents.
    pub tax: Decimal,
}

/// Computes the cumulative tax on `amount` under `table`, with the per-band
/// breakdown.
///
/// Bands are walked in ascending order. A band the amount fully exceeds is
/// charged in full; the band containing the amount is charged up to the
/// amount and ends the walk. Only the total is rounded.
///
/// # Examples
///
/// ```
/// use br_payroll::calculation::progressive_tax;
/// use br_payroll::config::TaxTables;
/// use rust_decimal::Decimal;
///
/// let result = progressive_tax(TaxTables::current().inss(), Decimal::new(300000, 2));
/// assert_eq!(result.charges.len(), 3);
/// assert_eq!(result.tax, Decimal::new(25341, 2));
/// ```
pub fn progressive_tax(table: &TaxTable, amount: Decimal) -> BracketTaxResult {
    let mut lower = Decimal::ZERO;
    let mut accumulated = Decimal::ZERO;
    let mut charges = Vec::new();

    for band in table.bands() {
        let terminal = band.upper.is_none_or(|upper| amount <= upper);
        let top = match band.upper {
            Some(upper) if !terminal => upper,
            _ => amount,
        };

        let taxed_amount = top - lower;
        let tax = taxed_amount * band.rate;
        accumulated += tax;
        charges.push(BandCharge {
            lower,
            upper: band.upper,
            rate: band.rate,
            taxed_amount,
            tax,
        });

        if terminal {
            break;
        }
        lower = top;
    }

    BracketTaxResult {
        base: amount,
        charges,
        tax: round_money(accumulated),
    }
}

/// Computes the cumulative tax on `amount` under `table`, rounded to cents.
pub fn cumulative_tax(table: &TaxTable, amount: Decimal) -> Decimal {
    progressive_tax(table, amount).tax
}
