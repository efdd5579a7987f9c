//! Progressive income-tax schedule.
//!
//! Income up to the lowest threshold is exempt. Each bracket taxes only the
//! portion of income above its threshold and below the next one up.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use super::money::Money;

/// One tier of the schedule: income above `threshold` is taxed at `rate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaxBracket {
    pub threshold: Money,
    pub rate: Decimal,
}

impl TaxBracket {
    const fn new(threshold: Money, rate: Decimal) -> Self {
        Self { threshold, rate }
    }
}

/// Brackets ordered by increasing threshold.
pub const BRACKETS: [TaxBracket; 4] = [
    TaxBracket::new(dec!(700000), dec!(0.10)),
    TaxBracket::new(dec!(1000000), dec!(0.15)),
    TaxBracket::new(dec!(1200000), dec!(0.20)),
    TaxBracket::new(dec!(1500000), dec!(0.30)),
];

/// The portion of income taxed within one bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BracketSlice {
    pub bracket: TaxBracket,
    /// Income that fell inside this bracket.
    pub taxable: Money,
    /// Tax owed on `taxable`.
    pub tax: Money,
}

/// Sweep the brackets from the highest threshold down.
///
/// Only brackets the income actually exceeds produce a slice. Slices are
/// returned highest bracket first.
#[must_use]
pub fn assess(annual_income: Money) -> Vec<BracketSlice> {
    let mut remaining = annual_income;
    let mut slices = Vec::new();

    for bracket in BRACKETS.iter().rev() {
        if remaining > bracket.threshold {
            let taxable = remaining - bracket.threshold;
            slices.push(BracketSlice {
                bracket: *bracket,
                taxable,
                tax: taxable * bracket.rate,
            });
            remaining = bracket.threshold;
        }
    }

    slices
}

/// Total tax owed on an annual income.
#[must_use]
pub fn compute_tax(annual_income: Money) -> Money {
    assess(annual_income).iter().map(|slice| slice.tax).sum()
}
