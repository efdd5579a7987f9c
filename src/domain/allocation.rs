//! Post-tax savings cascade.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use super::money::Money;

/// Share of the post-tax amount that goes to savings.
pub const SAVINGS_RATE: Decimal = dec!(0.20);
/// Share of savings that is available to invest.
pub const INVEST_RATE: Decimal = dec!(0.07);
/// Below this, the planner advises saving more before investing.
pub const MIN_INVESTMENT: Money = dec!(1000);

/// Amounts derived from annual income and tax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Allocation {
    /// Annual income minus tax.
    pub investable: Money,
    pub savings: Money,
    pub investable_from_savings: Money,
}

/// How much room there is to invest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InvestmentCapacity {
    /// Nothing left to invest; no recommendation is possible.
    None,
    /// Positive but below [`MIN_INVESTMENT`].
    Insufficient,
    Sufficient,
}

impl Allocation {
    #[must_use]
    pub fn capacity(&self) -> InvestmentCapacity {
        capacity_of(self.investable_from_savings)
    }
}

/// Classify an investable-from-savings amount.
#[must_use]
pub fn capacity_of(amount: Money) -> InvestmentCapacity {
    if amount <= Decimal::ZERO {
        InvestmentCapacity::None
    } else if amount < MIN_INVESTMENT {
        InvestmentCapacity::Insufficient
    } else {
        InvestmentCapacity::Sufficient
    }
}

/// Derive the savings cascade from annual income and the tax owed on it.
#[must_use]
pub fn allocate(annual_income: Money, tax: Money) -> Allocation {
    let investable = annual_income - tax;
    let savings = investable * SAVINGS_RATE;
    Allocation {
        investable,
        savings,
        investable_from_savings: savings * INVEST_RATE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocate_applies_both_percentages() {
        let allocation = allocate(dec!(1000000), dec!(30000));

        assert_eq!(allocation.investable, dec!(970000));
        assert_eq!(allocation.savings, dec!(194000));
        assert_eq!(allocation.investable_from_savings, dec!(13580.0));
        assert_eq!(allocation.capacity(), InvestmentCapacity::Sufficient);
    }

    #[test]
    fn zero_income_has_no_capacity() {
        let allocation = allocate(Decimal::ZERO, Decimal::ZERO);

        assert_eq!(allocation.investable_from_savings, Decimal::ZERO);
        assert_eq!(allocation.capacity(), InvestmentCapacity::None);
    }

    #[test]
    fn capacity_boundaries() {
        assert_eq!(capacity_of(dec!(-1)), InvestmentCapacity::None);
        assert_eq!(capacity_of(dec!(0.01)), InvestmentCapacity::Insufficient);
        assert_eq!(capacity_of(dec!(500)), InvestmentCapacity::Insufficient);
        assert_eq!(capacity_of(dec!(999.99)), InvestmentCapacity::Insufficient);
        assert_eq!(capacity_of(dec!(1000)), InvestmentCapacity::Sufficient);
    }
}
