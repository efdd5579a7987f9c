//! Investment option catalog and recommendation rules.
//!
//! Six fixed option lists keyed by (time horizon, risk level), plus the
//! static 50/30/20 diversification template shown with every recommendation.

use std::fmt;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use super::allocation::{capacity_of, InvestmentCapacity};
use super::money::Money;

/// An investment category with a one-line description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InvestmentOption {
    pub name: &'static str,
    pub description: &'static str,
}

impl InvestmentOption {
    const fn new(name: &'static str, description: &'static str) -> Self {
        Self { name, description }
    }
}

/// How long the user intends to stay invested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeHorizon {
    /// 1-3 years.
    ShortTerm,
    /// 5+ years.
    LongTerm,
}

impl TimeHorizon {
    pub const ALL: [TimeHorizon; 2] = [TimeHorizon::ShortTerm, TimeHorizon::LongTerm];

    /// Map a menu choice (1 or 2) to a horizon.
    #[must_use]
    pub const fn from_choice(choice: u8) -> Option<Self> {
        match choice {
            1 => Some(TimeHorizon::ShortTerm),
            2 => Some(TimeHorizon::LongTerm),
            _ => None,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            TimeHorizon::ShortTerm => "Short-term (1-3 years)",
            TimeHorizon::LongTerm => "Long-term (5+ years)",
        }
    }
}

impl fmt::Display for TimeHorizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Tolerance for investment volatility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 3] = [RiskLevel::Low, RiskLevel::Moderate, RiskLevel::High];

    /// Map a menu choice (1, 2 or 3) to a risk level.
    #[must_use]
    pub const fn from_choice(choice: u8) -> Option<Self> {
        match choice {
            1 => Some(RiskLevel::Low),
            2 => Some(RiskLevel::Moderate),
            3 => Some(RiskLevel::High),
            _ => None,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low Risk",
            RiskLevel::Moderate => "Moderate Risk",
            RiskLevel::High => "High Risk",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

const SHORT_TERM_LOW: &[InvestmentOption] = &[
    InvestmentOption::new("Fixed Deposits", "Guaranteed returns, no risk."),
    InvestmentOption::new("Savings Account", "Easy access to funds."),
];

const SHORT_TERM_MODERATE: &[InvestmentOption] = &[
    InvestmentOption::new(
        "Debt Mutual Funds",
        "Lower risk than equities with better returns than FDs.",
    ),
    InvestmentOption::new("Recurring Deposits", "Steady growth with moderate returns."),
];

const SHORT_TERM_HIGH: &[InvestmentOption] = &[
    InvestmentOption::new("Stock Trading", "High risk but potential for quick gains."),
    InvestmentOption::new(
        "Gold ETFs",
        "Hedge against inflation with moderate growth potential.",
    ),
];

const LONG_TERM_LOW: &[InvestmentOption] = &[
    InvestmentOption::new("Government Bonds", "Safe with steady returns."),
    InvestmentOption::new("Public Provident Fund (PPF)", "Tax-saving long-term plan."),
];

const LONG_TERM_MODERATE: &[InvestmentOption] = &[
    InvestmentOption::new(
        "Balanced Mutual Funds",
        "Diversified investments with moderate risk.",
    ),
    InvestmentOption::new(
        "National Pension Scheme (NPS)",
        "Ideal for retirement planning.",
    ),
];

const LONG_TERM_HIGH: &[InvestmentOption] = &[
    InvestmentOption::new("Equity Mutual Funds", "High returns with long-term growth."),
    InvestmentOption::new(
        "Direct Stock Investment",
        "High risk, but significant growth potential over time.",
    ),
];

/// Shown when the goal is outside the known horizons.
pub const GENERIC_OPTIONS: &[InvestmentOption] = &[
    InvestmentOption::new("Savings Account", ""),
    InvestmentOption::new("Gold", ""),
    InvestmentOption::new("Fixed Deposits", ""),
];

/// The option list for a (horizon, risk) pair.
#[must_use]
pub const fn options(horizon: TimeHorizon, risk: RiskLevel) -> &'static [InvestmentOption] {
    match (horizon, risk) {
        (TimeHorizon::ShortTerm, RiskLevel::Low) => SHORT_TERM_LOW,
        (TimeHorizon::ShortTerm, RiskLevel::Moderate) => SHORT_TERM_MODERATE,
        (TimeHorizon::ShortTerm, RiskLevel::High) => SHORT_TERM_HIGH,
        (TimeHorizon::LongTerm, RiskLevel::Low) => LONG_TERM_LOW,
        (TimeHorizon::LongTerm, RiskLevel::Moderate) => LONG_TERM_MODERATE,
        (TimeHorizon::LongTerm, RiskLevel::High) => LONG_TERM_HIGH,
    }
}

/// Every (horizon, risk, options) entry, short-term first.
pub fn entries() -> impl Iterator<Item = (TimeHorizon, RiskLevel, &'static [InvestmentOption])> {
    TimeHorizon::ALL.into_iter().flat_map(|horizon| {
        RiskLevel::ALL
            .into_iter()
            .map(move |risk| (horizon, risk, options(horizon, risk)))
    })
}

/// One bucket of the diversification template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SplitBucket {
    pub label: &'static str,
    pub share: Decimal,
}

/// Illustrative 50/30/20 split, independent of the recommended options.
pub const DIVERSIFICATION: [SplitBucket; 3] = [
    SplitBucket {
        label: "Fixed Deposits",
        share: dec!(0.50),
    },
    SplitBucket {
        label: "Gold",
        share: dec!(0.30),
    },
    SplitBucket {
        label: "Share Market",
        share: dec!(0.20),
    },
];

/// A bucket of the template applied to a concrete amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SplitAmount {
    pub label: &'static str,
    pub share: Decimal,
    pub amount: Money,
}

/// What to say about splitting the investable amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SplitGuidance {
    /// Amount below the minimum: advise saving more, show no split.
    SaveMore,
    Split {
        total: Money,
        parts: [SplitAmount; 3],
    },
}

/// The options to show and how to split the amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    /// `None` when the generic fallback list was used.
    pub horizon: Option<TimeHorizon>,
    pub risk: RiskLevel,
    pub options: &'static [InvestmentOption],
    pub guidance: SplitGuidance,
}

impl Recommendation {
    /// True when the options came from the generic fallback list.
    #[must_use]
    pub const fn is_generic(&self) -> bool {
        self.horizon.is_none()
    }
}

/// Apply the diversification template to an amount.
#[must_use]
pub fn split_guidance(investable_from_savings: Money) -> SplitGuidance {
    match capacity_of(investable_from_savings) {
        InvestmentCapacity::None | InvestmentCapacity::Insufficient => SplitGuidance::SaveMore,
        InvestmentCapacity::Sufficient => SplitGuidance::Split {
            total: investable_from_savings,
            parts: DIVERSIFICATION.map(|bucket| SplitAmount {
                label: bucket.label,
                share: bucket.share,
                amount: investable_from_savings * bucket.share,
            }),
        },
    }
}

/// Look up the options for a goal and risk, with split guidance.
///
/// A missing goal falls back to [`GENERIC_OPTIONS`] rather than failing.
#[must_use]
pub fn recommend(
    goal: Option<TimeHorizon>,
    risk: RiskLevel,
    investable_from_savings: Money,
) -> Recommendation {
    let options = match goal {
        Some(horizon) => options(horizon, risk),
        None => GENERIC_OPTIONS,
    };

    Recommendation {
        horizon: goal,
        risk,
        options,
        guidance: split_guidance(investable_from_savings),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(options: &[InvestmentOption]) -> Vec<&'static str> {
        options.iter().map(|option| option.name).collect()
    }

    #[test]
    fn short_term_high_risk() {
        let rec = recommend(
            TimeHorizon::from_choice(1),
            RiskLevel::High,
            dec!(5000),
        );

        assert_eq!(names(rec.options), vec!["Stock Trading", "Gold ETFs"]);
        assert!(!rec.is_generic());
    }

    #[test]
    fn long_term_low_risk() {
        let rec = recommend(Some(TimeHorizon::LongTerm), RiskLevel::Low, dec!(5000));

        assert_eq!(
            names(rec.options),
            vec!["Government Bonds", "Public Provident Fund (PPF)"]
        );
    }

    #[test]
    fn invalid_goal_uses_generic_list() {
        let rec = recommend(TimeHorizon::from_choice(7), RiskLevel::Moderate, dec!(5000));

        assert!(rec.is_generic());
        assert_eq!(
            names(rec.options),
            vec!["Savings Account", "Gold", "Fixed Deposits"]
        );
    }

    #[test]
    fn small_amount_gets_save_more() {
        assert_eq!(split_guidance(dec!(500)), SplitGuidance::SaveMore);
        assert_eq!(split_guidance(dec!(999.99)), SplitGuidance::SaveMore);
        assert_eq!(split_guidance(Decimal::ZERO), SplitGuidance::SaveMore);
    }

    #[test]
    fn split_starts_at_minimum_investment() {
        use crate::domain::allocation::MIN_INVESTMENT;

        assert!(matches!(
            split_guidance(MIN_INVESTMENT),
            SplitGuidance::Split { total, .. } if total == MIN_INVESTMENT
        ));
    }

    #[test]
    fn split_uses_fifty_thirty_twenty() {
        let SplitGuidance::Split { total, parts } = split_guidance(dec!(2000)) else {
            panic!("expected a numeric split");
        };

        assert_eq!(total, dec!(2000));
        assert_eq!(parts[0].amount, dec!(1000.0));
        assert_eq!(parts[1].amount, dec!(600.0));
        assert_eq!(parts[2].amount, dec!(400.0));
        assert_eq!(parts[0].label, "Fixed Deposits");
        assert_eq!(parts[2].label, "Share Market");
    }

    #[test]
    fn template_shares_sum_to_one() {
        let total: Decimal = DIVERSIFICATION.iter().map(|bucket| bucket.share).sum();
        assert_eq!(total, Decimal::ONE);
    }

    #[test]
    fn every_entry_has_two_options() {
        let all: Vec<_> = entries().collect();

        assert_eq!(all.len(), 6);
        assert!(all.iter().all(|(_, _, options)| options.len() == 2));
        assert_eq!(all[0].0, TimeHorizon::ShortTerm);
        assert_eq!(all[0].1, RiskLevel::Low);
        assert_eq!(all[5].0, TimeHorizon::LongTerm);
        assert_eq!(all[5].1, RiskLevel::High);
    }

    #[test]
    fn choices_outside_menu_are_rejected() {
        assert_eq!(TimeHorizon::from_choice(0), None);
        assert_eq!(TimeHorizon::from_choice(3), None);
        assert_eq!(RiskLevel::from_choice(0), None);
        assert_eq!(RiskLevel::from_choice(4), None);
        assert_eq!(RiskLevel::from_choice(2), Some(RiskLevel::Moderate));
    }
}
