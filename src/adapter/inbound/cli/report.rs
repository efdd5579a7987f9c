//! Human-readable rendering of planner results.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::adapter::inbound::cli::output;
use crate::application::planner::SalaryBreakdown;
use crate::domain::catalog::DIVERSIFICATION;
use crate::domain::{BracketSlice, Money, Recommendation, SplitGuidance};

/// Format an amount with two decimal places.
#[must_use]
pub fn amount(value: Money) -> String {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded.to_string()
}

/// Format a rate such as `0.15` as `15%`.
#[must_use]
pub fn percent(rate: Decimal) -> String {
    format!("{}%", (rate * dec!(100)).normalize())
}

/// Print income and the savings cascade.
pub fn breakdown(breakdown: &SalaryBreakdown) {
    output::section("Income Details");
    if output::verbosity() > 0 {
        output::field(
            "Exchange rate",
            format!("1 {} = {} INR", breakdown.currency, breakdown.currency.rate()),
        );
    }
    output::field("Monthly Salary in INR", amount(breakdown.monthly_inr));
    output::field("Annual Income in INR", amount(breakdown.annual_inr));

    output::section("Salary Breakdown");
    output::field("Taxes", amount(breakdown.tax));
    output::field(
        "Amount after reducing taxes",
        amount(breakdown.allocation.investable),
    );
    output::field("Savings", amount(breakdown.allocation.savings));
    output::field(
        "Amount to invest from savings",
        output::highlight(amount(breakdown.allocation.investable_from_savings)),
    );
}

/// Print the per-bracket tax slices, highest bracket first.
pub fn tax_slices(slices: &[BracketSlice]) {
    for slice in slices {
        output::field(
            &format!(
                "Above {} at {}",
                amount(slice.bracket.threshold),
                percent(slice.bracket.rate)
            ),
            format!(
                "{} on {}",
                amount(slice.tax),
                output::muted(amount(slice.taxable))
            ),
        );
    }
}

/// Print the matched options and diversification guidance.
pub fn recommendation(recommendation: &Recommendation) {
    output::section("Personalized Investment Options");
    if recommendation.is_generic() {
        output::warning("Invalid goal selected. Showing generic suggestions:");
    } else if let Some(horizon) = recommendation.horizon {
        output::note(&format!("{horizon}, {}", recommendation.risk));
    }

    let listing = recommendation
        .options
        .iter()
        .enumerate()
        .map(|(index, option)| {
            if option.description.is_empty() {
                format!("{}. {}", index + 1, option.name)
            } else {
                format!("{}. {}: {}", index + 1, option.name, option.description)
            }
        })
        .collect::<Vec<_>>()
        .join("\n");
    output::lines(&listing);

    output::section("Suggested Allocation");
    output::note("Consider allocating your investable amount across 2-3 options for diversification.");
    let example = DIVERSIFICATION
        .iter()
        .map(|bucket| format!("{} in {}", percent(bucket.share), bucket.label))
        .collect::<Vec<_>>()
        .join(", ");
    output::note(&format!("Example: {example}."));

    match &recommendation.guidance {
        SplitGuidance::SaveMore => {
            output::lines("Consider saving more before investing to access better options.");
        }
        SplitGuidance::Split { total, parts } => {
            output::field("Investable Amount from Savings", amount(*total));
            for part in parts {
                output::field(
                    &format!("  {} in {}", percent(part.share), part.label),
                    output::positive(amount(part.amount)),
                );
            }
        }
    }
}
