//! Salary-to-recommendation pipeline.
//!
//! Stages run in a fixed order: convert to INR, annualize, compute tax,
//! allocate savings, then (only if something is left) recommend.
//!
//! ```text
//! Start → CurrencyKnown → AnnualIncomeComputed → TaxComputed
//!       → AllocationComputed → { NothingToInvest | Recommendation } → End
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use tracing::{debug, info};

use crate::domain::{
    allocate, compute_tax, convert_code, recommend, to_inr, Allocation, Conversion, Currency,
    InvestmentCapacity, Money, Recommendation, RiskLevel, TimeHorizon,
};
use crate::error::Result;

/// Months in a salary year.
pub const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Everything computed before the goal and risk questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SalaryBreakdown {
    /// Monthly salary as entered, in `currency`.
    pub monthly_salary: Money,
    pub currency: Currency,
    /// True when the currency code was not recognized and INR was assumed.
    pub currency_assumed: bool,
    pub monthly_inr: Money,
    pub annual_inr: Money,
    pub tax: Money,
    pub allocation: Allocation,
}

impl SalaryBreakdown {
    /// Whether there is anything to recommend at all.
    #[must_use]
    pub fn can_invest(&self) -> bool {
        self.allocation.capacity() != InvestmentCapacity::None
    }
}

/// Final branch of the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum PlanOutcome {
    /// Investable-from-savings is zero or negative.
    NothingToInvest,
    Recommendation(Recommendation),
}

/// Run the pipeline up to the allocation for a known currency.
///
/// `monthly_salary` must pass [`is_accepted_amount`](crate::domain::is_accepted_amount);
/// both the prompt and the command-line parser enforce it.
#[must_use]
pub fn breakdown(monthly_salary: Money, currency: Currency) -> SalaryBreakdown {
    let conversion = Conversion {
        amount: to_inr(monthly_salary, currency),
        currency,
        assumed: false,
    };
    breakdown_converted(monthly_salary, conversion)
}

/// Run the pipeline for a raw currency code, assuming INR if it is unknown.
#[must_use]
pub fn breakdown_for_code(monthly_salary: Money, code: &str) -> SalaryBreakdown {
    breakdown_converted(monthly_salary, convert_code(monthly_salary, code))
}

fn breakdown_converted(monthly_salary: Money, conversion: Conversion) -> SalaryBreakdown {
    debug!(
        currency = %conversion.currency,
        monthly_inr = %conversion.amount,
        assumed = conversion.assumed,
        "Currency known"
    );

    let annual_inr = conversion.amount * MONTHS_PER_YEAR;
    debug!(annual_inr = %annual_inr, "Annual income computed");

    let tax = compute_tax(annual_inr);
    debug!(tax = %tax, "Tax computed");

    let allocation = allocate(annual_inr, tax);
    debug!(
        investable = %allocation.investable,
        savings = %allocation.savings,
        investable_from_savings = %allocation.investable_from_savings,
        "Allocation computed"
    );

    SalaryBreakdown {
        monthly_salary,
        currency: conversion.currency,
        currency_assumed: conversion.assumed,
        monthly_inr: conversion.amount,
        annual_inr,
        tax,
        allocation,
    }
}

/// Decide the final branch for a breakdown.
///
/// `choose` supplies the goal and risk and is only called when there is
/// something to invest. A `None` goal means the choice was outside the menu;
/// the recommendation then uses the generic option list.
///
/// # Errors
///
/// Propagates any error returned by `choose`.
pub fn outcome<F>(breakdown: &SalaryBreakdown, choose: F) -> Result<PlanOutcome>
where
    F: FnOnce() -> Result<(Option<TimeHorizon>, RiskLevel)>,
{
    if !breakdown.can_invest() {
        info!("Nothing left to invest from savings");
        return Ok(PlanOutcome::NothingToInvest);
    }

    let (goal, risk) = choose()?;
    let recommendation = recommend(goal, risk, breakdown.allocation.investable_from_savings);
    info!(
        goal = ?goal,
        risk = ?risk,
        options = recommendation.options.len(),
        "Recommendation emitted"
    );
    Ok(PlanOutcome::Recommendation(recommendation))
}
