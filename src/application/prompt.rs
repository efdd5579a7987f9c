//! Retry-until-valid prompting.
//!
//! Every interactive answer goes through [`prompt_until`]: a rejected line
//! produces a corrective notice and the same prompt again, with no retry
//! limit. Only closed input ends the loop without a value.

use rust_decimal::Decimal;
use tracing::debug;

use crate::domain::{is_accepted_amount, Currency, Money, RiskLevel, TimeHorizon};
use crate::error::Result;
use crate::port::Prompter;

const SALARY_PROMPT: &str = "Enter your monthly salary amount";
const SALARY_CORRECTION: &str =
    "Invalid amount. Please enter a non-negative number no larger than 10^22.";

const CURRENCY_PROMPT: &str = "Enter the currency (INR/USD/EUR/JPY)";
const CURRENCY_CORRECTION: &str =
    "Invalid currency input. Please enter a valid currency (INR, USD, EUR, JPY).";

const GOAL_PROMPT: &str = "Select your investment goal:
1. Short-term (1-3 years)
2. Long-term (5+ years)
Enter your choice (1 or 2)";

const RISK_PROMPT: &str = "Select your risk appetite:
1. Low Risk
2. Moderate Risk
3. High Risk
Enter your choice (1, 2, or 3)";

/// Ask until `parse` accepts the answer.
///
/// # Errors
///
/// Propagates the prompter's error when input is closed or unreadable.
pub fn prompt_until<P, T, F>(
    prompter: &mut P,
    prompt: &str,
    mut parse: F,
    correction: &str,
) -> Result<T>
where
    P: Prompter + ?Sized,
    F: FnMut(&str) -> Option<T>,
{
    loop {
        let line = prompter.read_line(prompt)?;
        if let Some(value) = parse(line.trim()) {
            return Ok(value);
        }
        debug!(input = %line, "Rejected answer, prompting again");
        prompter.notify(correction);
    }
}

/// Parse a non-negative decimal amount up to [`MAX_AMOUNT`](crate::domain::MAX_AMOUNT).
#[must_use]
pub fn parse_salary(input: &str) -> Option<Money> {
    input
        .parse::<Decimal>()
        .ok()
        .filter(|amount| is_accepted_amount(*amount))
}

/// Parse a menu choice in `min..=max`.
#[must_use]
pub fn parse_choice(input: &str, min: u8, max: u8) -> Option<u8> {
    input
        .parse::<u8>()
        .ok()
        .filter(|choice| (min..=max).contains(choice))
}

fn choice_correction(min: u8, max: u8) -> String {
    format!("Invalid input. Please enter a valid choice between {min} and {max}.")
}

/// Ask for the monthly salary.
pub fn ask_salary<P: Prompter + ?Sized>(prompter: &mut P) -> Result<Money> {
    prompt_until(prompter, SALARY_PROMPT, parse_salary, SALARY_CORRECTION)
}

/// Ask for the salary currency. The code must match exactly.
pub fn ask_currency<P: Prompter + ?Sized>(prompter: &mut P) -> Result<Currency> {
    prompt_until(
        prompter,
        CURRENCY_PROMPT,
        |input| input.parse::<Currency>().ok(),
        CURRENCY_CORRECTION,
    )
}

/// Ask for the investment goal (1 or 2).
pub fn ask_goal<P: Prompter + ?Sized>(prompter: &mut P) -> Result<TimeHorizon> {
    prompt_until(
        prompter,
        GOAL_PROMPT,
        |input| parse_choice(input, 1, 2).and_then(TimeHorizon::from_choice),
        &choice_correction(1, 2),
    )
}

/// Ask for the risk appetite (1, 2 or 3).
pub fn ask_risk<P: Prompter + ?Sized>(prompter: &mut P) -> Result<RiskLevel> {
    prompt_until(
        prompter,
        RISK_PROMPT,
        |input| parse_choice(input, 1, 3).and_then(RiskLevel::from_choice),
        &choice_correction(1, 3),
    )
}
