//! End-to-end planner flows driven through the prompt port.

use rust_decimal_macros::dec;

use frontier::application::planner::{self, PlanOutcome};
use frontier::application::prompt;
use frontier::domain::{Currency, RiskLevel, SplitGuidance, TimeHorizon};
use frontier::error::Error;
use frontier::testkit::prompt::ScriptedPrompter;

fn run_scripted(prompter: &mut ScriptedPrompter) -> frontier::error::Result<PlanOutcome> {
    let salary = prompt::ask_salary(prompter)?;
    let currency = prompt::ask_currency(prompter)?;
    let breakdown = planner::breakdown(salary, currency);
    planner::outcome(&breakdown, || {
        let goal = prompt::ask_goal(prompter)?;
        let risk = prompt::ask_risk(prompter)?;
        Ok((Some(goal), risk))
    })
}

#[test]
fn usd_salary_reaches_a_split_recommendation() {
    let mut prompter = ScriptedPrompter::new(["50000", "USD", "1", "3"]);

    let outcome = run_scripted(&mut prompter).unwrap();

    let PlanOutcome::Recommendation(recommendation) = outcome else {
        panic!("expected a recommendation");
    };
    assert_eq!(recommendation.horizon, Some(TimeHorizon::ShortTerm));
    assert_eq!(recommendation.risk, RiskLevel::High);
    assert_eq!(recommendation.options[0].name, "Stock Trading");

    let SplitGuidance::Split { total, parts } = recommendation.guidance else {
        panic!("expected a split");
    };
    assert_eq!(total, dec!(489720));
    assert_eq!(parts[0].amount, dec!(244860));
    assert_eq!(parts[1].amount, dec!(146916));
    assert_eq!(parts[2].amount, dec!(97944));
}

#[test]
fn invalid_answers_are_corrected_and_retried() {
    let mut prompter =
        ScriptedPrompter::new(["-1", "lots", "50000", "Usd", "EUR", "0", "2", "4", "2"]);

    let outcome = run_scripted(&mut prompter).unwrap();

    assert_eq!(prompter.notices().len(), 5);
    assert_eq!(prompter.remaining(), 0);
    let PlanOutcome::Recommendation(recommendation) = outcome else {
        panic!("expected a recommendation");
    };
    assert_eq!(recommendation.horizon, Some(TimeHorizon::LongTerm));
    assert_eq!(recommendation.risk, RiskLevel::Moderate);
}

#[test]
fn zero_salary_stops_before_personalization() {
    let mut prompter = ScriptedPrompter::new(["0", "INR"]);

    let outcome = run_scripted(&mut prompter).unwrap();

    assert_eq!(outcome, PlanOutcome::NothingToInvest);
    assert_eq!(prompter.prompts().len(), 2);
}

#[test]
fn small_salary_is_told_to_save_more() {
    let breakdown = planner::breakdown(dec!(5000), Currency::Inr);
    assert_eq!(breakdown.allocation.investable_from_savings, dec!(840));

    let outcome = planner::outcome(&breakdown, || Ok((Some(TimeHorizon::LongTerm), RiskLevel::Low)))
        .unwrap();

    let PlanOutcome::Recommendation(recommendation) = outcome else {
        panic!("expected a recommendation");
    };
    assert_eq!(recommendation.guidance, SplitGuidance::SaveMore);
}

#[test]
fn closed_input_surfaces_as_error() {
    let mut prompter = ScriptedPrompter::new(["50000"]);

    let err = run_scripted(&mut prompter).unwrap_err();

    assert!(matches!(err, Error::InputClosed { .. }));
}
