//! Handler for the `plan` command.

use serde_json::json;

use crate::adapter::inbound::cli::command::PlanArgs;
use crate::adapter::inbound::cli::{output, report};
use crate::application::planner::{self, PlanOutcome, SalaryBreakdown};
use crate::application::prompt;
use crate::domain::{RiskLevel, TimeHorizon};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::Prompter;

const ASSUMED_INR: &str = "Invalid currency input. Assuming salary is in INR.";
const NOTHING_TO_INVEST: &str =
    "No amount left to invest from savings. Please revise your savings plan.";

/// Run the planner, prompting for anything not given on the command line.
pub fn execute<P: Prompter + ?Sized>(
    args: &PlanArgs,
    config: &Config,
    prompter: &mut P,
) -> Result<()> {
    let machine_output = output::is_json();
    if !machine_output {
        output::header(env!("CARGO_PKG_VERSION"));
    }

    let breakdown = salary_breakdown(args, config, prompter)?;
    if breakdown.currency_assumed {
        output::warning(ASSUMED_INR);
    }
    if !machine_output {
        report::breakdown(&breakdown);
    }

    let outcome = planner::outcome(&breakdown, || {
        if !machine_output {
            output::section("Investment Personalization");
        }
        let goal = match args.goal {
            Some(choice) => TimeHorizon::from_choice(choice),
            None => Some(prompt::ask_goal(prompter)?),
        };
        let risk = match args.risk.and_then(RiskLevel::from_choice) {
            Some(risk) => risk,
            None => prompt::ask_risk(prompter)?,
        };
        Ok((goal, risk))
    })?;

    if machine_output {
        output::json_output(json!({
            "command": "plan",
            "breakdown": breakdown,
            "result": outcome,
        }));
        return Ok(());
    }

    match &outcome {
        PlanOutcome::NothingToInvest => {
            println!();
            output::lines(NOTHING_TO_INVEST);
        }
        PlanOutcome::Recommendation(recommendation) => report::recommendation(recommendation),
    }

    Ok(())
}

/// Read salary and currency, then run the pipeline up to the allocation.
///
/// A currency given on the command line goes through the lenient code path
/// (unknown codes are read as INR); a prompted one must be valid.
fn salary_breakdown<P: Prompter + ?Sized>(
    args: &PlanArgs,
    config: &Config,
    prompter: &mut P,
) -> Result<SalaryBreakdown> {
    let salary = match args.salary {
        Some(salary) => salary,
        None => prompt::ask_salary(prompter)?,
    };

    let breakdown = match (args.currency.as_deref(), config.default_currency()) {
        (Some(code), _) => planner::breakdown_for_code(salary, code),
        (None, Some(currency)) => planner::breakdown(salary, currency),
        (None, None) => planner::breakdown(salary, prompt::ask_currency(prompter)?),
    };

    Ok(breakdown)
}
