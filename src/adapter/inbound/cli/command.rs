//! Command-line interface definitions.
//!
//! Defines the CLI structure for frontier using `clap`. Running without a
//! subcommand starts the interactive planner.

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;

use super::paths;
use crate::domain::{is_accepted_amount, MAX_AMOUNT};

/// Salary to investment planner: INR conversion, income tax and savings suggestions
#[derive(Parser, Debug)]
#[command(name = "frontier")]
#[command(version)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to the configuration file
    #[arg(short, long, global = true, default_value_os_t = paths::default_config())]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands for the frontier CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Plan savings and investments from a monthly salary (default)
    Plan(PlanArgs),

    /// Show the income tax owed on an annual INR income
    Tax(TaxArgs),

    /// List every investment option by goal and risk
    Catalog,
}

/// Arguments for the `plan` subcommand.
///
/// Each answer given here skips the matching prompt.
#[derive(Parser, Debug, Default)]
pub struct PlanArgs {
    /// Monthly salary amount
    #[arg(long, value_parser = parse_amount)]
    pub salary: Option<Decimal>,

    /// Salary currency (INR, USD, EUR, JPY); unknown codes are read as INR
    #[arg(long)]
    pub currency: Option<String>,

    /// Investment goal: 1 = short-term, 2 = long-term
    #[arg(long)]
    pub goal: Option<u8>,

    /// Risk appetite: 1 = low, 2 = moderate, 3 = high
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=3))]
    pub risk: Option<u8>,
}

/// Arguments for the `tax` subcommand.
#[derive(Parser, Debug)]
pub struct TaxArgs {
    /// Annual income in INR
    #[arg(value_parser = parse_amount)]
    pub income: Decimal,
}

fn parse_amount(raw: &str) -> Result<Decimal, String> {
    let amount: Decimal = raw
        .parse()
        .map_err(|_| format!("'{raw}' is not a number"))?;
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err("amount must not be negative".to_string());
    }
    if !is_accepted_amount(amount) {
        return Err(format!("amount must not exceed {MAX_AMOUNT}"));
    }
    Ok(amount)
}
