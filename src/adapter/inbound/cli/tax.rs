//! Handler for the `tax` command.

use serde_json::json;

use crate::adapter::inbound::cli::command::TaxArgs;
use crate::adapter::inbound::cli::{output, report};
use crate::domain::{assess, compute_tax};
use crate::error::Result;

/// Explain the tax owed on an annual income.
pub fn execute(args: &TaxArgs) -> Result<()> {
    let slices = assess(args.income);
    let total = compute_tax(args.income);

    if output::is_json() {
        output::json_output(json!({
            "command": "tax",
            "income": args.income,
            "slices": slices,
            "tax": total,
        }));
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::section("Income Tax");
    output::field("Annual Income in INR", report::amount(args.income));

    if slices.is_empty() {
        output::note("Income is within the exempt slab.");
    } else {
        report::tax_slices(&slices);
    }

    output::field("Taxes", output::highlight(report::amount(total)));

    Ok(())
}
