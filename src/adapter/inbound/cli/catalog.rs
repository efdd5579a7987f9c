//! Investment catalog listing.

use serde_json::json;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::output;
use crate::domain::catalog::{self, DIVERSIFICATION};
use crate::error::Result;

#[derive(Tabled)]
struct OptionRow {
    #[tabled(rename = "Goal")]
    goal: &'static str,
    #[tabled(rename = "Risk")]
    risk: &'static str,
    #[tabled(rename = "Option")]
    name: &'static str,
    #[tabled(rename = "Description")]
    description: &'static str,
}

/// List every option set in the catalog.
pub fn list() -> Result<()> {
    if output::is_json() {
        let entries: Vec<_> = catalog::entries()
            .map(|(horizon, risk, options)| {
                json!({
                    "goal": horizon,
                    "risk": risk,
                    "options": options,
                })
            })
            .collect();
        output::json_output(json!({
            "command": "catalog",
            "entries": entries,
            "diversification": DIVERSIFICATION,
        }));
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::section("Investment options");

    let rows: Vec<OptionRow> = catalog::entries()
        .flat_map(|(horizon, risk, options)| {
            options.iter().map(move |option| OptionRow {
                goal: horizon.label(),
                risk: risk.label(),
                name: option.name,
                description: option.description,
            })
        })
        .collect();

    output::lines(&Table::new(rows).to_string());

    output::hint(&format!(
        "run {} to get a personal recommendation",
        output::highlight("frontier plan")
    ));

    Ok(())
}
