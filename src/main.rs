use std::io::IsTerminal;

use clap::Parser;
use tracing::{debug, error};

use frontier::adapter::inbound::cli::command::{Cli, ColorChoice, Commands, PlanArgs};
use frontier::adapter::inbound::cli::output::{self, OutputConfig};
use frontier::adapter::inbound::cli::{catalog, plan, tax};
use frontier::adapter::outbound::terminal::TerminalPrompter;
use frontier::error::Result;
use frontier::infrastructure::config::settings::Config;

/// Resolve `--color` for a stream; `auto` honours `NO_COLOR` and terminal detection.
fn use_color(choice: &ColorChoice, terminal: bool) -> bool {
    match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => std::env::var_os("NO_COLOR").is_none() && terminal,
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load_or_default(&cli.config)?;
    config.init_logging(
        cli.verbose,
        use_color(&cli.color, std::io::stderr().is_terminal()),
    );
    debug!(config = %cli.config.display(), "frontier starting");

    match cli.command {
        None => plan::execute(&PlanArgs::default(), &config, &mut TerminalPrompter::new()),
        Some(Commands::Plan(args)) => plan::execute(&args, &config, &mut TerminalPrompter::new()),
        Some(Commands::Tax(args)) => tax::execute(&args),
        Some(Commands::Catalog) => catalog::list(),
    }
}

fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(OutputConfig::new(
        cli.json,
        cli.quiet,
        cli.verbose,
        use_color(&cli.color, std::io::stdout().is_terminal()),
    ));

    if let Err(e) = run(cli) {
        error!(error = %e, "Fatal error");
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
