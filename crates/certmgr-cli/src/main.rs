//! Certmgr CLI - command-line interface for the certificate model
//!
//! Entry point for the `certmgr` binary: decode certificate-management
//! wire documents into typed records, render them with sensitive values
//! redacted, and flag values this build does not recognize.

mod cli;
mod config;
mod error;
mod handlers;
mod logging;
mod output;

use cli::{Cli, Commands};
use colored::control;
use config::Config;
use error::Result;
use output::OutputWriter;
use std::process;

fn main() {
    let cli = Cli::parse_args();

    match run(cli) {
        Ok(()) => process::exit(0),
        Err(e) => {
            eprintln!(
                "{}",
                error::format_error(&e, control::SHOULD_COLORIZE.should_colorize())
            );
            process::exit(e.exit_code());
        }
    }
}

/// Main application logic
fn run(cli: Cli) -> Result<()> {
    let config = Config::load_with_file(cli.config.as_deref())?;

    let use_color = cli.use_color() && config.output.color;
    control::set_override(use_color);

    if let Err(e) = logging::init(&config.logging, cli.verbosity_level()) {
        // A second init (tests, nested invocation) is not fatal.
        eprintln!("logging init skipped: {e}");
    }

    let output = OutputWriter::new(cli.output, use_color, cli.quiet);

    tracing::debug!(command = ?cli.command, "executing command");

    match cli.command {
        Commands::Inspect(args) => handlers::handle_inspect(args, &output),
        Commands::Validate(args) => handlers::handle_validate(args, &output),
        Commands::Kinds => handlers::handle_kinds(&output),
    }
}
