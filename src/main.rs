//! depmerge - Auto-merge gate for dependency update commits
//!
//! Exit codes:
//! - 0: auto-merge approved
//! - 1: manual merging required
//! - 2: configuration, title, or manifest error

use clap::Parser;
use depmerge::cli::CliArgs;
use depmerge::orchestrator::Orchestrator;
use depmerge::output::{create_formatter, OutputConfig};
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};
use std::io::{self, Write};
use std::process::ExitCode;

fn initialize_logger(verbose: bool, quiet: bool, no_color: bool) -> anyhow::Result<()> {
    let filter = if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let config = ConfigBuilder::new()
        .add_filter_allow_str("depmerge")
        .build();

    let color = if no_color {
        ColorChoice::Never
    } else {
        ColorChoice::Auto
    };

    // stdout carries the decision; logs go to stderr
    TermLogger::init(filter, config, TerminalMode::Stderr, color)?;

    Ok(())
}

fn main() -> ExitCode {
    let args = CliArgs::parse();

    // Run the main logic and handle errors
    match run(args) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

/// Main application logic
fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    initialize_logger(args.verbose, args.quiet, args.no_color)?;

    let output_config =
        OutputConfig::from_cli(args.json, args.verbose, args.quiet, args.no_color);
    let result = Orchestrator::new(args).run()?;

    let formatter = create_formatter(output_config);
    let mut stdout = io::stdout().lock();
    formatter.format(&result, &mut stdout)?;
    stdout.flush()?;

    if result.decision.should_merge() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
