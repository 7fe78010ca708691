//! `mseg-lint`: sanitize and validate microsegmentation policy trees.

mod cli;
mod commands;

use std::process::ExitCode;

use clap::Parser;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    mseg_core::tracing::init_tracing(cli.verbose);
    commands::dispatch(cli)
}
