//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use mseg_core::config::{CliOverrides, ReportFormat};

/// CLI arguments for `mseg-lint`.
#[derive(Debug, Parser)]
#[command(
    name = "mseg-lint",
    about = "Sanitize and validate microsegmentation policy trees",
    version
)]
pub struct Cli {
    /// Log verbose progress to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands for `mseg-lint`.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sanitize and/or validate the policy tree rooted at DIR.
    Run(RunArgs),
    /// Write a demonstration policy tree to DIR, which must not exist.
    #[command(alias = "config")]
    Example {
        #[arg(value_name = "DIR")]
        dir: PathBuf,
    },
}

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Root of the policy tree.
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,

    /// Rewrite subjects and labels from each file's location.
    #[arg(long, alias = "sanatize")]
    pub sanitize: bool,

    /// Check object references and labels.
    #[arg(long)]
    pub validate: bool,

    /// Report format: console or json.
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<ReportFormat>,

    /// Disable ANSI color in console reports.
    #[arg(long)]
    pub no_color: bool,
}

impl RunArgs {
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            report_format: self.format,
            report_color: self.no_color.then_some(false),
        }
    }
}
