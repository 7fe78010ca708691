//! Subcommand execution and exit codes.

use std::path::Path;
use std::process::ExitCode;

use mseg_analysis::demo::write_example;
use mseg_analysis::report::{create_reporter, Reporter};
use mseg_analysis::{Sanitizer, TreeLoader, Validator};
use mseg_core::errors::{ErrorSet, LintErrorCode};
use mseg_core::MsegConfig;

use crate::cli::{Cli, Command, RunArgs};

/// Nothing to report.
pub const EXIT_CLEAN: u8 = 0;
/// The tree has at least one issue, or a command failed.
pub const EXIT_ISSUES: u8 = 1;
/// Bad invocation or configuration.
pub const EXIT_USAGE: u8 = 2;

pub fn dispatch(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Run(args) => run(&args),
        Command::Example { dir } => example(&dir),
    }
}

fn run(args: &RunArgs) -> ExitCode {
    if !args.sanitize && !args.validate {
        eprintln!("error: nothing to do; pass --sanitize and/or --validate");
        return ExitCode::from(EXIT_USAGE);
    }

    let config = match MsegConfig::load(&args.dir, Some(&args.overrides())) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e.coded_string());
            return ExitCode::from(EXIT_USAGE);
        }
    };

    let reporter = create_reporter(
        config.report.effective_format(),
        config.report.effective_color(),
    );
    let errors = lint(&args.dir, args.sanitize, args.validate, &config);
    emit(&*reporter, &errors)
}

/// Load the tree, then sanitize and validate as requested. Load errors stop
/// before either pass runs.
fn lint(dir: &Path, sanitize: bool, validate: bool, config: &MsegConfig) -> ErrorSet {
    let mut tree = match TreeLoader::new(&config.scan).load(dir).into_result() {
        Ok(tree) => tree,
        Err(errors) => {
            tracing::warn!(count = errors.len(), "tree could not be loaded; no pass was run");
            return errors;
        }
    };

    let mut errors = ErrorSet::new();
    if sanitize {
        errors.extend(Sanitizer::new(config).run(&mut tree).errors);
    }
    if validate {
        errors.extend(Validator::new().validate(&tree));
    }
    errors
}

fn emit(reporter: &dyn Reporter, errors: &ErrorSet) -> ExitCode {
    match reporter.generate(errors) {
        Ok(output) => print!("{output}"),
        Err(e) => {
            eprintln!("error: {} reporter failed: {e}", reporter.name());
            return ExitCode::from(EXIT_USAGE);
        }
    }

    if errors.is_empty() {
        ExitCode::from(EXIT_CLEAN)
    } else {
        ExitCode::from(EXIT_ISSUES)
    }
}

fn example(dir: &Path) -> ExitCode {
    match write_example(dir) {
        Ok(()) => {
            println!("example policy tree written to {}", dir.display());
            ExitCode::from(EXIT_CLEAN)
        }
        Err(e) => {
            eprintln!("error: {}", e.coded_string());
            ExitCode::from(EXIT_ISSUES)
        }
    }
}
