//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Crates whose events are shown by the default filter.
const WORKSPACE_TARGETS: [&str; 3] = ["mseg_core", "mseg_analysis", "mseg_cli"];

/// The filter used when `MSEG_LOG` is absent or invalid.
/// `info` for the workspace crates, `debug` when `verbose` is set.
pub fn default_filter(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    WORKSPACE_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Initialize the mseg tracing/logging system. Events go to stderr so that
/// machine-readable reports on stdout stay clean.
///
/// Reads `MSEG_LOG` for per-crate levels, e.g. `MSEG_LOG=mseg_analysis=debug`.
/// Calling it more than once is a no-op.
pub fn init_tracing(verbose: bool) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(verbose)
                    .with_file(verbose)
                    .with_line_number(verbose),
            )
            .with(filter)
            .init();
    });
}
