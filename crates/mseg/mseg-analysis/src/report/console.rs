//! Console reporter: one line per error, then a summary.

use mseg_core::errors::{ErrorSet, LintError, LintErrorCode};

use super::Reporter;

/// Console reporter for human-readable terminal output.
pub struct ConsoleReporter {
    pub use_color: bool,
}

impl ConsoleReporter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn color_start(&self, error: &LintError) -> &'static str {
        if !self.use_color {
            return "";
        }
        match error {
            LintError::LabelMismatch(_) => "\x1b[33m", // yellow
            LintError::Fs(_) | LintError::Config(_) => "\x1b[35m", // magenta
            _ => "\x1b[31m", // red
        }
    }

    fn color_end(&self) -> &'static str {
        if self.use_color {
            "\x1b[0m"
        } else {
            ""
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Reporter for ConsoleReporter {
    fn name(&self) -> &'static str {
        "console"
    }

    fn generate(&self, errors: &ErrorSet) -> Result<String, String> {
        let mut output = String::new();

        for error in errors {
            output.push_str(&format!(
                "{}{}{}: {}\n",
                self.color_start(error),
                error.error_code(),
                self.color_end(),
                error
            ));
        }

        match errors.len() {
            0 => output.push_str("no issues found\n"),
            1 => output.push_str("1 issue found\n"),
            n => output.push_str(&format!("{n} issues found\n")),
        }

        Ok(output)
    }
}
