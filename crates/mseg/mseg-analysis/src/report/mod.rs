//! Reporters: output formats for the combined error set of a run.

pub mod console;
pub mod json;

use mseg_core::config::ReportFormat;
use mseg_core::errors::ErrorSet;

/// Trait for report generation.
pub trait Reporter: Send + Sync {
    fn name(&self) -> &'static str;
    fn generate(&self, errors: &ErrorSet) -> Result<String, String>;
}

/// Create a reporter for `format`. `color` only affects the console reporter.
pub fn create_reporter(format: ReportFormat, color: bool) -> Box<dyn Reporter> {
    match format {
        ReportFormat::Console => Box::new(console::ConsoleReporter::new(color)),
        ReportFormat::Json => Box::new(json::JsonReporter),
    }
}
