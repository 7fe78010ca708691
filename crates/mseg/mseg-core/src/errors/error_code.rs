//! LintErrorCode trait for stable, machine-readable error codes.

/// Every error enum implements this so reporters can emit a code string
/// alongside the human message.
pub trait LintErrorCode {
    /// Returns the code string (e.g., "REFERENCE_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const STRUCTURAL_ERROR: &str = "STRUCTURAL_ERROR";
pub const REFERENCE_ERROR: &str = "REFERENCE_ERROR";
pub const LABEL_MISMATCH: &str = "LABEL_MISMATCH";
pub const IO_ERROR: &str = "IO_ERROR";
pub const DOCUMENT_ERROR: &str = "DOCUMENT_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
