//! Document label out of step with its location.

use std::path::PathBuf;

use super::error_code::{self, LintErrorCode};

#[derive(Debug, thiserror::Error)]
#[error("label \"{found}\" should be \"{expected}\" in file \"{file}\"")]
pub struct LabelMismatchError {
    pub file: PathBuf,
    pub found: String,
    pub expected: String,
}

impl LintErrorCode for LabelMismatchError {
    fn error_code(&self) -> &'static str {
        error_code::LABEL_MISMATCH
    }
}
