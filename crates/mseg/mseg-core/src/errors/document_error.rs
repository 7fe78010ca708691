//! Policy document codec failures.

use std::path::PathBuf;

use super::error_code::{self, LintErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("failed to decode policy document {path}: {message}")]
    Decode { path: PathBuf, message: String },

    #[error("failed to encode policy document {path}: {message}")]
    Encode { path: PathBuf, message: String },

    #[error("missing data section in file {path}")]
    MissingData { path: PathBuf },
}

impl LintErrorCode for DocumentError {
    fn error_code(&self) -> &'static str {
        error_code::DOCUMENT_ERROR
    }
}
