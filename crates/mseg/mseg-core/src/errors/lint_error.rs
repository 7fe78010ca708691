//! Umbrella error for every pass.

use super::error_code::LintErrorCode;
use super::{
    ConfigError, DocumentError, FsError, LabelMismatchError, ReferenceError, StructuralError,
};

/// Any single problem found while loading, sanitizing, or validating a tree.
#[derive(Debug, thiserror::Error)]
pub enum LintError {
    #[error("{0}")]
    Structural(#[from] StructuralError),

    #[error("{0}")]
    Reference(#[from] ReferenceError),

    #[error("{0}")]
    LabelMismatch(#[from] LabelMismatchError),

    #[error("{0}")]
    Fs(#[from] FsError),

    #[error("{0}")]
    Document(#[from] DocumentError),

    #[error("{0}")]
    Config(#[from] ConfigError),
}

impl LintError {
    /// Short kind name used by reporters.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Structural(_) => "structural",
            Self::Reference(_) => "reference",
            Self::LabelMismatch(_) => "label",
            Self::Fs(_) => "io",
            Self::Document(_) => "document",
            Self::Config(_) => "config",
        }
    }
}

impl LintErrorCode for LintError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Structural(e) => e.error_code(),
            Self::Reference(e) => e.error_code(),
            Self::LabelMismatch(e) => e.error_code(),
            Self::Fs(e) => e.error_code(),
            Self::Document(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}
