//! Illegal nesting in the policy directory tree.

use std::path::PathBuf;

use super::error_code::{self, LintErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum StructuralError {
    #[error("policy file {path} must not exist in the root directory")]
    PolicyFileInRoot { path: PathBuf },

    #[error("kubernetes-level namespace may not have children: {path}")]
    LeafHasChildren { path: PathBuf },
}

impl LintErrorCode for StructuralError {
    fn error_code(&self) -> &'static str {
        error_code::STRUCTURAL_ERROR
    }
}
