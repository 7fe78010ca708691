//! Failures reading or mutating the backing directory tree.

use std::path::PathBuf;

use super::error_code::{self, LintErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum FsError {
    #[error("failed to read directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to rename file {from} to {to}: {source}")]
    Rename {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write file {path}: {source}")]
    WriteFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("directory {path} already exists; aborting")]
    AlreadyExists { path: PathBuf },
}

impl FsError {
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::ReadDir { path, .. }
            | Self::ReadFile { path, .. }
            | Self::CreateDir { path, .. }
            | Self::WriteFile { path, .. }
            | Self::AlreadyExists { path } => path,
            Self::Rename { from, .. } => from,
        }
    }
}

impl LintErrorCode for FsError {
    fn error_code(&self) -> &'static str {
        error_code::IO_ERROR
    }
}
