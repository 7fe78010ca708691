//! Object tag-groups that do not resolve to a namespace in the tree.

use std::path::PathBuf;

use super::error_code::{self, LintErrorCode};
use crate::types::{NamespaceLevel, RuleKind};

#[derive(Debug, thiserror::Error)]
pub enum ReferenceError {
    /// A level in the chain has no tag (or an empty value).
    #[error("object in {rule_kind} does not have a {level} tag in file \"{file}\"")]
    MissingTag {
        rule_kind: RuleKind,
        level: NamespaceLevel,
        file: PathBuf,
    },

    /// The tag is set but no namespace with that name exists at that level.
    #[error("object in {rule_kind} in file \"{file}\" references non existent {level} namespace {namespace}")]
    UnknownNamespace {
        rule_kind: RuleKind,
        level: NamespaceLevel,
        file: PathBuf,
        namespace: PathBuf,
    },
}

impl ReferenceError {
    pub fn level(&self) -> NamespaceLevel {
        match self {
            Self::MissingTag { level, .. } | Self::UnknownNamespace { level, .. } => *level,
        }
    }

    pub fn rule_kind(&self) -> RuleKind {
        match self {
            Self::MissingTag { rule_kind, .. } | Self::UnknownNamespace { rule_kind, .. } => {
                *rule_kind
            }
        }
    }
}

impl LintErrorCode for ReferenceError {
    fn error_code(&self) -> &'static str {
        error_code::REFERENCE_ERROR
    }
}
