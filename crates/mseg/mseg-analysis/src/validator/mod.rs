//! Validator: read-only pass checking that every rule object resolves to a
//! namespace that exists, and that every document label matches its location.

pub mod resolve;

use std::path::Path;

use mseg_core::errors::{DocumentError, ErrorSet, LabelMismatchError, ReferenceError};
use mseg_core::types::RuleKind;

use crate::model::Rule;
use crate::tree::{NamespaceNode, NamespaceTree, PolicyFile};

pub use resolve::{resolve, Resolution};

/// Stateless validation pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator;

impl Validator {
    pub fn new() -> Self {
        Self
    }

    /// Check every document in the tree. Errors from all files are collected.
    pub fn validate(&self, tree: &NamespaceTree) -> ErrorSet {
        let mut errors = ErrorSet::new();
        for id in tree.pre_order() {
            let node = tree.node(id);
            for file in node.documents().values() {
                errors.extend(self.validate_file(tree, node, file));
            }
        }
        errors
    }

    /// Check a single document against the tree.
    pub fn validate_file(
        &self,
        tree: &NamespaceTree,
        node: &NamespaceNode,
        file: &PolicyFile,
    ) -> ErrorSet {
        let mut errors = ErrorSet::new();
        let path = file.path();

        if file.document.data.is_none() {
            errors.push(DocumentError::MissingData {
                path: path.to_path_buf(),
            });
            return errors;
        }

        let rulesets = file.document.rulesets();
        if rulesets.is_empty() {
            tracing::info!(path = %path.display(), "there are no network rulesets in file");
        } else {
            tracing::info!(path = %path.display(), "processing network rulesets in file");
            for ruleset in rulesets {
                self.check_rules(tree, RuleKind::Outgoing, &ruleset.outgoing_rules, path, &mut errors);
                self.check_rules(tree, RuleKind::Incoming, &ruleset.incoming_rules, path, &mut errors);
            }
        }

        let expected = node.document_label(file.file_name());
        if file.document.label != expected {
            errors.push(LabelMismatchError {
                file: path.to_path_buf(),
                found: file.document.label.clone(),
                expected,
            });
        }

        errors
    }

    fn check_rules(
        &self,
        tree: &NamespaceTree,
        rule_kind: RuleKind,
        rules: &[Rule],
        path: &Path,
        errors: &mut ErrorSet,
    ) {
        for rule in rules {
            if rule.object.is_empty() {
                tracing::info!(path = %path.display(), rule_kind = %rule_kind, "rule has no objects");
                continue;
            }
            for object in &rule.object {
                match resolve(tree, &object.namespace_ref()) {
                    Resolution::Resolved(_) => {}
                    Resolution::MissingTag { level } => errors.push(ReferenceError::MissingTag {
                        rule_kind,
                        level,
                        file: path.to_path_buf(),
                    }),
                    Resolution::UnknownNamespace { level, namespace } => {
                        errors.push(ReferenceError::UnknownNamespace {
                            rule_kind,
                            level,
                            file: path.to_path_buf(),
                            namespace,
                        })
                    }
                }
            }
        }
    }
}
