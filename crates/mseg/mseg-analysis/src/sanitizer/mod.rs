//! Sanitizer: forces every document's subject and label to match its position
//! in the tree, archiving originals and recording how to undo each rewrite.

pub mod ledger;

use std::path::Path;

use mseg_core::config::MsegConfig;
use mseg_core::constants::{DEFAULT_ARCHIVE_DIR, DEFAULT_RESTORE_SCRIPT};
use mseg_core::errors::{ErrorSet, FsError, LintError, PassResult};
use mseg_core::types::NamespaceLevel;

use crate::model::{codec, PolicyDocument};
use crate::tags::TagGroup;
use crate::tree::{NamespaceNode, NamespaceTree, PolicyFile};

pub use ledger::{RestoreEntry, RestoreLedger, RESTORE_SCRIPT_HEADER};

#[derive(Debug, Clone)]
pub struct Sanitizer {
    archive_dir: String,
    restore_script: String,
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self {
            archive_dir: DEFAULT_ARCHIVE_DIR.to_string(),
            restore_script: DEFAULT_RESTORE_SCRIPT.to_string(),
        }
    }
}

impl Sanitizer {
    pub fn new(config: &MsegConfig) -> Self {
        Self {
            archive_dir: config.scan.effective_archive_dir().to_string(),
            restore_script: config.sanitize.effective_restore_script().to_string(),
        }
    }

    /// Sanitize the whole tree, root to leaves. Returns the ledger of archived
    /// documents; the restore script is written only if the ledger is non-empty.
    pub fn run(&self, tree: &mut NamespaceTree) -> PassResult<RestoreLedger> {
        let mut result = PassResult::new(RestoreLedger::new());

        for id in tree.pre_order() {
            let node = tree.node_mut(id);
            if node.level() == NamespaceLevel::Root {
                continue;
            }
            let errors = self.sanitize_node(node, &mut result.data);
            result.errors.extend(errors);
        }

        if !result.data.is_empty() {
            let script = tree.root_path().join(&self.restore_script);
            tracing::info!(path = %script.display(), "writing restore file");
            if let Err(e) = result.data.write_script(&script) {
                result.add_error(e);
            }
        }

        result
    }

    fn sanitize_node(&self, node: &mut NamespaceNode, ledger: &mut RestoreLedger) -> ErrorSet {
        let mut errors = ErrorSet::new();
        let chain = node.canonical_subject_tags();
        let archive_dir = node.path().join(&self.archive_dir);
        let archive_rpath = format!("{}/{}", node.rpath(), self.archive_dir);

        for file in node.documents.values_mut() {
            if let Err(e) = self.sanitize_file(file, &chain, &archive_dir, &archive_rpath, ledger)
            {
                errors.push(e);
            }
        }
        errors
    }

    fn sanitize_file(
        &self,
        file: &mut PolicyFile,
        chain: &[String],
        archive_dir: &Path,
        archive_rpath: &str,
        ledger: &mut RestoreLedger,
    ) -> Result<(), LintError> {
        let mut document = file.document.clone();
        let mut dirty = false;

        if rewrite_subjects(&mut document, chain) {
            tracing::info!(path = %file.path().display(), "tags updated in file");
            dirty = true;
        } else {
            tracing::debug!(path = %file.path().display(), "no changes to tags in file");
        }

        if document.label != file.label {
            tracing::info!(
                path = %file.path().display(),
                from = %document.label,
                to = %file.label,
                "label changed"
            );
            document.label = file.label.clone();
            dirty = true;
        } else {
            tracing::debug!(path = %file.path().display(), "no change to label in file");
        }

        if !dirty {
            tracing::debug!(path = %file.path().display(), "no change to file");
            return Ok(());
        }

        let text = codec::encode(file.path(), &document)?;

        std::fs::create_dir_all(archive_dir).map_err(|source| FsError::CreateDir {
            path: archive_dir.to_path_buf(),
            source,
        })?;

        let archived = archive_dir.join(file.file_name());
        std::fs::rename(file.path(), &archived).map_err(|source| FsError::Rename {
            from: file.path().to_path_buf(),
            to: archived.clone(),
            source,
        })?;
        ledger.record(
            format!("{archive_rpath}/{}", file.file_name()),
            file.rpath(),
        );

        std::fs::write(file.path(), text).map_err(|source| FsError::WriteFile {
            path: file.path().to_path_buf(),
            source,
        })?;

        // The tree only reflects what reached the disk.
        file.document = document;
        tracing::info!(path = %file.path().display(), "file updated");

        Ok(())
    }
}

/// Replace every ruleset's subject with one tag-group: the non-`@org:` tags of
/// all original groups, in order, followed by `chain`. Returns whether any
/// ruleset changed.
pub fn rewrite_subjects(document: &mut PolicyDocument, chain: &[String]) -> bool {
    let Some(data) = document.data.as_mut() else {
        return false;
    };

    let before = data.networkrulesetpolicies.clone();
    for ruleset in &mut data.networkrulesetpolicies {
        ruleset.subject = canonical_subject(&ruleset.subject, chain);
    }
    before != data.networkrulesetpolicies
}

/// The single subject tag-group a ruleset should carry.
pub fn canonical_subject(subject: &[TagGroup], chain: &[String]) -> Vec<TagGroup> {
    let tags: TagGroup = subject
        .iter()
        .flat_map(TagGroup::non_org_tags)
        .map(str::to_string)
        .chain(chain.iter().cloned())
        .collect();
    vec![tags]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NetworkRuleSetPolicy;

    fn group(tags: &[&str]) -> TagGroup {
        tags.iter().copied().collect()
    }

    fn chain() -> Vec<String> {
        vec!["@org:tenant=T1".into(), "@org:cloudaccount=C1".into()]
    }

    #[test]
    fn test_canonical_subject_merges_groups() {
        let subject = vec![
            group(&["app=db", "@org:tenant=bogus"]),
            group(&["@org:group=trash", "tier=back"]),
        ];
        let merged = canonical_subject(&subject, &chain());
        assert_eq!(merged.len(), 1);
        assert_eq!(
            merged[0].tags(),
            &["app=db", "tier=back", "@org:tenant=T1", "@org:cloudaccount=C1"]
        );
    }

    #[test]
    fn test_empty_subject_gets_chain() {
        let merged = canonical_subject(&[], &chain());
        assert_eq!(merged, vec![group(&["@org:tenant=T1", "@org:cloudaccount=C1"])]);
    }

    #[test]
    fn test_rewrite_reports_change_once() {
        let mut ruleset = NetworkRuleSetPolicy::new("r");
        ruleset.subject = vec![group(&["app=db"])];
        let mut doc = PolicyDocument::new("x").with_ruleset(ruleset);

        assert!(rewrite_subjects(&mut doc, &chain()));
        assert!(!rewrite_subjects(&mut doc, &chain()));
    }

    #[test]
    fn test_rewrite_without_data_is_noop() {
        let mut doc = PolicyDocument {
            data: None,
            ..Default::default()
        };
        assert!(!rewrite_subjects(&mut doc, &chain()));
    }
}
