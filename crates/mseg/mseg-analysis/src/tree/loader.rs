//! Builds a [`NamespaceTree`] from a directory, checking structure on the way down.

use std::fs;
use std::path::Path;

use mseg_core::config::ScanConfig;
use mseg_core::constants::{DEFAULT_ARCHIVE_DIR, DEFAULT_POLICY_EXTENSIONS};
use mseg_core::errors::{ErrorSet, FsError, PassResult, StructuralError};
use mseg_core::types::NamespaceLevel;

use super::{NamespaceTree, NodeId};
use crate::model::codec;

/// Directory scanner producing a namespace tree.
#[derive(Debug, Clone)]
pub struct TreeLoader {
    extensions: Vec<String>,
    archive_dir: String,
}

impl Default for TreeLoader {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_POLICY_EXTENSIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            archive_dir: DEFAULT_ARCHIVE_DIR.to_string(),
        }
    }
}

impl TreeLoader {
    pub fn new(config: &ScanConfig) -> Self {
        Self {
            extensions: config.effective_extensions(),
            archive_dir: config.effective_archive_dir().to_string(),
        }
    }

    /// Scan `root` recursively. The tree is returned even when errors were
    /// collected; a subtree whose directory cannot be read is left empty.
    pub fn load(&self, root: &Path) -> PassResult<NamespaceTree> {
        let mut result = PassResult::new(NamespaceTree::new(root));
        let root_id = result.data.root_id();
        let errors = self.read(&mut result.data, root_id);
        result.errors.extend(errors);

        tracing::debug!(
            root = %root.display(),
            namespaces = result.data.len(),
            documents = result.data.document_count(),
            errors = result.errors.len(),
            "tree loaded"
        );
        result
    }

    /// Whether `file_name` carries a policy-file extension.
    pub fn is_policy_file(&self, file_name: &str) -> bool {
        Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e == ext))
    }

    fn read(&self, tree: &mut NamespaceTree, id: NodeId) -> ErrorSet {
        let mut errors = ErrorSet::new();
        let dir = tree.node(id).path().to_path_buf();
        let level = tree.node(id).level();

        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(source) => {
                errors.push(FsError::ReadDir { path: dir, source });
                return errors;
            }
        };

        let mut entries: Vec<_> = entries
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(source) => {
                    errors.push(FsError::ReadDir {
                        path: dir.clone(),
                        source,
                    });
                    None
                }
            })
            .collect();
        entries.sort_by_key(|entry| entry.file_name());

        for entry in entries {
            let file_name = entry.file_name().to_string_lossy().into_owned();
            let path = entry.path();
            let is_dir = match entry.file_type() {
                Ok(file_type) => file_type.is_dir(),
                Err(source) => {
                    errors.push(FsError::ReadDir { path, source });
                    continue;
                }
            };

            if is_dir {
                if file_name == self.archive_dir {
                    tracing::debug!(path = %path.display(), "ignoring directory");
                    continue;
                }

                tracing::info!(path = %path.display(), "loading directory");

                let Some(child) = tree.add_child(id, &file_name) else {
                    errors.push(StructuralError::LeafHasChildren { path });
                    continue;
                };
                errors.extend(self.read(tree, child));
            } else if self.is_policy_file(&file_name) {
                if level == NamespaceLevel::Root {
                    tracing::warn!(path = %path.display(), "policy file should not exist in the root directory");
                    errors.push(StructuralError::PolicyFileInRoot { path });
                    continue;
                }

                tracing::info!(path = %path.display(), "ingesting file");
                match codec::read(&path) {
                    Ok(document) => tree.node_mut(id).attach(&file_name, document),
                    Err(e) => errors.push(e),
                }
            } else {
                tracing::debug!(path = %path.display(), "ignoring file");
            }
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_extension_match_is_exact() {
        let loader = TreeLoader::default();
        assert!(loader.is_policy_file("policy.yaml"));
        assert!(loader.is_policy_file("policy.yml"));
        assert!(!loader.is_policy_file("notes.txt"));
        assert!(!loader.is_policy_file("restore.sh"));
        assert!(!loader.is_policy_file("fakeyaml"));
    }

    #[test]
    fn test_configured_extensions() {
        let config = ScanConfig {
            extensions: vec!["json".into()],
            archive_dir: None,
        };
        let loader = TreeLoader::new(&config);
        assert!(loader.is_policy_file("p.json"));
        assert!(!loader.is_policy_file("p.yaml"));
    }
}
