//! Tree nodes and the policy files attached to them.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use mseg_core::types::NamespaceLevel;

use crate::model::PolicyDocument;
use crate::tags::NamespaceRef;

/// Stable index of a node inside its [`NamespaceTree`](super::NamespaceTree).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

/// One namespace, backed 1:1 by a directory.
#[derive(Debug, Clone)]
pub struct NamespaceNode {
    pub(crate) id: NodeId,
    pub(crate) parent: Option<NodeId>,
    pub(crate) level: NamespaceLevel,
    pub(crate) name: String,
    /// Ancestor names, each set once its level has been entered.
    pub(crate) identity: NamespaceRef,
    pub(crate) label: String,
    pub(crate) path: PathBuf,
    /// `/`-joined path relative to the tree root; empty for the root.
    pub(crate) rpath: String,
    pub(crate) children: BTreeMap<String, NodeId>,
    pub(crate) documents: BTreeMap<String, PolicyFile>,
}

impl NamespaceNode {
    pub(crate) fn root(path: PathBuf) -> Self {
        Self {
            id: NodeId(0),
            parent: None,
            level: NamespaceLevel::Root,
            name: String::new(),
            identity: NamespaceRef::default(),
            label: String::new(),
            path,
            rpath: String::new(),
            children: BTreeMap::new(),
            documents: BTreeMap::new(),
        }
    }

    /// A node for directory `name` one level below `parent`.
    /// Returns `None` when `parent` is already at the leaf level.
    pub(crate) fn child_of(parent: &NamespaceNode, id: NodeId, name: &str) -> Option<Self> {
        let level = parent.level.child()?;
        let mut identity = parent.identity.clone();
        identity.set(level, name);

        Some(Self {
            id,
            parent: Some(parent.id),
            level,
            name: name.to_string(),
            identity,
            label: join_nonempty(&parent.label, ":", name),
            path: parent.path.join(name),
            rpath: join_nonempty(&parent.rpath, "/", name),
            children: BTreeMap::new(),
            documents: BTreeMap::new(),
        })
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn level(&self) -> NamespaceLevel {
        self.level
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn identity(&self) -> &NamespaceRef {
        &self.identity
    }

    pub fn tenant(&self) -> Option<&str> {
        self.identity.tenant.as_deref()
    }

    pub fn cloud(&self) -> Option<&str> {
        self.identity.cloud.as_deref()
    }

    pub fn group(&self) -> Option<&str> {
        self.identity.group.as_deref()
    }

    pub fn kubernetes(&self) -> Option<&str> {
        self.identity.kubernetes.as_deref()
    }

    /// Colon-joined ancestor chain including this node; empty for the root.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn rpath(&self) -> &str {
        &self.rpath
    }

    pub fn children(&self) -> &BTreeMap<String, NodeId> {
        &self.children
    }

    pub fn child(&self, name: &str) -> Option<NodeId> {
        self.children.get(name).copied()
    }

    pub fn documents(&self) -> &BTreeMap<String, PolicyFile> {
        &self.documents
    }

    pub fn document(&self, file_name: &str) -> Option<&PolicyFile> {
        self.documents.get(file_name)
    }

    /// The label a document named `file_name` must carry at this node.
    pub fn document_label(&self, file_name: &str) -> String {
        format!("{}:{}", self.label, file_name)
    }

    /// `@org:` tags a subject at this node must carry.
    pub fn canonical_subject_tags(&self) -> Vec<String> {
        self.identity.chain_tags(self.level)
    }

    /// Attach a decoded document found directly in this directory.
    pub(crate) fn attach(&mut self, file_name: &str, document: PolicyDocument) {
        let file = PolicyFile {
            file_name: file_name.to_string(),
            path: self.path.join(file_name),
            rpath: join_nonempty(&self.rpath, "/", file_name),
            label: self.document_label(file_name),
            document,
        };
        self.documents.insert(file_name.to_string(), file);
    }
}

/// A policy document plus where it lives in the tree.
#[derive(Debug, Clone)]
pub struct PolicyFile {
    pub(crate) file_name: String,
    pub(crate) path: PathBuf,
    pub(crate) rpath: String,
    /// Canonical label derived from the owning node.
    pub(crate) label: String,
    pub document: PolicyDocument,
}

impl PolicyFile {
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn rpath(&self) -> &str {
        &self.rpath
    }

    pub fn canonical_label(&self) -> &str {
        &self.label
    }
}

fn join_nonempty(base: &str, sep: &str, name: &str) -> String {
    if base.is_empty() {
        name.to_string()
    } else {
        format!("{base}{sep}{name}")
    }
}
