//! Arena owning every node of one loaded tree.

use std::path::{Path, PathBuf};

use super::node::{NamespaceNode, NodeId, PolicyFile};

#[derive(Debug, Clone)]
pub struct NamespaceTree {
    nodes: Vec<NamespaceNode>,
}

impl NamespaceTree {
    /// A tree holding only the root node for `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            nodes: vec![NamespaceNode::root(path.into())],
        }
    }

    pub fn root_id(&self) -> NodeId {
        NodeId(0)
    }

    pub fn root(&self) -> &NamespaceNode {
        &self.nodes[0]
    }

    pub fn root_path(&self) -> &Path {
        self.root().path()
    }

    pub fn node(&self, id: NodeId) -> &NamespaceNode {
        &self.nodes[id.0]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut NamespaceNode {
        &mut self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Create the child `name` under `parent`, or return the existing one.
    /// `None` when `parent` is a kubernetes-level node.
    pub fn add_child(&mut self, parent: NodeId, name: &str) -> Option<NodeId> {
        if let Some(existing) = self.node(parent).child(name) {
            return Some(existing);
        }
        let id = NodeId(self.nodes.len());
        let child = NamespaceNode::child_of(self.node(parent), id, name)?;
        self.nodes.push(child);
        self.node_mut(parent).children.insert(name.to_string(), id);
        Some(id)
    }

    pub fn child(&self, parent: NodeId, name: &str) -> Option<NodeId> {
        self.node(parent).child(name)
    }

    /// Follow `names` down from the root.
    pub fn find(&self, names: &[&str]) -> Option<NodeId> {
        names
            .iter()
            .try_fold(self.root_id(), |id, name| self.child(id, name))
    }

    /// Node ids with every parent before its children; siblings by name.
    pub fn pre_order(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![self.root_id()];
        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(self.node(id).children.values().rev().copied());
        }
        order
    }

    pub fn nodes(&self) -> impl Iterator<Item = &NamespaceNode> {
        self.nodes.iter()
    }

    /// Every policy file, paired with its owning node.
    pub fn documents(&self) -> impl Iterator<Item = (&NamespaceNode, &PolicyFile)> {
        self.nodes
            .iter()
            .flat_map(|node| node.documents.values().map(move |file| (node, file)))
    }

    pub fn document_count(&self) -> usize {
        self.nodes.iter().map(|n| n.documents.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mseg_core::types::NamespaceLevel;

    fn sample() -> NamespaceTree {
        let mut tree = NamespaceTree::new("root");
        let t1 = tree.add_child(tree.root_id(), "T1").unwrap();
        let c1 = tree.add_child(t1, "C1").unwrap();
        let g1 = tree.add_child(c1, "G1").unwrap();
        tree.add_child(g1, "K1").unwrap();
        tree.add_child(t1, "C0").unwrap();
        tree
    }

    #[test]
    fn test_levels_and_labels_follow_depth() {
        let tree = sample();
        let k1 = tree.find(&["T1", "C1", "G1", "K1"]).unwrap();
        let node = tree.node(k1);
        assert_eq!(node.level(), NamespaceLevel::Kubernetes);
        assert_eq!(node.label(), "T1:C1:G1:K1");
        assert_eq!(node.rpath(), "T1/C1/G1/K1");
        assert_eq!(node.path(), Path::new("root/T1/C1/G1/K1"));
        assert_eq!(node.tenant(), Some("T1"));
        assert_eq!(node.group(), Some("G1"));
        assert_eq!(node.document_label("p.yaml"), "T1:C1:G1:K1:p.yaml");
    }

    #[test]
    fn test_leaf_cannot_have_children() {
        let mut tree = sample();
        let k1 = tree.find(&["T1", "C1", "G1", "K1"]).unwrap();
        assert!(tree.add_child(k1, "deeper").is_none());
    }

    #[test]
    fn test_add_child_is_idempotent() {
        let mut tree = sample();
        let before = tree.len();
        let t1 = tree.find(&["T1"]).unwrap();
        assert_eq!(tree.add_child(tree.root_id(), "T1"), Some(t1));
        assert_eq!(tree.len(), before);
    }

    #[test]
    fn test_pre_order_visits_parents_first() {
        let tree = sample();
        let labels: Vec<_> = tree
            .pre_order()
            .into_iter()
            .map(|id| tree.node(id).label().to_string())
            .collect();
        assert_eq!(
            labels,
            vec!["", "T1", "T1:C0", "T1:C1", "T1:C1:G1", "T1:C1:G1:K1"]
        );
    }

    #[test]
    fn test_canonical_subject_tags_per_level() {
        let tree = sample();
        let c1 = tree.find(&["T1", "C1"]).unwrap();
        assert_eq!(
            tree.node(c1).canonical_subject_tags(),
            vec!["@org:tenant=T1", "@org:cloudaccount=C1"]
        );
    }
}
