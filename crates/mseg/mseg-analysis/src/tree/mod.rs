//! Namespace tree: an in-memory mirror of the policy directory hierarchy.
//!
//! Nodes live in an arena owned by [`NamespaceTree`]; parent/child links and the
//! root lookup are plain [`NodeId`]s, so no node owns another except through the
//! arena.

pub mod loader;
pub mod namespace_tree;
pub mod node;

pub use loader::TreeLoader;
pub use namespace_tree::NamespaceTree;
pub use node::{NamespaceNode, NodeId, PolicyFile};
