//! Top-down resolution of a namespace chain against the tree.

use std::path::PathBuf;

use mseg_core::types::NamespaceLevel;

use crate::tags::NamespaceRef;
use crate::tree::{NamespaceTree, NodeId};

/// Outcome of resolving one tag-group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Every level down to the deepest tagged one exists.
    Resolved(NodeId),
    /// A level above the deepest tagged one has no name.
    MissingTag { level: NamespaceLevel },
    /// The name at `level` is not a child of the level above.
    UnknownNamespace {
        level: NamespaceLevel,
        namespace: PathBuf,
    },
}

/// Walk tenant → cloud → group → kubernetes down to the deepest level the
/// chain names, stopping at the first gap. A chain with nothing set needs a
/// tenant.
pub fn resolve(tree: &NamespaceTree, chain: &NamespaceRef) -> Resolution {
    let deepest = chain.deepest_level().unwrap_or(NamespaceLevel::Tenant);
    let mut current = tree.root_id();
    let mut namespace = tree.root_path().to_path_buf();

    for level in NamespaceLevel::CHAIN.into_iter().take_while(|l| *l <= deepest) {
        let Some(name) = chain.get(level) else {
            return Resolution::MissingTag { level };
        };
        namespace.push(name);
        match tree.child(current, name) {
            Some(child) => current = child,
            None => return Resolution::UnknownNamespace { level, namespace },
        }
    }

    Resolution::Resolved(current)
}
