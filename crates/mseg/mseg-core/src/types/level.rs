//! The fixed five-level namespace hierarchy.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Position of a namespace in the hierarchy. Determined solely by nesting depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamespaceLevel {
    Root,
    Tenant,
    Cloud,
    Group,
    Kubernetes,
}

impl NamespaceLevel {
    /// Levels below root, in chain order.
    pub const CHAIN: [NamespaceLevel; 4] = [
        NamespaceLevel::Tenant,
        NamespaceLevel::Cloud,
        NamespaceLevel::Group,
        NamespaceLevel::Kubernetes,
    ];

    /// The level one deeper, or `None` for kubernetes (the leaf).
    pub fn child(self) -> Option<NamespaceLevel> {
        match self {
            Self::Root => Some(Self::Tenant),
            Self::Tenant => Some(Self::Cloud),
            Self::Cloud => Some(Self::Group),
            Self::Group => Some(Self::Kubernetes),
            Self::Kubernetes => None,
        }
    }

    /// Distance from the root.
    pub fn depth(self) -> usize {
        match self {
            Self::Root => 0,
            Self::Tenant => 1,
            Self::Cloud => 2,
            Self::Group => 3,
            Self::Kubernetes => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Root => "root",
            Self::Tenant => "tenant",
            Self::Cloud => "cloud",
            Self::Group => "group",
            Self::Kubernetes => "kubernetes",
        }
    }

    /// The tag key identifying this level, `None` for root.
    pub fn tag_key(self) -> Option<&'static str> {
        match self {
            Self::Root => None,
            Self::Tenant => Some(crate::constants::TENANT_TAG_KEY),
            Self::Cloud => Some(crate::constants::CLOUD_TAG_KEY),
            Self::Group => Some(crate::constants::GROUP_TAG_KEY),
            Self::Kubernetes => Some(crate::constants::KUBERNETES_TAG_KEY),
        }
    }

    pub fn is_leaf(self) -> bool {
        self.child().is_none()
    }
}

impl fmt::Display for NamespaceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
