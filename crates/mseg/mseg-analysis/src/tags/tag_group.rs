//! An ordered set of tags, serialized as a plain string list.

use serde::{Deserialize, Serialize};

use super::{NamespaceRef, Tag};

/// One subject or object tag-group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagGroup(Vec<String>);

impl TagGroup {
    pub fn new(tags: Vec<String>) -> Self {
        Self(tags)
    }

    pub fn tags(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = Tag<'_>> {
        self.0.iter().map(|raw| Tag::parse(raw))
    }

    /// The namespace chain this group points at.
    pub fn namespace_ref(&self) -> NamespaceRef {
        NamespaceRef::from_tags(self.0.iter().map(String::as_str))
    }

    /// Tags that are not namespace-identity tags, in their original order.
    pub fn non_org_tags(&self) -> impl Iterator<Item = &str> {
        self.0
            .iter()
            .map(String::as_str)
            .filter(|raw| !Tag::parse(raw).is_org())
    }
}

impl<S: Into<String>> FromIterator<S> for TagGroup {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
