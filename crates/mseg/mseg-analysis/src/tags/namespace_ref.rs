//! The tenant → cloud → group → kubernetes chain carried by a tag-group or a node.

use mseg_core::types::NamespaceLevel;

use super::Tag;

/// Names along the namespace chain. `None` means unset; an empty tag value
/// also reads as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamespaceRef {
    pub tenant: Option<String>,
    pub cloud: Option<String>,
    pub group: Option<String>,
    pub kubernetes: Option<String>,
}

impl NamespaceRef {
    pub fn get(&self, level: NamespaceLevel) -> Option<&str> {
        match level {
            NamespaceLevel::Root => None,
            NamespaceLevel::Tenant => self.tenant.as_deref(),
            NamespaceLevel::Cloud => self.cloud.as_deref(),
            NamespaceLevel::Group => self.group.as_deref(),
            NamespaceLevel::Kubernetes => self.kubernetes.as_deref(),
        }
    }

    /// Set the name for `level`; an empty name clears it. Root has no slot.
    pub fn set(&mut self, level: NamespaceLevel, name: &str) {
        let value = (!name.is_empty()).then(|| name.to_string());
        match level {
            NamespaceLevel::Root => {}
            NamespaceLevel::Tenant => self.tenant = value,
            NamespaceLevel::Cloud => self.cloud = value,
            NamespaceLevel::Group => self.group = value,
            NamespaceLevel::Kubernetes => self.kubernetes = value,
        }
    }

    /// Fold recognized tags into a chain; later occurrences of a key win.
    pub fn from_tags<'a, I>(tags: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut chain = Self::default();
        for raw in tags {
            let tag = Tag::parse(raw);
            if let Some(level) = level_for_key(tag.key) {
                chain.set(level, tag.value);
            }
        }
        chain
    }

    /// The deepest level that carries a name, `None` if nothing is set.
    pub fn deepest_level(&self) -> Option<NamespaceLevel> {
        NamespaceLevel::CHAIN
            .iter()
            .rev()
            .copied()
            .find(|level| self.get(*level).is_some())
    }

    /// `@org:<key>=<value>` tags for tenant down to and including `level`.
    /// Unset names render with an empty value.
    pub fn chain_tags(&self, level: NamespaceLevel) -> Vec<String> {
        NamespaceLevel::CHAIN
            .iter()
            .take_while(|l| **l <= level)
            .filter_map(|l| {
                l.tag_key()
                    .map(|key| Tag::render(key, self.get(*l).unwrap_or_default()))
            })
            .collect()
    }
}

fn level_for_key(key: &str) -> Option<NamespaceLevel> {
    NamespaceLevel::CHAIN
        .iter()
        .copied()
        .find(|level| level.tag_key() == Some(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_write_wins() {
        let chain = NamespaceRef::from_tags([
            "@org:group=first",
            "app=x",
            "@org:group=trash",
            "@org:tenant=T1",
        ]);
        assert_eq!(chain.group.as_deref(), Some("trash"));
        assert_eq!(chain.tenant.as_deref(), Some("T1"));
        assert_eq!(chain.cloud, None);
    }

    #[test]
    fn test_empty_value_clears() {
        let chain = NamespaceRef::from_tags(["@org:tenant=T1", "@org:tenant="]);
        assert_eq!(chain.tenant, None);
    }

    #[test]
    fn test_deepest_level_ignores_gaps() {
        let chain = NamespaceRef::from_tags(["@org:tenant=T1", "@org:group=G1"]);
        assert_eq!(chain.deepest_level(), Some(NamespaceLevel::Group));
        assert_eq!(NamespaceRef::default().deepest_level(), None);
    }

    #[test]
    fn test_chain_tags_stop_at_level() {
        let mut chain = NamespaceRef::default();
        chain.set(NamespaceLevel::Tenant, "T1");
        chain.set(NamespaceLevel::Cloud, "C1");
        chain.set(NamespaceLevel::Group, "G1");
        assert_eq!(
            chain.chain_tags(NamespaceLevel::Cloud),
            vec!["@org:tenant=T1", "@org:cloudaccount=C1"]
        );
        assert!(chain.chain_tags(NamespaceLevel::Root).is_empty());
    }
}
