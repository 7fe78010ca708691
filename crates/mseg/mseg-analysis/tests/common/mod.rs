//! Shared fixtures for mseg-analysis integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use mseg_analysis::model::{codec, NetworkRuleSetPolicy, PolicyDocument, Rule, TrafficAction};
use mseg_analysis::TagGroup;

/// Build a tag-group from string literals.
pub fn group(tags: &[&str]) -> TagGroup {
    tags.iter().copied().collect()
}

/// Create `rel` under `root` (and any missing parents).
pub fn mkdirs(root: &Path, rel: &str) {
    fs::create_dir_all(root.join(rel)).expect("create dirs");
}

/// Document with one ruleset whose subject and outgoing objects are given.
pub fn policy(label: &str, subject: Vec<TagGroup>, outgoing: Vec<TagGroup>) -> PolicyDocument {
    let mut ruleset = NetworkRuleSetPolicy::new("ruleset1");
    ruleset.subject = subject;
    if !outgoing.is_empty() {
        ruleset.outgoing_rules = vec![Rule::new(TrafficAction::Allow, outgoing)];
    }
    PolicyDocument::new(label).with_ruleset(ruleset)
}

/// Write `document` to `root/rel`, creating parent directories.
pub fn write_policy(root: &Path, rel: &str, document: &PolicyDocument) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent");
    }
    codec::write(&path, document).expect("write policy");
}

/// Full `@org:` chain tags for up to four names.
pub fn chain(names: &[&str]) -> Vec<String> {
    let keys = ["tenant", "cloudaccount", "group", "kubernetes"];
    keys.iter()
        .zip(names)
        .map(|(k, v)| format!("@org:{k}={v}"))
        .collect()
}
