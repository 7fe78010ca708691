//! A single `key=value` tag.

use std::fmt;

use mseg_core::constants::ORG_TAG_PREFIX;

/// Borrowed view of one tag string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag<'a> {
    pub key: &'a str,
    pub value: &'a str,
}

impl<'a> Tag<'a> {
    /// Split on the first `=`. A tag without `=` has an empty value.
    pub fn parse(raw: &'a str) -> Self {
        match raw.split_once('=') {
            Some((key, value)) => Self { key, value },
            None => Self { key: raw, value: "" },
        }
    }

    /// Namespace-identity tags are owned by the sanitizer.
    pub fn is_org(&self) -> bool {
        self.key.starts_with(ORG_TAG_PREFIX)
    }

    /// Render `key=value`.
    pub fn render(key: &str, value: &str) -> String {
        format!("{key}={value}")
    }
}

impl fmt::Display for Tag<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}
