//! Policy document model: the YAML schema read from and written to the tree.
//!
//! Only subjects, rule objects, and the label carry semantics here; every other
//! field is kept so that a rewritten document loses nothing.

pub mod action;
pub mod codec;
pub mod document;
pub mod policies;
pub mod rule;

pub use action::TrafficAction;
pub use document::{PolicyData, PolicyDocument, POLICY_API_VERSION};
pub use policies::{ApiAuthorizationPolicy, ExternalNetwork, NetworkRuleSetPolicy};
pub use rule::Rule;

use serde::{Deserialize, Deserializer};

/// Treat an explicit YAML `null` like a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
