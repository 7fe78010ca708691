//! Top-level policy document.

use serde::{Deserialize, Serialize};

use super::{null_as_default, ApiAuthorizationPolicy, ExternalNetwork, NetworkRuleSetPolicy};

/// API version written into generated documents.
pub const POLICY_API_VERSION: i64 = 0;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolicyDocument {
    /// Must equal the owning namespace label + `:` + file name.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub label: String,
    #[serde(rename = "apiVersion", alias = "APIVersion", default)]
    pub api_version: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<PolicyData>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub identities: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolicyData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub apiauthorizationpolicies: Vec<ApiAuthorizationPolicy>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub externalnetworks: Vec<ExternalNetwork>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub networkrulesetpolicies: Vec<NetworkRuleSetPolicy>,
}

impl PolicyDocument {
    /// A document with an empty `data` section.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            api_version: POLICY_API_VERSION,
            data: Some(PolicyData::default()),
            identities: Vec::new(),
        }
    }

    pub fn with_ruleset(mut self, ruleset: NetworkRuleSetPolicy) -> Self {
        self.data
            .get_or_insert_with(PolicyData::default)
            .networkrulesetpolicies
            .push(ruleset);
        self
    }

    pub fn rulesets(&self) -> &[NetworkRuleSetPolicy] {
        self.data
            .as_ref()
            .map(|d| d.networkrulesetpolicies.as_slice())
            .unwrap_or_default()
    }
}
