//! A single allow/reject rule inside a network ruleset.

use serde::{Deserialize, Serialize};

use super::{null_as_default, TrafficAction};
use crate::tags::TagGroup;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<TrafficAction>,
    #[serde(default)]
    pub logs_disabled: bool,
    /// Traffic counterparts this rule matches.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub object: Vec<TagGroup>,
    #[serde(default)]
    pub observation_enabled: bool,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub protocol_ports: Vec<String>,
}

impl Rule {
    pub fn new(action: TrafficAction, object: Vec<TagGroup>) -> Self {
        Self {
            action: Some(action),
            object,
            ..Default::default()
        }
    }
}
