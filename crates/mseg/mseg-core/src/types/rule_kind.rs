//! Which rule list a rule came from.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleKind {
    #[serde(rename = "IncomingRules")]
    Incoming,
    #[serde(rename = "OutgoingRules")]
    Outgoing,
}

impl RuleKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Incoming => "IncomingRules",
            Self::Outgoing => "OutgoingRules",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
