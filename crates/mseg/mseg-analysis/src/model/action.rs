//! Traffic actions a rule can take.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrafficAction {
    Allow,
    Reject,
    /// Inherit the behaviour of the parent namespace.
    Inherit,
    Undefined,
}

impl TrafficAction {
    pub fn name(self) -> &'static str {
        match self {
            Self::Allow => "Allow",
            Self::Reject => "Reject",
            Self::Inherit => "Inherit",
            Self::Undefined => "Undefined",
        }
    }
}

impl FromStr for TrafficAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ALLOW" => Ok(Self::Allow),
            "REJECT" => Ok(Self::Reject),
            "INHERIT" => Ok(Self::Inherit),
            "UNDEFINED" => Ok(Self::Undefined),
            _ => Err(format!("string {s} is not a valid traffic action")),
        }
    }
}

impl fmt::Display for TrafficAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
