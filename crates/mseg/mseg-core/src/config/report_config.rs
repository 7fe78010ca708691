//! Report rendering configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Console,
    Json,
}

impl ReportFormat {
    pub fn name(self) -> &'static str {
        match self {
            Self::Console => "console",
            Self::Json => "json",
        }
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "console" => Ok(Self::Console),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown report format '{other}' (expected console or json)")),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ReportConfig {
    /// Output format. Default: console.
    pub format: Option<ReportFormat>,
    /// ANSI color in console output. Default: true.
    pub color: Option<bool>,
}

impl ReportConfig {
    pub fn effective_format(&self) -> ReportFormat {
        self.format.unwrap_or_default()
    }

    pub fn effective_color(&self) -> bool {
        self.color.unwrap_or(true)
    }
}
