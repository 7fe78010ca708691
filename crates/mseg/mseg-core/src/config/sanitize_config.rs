//! Sanitizer configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_RESTORE_SCRIPT;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SanitizeConfig {
    /// Restore script written at the tree root. Default: `restore.sh`.
    pub restore_script: Option<String>,
}

impl SanitizeConfig {
    pub fn effective_restore_script(&self) -> &str {
        self.restore_script
            .as_deref()
            .unwrap_or(DEFAULT_RESTORE_SCRIPT)
    }
}
