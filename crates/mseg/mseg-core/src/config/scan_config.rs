//! Tree loading configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_ARCHIVE_DIR, DEFAULT_POLICY_EXTENSIONS};

/// Configuration for directory loading.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScanConfig {
    /// Policy file extensions, without the leading dot. Default: yml, yaml.
    pub extensions: Vec<String>,
    /// Sanitizer backup directory skipped while loading. Default: `.original`.
    pub archive_dir: Option<String>,
}

impl ScanConfig {
    pub fn effective_extensions(&self) -> Vec<String> {
        if self.extensions.is_empty() {
            DEFAULT_POLICY_EXTENSIONS
                .iter()
                .map(|s| s.to_string())
                .collect()
        } else {
            self.extensions.clone()
        }
    }

    pub fn effective_archive_dir(&self) -> &str {
        self.archive_dir.as_deref().unwrap_or(DEFAULT_ARCHIVE_DIR)
    }
}
