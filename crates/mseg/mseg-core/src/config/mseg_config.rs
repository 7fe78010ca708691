//! Top-level mseg configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{ReportConfig, ReportFormat, SanitizeConfig, ScanConfig};
use crate::constants::PROJECT_CONFIG_FILE;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`MSEG_*`)
/// 3. Project config (`mseg.toml` in the policy root)
/// 4. User config (`~/.mseg/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MsegConfig {
    pub scan: ScanConfig,
    pub sanitize: SanitizeConfig,
    pub report: ReportConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub report_format: Option<ReportFormat>,
    pub report_color: Option<bool>,
}

impl MsegConfig {
    /// Load configuration for the policy tree at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Lowest priority: user config. An unreadable user file is not fatal.
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        ::tracing::warn!(error = %e, "ignoring user config");
                    }
                }
            }
        }

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config)?;

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &MsegConfig) -> Result<(), ConfigError> {
        for ext in &config.scan.extensions {
            if ext.is_empty() || ext.starts_with('.') || ext.contains(['/', '\\']) {
                return Err(ConfigError::ValidationFailed {
                    field: "scan.extensions".to_string(),
                    message: format!("'{ext}' must be a bare extension such as 'yaml'"),
                });
            }
        }
        if let Some(ref dir) = config.scan.archive_dir {
            check_plain_name("scan.archive_dir", dir)?;
        }
        if let Some(ref script) = config.sanitize.restore_script {
            check_plain_name("sanitize.restore_script", script)?;
        }
        Ok(())
    }

    /// Returns the user config path: `~/.mseg/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".mseg").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut MsegConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: MsegConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it sets a value.
    fn merge(base: &mut MsegConfig, other: &MsegConfig) {
        if !other.scan.extensions.is_empty() {
            base.scan.extensions = other.scan.extensions.clone();
        }
        if other.scan.archive_dir.is_some() {
            base.scan.archive_dir = other.scan.archive_dir.clone();
        }
        if other.sanitize.restore_script.is_some() {
            base.sanitize.restore_script = other.sanitize.restore_script.clone();
        }
        if other.report.format.is_some() {
            base.report.format = other.report.format;
        }
        if other.report.color.is_some() {
            base.report.color = other.report.color;
        }
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(config: &mut MsegConfig) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("MSEG_SCAN_EXTENSIONS") {
            let extensions: Vec<String> = val
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
            if !extensions.is_empty() {
                config.scan.extensions = extensions;
            }
        }
        if let Ok(val) = std::env::var("MSEG_REPORT_FORMAT") {
            let format = val
                .parse::<ReportFormat>()
                .map_err(|message| ConfigError::ValidationFailed {
                    field: "MSEG_REPORT_FORMAT".to_string(),
                    message,
                })?;
            config.report.format = Some(format);
        }
        if let Ok(val) = std::env::var("MSEG_REPORT_COLOR") {
            if let Ok(v) = val.parse::<bool>() {
                config.report.color = Some(v);
            }
        }
        Ok(())
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut MsegConfig, cli: &CliOverrides) {
        if let Some(v) = cli.report_format {
            config.report.format = Some(v);
        }
        if let Some(v) = cli.report_color {
            config.report.color = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn check_plain_name(field: &str, value: &str) -> Result<(), ConfigError> {
    if value.is_empty() || value == "." || value == ".." || value.contains(['/', '\\']) {
        return Err(ConfigError::ValidationFailed {
            field: field.to_string(),
            message: format!("'{value}' must be a plain file name"),
        });
    }
    Ok(())
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
