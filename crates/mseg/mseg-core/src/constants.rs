//! Fixed names and defaults shared across the workspace.

/// Prefix carried by every namespace-identity tag.
pub const ORG_TAG_PREFIX: &str = "@org:";

pub const TENANT_TAG_KEY: &str = "@org:tenant";
pub const CLOUD_TAG_KEY: &str = "@org:cloudaccount";
pub const GROUP_TAG_KEY: &str = "@org:group";
pub const KUBERNETES_TAG_KEY: &str = "@org:kubernetes";

/// Directory the sanitizer moves original documents into.
pub const DEFAULT_ARCHIVE_DIR: &str = ".original";

/// Script written at the tree root after a sanitize pass that archived anything.
pub const DEFAULT_RESTORE_SCRIPT: &str = "restore.sh";

/// Policy file extensions recognized by default (no leading dot).
pub const DEFAULT_POLICY_EXTENSIONS: [&str; 2] = ["yml", "yaml"];

/// Project config file looked up in the policy root.
pub const PROJECT_CONFIG_FILE: &str = "mseg.toml";

/// Environment variable holding the tracing filter.
pub const LOG_ENV_VAR: &str = "MSEG_LOG";
