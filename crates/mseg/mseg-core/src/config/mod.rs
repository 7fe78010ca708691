//! Configuration system for mseg.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod mseg_config;
pub mod report_config;
pub mod sanitize_config;
pub mod scan_config;

pub use mseg_config::{CliOverrides, MsegConfig};
pub use report_config::{ReportConfig, ReportFormat};
pub use sanitize_config::SanitizeConfig;
pub use scan_config::ScanConfig;
