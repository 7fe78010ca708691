//! mseg-core: shared foundation for the mseg policy-tree linter.
//!
//! - `errors`: one `thiserror` enum per concern plus the `ErrorSet` aggregator
//! - `config`: layered TOML configuration
//! - `tracing`: subscriber setup
//! - `types`: namespace levels and rule kinds shared by errors and analysis

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

pub use config::MsegConfig;
pub use errors::{ErrorSet, LintError, PassResult};
pub use types::{NamespaceLevel, RuleKind};
