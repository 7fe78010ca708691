//! Error handling for mseg.
//! One error enum per concern, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod document_error;
pub mod error_code;
pub mod error_set;
pub mod fs_error;
pub mod label_error;
pub mod lint_error;
pub mod reference_error;
pub mod structural_error;

pub use config_error::ConfigError;
pub use document_error::DocumentError;
pub use error_code::LintErrorCode;
pub use error_set::{ErrorSet, PassResult};
pub use fs_error::FsError;
pub use label_error::LabelMismatchError;
pub use lint_error::LintError;
pub use reference_error::ReferenceError;
pub use structural_error::StructuralError;
