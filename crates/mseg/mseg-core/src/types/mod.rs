//! Small domain types shared by errors and the analysis crate.

pub mod level;
pub mod rule_kind;

pub use level::NamespaceLevel;
pub use rule_kind::RuleKind;
