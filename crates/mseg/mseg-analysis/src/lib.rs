//! # mseg-analysis
//!
//! Loads a microsegmentation policy tree from disk and runs the two passes
//! over it.
//!
//! ## Passes
//! 1. **Sanitize**: rewrite subjects and labels from directory position,
//!    archiving originals and emitting a restore script
//! 2. **Validate**: rule objects must resolve to existing namespaces and
//!    labels must match their location
//!
//! Both passes accumulate every independent problem into one `ErrorSet`.

pub mod demo;
pub mod model;
pub mod report;
pub mod sanitizer;
pub mod tags;
pub mod tree;
pub mod validator;

pub use model::PolicyDocument;
pub use report::{create_reporter, Reporter};
pub use sanitizer::{RestoreLedger, Sanitizer};
pub use tags::{NamespaceRef, Tag, TagGroup};
pub use tree::{NamespaceNode, NamespaceTree, NodeId, PolicyFile, TreeLoader};
pub use validator::Validator;
