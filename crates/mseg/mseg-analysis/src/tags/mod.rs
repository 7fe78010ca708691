//! Tag codec: `key=value` strings, tag-groups, and the namespace chain they encode.
//!
//! Pure and stateless. Tags are kept as their original strings inside a
//! [`TagGroup`] so documents round-trip verbatim; parsing happens on demand.

pub mod namespace_ref;
pub mod tag;
pub mod tag_group;

pub use namespace_ref::NamespaceRef;
pub use tag::Tag;
pub use tag_group::TagGroup;
