//! Observability for mseg.
//! `tracing` crate with `EnvFilter`, overridable through `MSEG_LOG`.

pub mod setup;

pub use setup::{default_filter, init_tracing};
