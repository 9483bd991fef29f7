//! Observability setup.
//! `tracing` crate with `EnvFilter`, per-module log levels, text or JSON output.

pub mod setup;

pub use setup::{init_tracing, init_tracing_with_format, LogFormat};
