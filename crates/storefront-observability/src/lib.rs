//! Observability for the storefront client.
//!
//! This crate provides:
//! - `LoggingConfig` - Log filter and output format
//! - `init_logging` - Global `tracing` subscriber setup

mod logging;

pub use logging::*;
