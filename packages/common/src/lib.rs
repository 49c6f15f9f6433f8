//! Common infrastructure for the hashjwt crates
//!
//! This crate provides shared functionality used across the workspace:
//! - Logging setup with fingerprinting of sensitive values
//! - Default result and error handlers for the fluent builders

pub mod handlers;
pub mod logging;

pub use handlers::{on_error, on_result};
pub use logging::LoggingTransformer;
