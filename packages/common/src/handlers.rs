//! Default handler functions for result processing
//!
//! These provide the `on_result` and `on_error` symbols the builders accept
//! when the caller has no handler of their own.

/// Default result handler: logs completion and passes the value through
pub fn on_result<T>(result: T) -> T {
    tracing::debug!("Operation completed");
    result
}

/// Default error handler: logs the error and passes it through
pub fn on_error<T: std::fmt::Display>(error: T) -> T {
    tracing::warn!("Error occurred: {error}");
    error
}
