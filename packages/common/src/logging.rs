//! Structured logging infrastructure
//!
//! Provides env_logger-based logging with secure handling of sensitive data.
//! Library crates emit `tracing` events; with the `log` feature enabled on
//! `tracing` those events reach the logger installed here.

use log::{debug, error, info, warn};
use sha2::{Digest, Sha256};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Logging entry points shared by the hashjwt crates
pub struct LoggingTransformer;

impl LoggingTransformer {
    /// Initialize logging system (call once at application startup)
    ///
    /// Configure levels via the `RUST_LOG` environment variable:
    /// - `RUST_LOG=debug` - every issuance is logged
    /// - `RUST_LOG=warn` - only degraded input and weak secrets
    /// - `RUST_LOG=hashjwt=debug` - module-specific levels
    pub fn init() {
        INIT_LOGGER.call_once(|| {
            env_logger::Builder::from_default_env()
                .format_timestamp_micros()
                .init();

            info!("Structured logging initialized");
        });
    }

    /// Initialize logging for test environments
    ///
    /// Safe to call from every test; later calls are ignored.
    pub fn init_test() {
        let _ = env_logger::Builder::from_default_env()
            .is_test(true)
            .try_init();
    }

    /// Log a token issuance without exposing the token or secret
    ///
    /// The key id is fingerprinted: it is opaque caller data and may itself
    /// carry something the caller considers private.
    pub fn log_issuance(algorithm: &str, key_id: Option<&str>, success: bool) {
        let kid = key_id.map_or_else(|| "none".to_string(), Self::fingerprint);
        if success {
            debug!("Token issued: alg={algorithm} kid={kid}");
        } else {
            warn!("Token issuance failed: alg={algorithm} kid={kid}");
        }
    }

    /// Secure logging of cryptographic errors
    ///
    /// Logs the error type only; decode errors can echo secret characters.
    pub fn log_crypto_error<E: std::error::Error>(operation: &str, _error: &E) {
        error!(
            "Cryptographic operation failed: {} (error_type: {})",
            operation,
            std::any::type_name::<E>()
        );
    }

    /// Short SHA-256 fingerprint for correlating values in logs
    ///
    /// Returns `#` followed by the first 12 hex characters of the digest.
    #[must_use]
    pub fn fingerprint(value: &str) -> String {
        let hash = Sha256::digest(value.as_bytes());
        let hex_hash = format!("{hash:x}");
        format!("#{}", &hex_hash[..12])
    }
}
