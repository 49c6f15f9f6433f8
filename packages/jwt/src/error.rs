//! Error types for hashed-token issuance

use thiserror::Error;

/// Issuance result type
pub type JwtResult<T> = Result<T, JwtError>;

/// Errors surfaced by the issuance path
#[derive(Debug, Error)]
pub enum JwtError {
    /// Input rejected at the boundary, before any signing attempt
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Secret could not be decoded with the requested encoding
    #[error(transparent)]
    SecretDecode(#[from] SecretDecodeError),

    /// Request could not be resolved to a signing configuration
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Header or claims segment could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl JwtError {
    /// Create a configuration error
    #[inline]
    #[must_use]
    pub fn configuration(msg: &str) -> Self {
        JwtError::Configuration(msg.to_string())
    }

    /// Create a serialization error
    #[inline]
    #[must_use]
    pub fn serialization(msg: &str) -> Self {
        JwtError::Serialization(msg.to_string())
    }

    /// Create an internal error
    #[inline]
    #[must_use]
    pub fn internal(msg: &str) -> Self {
        JwtError::Internal(msg.to_string())
    }

    /// True when the caller supplied bad input, as opposed to a failure while signing
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, JwtError::Validation(_))
    }
}

/// Boundary validation failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Field present but not a string
    #[error("{key} must be a string")]
    NotAString {
        /// Field name
        key: String,
    },

    /// Required field absent
    #[error("{key} is required")]
    MissingField {
        /// Field name
        key: String,
    },

    /// Name is not a known signing method
    #[error("{name} is not a supported signing algorithm; choices are HS256, HS384, HS512")]
    UnsupportedAlgorithm {
        /// Requested algorithm name
        name: String,
    },

    /// Known signing method outside the HMAC family
    #[error(
        "{name} is an asymmetric signing algorithm; for RSA/ECDSA signing use a signed-token issuer instead"
    )]
    AsymmetricAlgorithm {
        /// Requested algorithm name
        name: String,
    },

    /// Secret encoding outside the supported set
    #[error("{name} is not a supported encoding type; choices are raw, base64, hex")]
    UnsupportedEncoding {
        /// Requested encoding name
        name: String,
    },
}

/// Secret decoding failures, surfaced verbatim from the decoder
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SecretDecodeError {
    /// Malformed standard base64
    #[error("secret is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Malformed hexadecimal
    #[error("secret is not valid hex: {0}")]
    Hex(#[from] hex::FromHexError),
}
