//! Typed issuance request

use crate::algorithms::Algorithm;
use crate::encoding::SecretEncoding;
use secrecy::SecretString;

/// Everything needed to issue one token
///
/// Built once per issuance, after boundary validation, and consumed by
/// [`crate::issue`]. The secret is redacted from `Debug`.
#[derive(Debug)]
pub struct SigningRequest {
    /// HMAC algorithm
    pub algorithm: Algorithm,
    /// Secret as supplied by the caller, before decoding
    pub secret: SecretString,
    /// How `secret` is turned into key bytes
    pub secret_encoding: SecretEncoding,
    /// Claims as a JSON object document
    pub claims_json: String,
    /// Optional key id; empty is treated as absent
    pub key_id: Option<String>,
}

impl SigningRequest {
    /// Request with a raw secret and no key id
    #[must_use]
    pub fn new(algorithm: Algorithm, secret: &str, claims_json: impl Into<String>) -> Self {
        Self {
            algorithm,
            secret: SecretString::from(secret),
            secret_encoding: SecretEncoding::Raw,
            claims_json: claims_json.into(),
            key_id: None,
        }
    }

    /// Set the secret encoding
    #[must_use]
    pub fn with_secret_encoding(mut self, encoding: SecretEncoding) -> Self {
        self.secret_encoding = encoding;
        self
    }

    /// Set the key id placed in the header
    #[must_use]
    pub fn with_key_id(mut self, kid: impl Into<String>) -> Self {
        self.key_id = Some(kid.into());
        self
    }
}
