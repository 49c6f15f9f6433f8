//! Supported HMAC signing algorithms
//!
//! The set is closed: every variant maps to a hash function at compile time,
//! so the engine can never meet an algorithm it does not know how to sign.

use crate::crypto::hmac::{sign_hs256, sign_hs384, sign_hs512};
use crate::error::{JwtResult, ValidationError};
use std::fmt;
use std::str::FromStr;

/// HMAC JWT signing algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    /// HMAC using SHA-256
    Hs256,
    /// HMAC using SHA-384
    Hs384,
    /// HMAC using SHA-512
    #[default]
    Hs512,
}

/// Signing-method names that are recognized but rejected, because they
/// belong to the asymmetric (or unsigned) families.
pub(crate) const NON_HMAC_METHODS: &[&str] = &[
    "RS256", "RS384", "RS512", "PS256", "PS384", "PS512", "ES256", "ES384", "ES512", "EdDSA",
    "none",
];

impl Algorithm {
    /// All supported algorithms
    pub const ALL: [Algorithm; 3] = [Algorithm::Hs256, Algorithm::Hs384, Algorithm::Hs512];

    /// JOSE `alg` header value
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Hs256 => "HS256",
            Algorithm::Hs384 => "HS384",
            Algorithm::Hs512 => "HS512",
        }
    }

    /// Signature length in bytes, which is also the recommended minimum secret length
    #[must_use]
    pub const fn output_size(self) -> usize {
        match self {
            Algorithm::Hs256 => 32,
            Algorithm::Hs384 => 48,
            Algorithm::Hs512 => 64,
        }
    }

    /// Compute the MAC of `message` under `secret`
    pub(crate) fn sign(self, message: &[u8], secret: &[u8]) -> JwtResult<Vec<u8>> {
        match self {
            Algorithm::Hs256 => sign_hs256(message, secret),
            Algorithm::Hs384 => sign_hs384(message, secret),
            Algorithm::Hs512 => sign_hs512(message, secret),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ValidationError;

    /// Names are case-sensitive, as in the JOSE registry.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HS256" => Ok(Algorithm::Hs256),
            "HS384" => Ok(Algorithm::Hs384),
            "HS512" => Ok(Algorithm::Hs512),
            other if NON_HMAC_METHODS.contains(&other) => {
                Err(ValidationError::AsymmetricAlgorithm {
                    name: other.to_string(),
                })
            }
            other => Err(ValidationError::UnsupportedAlgorithm {
                name: other.to_string(),
            }),
        }
    }
}
