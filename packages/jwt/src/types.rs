//! Token header, issued token and diagnostics

use crate::algorithms::Algorithm;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use std::fmt;

/// JOSE header of an issued token
///
/// Field order is the serialized key order: `alg`, `kid`, `typ`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JwtHeader {
    /// Algorithm name
    pub alg: &'static str,
    /// Key id, present only when the caller supplied a non-empty one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kid: Option<String>,
    /// Always `JWT`
    pub typ: &'static str,
}

impl JwtHeader {
    /// Header for `algorithm` without a key id
    #[must_use]
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            alg: algorithm.name(),
            kid: None,
            typ: "JWT",
        }
    }

    /// Attach a key id; `None` and empty strings leave the header unchanged
    #[must_use]
    pub fn with_key_id(mut self, kid: Option<&str>) -> Self {
        self.kid = kid.filter(|k| !k.is_empty()).map(str::to_string);
        self
    }
}

/// Non-fatal conditions observed while issuing a token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// Claims text was not a JSON object; an empty claim set was signed
    ClaimsDecodeFailed {
        /// Decoder message
        reason: String,
    },
    /// Claims were decoded after rewriting lone surrogate escapes or
    /// out-of-range numbers; the other claims are signed unchanged
    ClaimsRepaired {
        /// Strict decoder message
        reason: String,
    },
    /// Canonical identifier could not be produced; the identifier is empty
    IdentifierMarshalFailed {
        /// Encoder message
        reason: String,
    },
    /// Decoded secret is shorter than the hash output
    ShortSecret {
        /// Signing algorithm
        algorithm: Algorithm,
        /// Decoded secret length in bytes
        length: usize,
        /// Recommended minimum in bytes
        recommended: usize,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::ClaimsDecodeFailed { reason } => {
                write!(f, "claims_json could not be decoded, signed empty claims: {reason}")
            }
            Diagnostic::ClaimsRepaired { reason } => {
                write!(f, "claims_json was repaired before signing: {reason}")
            }
            Diagnostic::IdentifierMarshalFailed { reason } => {
                write!(f, "claims identifier could not be encoded, left empty: {reason}")
            }
            Diagnostic::ShortSecret {
                algorithm,
                length,
                recommended,
            } => write!(
                f,
                "{algorithm} secret is {length} bytes, at least {recommended} recommended"
            ),
        }
    }
}

/// Result of a successful issuance
///
/// The compact token is sensitive; it is redacted from `Debug` and only
/// readable through [`IssuedToken::expose_token`].
#[derive(Debug)]
pub struct IssuedToken {
    token: SecretString,
    id: String,
    header: JwtHeader,
    diagnostics: Vec<Diagnostic>,
}

impl IssuedToken {
    pub(crate) fn new(
        token: SecretString,
        id: String,
        header: JwtHeader,
        diagnostics: Vec<Diagnostic>,
    ) -> Self {
        Self {
            token,
            id,
            header,
            diagnostics,
        }
    }

    /// Compact serialization `header.claims.signature`
    #[must_use]
    pub fn expose_token(&self) -> &str {
        self.token.expose_secret()
    }

    /// Compact serialization, still wrapped as a secret
    #[must_use]
    pub fn token(&self) -> &SecretString {
        &self.token
    }

    /// Canonical claims JSON, used as the stable identifier of the issuance
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Header that was signed
    #[must_use]
    pub fn header(&self) -> &JwtHeader {
        &self.header
    }

    /// Non-fatal conditions observed during issuance
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// True when claims or identifier fell back to empty values
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        self.diagnostics.iter().any(|d| {
            matches!(
                d,
                Diagnostic::ClaimsDecodeFailed { .. } | Diagnostic::IdentifierMarshalFailed { .. }
            )
        })
    }

    /// Split into the output fields handed back to the caller for storage
    #[must_use]
    pub fn into_outputs(self) -> IssuedOutputs {
        IssuedOutputs {
            id: self.id,
            token: self.token,
        }
    }
}

/// Output fields persisted by the caller
#[derive(Debug)]
pub struct IssuedOutputs {
    /// Canonical claims JSON
    pub id: String,
    /// Compact token, sensitive
    pub token: SecretString,
}
