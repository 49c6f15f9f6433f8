//! Token issuance engine
//!
//! Pure and stateless: a request goes in, a signed compact token and its
//! canonical identifier come out. Safe to call concurrently.

use crate::canonical::{to_canonical_string, to_canonical_vec};
use crate::claims::decode_claims_lenient;
use crate::error::{JwtError, JwtResult};
use crate::request::SigningRequest;
use crate::types::{Diagnostic, IssuedToken, JwtHeader};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use hashjwt_common::LoggingTransformer;
use secrecy::{ExposeSecret, SecretString};

/// Issue a signed token for `request`
///
/// A `null` claims document is signed as `null` and yields the identifier
/// `null`. Malformed claims and an unencodable identifier degrade to empty
/// values and are reported through [`IssuedToken::diagnostics`]. A secret
/// that does not decode aborts issuance; no unsigned token is ever returned.
///
/// # Errors
/// Returns `JwtError::SecretDecode` when the secret is not valid for its
/// encoding, or `JwtError::Serialization` if a segment cannot be encoded.
pub fn issue(request: &SigningRequest) -> JwtResult<IssuedToken> {
    let algorithm = request.algorithm;
    let mut diagnostics = Vec::new();

    let claims = decode_claims_lenient(&request.claims_json, &mut diagnostics);
    let header = JwtHeader::new(algorithm).with_key_id(request.key_id.as_deref());

    let secret = match request
        .secret_encoding
        .decode(request.secret.expose_secret())
    {
        Ok(secret) => secret,
        Err(e) => {
            LoggingTransformer::log_crypto_error("secret decode", &e);
            LoggingTransformer::log_issuance(algorithm.name(), header.kid.as_deref(), false);
            return Err(e.into());
        }
    };

    if secret.len() < algorithm.output_size() {
        tracing::warn!(
            algorithm = algorithm.name(),
            length = secret.len(),
            "HMAC secret is shorter than the hash output"
        );
        diagnostics.push(Diagnostic::ShortSecret {
            algorithm,
            length: secret.len(),
            recommended: algorithm.output_size(),
        });
    }

    let header_json =
        to_canonical_vec(&header).map_err(|e| JwtError::serialization(&e.to_string()))?;
    let claims_json =
        to_canonical_vec(&claims).map_err(|e| JwtError::serialization(&e.to_string()))?;

    let signing_input = format!(
        "{}.{}",
        URL_SAFE_NO_PAD.encode(header_json),
        URL_SAFE_NO_PAD.encode(claims_json)
    );
    let signature = algorithm.sign(signing_input.as_bytes(), &secret)?;
    let token = SecretString::from(format!(
        "{signing_input}.{}",
        URL_SAFE_NO_PAD.encode(signature)
    ));

    let id = match to_canonical_string(&claims) {
        Ok(id) => id,
        Err(e) => {
            tracing::warn!(error = %e, "claims identifier could not be encoded, leaving it empty");
            diagnostics.push(Diagnostic::IdentifierMarshalFailed {
                reason: e.to_string(),
            });
            String::new()
        }
    };

    LoggingTransformer::log_issuance(algorithm.name(), header.kid.as_deref(), true);
    tracing::debug!(
        algorithm = algorithm.name(),
        claims = claims.as_ref().map_or(0, |c| c.len()),
        diagnostics = diagnostics.len(),
        "issued hashed token"
    );

    Ok(IssuedToken::new(token, id, header, diagnostics))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::Algorithm;
    use crate::encoding::SecretEncoding;

    #[test]
    fn test_null_claims_signed_as_null() {
        let issued = issue(&SigningRequest::new(Algorithm::Hs512, "k", "null")).unwrap();
        assert_eq!(issued.id(), "null");
        assert_eq!(issued.expose_token().split('.').nth(1), Some("bnVsbA"));
        assert!(!issued.is_degraded());
    }

    #[test]
    fn test_short_secret_is_flagged_but_signed() {
        let request = SigningRequest::new(Algorithm::Hs256, "short", r#"{"a":"b"}"#);
        let issued = issue(&request).unwrap();
        assert_eq!(
            issued.diagnostics(),
            &[Diagnostic::ShortSecret {
                algorithm: Algorithm::Hs256,
                length: 5,
                recommended: 32,
            }]
        );
        assert!(!issued.is_degraded());
    }

    #[test]
    fn test_long_secret_has_no_diagnostics() {
        let secret = "k".repeat(64);
        let request = SigningRequest::new(Algorithm::Hs512, &secret, r#"{"a":"b"}"#);
        assert!(issue(&request).unwrap().diagnostics().is_empty());
    }

    #[test]
    fn test_bad_hex_secret_aborts() {
        let request = SigningRequest::new(Algorithm::Hs256, "xyz", "{}")
            .with_secret_encoding(SecretEncoding::Hex);
        assert!(matches!(issue(&request), Err(JwtError::SecretDecode(_))));
    }

    #[test]
    fn test_empty_kid_is_omitted() {
        let request = SigningRequest::new(Algorithm::Hs256, "secret", "{}").with_key_id("");
        let issued = issue(&request).unwrap();
        assert_eq!(issued.header().kid, None);
        assert!(issued.expose_token().starts_with("eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9."));
    }
}
