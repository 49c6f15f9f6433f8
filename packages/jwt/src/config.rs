//! Loosely-typed configuration boundary
//!
//! Callers usually hold the resource fields as a JSON map. This module checks
//! them once, applies defaults and turns them into a typed [`SigningRequest`].

use crate::algorithms::Algorithm;
use crate::encoding::SecretEncoding;
use crate::engine;
use crate::error::{JwtError, JwtResult, ValidationError};
use crate::request::SigningRequest;
use crate::schema;
use crate::types::IssuedToken;
use crate::validation::{validate_encoding_type, validate_hashing_algorithm};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Input fields of a hashed token
#[derive(Debug, Deserialize)]
pub struct HashedTokenConfig {
    /// Signing algorithm name
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
    /// HMAC secret
    #[serde(deserialize_with = "deserialize_secret")]
    pub secret: SecretString,
    /// Secret encoding name
    #[serde(default = "default_secret_encoding")]
    pub secret_encoding: String,
    /// Claims as a JSON document
    pub claims_json: String,
    /// Header key id, empty for none
    #[serde(default)]
    pub kid: String,
}

fn default_algorithm() -> String {
    Algorithm::default().name().to_string()
}

fn default_secret_encoding() -> String {
    SecretEncoding::default().name().to_string()
}

fn deserialize_secret<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(SecretString::from)
}

impl HashedTokenConfig {
    /// Build from a loosely-typed field map
    ///
    /// Fields are checked in declaration order and the first problem is
    /// returned. Null values count as absent. Unknown keys, including the
    /// computed `token`, are ignored.
    ///
    /// # Errors
    /// Returns `JwtError::Validation` for missing, mistyped or unsupported
    /// fields and `JwtError::Configuration` when `value` is not an object.
    pub fn from_value(value: &Value) -> JwtResult<Self> {
        let fields = value
            .as_object()
            .ok_or_else(|| JwtError::configuration("hashed token fields must be a JSON object"))?;

        let mut present = Map::new();
        for entry in schema::inputs() {
            let field = match fields.get(entry.name) {
                None | Some(Value::Null) if entry.required => {
                    return Err(ValidationError::MissingField {
                        key: entry.name.to_string(),
                    }
                    .into());
                }
                None | Some(Value::Null) => continue,
                Some(field) => field,
            };

            let outcome = match entry.name {
                schema::ALGORITHM => validate_hashing_algorithm(field, entry.name),
                schema::SECRET_ENCODING => validate_encoding_type(field, entry.name),
                _ if field.is_string() => Default::default(),
                _ => {
                    return Err(ValidationError::NotAString {
                        key: entry.name.to_string(),
                    }
                    .into());
                }
            };
            outcome.into_result()?;
            present.insert(entry.name.to_string(), field.clone());
        }

        serde_json::from_value(Value::Object(present))
            .map_err(|e| JwtError::configuration(&e.to_string()))
    }

    /// Resolve names into a typed request
    ///
    /// # Errors
    /// Returns `JwtError::Validation` for an unsupported algorithm or encoding.
    pub fn into_request(self) -> JwtResult<SigningRequest> {
        let algorithm: Algorithm = self.algorithm.parse()?;
        let secret_encoding: SecretEncoding = self.secret_encoding.parse()?;
        let key_id = (!self.kid.is_empty()).then_some(self.kid);

        Ok(SigningRequest {
            algorithm,
            secret: self.secret,
            secret_encoding,
            claims_json: self.claims_json,
            key_id,
        })
    }

    /// Validate and issue in one call
    ///
    /// # Errors
    /// Propagates validation and secret decoding failures.
    pub fn issue(self) -> JwtResult<IssuedToken> {
        engine::issue(&self.into_request()?)
    }

    /// Whether a secret was supplied; the value itself stays hidden
    #[must_use]
    pub fn has_secret(&self) -> bool {
        !self.secret.expose_secret().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults_applied() {
        let config =
            HashedTokenConfig::from_value(&json!({"secret": "s", "claims_json": "{}"})).unwrap();
        assert_eq!(config.algorithm, "HS512");
        assert_eq!(config.secret_encoding, "raw");
        assert_eq!(config.kid, "");
        assert!(config.has_secret());
    }

    #[test]
    fn test_null_counts_as_absent() {
        let config = HashedTokenConfig::from_value(
            &json!({"secret": "s", "claims_json": "{}", "algorithm": null, "kid": null}),
        )
        .unwrap();
        assert_eq!(config.algorithm, "HS512");

        let err = HashedTokenConfig::from_value(&json!({"secret": null, "claims_json": "{}"}))
            .unwrap_err();
        assert_eq!(err.to_string(), "secret is required");
    }

    #[test]
    fn test_first_problem_wins() {
        let err = HashedTokenConfig::from_value(
            &json!({"algorithm": "RS256", "secret_encoding": "utf16", "claims_json": "{}"}),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            JwtError::Validation(ValidationError::AsymmetricAlgorithm { .. })
        ));
    }

    #[test]
    fn test_non_string_kid_rejected() {
        let err = HashedTokenConfig::from_value(
            &json!({"secret": "s", "claims_json": "{}", "kid": 7}),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "kid must be a string");
    }

    #[test]
    fn test_not_an_object() {
        assert!(matches!(
            HashedTokenConfig::from_value(&json!(["secret"])),
            Err(JwtError::Configuration(_))
        ));
    }

    #[test]
    fn test_into_request_drops_empty_kid() {
        let request = HashedTokenConfig::from_value(&json!({
            "secret": "s", "claims_json": "{}", "secret_encoding": "hex", "kid": ""
        }))
        .unwrap()
        .into_request()
        .unwrap();
        assert_eq!(request.key_id, None);
        assert_eq!(request.secret_encoding, SecretEncoding::Hex);
        assert_eq!(request.algorithm, Algorithm::Hs512);
    }

    #[test]
    fn test_deserialized_config_still_validated() {
        let config: HashedTokenConfig = serde_json::from_value(
            json!({"algorithm": "HS1024", "secret": "s", "claims_json": "{}"}),
        )
        .unwrap();
        assert!(config.into_request().unwrap_err().is_validation());
    }
}
