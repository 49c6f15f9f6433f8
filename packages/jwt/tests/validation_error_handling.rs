//! Boundary validation: rejected inputs never reach the engine

use hashjwt::{validate_encoding_type, validate_hashing_algorithm, HashedToken, JwtError, ValidationError};
use serde_json::json;

#[test]
fn test_asymmetric_algorithms_point_elsewhere() {
    for name in ["RS256", "PS384", "ES512", "EdDSA", "none"] {
        let outcome = validate_hashing_algorithm(&json!(name), "algorithm");
        assert!(outcome.warnings.is_empty());
        let err = outcome.into_result().expect_err("asymmetric names are rejected");
        assert_eq!(
            err,
            ValidationError::AsymmetricAlgorithm {
                name: name.to_string()
            }
        );
        assert!(err.to_string().contains("asymmetric"), "{err}");
    }
}

#[test]
fn test_unknown_algorithm_lists_choices() {
    let err = validate_hashing_algorithm(&json!("HS1024"), "algorithm")
        .into_result()
        .expect_err("unknown names are rejected");
    assert_eq!(
        err.to_string(),
        "HS1024 is not a supported signing algorithm; choices are HS256, HS384, HS512"
    );
}

#[test]
fn test_algorithm_names_are_case_sensitive() {
    assert!(!validate_hashing_algorithm(&json!("hs256"), "algorithm").is_ok());
}

#[test]
fn test_non_string_values() {
    for value in [json!(256), json!(null), json!(["HS256"]), json!({"alg": "HS256"})] {
        let err = validate_hashing_algorithm(&value, "alg_field")
            .into_result()
            .expect_err("non-strings are rejected");
        assert_eq!(err.to_string(), "alg_field must be a string");
    }
    let err = validate_encoding_type(&json!(true), "enc")
        .into_result()
        .expect_err("non-strings are rejected");
    assert_eq!(err.to_string(), "enc must be a string");
}

#[test]
fn test_unsupported_encoding() {
    let err = validate_encoding_type(&json!("utf16"), "secret_encoding")
        .into_result()
        .expect_err("utf16 is rejected");
    assert_eq!(
        err.to_string(),
        "utf16 is not a supported encoding type; choices are raw, base64, hex"
    );
}

#[test]
fn test_builder_rejects_before_signing() {
    let err = HashedToken::builder()
        .with_algorithm("RS256")
        .with_secret("whatever")
        .with_claims_json(r#"{"a":"b"}"#)
        .issue()
        .expect_err("RS256 is rejected");
    assert!(err.is_validation());

    let err = HashedToken::builder()
        .with_secret_encoding("utf16")
        .with_secret("whatever")
        .with_claims_json(r#"{"a":"b"}"#)
        .issue()
        .expect_err("utf16 is rejected");
    assert!(matches!(
        err,
        JwtError::Validation(ValidationError::UnsupportedEncoding { .. })
    ));
}
