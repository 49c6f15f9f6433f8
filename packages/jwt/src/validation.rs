//! Boundary validators for loosely-typed configuration values
//!
//! Each validator is a pure predicate over a JSON value and the name of the
//! field it came from. They run before any signing is attempted.

use crate::algorithms::Algorithm;
use crate::encoding::SecretEncoding;
use crate::error::ValidationError;
use serde_json::Value;

/// Warnings and errors produced by a validator
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationOutcome {
    /// Advisory messages; the current validators never produce any
    pub warnings: Vec<String>,
    /// Reasons the value was rejected
    pub errors: Vec<ValidationError>,
}

impl ValidationOutcome {
    fn rejected(error: ValidationError) -> Self {
        Self {
            warnings: Vec::new(),
            errors: vec![error],
        }
    }

    /// True when no errors were produced
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// First error, if any
    ///
    /// # Errors
    /// Returns the first recorded `ValidationError`.
    pub fn into_result(self) -> Result<(), ValidationError> {
        match self.errors.into_iter().next() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

fn as_str<'a>(value: &'a Value, key: &str) -> Result<&'a str, ValidationError> {
    value.as_str().ok_or_else(|| ValidationError::NotAString {
        key: key.to_string(),
    })
}

/// Check that `value` names a supported HMAC signing algorithm
///
/// Asymmetric names (`RS256`, `ES384`, ...) are recognized and rejected with a
/// message pointing at asymmetric signing instead.
#[must_use]
pub fn validate_hashing_algorithm(value: &Value, key: &str) -> ValidationOutcome {
    match as_str(value, key).and_then(str::parse::<Algorithm>) {
        Ok(_) => ValidationOutcome::default(),
        Err(e) => ValidationOutcome::rejected(e),
    }
}

/// Check that `value` names a supported secret encoding
#[must_use]
pub fn validate_encoding_type(value: &Value, key: &str) -> ValidationOutcome {
    match as_str(value, key).and_then(str::parse::<SecretEncoding>) {
        Ok(_) => ValidationOutcome::default(),
        Err(e) => ValidationOutcome::rejected(e),
    }
}
