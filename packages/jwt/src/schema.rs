//! Field metadata for the hashed-token resource
//!
//! Describes the input and output fields accepted by
//! [`crate::HashedTokenConfig::from_value`] for documentation and tooling.

/// Metadata for one resource field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Field key
    pub name: &'static str,
    /// Must be supplied by the caller
    pub required: bool,
    /// Value used when the field is absent
    pub default: Option<&'static str>,
    /// Redacted from plans and logs
    pub sensitive: bool,
    /// Produced by issuance rather than supplied
    pub computed: bool,
    /// Human-readable description
    pub description: &'static str,
}

/// Field key of the signing algorithm
pub const ALGORITHM: &str = "algorithm";
/// Field key of the HMAC secret
pub const SECRET: &str = "secret";
/// Field key of the secret encoding
pub const SECRET_ENCODING: &str = "secret_encoding";
/// Field key of the claims document
pub const CLAIMS_JSON: &str = "claims_json";
/// Field key of the header key id
pub const KID: &str = "kid";
/// Field key of the issued token
pub const TOKEN: &str = "token";

/// All fields, inputs first
pub const FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: ALGORITHM,
        required: false,
        default: Some("HS512"),
        sensitive: false,
        computed: false,
        description: "Signing algorithm to use. Defaults to `HS512`. Supported algorithms are `HS256`, `HS384`, `HS512`.",
    },
    FieldSpec {
        name: SECRET,
        required: true,
        default: None,
        sensitive: true,
        computed: false,
        description: "HMAC secret to sign the JWT with.",
    },
    FieldSpec {
        name: SECRET_ENCODING,
        required: false,
        default: Some("raw"),
        sensitive: false,
        computed: false,
        description: "Secret encoding type. Defaults to `raw`. Supported encodings are `raw`, `base64`, `hex`.",
    },
    FieldSpec {
        name: CLAIMS_JSON,
        required: true,
        default: None,
        sensitive: false,
        computed: false,
        description: "The token's claims, as a JSON document.",
    },
    FieldSpec {
        name: KID,
        required: false,
        default: Some(""),
        sensitive: false,
        computed: false,
        description: "The kid claim in token header.",
    },
    FieldSpec {
        name: TOKEN,
        required: false,
        default: None,
        sensitive: true,
        computed: true,
        description: "The JWT token, as a string.",
    },
];

/// Look up a field by key
#[must_use]
pub fn field(name: &str) -> Option<&'static FieldSpec> {
    FIELDS.iter().find(|f| f.name == name)
}

/// Fields the caller supplies
pub fn inputs() -> impl Iterator<Item = &'static FieldSpec> {
    FIELDS.iter().filter(|f| !f.computed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_inputs() {
        let required: Vec<_> = inputs().filter(|f| f.required).map(|f| f.name).collect();
        assert_eq!(required, vec![SECRET, CLAIMS_JSON]);
    }

    #[test]
    fn test_sensitive_fields() {
        let sensitive: Vec<_> = FIELDS.iter().filter(|f| f.sensitive).map(|f| f.name).collect();
        assert_eq!(sensitive, vec![SECRET, TOKEN]);
    }

    #[test]
    fn test_lookup() {
        assert_eq!(field(ALGORITHM).and_then(|f| f.default), Some("HS512"));
        assert!(field("token").is_some_and(|f| f.computed));
        assert!(field("nope").is_none());
    }
}
