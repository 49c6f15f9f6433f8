//! HMAC-signed JSON Web Token issuance
//!
//! Issues compact `HS256`/`HS384`/`HS512` tokens from a caller-supplied
//! claims document and secret, and returns the canonical claims JSON as a
//! stable identifier of the issuance. Three entry points share one engine:
//!
//! - [`issue`] over a typed [`SigningRequest`]
//! - [`HashedTokenConfig::from_value`] for loosely-typed field maps
//! - [`HashedToken::builder`] for fluent construction, sync or async
//!
//! Malformed claims do not fail issuance: an empty claim set is signed and a
//! [`Diagnostic`] is attached to the result.

pub mod algorithms;
pub mod api;
pub(crate) mod canonical;
pub mod claims;
pub mod config;
pub(crate) mod crypto;
pub mod encoding;
pub mod engine;
mod error;
pub mod request;
pub mod schema;
mod types;
pub mod validation;

pub use algorithms::Algorithm;
pub use api::{
    AsyncJwtResult, AsyncJwtResultWithError, HashedToken, HashedTokenBuilder,
    HashedTokenBuilderWithError, HashedTokenBuilderWithHandler,
};
pub use claims::{decode_claims, ClaimSet};
pub use config::HashedTokenConfig;
pub use encoding::SecretEncoding;
pub use engine::issue;
pub use error::*;
pub use request::SigningRequest;
pub use types::*;
pub use validation::{validate_encoding_type, validate_hashing_algorithm, ValidationOutcome};

// Re-export the shared handlers and logging setup
pub use hashjwt_common::{on_error, on_result, LoggingTransformer};
