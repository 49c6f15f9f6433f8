//! Fluent builder for hashed tokens
//!
//! ```no_run
//! # fn main() -> hashjwt::JwtResult<()> {
//! let issued = hashjwt::HashedToken::builder()
//!     .with_algorithm("HS256")
//!     .with_secret("c2VjcmV0")
//!     .with_secret_encoding("base64")
//!     .with_key_id("primary")
//!     .with_claims_json(r#"{"sub":"svc"}"#)
//!     .issue()?;
//! println!("{}", issued.id());
//! # Ok(())
//! # }
//! ```

use super::async_result::{AsyncJwtResult, AsyncJwtResultWithError};
use crate::algorithms::Algorithm;
use crate::encoding::SecretEncoding;
use crate::engine;
use crate::error::{JwtError, JwtResult, ValidationError};
use crate::request::SigningRequest;
use crate::schema;
use crate::types::IssuedToken;
use secrecy::SecretString;
use tokio::sync::oneshot;

/// Entry point for the builder API
#[derive(Debug, Clone, Copy)]
pub struct HashedToken;

impl HashedToken {
    /// Start a new builder
    #[must_use]
    pub fn builder() -> HashedTokenBuilder {
        HashedTokenBuilder::new()
    }
}

/// Collects issuance inputs by name
///
/// Names are resolved when the token is issued, so an unsupported algorithm
/// or encoding surfaces as a `JwtError::Validation` from `issue`.
#[derive(Debug, Default)]
pub struct HashedTokenBuilder {
    algorithm: Option<String>,
    secret: Option<SecretString>,
    secret_encoding: Option<String>,
    claims_json: Option<String>,
    key_id: Option<String>,
}

impl HashedTokenBuilder {
    /// Create an empty builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set algorithm, `HS512` when unset
    #[inline]
    #[must_use]
    pub fn with_algorithm(mut self, algorithm: &str) -> Self {
        self.algorithm = Some(algorithm.to_string());
        self
    }

    /// Set the HMAC secret
    #[inline]
    #[must_use]
    pub fn with_secret(mut self, secret: &str) -> Self {
        self.secret = Some(SecretString::from(secret));
        self
    }

    /// Set secret encoding, `raw` when unset
    #[inline]
    #[must_use]
    pub fn with_secret_encoding(mut self, encoding: &str) -> Self {
        self.secret_encoding = Some(encoding.to_string());
        self
    }

    /// Set the claims document
    #[inline]
    #[must_use]
    pub fn with_claims_json(mut self, claims_json: impl Into<String>) -> Self {
        self.claims_json = Some(claims_json.into());
        self
    }

    /// Set the header key id
    #[inline]
    #[must_use]
    pub fn with_key_id(mut self, kid: &str) -> Self {
        self.key_id = Some(kid.to_string());
        self
    }

    /// Attach a handler that receives the result of `issue`
    pub fn on_result<F>(self, handler: F) -> HashedTokenBuilderWithHandler<F> {
        HashedTokenBuilderWithHandler {
            builder: self,
            handler,
        }
    }

    /// Attach a handler that may rewrite errors from `issue`
    pub fn on_error<E>(self, error_handler: E) -> HashedTokenBuilderWithError<E>
    where
        E: Fn(JwtError) -> JwtError,
    {
        HashedTokenBuilderWithError {
            builder: self,
            error_handler,
        }
    }

    /// Resolve names into a typed request without issuing
    ///
    /// # Errors
    /// Returns `JwtError::Validation` for a missing secret or claims document,
    /// or an unsupported algorithm or encoding.
    pub fn into_request(self) -> JwtResult<SigningRequest> {
        let algorithm = match self.algorithm {
            Some(name) => name.parse()?,
            None => Algorithm::default(),
        };
        let secret_encoding = match self.secret_encoding {
            Some(name) => name.parse()?,
            None => SecretEncoding::default(),
        };
        let secret = self.secret.ok_or_else(|| missing(schema::SECRET))?;
        let claims_json = self.claims_json.ok_or_else(|| missing(schema::CLAIMS_JSON))?;

        Ok(SigningRequest {
            algorithm,
            secret,
            secret_encoding,
            claims_json,
            key_id: self.key_id,
        })
    }

    /// Issue the token
    ///
    /// # Errors
    /// Returns validation errors for bad inputs and `JwtError::SecretDecode`
    /// when the secret does not decode.
    pub fn issue(self) -> JwtResult<IssuedToken> {
        match self.into_request().and_then(|request| engine::issue(&request)) {
            Ok(issued) => Ok(hashjwt_common::on_result(issued)),
            // Decoder messages quote secret characters; the engine already
            // logged the error type.
            Err(e @ JwtError::SecretDecode(_)) => Err(e),
            Err(e) => Err(hashjwt_common::on_error(e)),
        }
    }

    /// Issue the token on a Tokio task
    ///
    /// # Panics
    /// Panics when called outside a Tokio runtime.
    pub fn issue_async(self) -> AsyncJwtResult<IssuedToken> {
        AsyncJwtResult::new(spawn_issue(self))
    }
}

fn missing(key: &str) -> JwtError {
    ValidationError::MissingField {
        key: key.to_string(),
    }
    .into()
}

fn spawn_issue(builder: HashedTokenBuilder) -> oneshot::Receiver<JwtResult<IssuedToken>> {
    let (tx, rx) = oneshot::channel();
    tokio::spawn(async move {
        let _ = tx.send(builder.issue());
    });
    rx
}

/// Builder whose result is passed to a caller handler
pub struct HashedTokenBuilderWithHandler<F> {
    builder: HashedTokenBuilder,
    handler: F,
}

impl<F, T> HashedTokenBuilderWithHandler<F>
where
    F: FnOnce(JwtResult<IssuedToken>) -> T,
{
    /// Issue and hand the result to the handler
    pub fn issue(self) -> T {
        (self.handler)(self.builder.issue())
    }

    /// Issue on a Tokio task and hand the result to the handler
    ///
    /// # Panics
    /// Panics when called outside a Tokio runtime.
    pub async fn issue_async(self) -> T {
        let result = self.builder.issue_async().await;
        (self.handler)(result)
    }
}

/// Builder whose errors pass through a caller handler
pub struct HashedTokenBuilderWithError<E> {
    builder: HashedTokenBuilder,
    error_handler: E,
}

impl<E> HashedTokenBuilderWithError<E>
where
    E: Fn(JwtError) -> JwtError,
{
    /// Issue, rewriting any error with the handler
    ///
    /// # Errors
    /// Returns whatever the handler makes of the issuance error.
    pub fn issue(self) -> JwtResult<IssuedToken> {
        self.builder.issue().map_err(self.error_handler)
    }

    /// Issue on a Tokio task, rewriting any error with the handler
    ///
    /// # Panics
    /// Panics when called outside a Tokio runtime.
    pub fn issue_async(self) -> AsyncJwtResultWithError<IssuedToken, E>
    where
        E: Unpin,
    {
        AsyncJwtResultWithError::new(spawn_issue(self.builder), self.error_handler)
    }
}
