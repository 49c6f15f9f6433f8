//! Builder API over the issuance engine

pub mod async_result;
pub mod builder;

pub use async_result::{AsyncJwtResult, AsyncJwtResultWithError};
pub use builder::{
    HashedToken, HashedTokenBuilder, HashedTokenBuilderWithError, HashedTokenBuilderWithHandler,
};
