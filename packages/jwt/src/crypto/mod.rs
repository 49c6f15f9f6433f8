//! JWT cryptographic operations

pub(crate) mod hmac;
