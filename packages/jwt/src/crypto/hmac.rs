//! HMAC-SHA2 signing for JWT compact serialization

use crate::error::{JwtError, JwtResult};
use digest::{core_api::BlockSizeUser, Digest};
use hmac::{Mac, SimpleHmac};
use sha2::{Sha256, Sha384, Sha512};

/// Generic HMAC over any block-based SHA-2 digest
///
/// HMAC accepts keys of any length (including empty); short keys are padded
/// and long keys hashed per RFC 2104.
fn hmac_sign<D>(message: &[u8], secret: &[u8]) -> JwtResult<Vec<u8>>
where
    D: Digest + BlockSizeUser,
{
    let mut mac = SimpleHmac::<D>::new_from_slice(secret)
        .map_err(|_| JwtError::internal("HMAC rejected key"))?;
    mac.update(message);
    Ok(mac.finalize().into_bytes().to_vec())
}

/// Sign with HMAC-SHA256 (HS256)
#[inline]
pub(crate) fn sign_hs256(message: &[u8], secret: &[u8]) -> JwtResult<Vec<u8>> {
    hmac_sign::<Sha256>(message, secret)
}

/// Sign with HMAC-SHA384 (HS384)
#[inline]
pub(crate) fn sign_hs384(message: &[u8], secret: &[u8]) -> JwtResult<Vec<u8>> {
    hmac_sign::<Sha384>(message, secret)
}

/// Sign with HMAC-SHA512 (HS512)
#[inline]
pub(crate) fn sign_hs512(message: &[u8], secret: &[u8]) -> JwtResult<Vec<u8>> {
    hmac_sign::<Sha512>(message, secret)
}
