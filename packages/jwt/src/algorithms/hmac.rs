//! HMAC-based JWT Algorithm Implementations
//!
//! HMAC-SHA algorithms (HS256, HS384, HS512) for JWT signing and verification.

use super::utils::{base64_url_encode, constant_time_eq};
use super::HashWidth;
use crate::error::{JwtError, JwtResult};
use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha384, Sha512};

type HmacSha256 = Hmac<Sha256>;
type HmacSha384 = Hmac<Sha384>;
type HmacSha512 = Hmac<Sha512>;

fn mac<M: Mac + KeyInit>(message: &[u8], secret: &[u8]) -> JwtResult<Vec<u8>> {
    let mut mac = <M as KeyInit>::new_from_slice(secret)
        .map_err(|_| JwtError::invalid_key("Invalid HMAC key"))?;
    mac.update(message);
    Ok(mac.finalize().into_bytes().to_vec())
}

/// Keyed hash of `message` at the given SHA-2 width
pub(crate) fn sign(width: HashWidth, message: &[u8], secret: &[u8]) -> JwtResult<Vec<u8>> {
    match width {
        HashWidth::Sha256 => mac::<HmacSha256>(message, secret),
        HashWidth::Sha384 => mac::<HmacSha384>(message, secret),
        HashWidth::Sha512 => mac::<HmacSha512>(message, secret),
    }
}

/// Recompute the MAC and compare its base64url text against a normalized
/// signature segment in constant time
pub(crate) fn verify(
    width: HashWidth,
    message: &[u8],
    signature_segment: &str,
    secret: &[u8],
) -> JwtResult<bool> {
    let expected = base64_url_encode(&sign(width, message, secret)?);
    Ok(constant_time_eq(
        expected.as_bytes(),
        signature_segment.as_bytes(),
    ))
}
