//! JWT signing algorithms
//!
//! The acceptable set is closed: three HMAC widths over a shared secret and
//! three RSA PKCS#1 v1.5 widths over an [`RsaKey`]. Every call site matches the
//! variants exhaustively.

mod hmac;
mod rsa;
pub(crate) mod utils;

pub use self::rsa::RsaKey;

use crate::error::{JwtError, JwtResult};
use std::fmt;

/// Header identifier used when a token carries no signature
pub const NONE_ALGORITHM: &str = "none";

/// SHA-2 strength bound to an algorithm variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashWidth {
    /// SHA-256
    Sha256,
    /// SHA-384
    Sha384,
    /// SHA-512
    Sha512,
}

/// Key material handed to [`Algorithm::from_name`]
#[derive(Clone, Copy)]
pub enum AlgorithmKey<'k> {
    /// Shared secret for the HS* family
    Secret(&'k [u8]),
    /// RSA key for the RS* family
    Rsa(&'k RsaKey),
}

/// Signing algorithm bound to caller-owned key material.
///
/// The algorithm only borrows its key; the caller controls the key's
/// lifetime and storage.
#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Algorithm<'k> {
    /// HMAC using SHA-256
    HS256(&'k [u8]),
    /// HMAC using SHA-384
    HS384(&'k [u8]),
    /// HMAC using SHA-512
    HS512(&'k [u8]),
    /// RSASSA-PKCS1-v1_5 using SHA-256
    RS256(&'k RsaKey),
    /// RSASSA-PKCS1-v1_5 using SHA-384
    RS384(&'k RsaKey),
    /// RSASSA-PKCS1-v1_5 using SHA-512
    RS512(&'k RsaKey),
}

impl<'k> Algorithm<'k> {
    /// Build a variant from its `alg` header identifier.
    ///
    /// # Errors
    /// - `JwtError::UnsupportedAlgorithm` for any name outside the six
    ///   supported ones, including `"none"`
    /// - `JwtError::InvalidKey` when the key family does not fit the name
    pub fn from_name(name: &str, key: AlgorithmKey<'k>) -> JwtResult<Self> {
        match (name, key) {
            ("HS256", AlgorithmKey::Secret(secret)) => Ok(Algorithm::HS256(secret)),
            ("HS384", AlgorithmKey::Secret(secret)) => Ok(Algorithm::HS384(secret)),
            ("HS512", AlgorithmKey::Secret(secret)) => Ok(Algorithm::HS512(secret)),
            ("RS256", AlgorithmKey::Rsa(key)) => Ok(Algorithm::RS256(key)),
            ("RS384", AlgorithmKey::Rsa(key)) => Ok(Algorithm::RS384(key)),
            ("RS512", AlgorithmKey::Rsa(key)) => Ok(Algorithm::RS512(key)),
            ("HS256" | "HS384" | "HS512", AlgorithmKey::Rsa(_)) => Err(JwtError::invalid_key(
                format!("{name} requires a shared secret, not an RSA key"),
            )),
            ("RS256" | "RS384" | "RS512", AlgorithmKey::Secret(_)) => Err(
                JwtError::invalid_key(format!("{name} requires an RSA key, not a shared secret")),
            ),
            _ => Err(JwtError::unsupported_algorithm(name)),
        }
    }

    /// `alg` header identifier
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::HS256(_) => "HS256",
            Algorithm::HS384(_) => "HS384",
            Algorithm::HS512(_) => "HS512",
            Algorithm::RS256(_) => "RS256",
            Algorithm::RS384(_) => "RS384",
            Algorithm::RS512(_) => "RS512",
        }
    }

    /// Digest strength of this variant
    #[must_use]
    pub fn hash_width(&self) -> HashWidth {
        match self {
            Algorithm::HS256(_) | Algorithm::RS256(_) => HashWidth::Sha256,
            Algorithm::HS384(_) | Algorithm::RS384(_) => HashWidth::Sha384,
            Algorithm::HS512(_) | Algorithm::RS512(_) => HashWidth::Sha512,
        }
    }

    /// Produce the raw signature (or MAC) over `message`.
    ///
    /// # Errors
    /// Returns `JwtError::SigningError` if an RSA variant holds only a public
    /// key or the provider rejects the key.
    pub fn sign(&self, message: &[u8]) -> JwtResult<Vec<u8>> {
        let width = self.hash_width();
        match self {
            Algorithm::HS256(secret) | Algorithm::HS384(secret) | Algorithm::HS512(secret) => {
                hmac::sign(width, message, secret)
            }
            Algorithm::RS256(key) | Algorithm::RS384(key) | Algorithm::RS512(key) => {
                rsa::sign(width, message, key)
            }
        }
    }

    /// Check a normalized base64url signature segment against `message`.
    pub(crate) fn verify_segment(&self, message: &[u8], signature_segment: &str) -> JwtResult<bool> {
        let width = self.hash_width();
        match self {
            Algorithm::HS256(secret) | Algorithm::HS384(secret) | Algorithm::HS512(secret) => {
                hmac::verify(width, message, signature_segment, secret)
            }
            Algorithm::RS256(key) | Algorithm::RS384(key) | Algorithm::RS512(key) => {
                rsa::verify(width, message, signature_segment, key)
            }
        }
    }
}

/// `alg` header identifier for an optional algorithm, `"none"` when absent
#[must_use]
pub fn algorithm_name(algorithm: Option<&Algorithm<'_>>) -> &'static str {
    algorithm.map_or(NONE_ALGORITHM, Algorithm::name)
}

impl fmt::Debug for Algorithm<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Algorithm::{}(..)", self.name())
    }
}

impl fmt::Display for Algorithm<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_fixed() {
        let secret = b"k".as_slice();
        assert_eq!(Algorithm::HS256(secret).name(), "HS256");
        assert_eq!(Algorithm::HS384(secret).name(), "HS384");
        assert_eq!(Algorithm::HS512(secret).name(), "HS512");
        assert_eq!(algorithm_name(None), "none");
        assert_eq!(algorithm_name(Some(&Algorithm::HS512(secret))), "HS512");
    }

    #[test]
    fn from_name_rejects_none_and_mismatched_keys() {
        let secret = b"k".as_slice();
        assert_eq!(
            Algorithm::from_name("HS384", AlgorithmKey::Secret(secret)),
            Ok(Algorithm::HS384(secret))
        );
        assert_eq!(
            Algorithm::from_name("none", AlgorithmKey::Secret(secret)),
            Err(JwtError::unsupported_algorithm("none"))
        );
        assert!(matches!(
            Algorithm::from_name("RS256", AlgorithmKey::Secret(secret)),
            Err(JwtError::InvalidKey(_))
        ));
        assert!(matches!(
            Algorithm::from_name("ES256", AlgorithmKey::Secret(secret)),
            Err(JwtError::UnsupportedAlgorithm(_))
        ));
    }

    #[test]
    fn debug_hides_key_material() {
        let rendered = format!("{:?}", Algorithm::HS256(b"super-secret"));
        assert_eq!(rendered, "Algorithm::HS256(..)");
    }
}
