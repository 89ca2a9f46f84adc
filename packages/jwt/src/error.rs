//! JWT error types

use thiserror::Error;

/// JWT operation result type
pub type JwtResult<T> = Result<T, JwtError>;

/// Errors surfaced by token encoding and decoding.
///
/// Every decode stage maps onto exactly one kind, so callers can tell a
/// malformed token apart from an expired one or a signature mismatch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JwtError {
    /// Token does not have the expected number of `.`-separated segments
    #[error("JWT must have 3 segments, found {found}")]
    MissingComponents {
        /// Number of segments actually present
        found: usize,
    },

    /// No acceptable algorithm produced a matching signature
    #[error("Invalid JWT signature")]
    InvalidSignature,

    /// Payload segment is not base64url or not a JSON object
    #[error("Invalid JWT payload: {0}")]
    InvalidPayload(String),

    /// `exp` claim is present but cannot be read as epoch seconds
    #[error("Invalid expiration claim: {0}")]
    InvalidExpiration(String),

    /// `exp` claim lies in the past
    #[error("JWT expired at {exp} (now {now})")]
    Expired {
        /// Expiration claim, epoch seconds
        exp: i64,
        /// Clock reading at check time, epoch seconds
        now: i64,
    },

    /// Claims could not be represented as a JSON object
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Cryptographic provider refused to sign
    #[error("Signing error: {0}")]
    SigningError(String),

    /// Key material could not be parsed or does not fit the algorithm
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Algorithm identifier outside the supported set
    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Header segment could not be decoded
    #[error("Invalid JWT header: {0}")]
    InvalidHeader(String),
}

impl JwtError {
    /// Create a missing components error
    #[inline]
    #[must_use]
    pub fn missing_components(found: usize) -> Self {
        JwtError::MissingComponents { found }
    }

    /// Create an invalid payload error
    #[inline]
    #[must_use]
    pub fn invalid_payload(msg: impl Into<String>) -> Self {
        JwtError::InvalidPayload(msg.into())
    }

    /// Create an invalid expiration error
    #[inline]
    #[must_use]
    pub fn invalid_expiration(msg: impl Into<String>) -> Self {
        JwtError::InvalidExpiration(msg.into())
    }

    /// Create a serialization error
    #[inline]
    #[must_use]
    pub fn serialization(msg: impl Into<String>) -> Self {
        JwtError::Serialization(msg.into())
    }

    /// Create a signing error
    #[inline]
    #[must_use]
    pub fn signing_error(msg: impl Into<String>) -> Self {
        JwtError::SigningError(msg.into())
    }

    /// Create an invalid key error
    #[inline]
    #[must_use]
    pub fn invalid_key(msg: impl Into<String>) -> Self {
        JwtError::InvalidKey(msg.into())
    }

    /// Create an unsupported algorithm error
    #[inline]
    #[must_use]
    pub fn unsupported_algorithm(alg: impl Into<String>) -> Self {
        JwtError::UnsupportedAlgorithm(alg.into())
    }

    /// Create an invalid header error
    #[inline]
    #[must_use]
    pub fn invalid_header(msg: impl Into<String>) -> Self {
        JwtError::InvalidHeader(msg.into())
    }

    /// Short stable label for the error kind, suitable for log fields
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            JwtError::MissingComponents { .. } => "missing_components",
            JwtError::InvalidSignature => "invalid_signature",
            JwtError::InvalidPayload(_) => "invalid_payload",
            JwtError::InvalidExpiration(_) => "invalid_expiration",
            JwtError::Expired { .. } => "expired",
            JwtError::Serialization(_) => "serialization",
            JwtError::SigningError(_) => "signing",
            JwtError::InvalidKey(_) => "invalid_key",
            JwtError::UnsupportedAlgorithm(_) => "unsupported_algorithm",
            JwtError::InvalidHeader(_) => "invalid_header",
        }
    }
}
