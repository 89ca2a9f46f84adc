//! Token decoding and verification
//!
//! Stages run strictly in order and the first failure is returned as-is:
//! split, normalize signature, verify, decode payload, parse JSON, check expiry.

use crate::algorithms::utils::{base64_url_decode, normalize_signature};
use crate::algorithms::Algorithm;
use crate::claims::Claims;
use crate::clock::{Clock, SystemClock};
use crate::error::{JwtError, JwtResult};
use crate::types::Header;
use crate::validation::{check_expiration, DecodeOptions};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Raw segments of a compact token, still base64url text.
struct Segments<'t> {
    header: &'t str,
    payload: &'t str,
    signature: Option<&'t str>,
}

impl<'t> Segments<'t> {
    fn split(token: &'t str, allow_two: bool) -> JwtResult<Self> {
        let parts: Vec<&str> = token.split('.').collect();
        match parts[..] {
            [header, payload, signature] => Ok(Self {
                header,
                payload,
                signature: Some(signature),
            }),
            [header, payload] if allow_two => Ok(Self {
                header,
                payload,
                signature: None,
            }),
            _ => Err(JwtError::missing_components(parts.len())),
        }
    }

    /// Bytes covered by the signature: `header.payload` exactly as received.
    fn signing_input(&self) -> String {
        format!("{}.{}", self.header, self.payload)
    }
}

/// Token decoder carrying its options and clock.
///
/// Holds no per-call state; one decoder can serve any number of threads.
#[derive(Debug, Clone, Default)]
pub struct Decoder<C = SystemClock> {
    options: DecodeOptions,
    clock: C,
}

impl Decoder<SystemClock> {
    /// Decoder reading the system clock.
    #[must_use]
    pub fn new(options: DecodeOptions) -> Self {
        Self {
            options,
            clock: SystemClock,
        }
    }
}

impl<C: Clock> Decoder<C> {
    /// Decoder reading time from `clock`.
    #[must_use]
    pub fn with_clock(options: DecodeOptions, clock: C) -> Self {
        Self { options, clock }
    }

    /// Options in effect.
    #[must_use]
    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    /// Verify a token against any of `algorithms` and return its claims.
    ///
    /// An empty `algorithms` slice accepts the token without checking any
    /// signature; the caller opts into that explicitly by passing no
    /// algorithms.
    ///
    /// # Errors
    /// - `JwtError::MissingComponents` if the token is not 3 segments (or 2
    ///   under `allow_unsecured` with no algorithms)
    /// - `JwtError::InvalidSignature` if no algorithm matches
    /// - `JwtError::InvalidPayload` if the payload is not base64url JSON object
    /// - `JwtError::InvalidExpiration` if `exp` is unreadable, or missing
    ///   while `require_expiration` is set
    /// - `JwtError::Expired` if `exp` is in the past
    pub fn decode(&self, token: &str, algorithms: &[Algorithm<'_>]) -> JwtResult<Claims> {
        let result = self.run(token, algorithms);
        if let Err(error) = &result {
            tracing::debug!(kind = error.kind(), "token rejected");
        }
        result
    }

    /// Verify against at most one algorithm; `None` skips the signature check.
    ///
    /// # Errors
    /// Same as [`Decoder::decode`].
    pub fn decode_with(&self, token: &str, algorithm: Option<&Algorithm<'_>>) -> JwtResult<Claims> {
        match algorithm {
            Some(algorithm) => self.decode(token, std::slice::from_ref(algorithm)),
            None => self.decode(token, &[]),
        }
    }

    /// Decode then convert the claims into `T`.
    ///
    /// # Errors
    /// Same as [`Decoder::decode`], plus `JwtError::InvalidPayload` when the
    /// claims do not fit `T`.
    pub fn decode_as<T: DeserializeOwned>(
        &self,
        token: &str,
        algorithms: &[Algorithm<'_>],
    ) -> JwtResult<T> {
        self.decode(token, algorithms)?.deserialize_into()
    }

    fn run(&self, token: &str, algorithms: &[Algorithm<'_>]) -> JwtResult<Claims> {
        let allow_two = algorithms.is_empty() && self.options.allow_unsecured;
        let segments = Segments::split(token, allow_two)?;

        verify_signature(&segments, algorithms)?;

        let payload = base64_url_decode(segments.payload)
            .map_err(|e| JwtError::invalid_payload(format!("payload is not base64url: {e}")))?;
        let value: Value = serde_json::from_slice(&payload)
            .map_err(|e| JwtError::invalid_payload(format!("payload is not JSON: {e}")))?;
        let claims = Claims::try_from(value)?;
        tracing::trace!(claims = claims.len(), "payload parsed");

        check_expiration(&claims, &self.options, self.clock.now())?;

        Ok(claims)
    }
}

fn verify_signature(segments: &Segments<'_>, algorithms: &[Algorithm<'_>]) -> JwtResult<()> {
    if algorithms.is_empty() {
        tracing::warn!("no algorithms required, accepting token without signature check");
        return Ok(());
    }

    let signature = normalize_signature(segments.signature.unwrap_or_default());
    let message = segments.signing_input();

    for algorithm in algorithms {
        if algorithm.verify_segment(message.as_bytes(), &signature)? {
            tracing::trace!(alg = algorithm.name(), "signature verified");
            return Ok(());
        }
    }

    Err(JwtError::InvalidSignature)
}

/// Decode and verify with default options and the system clock.
///
/// # Errors
/// See [`Decoder::decode`].
pub fn decode(token: &str, algorithms: &[Algorithm<'_>]) -> JwtResult<Claims> {
    Decoder::new(DecodeOptions::default()).decode(token, algorithms)
}

/// Decode and verify against at most one algorithm with default options.
///
/// # Errors
/// See [`Decoder::decode`].
pub fn decode_with(token: &str, algorithm: Option<&Algorithm<'_>>) -> JwtResult<Claims> {
    Decoder::new(DecodeOptions::default()).decode_with(token, algorithm)
}

/// Decode, verify and convert the claims into `T` with default options.
///
/// # Errors
/// See [`Decoder::decode_as`].
pub fn decode_as<T: DeserializeOwned>(token: &str, algorithms: &[Algorithm<'_>]) -> JwtResult<T> {
    Decoder::new(DecodeOptions::default()).decode_as(token, algorithms)
}

/// Read the header of a token without verifying anything.
///
/// # Errors
/// - `JwtError::MissingComponents` if the token is empty
/// - `JwtError::InvalidHeader` if the first segment is empty or not
///   base64url JSON
pub fn decode_header(token: &str) -> JwtResult<Header> {
    if token.is_empty() {
        return Err(JwtError::missing_components(1));
    }
    let header_segment = token
        .split('.')
        .next()
        .filter(|segment| !segment.is_empty())
        .ok_or_else(|| JwtError::invalid_header("header segment is empty"))?;

    let bytes = base64_url_decode(header_segment)
        .map_err(|e| JwtError::invalid_header(format!("header is not base64url: {e}")))?;
    serde_json::from_slice(&bytes)
        .map_err(|e| JwtError::invalid_header(format!("header is not JSON: {e}")))
}
