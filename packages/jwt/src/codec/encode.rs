//! Token encoding

use crate::algorithms::utils::base64_url_encode;
use crate::algorithms::Algorithm;
use crate::error::{JwtError, JwtResult};
use crate::types::Header;
use serde::Serialize;

/// Encode claims into a compact token.
///
/// With an algorithm the result is `header.payload.signature`, where the
/// signature covers the UTF-8 bytes of `header.payload`. Without one the
/// result is the unsecured form `header.payload` with `alg` set to `"none"`.
///
/// # Errors
/// - `JwtError::Serialization` if the claims are not representable as a JSON object
/// - `JwtError::SigningError` if the algorithm cannot sign with its key
pub fn encode<T>(claims: &T, algorithm: Option<&Algorithm<'_>>) -> JwtResult<String>
where
    T: Serialize + ?Sized,
{
    let payload = serde_json::to_value(claims).map_err(|e| JwtError::serialization(e.to_string()))?;
    if !payload.is_object() {
        return Err(JwtError::serialization(
            "claims must serialize to a JSON object",
        ));
    }

    let header = Header::for_algorithm(algorithm);
    let header_json =
        serde_json::to_vec(&header).map_err(|e| JwtError::serialization(e.to_string()))?;
    let payload_json =
        serde_json::to_vec(&payload).map_err(|e| JwtError::serialization(e.to_string()))?;

    let mut token = format!(
        "{}.{}",
        base64_url_encode(&header_json),
        base64_url_encode(&payload_json)
    );

    let Some(algorithm) = algorithm else {
        tracing::trace!("encoded unsecured token");
        return Ok(token);
    };

    let signature = algorithm.sign(token.as_bytes())?;
    token.push('.');
    token.push_str(&base64_url_encode(&signature));

    tracing::trace!(alg = algorithm.name(), "encoded signed token");
    Ok(token)
}
