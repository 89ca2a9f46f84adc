//! JWT Algorithm Utilities - Base64url framing and constant-time comparison

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use subtle::ConstantTimeEq;

/// Base64 URL-safe encoding without padding (RFC 7515)
#[inline]
pub(crate) fn base64_url_encode(input: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(input)
}

/// Base64 URL-safe decoding without padding (RFC 7515)
#[inline]
pub(crate) fn base64_url_decode(input: &str) -> Result<Vec<u8>, base64::DecodeError> {
    URL_SAFE_NO_PAD.decode(input)
}

/// Rewrite a signature segment into base64url form.
///
/// Some producers emit the standard alphabet with padding; `+` and `/` are
/// mapped to `-` and `_` and every `=` is dropped.
pub(crate) fn normalize_signature(segment: &str) -> String {
    segment
        .chars()
        .filter(|c| *c != '=')
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            other => other,
        })
        .collect()
}

/// Constant-time comparison for cryptographic security
///
/// Length differences return early; the contents are never compared with
/// data-dependent branching.
#[inline]
pub(crate) fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_maps_standard_alphabet() {
        assert_eq!(normalize_signature("ab+/cd=="), "ab-_cd");
        assert_eq!(normalize_signature("already-url_safe"), "already-url_safe");
        assert_eq!(normalize_signature(""), "");
    }

    #[test]
    fn constant_time_eq_matches_plain_equality() {
        assert!(constant_time_eq(b"signature", b"signature"));
        assert!(!constant_time_eq(b"signature", b"signaturf"));
        assert!(!constant_time_eq(b"short", b"longer value"));
        assert!(constant_time_eq(b"", b""));
    }

    #[test]
    fn base64_url_has_no_padding() {
        assert_eq!(base64_url_encode(&[0xfb, 0xff]), "-_8");
        assert_eq!(base64_url_decode("-_8").ok(), Some(vec![0xfb, 0xff]));
        assert!(base64_url_decode("-_8=").is_err());
        assert!(base64_url_decode("a*b").is_err());
    }
}
