//! JWT decode options and expiry validation.

use crate::claims::Claims;
use crate::error::{JwtError, JwtResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Options applied by [`Decoder`](crate::Decoder).
///
/// Deserializable so hosts can embed it in their own configuration files;
/// omitted fields take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeOptions {
    /// Reject tokens without an `exp` claim.
    pub require_expiration: bool,
    /// Accept a 2-segment unsigned token when no algorithm is required.
    pub allow_unsecured: bool,
    /// Seconds of clock skew tolerated on `exp`.
    pub leeway_secs: u64,
}

impl DecodeOptions {
    /// Options requiring an `exp` claim and allowing no skew.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            require_expiration: true,
            allow_unsecured: false,
            leeway_secs: 0,
        }
    }

    /// Set whether a missing `exp` claim is an error.
    #[must_use]
    pub fn require_expiration(mut self, required: bool) -> Self {
        self.require_expiration = required;
        self
    }

    /// Set whether 2-segment unsigned tokens pass when no algorithm is required.
    #[must_use]
    pub fn allow_unsecured(mut self, allow: bool) -> Self {
        self.allow_unsecured = allow;
        self
    }

    /// Set the clock-skew leeway for expiry.
    #[must_use]
    pub fn with_leeway(mut self, secs: u64) -> Self {
        self.leeway_secs = secs;
        self
    }
}

/// Read an epoch-seconds claim value.
///
/// Integers are taken as-is, floats are truncated toward zero and strings
/// must parse as a base-10 integer.
pub(crate) fn coerce_timestamp(value: &Value) -> JwtResult<i64> {
    match value {
        Value::Number(number) => {
            if let Some(secs) = number.as_i64() {
                Ok(secs)
            } else if number.as_u64().is_some() {
                Ok(i64::MAX)
            } else if let Some(secs) = number.as_f64() {
                // `as` saturates out-of-range floats
                #[allow(clippy::cast_possible_truncation)]
                let truncated = secs.trunc() as i64;
                Ok(truncated)
            } else {
                Err(JwtError::invalid_expiration(format!("unreadable number {number}")))
            }
        }
        Value::String(text) => text
            .parse::<i64>()
            .map_err(|_| JwtError::invalid_expiration(format!("{text:?} is not an integer"))),
        other => Err(JwtError::invalid_expiration(format!(
            "expected number or numeric string, found {}",
            value_kind(other)
        ))),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Enforce the `exp` claim against `now`.
pub(crate) fn check_expiration(claims: &Claims, options: &DecodeOptions, now: i64) -> JwtResult<()> {
    let Some(exp) = claims.expiration()? else {
        if options.require_expiration {
            return Err(JwtError::invalid_expiration("exp claim is missing"));
        }
        return Ok(());
    };

    let leeway = i64::try_from(options.leeway_secs).unwrap_or(i64::MAX);
    if exp.saturating_add(leeway) < now {
        return Err(JwtError::Expired { exp, now });
    }

    Ok(())
}
