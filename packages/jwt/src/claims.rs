//! JWT claims: an open JSON object with accessors for the registered names.

use crate::error::{JwtError, JwtResult};
use crate::validation::coerce_timestamp;
use chrono::{Duration, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Claims carried in a token payload.
///
/// Any JSON object is accepted. `exp` is the only claim the decoder acts on;
/// `iss`, `sub` and `iat` have typed accessors but are not enforced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Claims(Map<String, Value>);

impl Claims {
    /// Empty claims set.
    #[must_use]
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Raw value of a claim.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Set a claim, returning the previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(name.into(), value.into())
    }

    /// Remove a claim, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.0.remove(name)
    }

    /// Whether a claim is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Number of claims.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no claims are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over claim names and values.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// `sub` claim when it is a string.
    #[must_use]
    pub fn subject(&self) -> Option<&str> {
        self.0.get("sub").and_then(Value::as_str)
    }

    /// `iss` claim when it is a string.
    #[must_use]
    pub fn issuer(&self) -> Option<&str> {
        self.0.get("iss").and_then(Value::as_str)
    }

    /// `iat` claim when it is an integer.
    #[must_use]
    pub fn issued_at(&self) -> Option<i64> {
        self.0.get("iat").and_then(Value::as_i64)
    }

    /// `exp` claim in epoch seconds.
    ///
    /// Accepts integers, floats (truncated toward zero) and numeric strings.
    ///
    /// # Errors
    /// Returns `JwtError::InvalidExpiration` when `exp` is present but has any
    /// other shape.
    pub fn expiration(&self) -> JwtResult<Option<i64>> {
        self.0.get("exp").map(coerce_timestamp).transpose()
    }

    /// Convert into a caller-defined claims type.
    ///
    /// # Errors
    /// Returns `JwtError::InvalidPayload` if the claims do not fit `T`.
    pub fn deserialize_into<T: DeserializeOwned>(self) -> JwtResult<T> {
        serde_json::from_value(Value::Object(self.0))
            .map_err(|e| JwtError::invalid_payload(format!("claims do not match target type: {e}")))
    }

    /// Underlying JSON object.
    #[must_use]
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for Claims {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl TryFrom<Value> for Claims {
    type Error = JwtError;

    fn try_from(value: Value) -> JwtResult<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            _ => Err(JwtError::invalid_payload("claims must be a JSON object")),
        }
    }
}

impl From<Claims> for Value {
    fn from(claims: Claims) -> Self {
        Value::Object(claims.0)
    }
}

/// Builder for [`Claims`] with the registered time and identity claims.
#[derive(Debug, Clone, Default)]
pub struct ClaimsBuilder {
    claims: Claims,
}

impl ClaimsBuilder {
    /// Create a new claims builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the subject (sub) claim.
    #[must_use]
    pub fn subject(mut self, sub: impl Into<String>) -> Self {
        self.claims.insert("sub", sub.into());
        self
    }

    /// Set the issuer (iss) claim.
    #[must_use]
    pub fn issuer(mut self, iss: impl Into<String>) -> Self {
        self.claims.insert("iss", iss.into());
        self
    }

    /// Set the issued-at time to now.
    #[must_use]
    pub fn issued_now(self) -> Self {
        self.issued_at(Utc::now().timestamp())
    }

    /// Set the issued-at (iat) claim.
    #[must_use]
    pub fn issued_at(mut self, iat: i64) -> Self {
        self.claims.insert("iat", iat);
        self
    }

    /// Set the expiration (exp) claim.
    #[must_use]
    pub fn expires_at(mut self, exp: i64) -> Self {
        self.claims.insert("exp", exp);
        self
    }

    /// Set the expiration time relative to now.
    ///
    /// Durations past the representable range saturate to the far end.
    #[must_use]
    pub fn expires_in(self, dur: Duration) -> Self {
        let exp = match Utc::now().checked_add_signed(dur) {
            Some(at) => at.timestamp(),
            None if dur < Duration::zero() => i64::MIN,
            None => i64::MAX,
        };
        self.expires_at(exp)
    }

    /// Add a custom claim.
    #[must_use]
    pub fn claim(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.claims.insert(name, value);
        self
    }

    /// Build the claims.
    #[must_use]
    pub fn build(self) -> Claims {
        self.claims
    }
}
