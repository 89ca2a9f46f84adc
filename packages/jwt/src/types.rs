//! JWT type definitions

use crate::algorithms::{algorithm_name, Algorithm};
use serde::{Deserialize, Serialize};

/// Token type written into every header
pub const JWT_TYPE: &str = "JWT";

/// JWT header structure
///
/// Produced from the chosen algorithm during encode; decoding it is only
/// needed for inspection, verification never trusts it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// Algorithm identifier, `"none"` for unsigned tokens
    pub alg: String,
    /// Token type
    #[serde(default)]
    pub typ: String,
}

impl Header {
    /// Header for a token signed with `algorithm`, or unsigned when `None`
    #[must_use]
    pub fn for_algorithm(algorithm: Option<&Algorithm<'_>>) -> Self {
        Self {
            alg: algorithm_name(algorithm).to_string(),
            typ: JWT_TYPE.to_string(),
        }
    }

    /// Whether the header declares an unsigned token
    #[must_use]
    pub fn is_unsecured(&self) -> bool {
        self.alg == crate::algorithms::NONE_ALGORITHM
    }
}
