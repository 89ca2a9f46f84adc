//! JSON Web Token (JWT) encoding and verification
//!
//! This crate provides:
//! - HS256/HS384/HS512 and RS256/RS384/RS512 signing over caller-owned keys
//! - Unsecured (`alg: "none"`) tokens for callers that opt in explicitly
//! - Any-match verification against a set of acceptable algorithms
//! - Tolerant `exp` handling with configurable strictness
//!
//! ```
//! use jwt_codec::{decode, encode, Algorithm, ClaimsBuilder, JwtError};
//!
//! let claims = ClaimsBuilder::new()
//!     .subject("alice")
//!     .expires_in(chrono::Duration::hours(1))
//!     .build();
//!
//! let token = encode(&claims, Some(&Algorithm::HS256(b"secret")))?;
//! let decoded = decode(&token, &[Algorithm::HS256(b"secret")])?;
//! assert_eq!(decoded.subject(), Some("alice"));
//!
//! let wrong = decode(&token, &[Algorithm::HS256(b"wrong")]);
//! assert_eq!(wrong, Err(JwtError::InvalidSignature));
//! # Ok::<(), JwtError>(())
//! ```

pub mod algorithms;
pub mod claims;
pub mod clock;
mod codec;
mod error;
pub mod types;
pub mod validation;

pub use algorithms::{algorithm_name, Algorithm, AlgorithmKey, HashWidth, RsaKey};
pub use claims::{Claims, ClaimsBuilder};
pub use clock::{Clock, FixedClock, SystemClock};
pub use codec::{decode, decode_as, decode_header, decode_with, encode, Decoder};
pub use error::*;
pub use types::Header;
pub use validation::DecodeOptions;

/// RSA key types accepted by [`RsaKey`]
pub use rsa::{RsaPrivateKey, RsaPublicKey};
