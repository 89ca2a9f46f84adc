//! Compact serialization: `base64url(header).base64url(payload).base64url(signature)`

mod decode;
mod encode;

pub use decode::{decode, decode_as, decode_header, decode_with, Decoder};
pub use encode::encode;
