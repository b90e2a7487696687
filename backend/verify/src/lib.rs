pub mod codec;
pub mod verifier;

pub use codec::{to_bytes, CodecError};
pub use verifier::SignatureVerifier;
