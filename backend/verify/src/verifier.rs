//! Ed25519 verification of inbound webhook signatures.
//!
//! The platform signs `timestamp || body` with its private key and sends the
//! signature and timestamp as request headers. The public key is a fixed,
//! process-wide constant decoded once at startup.

use ed25519_dalek::{Signature, Verifier, VerifyingKey};
use slashforge_core::GatewayError;

use crate::codec;

/// Verifies inbound request signatures against the platform's public key.
#[derive(Clone)]
pub struct SignatureVerifier {
    key: VerifyingKey,
}

impl SignatureVerifier {
    /// Build a verifier from the hex-encoded 32-byte Ed25519 public key.
    pub fn new(public_key_hex: &str) -> Result<Self, GatewayError> {
        let bytes = codec::to_bytes(public_key_hex, true)
            .map_err(|e| GatewayError::InvalidEncoding(e.to_string()))?;
        let bytes: [u8; 32] = bytes
            .try_into()
            .map_err(|b: Vec<u8>| {
                GatewayError::InvalidEncoding(format!(
                    "public key must be 32 bytes, got {}",
                    b.len()
                ))
            })?;
        let key = VerifyingKey::from_bytes(&bytes)
            .map_err(|e| GatewayError::InvalidEncoding(e.to_string()))?;
        Ok(Self { key })
    }

    /// Check `signature_hex` over the concatenation of `timestamp` and
    /// `body`. Any decode or verification failure is a plain `false`; the
    /// caller has already handled the missing-header case separately.
    pub fn verify(&self, signature_hex: &str, timestamp: &str, body: &str) -> bool {
        let Ok(sig_bytes) = codec::to_bytes(signature_hex, true) else {
            return false;
        };
        let Ok(signature) = Signature::from_slice(&sig_bytes) else {
            return false;
        };

        let mut message = Vec::with_capacity(timestamp.len() + body.len());
        message.extend_from_slice(timestamp.as_bytes());
        message.extend_from_slice(body.as_bytes());

        self.key.verify(&message, &signature).is_ok()
    }
}
