use thiserror::Error;

/// Top-level error type for the SlashForge gateway surface.
///
/// Only failures that terminate a request live here. "Unknown interaction
/// type" and "command not found" are handled outcomes with their own
/// diagnostic payloads, not errors.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("the {0} method is not allowed")]
    MethodNotAllowed(String),

    #[error("no signature or timestamp provided")]
    MissingCredentials,

    #[error("invalid request signature")]
    InvalidSignature,

    #[error("malformed payload: {0}")]
    BadPayload(String),

    #[error("invalid encoding: {0}")]
    InvalidEncoding(String),
}
