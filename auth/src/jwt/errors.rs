use thiserror::Error;

/// Error type for JWT operations.
///
/// Validation failures keep their reason here; callers that face clients
/// collapse them into a single "not authenticated" signal.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token signature is invalid")]
    BadSignature,

    #[error("Token is expired")]
    Expired,

    #[error("Token is malformed: {0}")]
    Malformed(String),

    #[error("Unsupported signing algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("Token time-to-live must be positive")]
    InvalidTtl,
}
