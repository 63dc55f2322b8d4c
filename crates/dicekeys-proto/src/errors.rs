//! Wire decoding errors.

use thiserror::Error;

/// Convenience alias for wire decoding results.
pub type Result<T> = std::result::Result<T, ProtoError>;

/// Errors that can occur while decoding wire values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtoError {
    /// Text is not valid base64url
    #[error("invalid base64url: {0}")]
    InvalidBase64(String),

    /// JSON failed to parse or did not match the expected shape
    #[error("invalid JSON: {0}")]
    InvalidJson(String),

    /// Command name is not in the API catalog
    #[error("unknown command: {0}")]
    UnknownCommand(String),
}

impl From<serde_json::Error> for ProtoError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidJson(err.to_string())
    }
}

impl From<base64::DecodeError> for ProtoError {
    fn from(err: base64::DecodeError) -> Self {
        Self::InvalidBase64(err.to_string())
    }
}
