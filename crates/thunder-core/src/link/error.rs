//! Per-line failure taxonomy for thunder link decoding.

use thiserror::Error;

/// Why a line could not be decoded. Every variant is recoverable: the batch
/// records it and moves on to the next line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkError {
    /// Structural problem with the line itself (prefix or character set).
    #[error("{0}")]
    Malformed(MalformedReason),
    /// Base64, UTF-8, or percent-decoding layer rejected the payload.
    #[error("{0}")]
    DecodeFailed(DecodeFailure),
    /// Decoded text is not wrapped in the `AA` / `ZZ` envelope.
    #[error("invalid thunder link content")]
    ContentInvalid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MalformedReason {
    #[error("must start with thunder://")]
    MissingPrefix,
    #[error("invalid thunder link format")]
    InvalidFormat,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeFailure {
    /// Invalid base64 symbol, length, or padding. Holds the decoder's message.
    #[error("base64 decode failed: {0}")]
    Base64(String),
    #[error("non-UTF-8 encoding")]
    NonUtf8,
    #[error("percent-encoded payload is not UTF-8")]
    PercentNonUtf8,
}

impl LinkError {
    /// Short category name, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            LinkError::Malformed(_) => "malformed",
            LinkError::DecodeFailed(_) => "decode_failed",
            LinkError::ContentInvalid => "content_invalid",
        }
    }
}

impl From<MalformedReason> for LinkError {
    fn from(reason: MalformedReason) -> Self {
        LinkError::Malformed(reason)
    }
}

impl From<DecodeFailure> for LinkError {
    fn from(failure: DecodeFailure) -> Self {
        LinkError::DecodeFailed(failure)
    }
}
