use std::fmt;
use thiserror::Error;

use crate::{
    compression::CompressionError,
    config::ConfigError,
    container::ContainerError,
    crypto::CryptoError,
    headers::HeaderError,
};

/// Internal failure taxonomy. Used for diagnostics only; it never crosses the
/// public decrypt boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// Bad magic, unsupported version, truncated buffer, non-zero reserved
    /// bytes, out-of-range iterations, unknown flags.
    Format,
    /// Header self-hash mismatch or outer MAC mismatch.
    Integrity,
    /// Unrecognised KDF or cipher id.
    UnsupportedAlgorithm,
    /// AEAD open failure, inflate failure, or non-UTF-8 plaintext.
    CryptoFailure,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FailureKind::Format               => "format",
            FailureKind::Integrity            => "integrity",
            FailureKind::UnsupportedAlgorithm => "unsupported_algorithm",
            FailureKind::CryptoFailure        => "crypto_failure",
        };
        f.write_str(name)
    }
}

/// Unified envelope error covering every stage.
/// - `From<T>` impls enable `?` across the pipeline.
/// - `kind()` classifies for logging.
#[derive(Debug, Error)]
pub enum EnvelopeError {
    #[error("header error: {0}")]
    Header(#[from] HeaderError),

    #[error("container error: {0}")]
    Container(#[from] ContainerError),

    #[error("crypto error: {0}")]
    Crypto(#[from] CryptoError),

    #[error("compression error: {0}")]
    Compression(#[from] CompressionError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// Plaintext (or stored payload) over the configured cap.
    #[error("plaintext too large: {have} > {max}")]
    PlaintextTooLarge { have: usize, max: usize },

    /// Authenticated plaintext was not valid UTF-8 for the string API.
    #[error("plaintext is not valid UTF-8")]
    NotUtf8,
}

impl EnvelopeError {
    pub fn kind(&self) -> FailureKind {
        match self {
            EnvelopeError::Header(e) => e.kind(),
            EnvelopeError::Container(e) => e.kind(),
            EnvelopeError::Crypto(e) => e.kind(),
            EnvelopeError::Compression(e) => e.kind(),
            EnvelopeError::Config(_) | EnvelopeError::PlaintextTooLarge { .. } => FailureKind::Format,
            EnvelopeError::NotUtf8 => FailureKind::CryptoFailure,
        }
    }
}

/// The only error a decrypt caller ever sees.
///
/// Carries no kind, source, or detail. A bad password, a tampered header and
/// a corrupt payload must be indistinguishable to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("decryption failed")]
pub struct DecryptError;
