use thiserror::Error;

use crate::types::FailureKind;

#[derive(Debug, Error)]
pub enum CompressionError {
    #[error("invalid compression level: {level} (expected 0..=9)")]
    InvalidLevel { level: u32 },

    #[error("codec {codec} process failed: {msg}")]
    CodecProcessFailed { codec: &'static str, msg: String },

    /// Inflated output would exceed the configured cap.
    #[error("inflated payload exceeds {max} bytes")]
    OutputTooLarge { max: usize },
}

impl CompressionError {
    /// Every inflate failure is opaque to callers; it is a crypto failure as
    /// far as the envelope boundary is concerned.
    pub fn kind(&self) -> FailureKind {
        FailureKind::CryptoFailure
    }
}

/// Reversible payload transform applied before encryption.
pub trait Compressor: Send + Sync {
    fn compress(&self, input: &[u8]) -> Result<Vec<u8>, CompressionError>;
    fn decompress(&self, input: &[u8], max_len: usize) -> Result<Vec<u8>, CompressionError>;
}
