use std::fmt;
use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::headers::{registry_name, CipherSuite, KdfAlgorithm};
use crate::types::FailureKind;

/// AES-256 key length and HMAC-SHA256 key length.
pub const KEY_LEN_32: usize = 32;

/// Total PBKDF2 output: cipher key followed by MAC key.
pub const DERIVED_LEN_64: usize = 2 * KEY_LEN_32;

/// Standard 12-byte nonce length for AES-GCM.
pub const NONCE_LEN_12: usize = 12;

/// Fixed AEAD tag length (bytes).
pub const TAG_LEN: usize = 16;

/// 64 bytes of PBKDF2 output. `[0, 32)` keys the cipher, `[32, 64)` keys the
/// outer HMAC. Wiped on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct KeyMaterial {
    bytes: [u8; DERIVED_LEN_64],
}

impl KeyMaterial {
    pub(crate) fn zeroed() -> Self {
        Self { bytes: [0u8; DERIVED_LEN_64] }
    }

    pub(crate) fn as_mut_bytes(&mut self) -> &mut [u8; DERIVED_LEN_64] {
        &mut self.bytes
    }

    pub fn cipher_key(&self) -> &[u8] {
        &self.bytes[..KEY_LEN_32]
    }

    pub fn mac_key(&self) -> &[u8] {
        &self.bytes[KEY_LEN_32..]
    }
}

impl fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("KeyMaterial([REDACTED])")
    }
}

#[derive(Debug, Error)]
pub enum CryptoError {
    /// KDF id from header has no implementation.
    #[error("unsupported key derivation: {}", registry_name::<KdfAlgorithm>(.kdf_id))]
    UnsupportedKdf { kdf_id: u8 },

    /// Cipher id from header has no implementation.
    #[error("unsupported cipher suite: {}", registry_name::<CipherSuite>(.cipher_id))]
    UnsupportedCipher { cipher_id: u8 },

    #[error("invalid key length: expected={expected}, actual={actual}")]
    InvalidKeyLen { expected: usize, actual: usize },

    #[error("invalid nonce length: expected={expected}, actual={actual}")]
    InvalidNonceLen { expected: usize, actual: usize },

    /// OS randomness unavailable.
    #[error("random source failure: {0}")]
    Rng(String),

    /// Cipher provider refused to seal.
    #[error("AEAD seal failed")]
    SealFailed,

    /// Ciphertext shorter than the AEAD tag.
    #[error("ciphertext too short: {have} < {need}")]
    CiphertextTooShort { have: usize, need: usize },

    /// AEAD tag mismatch (wrong key or corrupted ciphertext).
    #[error("AEAD tag mismatch")]
    TagMismatch,

    /// Outer HMAC did not verify.
    #[error("MAC mismatch")]
    MacMismatch,
}

impl CryptoError {
    pub fn kind(&self) -> FailureKind {
        use CryptoError::*;
        match self {
            UnsupportedKdf { .. } | UnsupportedCipher { .. } => FailureKind::UnsupportedAlgorithm,
            MacMismatch => FailureKind::Integrity,
            InvalidKeyLen { .. }
            | InvalidNonceLen { .. }
            | Rng(_)
            | SealFailed
            | CiphertextTooShort { .. }
            | TagMismatch => FailureKind::CryptoFailure,
        }
    }
}
