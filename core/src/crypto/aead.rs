//! crypto/aead.rs
//! AES-256-GCM seal/open.
//!
//! - 32-byte key, 12-byte nonce, 16-byte tag appended to the ciphertext.
//! - Tag verification fails closed: no partial plaintext is ever returned.
//! - Header metadata is bound by the outer HMAC, so no AAD is passed here.
//! - Cipher selection is driven by `header.cipher_id`.

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};

use crate::constants::cipher_ids;
use crate::crypto::types::{CryptoError, KEY_LEN_32, NONCE_LEN_12, TAG_LEN};
use crate::headers::EnvelopeHeader;

/// AEAD cipher selected by `header.cipher_id`.
#[derive(Clone)]
pub enum AeadImpl {
    AesGcm(Aes256Gcm),
}

impl AeadImpl {
    /// Construct the cipher named by the header, keyed with `cipher_key`.
    pub fn from_header_and_key(header: &EnvelopeHeader, cipher_key: &[u8]) -> Result<Self, CryptoError> {
        if cipher_key.len() != KEY_LEN_32 {
            return Err(CryptoError::InvalidKeyLen { expected: KEY_LEN_32, actual: cipher_key.len() });
        }

        match header.cipher_id {
            x if x == cipher_ids::AES256_GCM => {
                let cipher = Aes256Gcm::new_from_slice(cipher_key).map_err(|_| {
                    CryptoError::InvalidKeyLen { expected: KEY_LEN_32, actual: cipher_key.len() }
                })?;
                Ok(Self::AesGcm(cipher))
            }
            other => Err(CryptoError::UnsupportedCipher { cipher_id: other }),
        }
    }

    /// Encrypt `plaintext` under `iv`; returns ciphertext with the tag appended.
    pub fn seal(&self, iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>, CryptoError> {
        check_nonce(iv)?;
        match self {
            AeadImpl::AesGcm(cipher) => cipher
                .encrypt(Nonce::from_slice(iv), plaintext)
                .map_err(|_| CryptoError::SealFailed),
        }
    }

    /// Decrypt and authenticate `ciphertext_and_tag` under `iv`.
    pub fn open(&self, iv: &[u8], ciphertext_and_tag: &[u8]) -> Result<Vec<u8>, CryptoError> {
        check_nonce(iv)?;
        if ciphertext_and_tag.len() < TAG_LEN {
            return Err(CryptoError::CiphertextTooShort { have: ciphertext_and_tag.len(), need: TAG_LEN });
        }
        match self {
            AeadImpl::AesGcm(cipher) => cipher
                .decrypt(Nonce::from_slice(iv), ciphertext_and_tag)
                .map_err(|_| CryptoError::TagMismatch),
        }
    }
}

fn check_nonce(iv: &[u8]) -> Result<(), CryptoError> {
    if iv.len() != NONCE_LEN_12 {
        return Err(CryptoError::InvalidNonceLen { expected: NONCE_LEN_12, actual: iv.len() });
    }
    Ok(())
}
