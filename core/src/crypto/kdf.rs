//! crypto/kdf.rs
//! Password-based key derivation.
//!
//! - PBKDF2-HMAC-SHA512(password, salt, iterations) -> 64 bytes.
//! - One derivation yields two independent keys: the first half keys the
//!   cipher, the second half keys the outer HMAC. Neither is reused for the
//!   other purpose.
//! - Salt is random per envelope; iterations come from the (validated) header.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha512;

use crate::constants::{kdf_ids, SALT_LEN};
use crate::crypto::types::{CryptoError, KeyMaterial};
use crate::headers::EnvelopeHeader;

/// Stretch `password` into 64 bytes of key material.
pub fn pbkdf2_sha512(password: &[u8], salt: &[u8; SALT_LEN], iterations: u32) -> KeyMaterial {
    let mut keys = KeyMaterial::zeroed();
    pbkdf2_hmac::<Sha512>(password, salt, iterations, keys.as_mut_bytes());
    keys
}

/// Derive cipher and MAC keys using the KDF the header names.
///
/// Errors:
/// - `CryptoError::UnsupportedKdf` for any id other than PBKDF2-SHA512.
pub fn derive_keys(
    header: &EnvelopeHeader,
    password: &[u8],
    salt: &[u8; SALT_LEN],
) -> Result<KeyMaterial, CryptoError> {
    match header.kdf_id {
        x if x == kdf_ids::PBKDF2_SHA512 => Ok(pbkdf2_sha512(password, salt, header.iterations)),
        other => Err(CryptoError::UnsupportedKdf { kdf_id: other }),
    }
}
