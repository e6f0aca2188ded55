//! crypto/nonce.rs
//! Fresh per-envelope salt and IV.
//!
//! Both come straight from the OS CSPRNG on every encrypt call and are never
//! cached or reused. A failing random source is a fatal provider error.

use rand::rngs::OsRng;
use rand::RngCore;

use crate::constants::{IV_LEN, SALT_LEN};
use crate::crypto::types::CryptoError;

fn fill<const N: usize>() -> Result<[u8; N], CryptoError> {
    let mut buf = [0u8; N];
    OsRng
        .try_fill_bytes(&mut buf)
        .map_err(|e| CryptoError::Rng(e.to_string()))?;
    Ok(buf)
}

/// 16 random bytes for PBKDF2.
pub fn fresh_salt() -> Result<[u8; SALT_LEN], CryptoError> {
    fill::<SALT_LEN>()
}

/// 12 random bytes for AES-GCM.
pub fn fresh_iv() -> Result<[u8; IV_LEN], CryptoError> {
    fill::<IV_LEN>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consecutive_draws_differ() {
        assert_ne!(fresh_salt().unwrap(), fresh_salt().unwrap());
        assert_ne!(fresh_iv().unwrap(), fresh_iv().unwrap());
    }
}
