//! crypto/mac.rs
//! Outer HMAC-SHA256 over `header ‖ ciphertext ‖ iv ‖ salt`.
//!
//! The order is part of the wire contract and must match on both sides.
//! Verification compares in constant time and runs before the cipher is
//! ever touched.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::constants::MAC_LEN;
use crate::crypto::types::{CryptoError, KEY_LEN_32};

type HmacSha256 = Hmac<Sha256>;

fn keyed(mac_key: &[u8]) -> Result<HmacSha256, CryptoError> {
    if mac_key.len() != KEY_LEN_32 {
        return Err(CryptoError::InvalidKeyLen { expected: KEY_LEN_32, actual: mac_key.len() });
    }
    HmacSha256::new_from_slice(mac_key)
        .map_err(|_| CryptoError::InvalidKeyLen { expected: KEY_LEN_32, actual: mac_key.len() })
}

/// Compute the envelope tag.
pub fn tag(
    mac_key: &[u8],
    header: &[u8],
    ciphertext: &[u8],
    iv: &[u8],
    salt: &[u8],
) -> Result<[u8; MAC_LEN], CryptoError> {
    let mut mac = keyed(mac_key)?;
    mac.update(header);
    mac.update(ciphertext);
    mac.update(iv);
    mac.update(salt);
    Ok(mac.finalize().into_bytes().into())
}

/// Recompute the tag and compare it against `expected` in constant time.
pub fn verify(
    mac_key: &[u8],
    expected: &[u8],
    header: &[u8],
    ciphertext: &[u8],
    iv: &[u8],
    salt: &[u8],
) -> Result<(), CryptoError> {
    let computed = tag(mac_key, header, ciphertext, iv, salt)?;
    if constant_time_eq(&computed, expected) {
        Ok(())
    } else {
        Err(CryptoError::MacMismatch)
    }
}

/// Length-checked, no early exit on the first differing byte.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && bool::from(a.ct_eq(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: [u8; KEY_LEN_32] = [0x42; KEY_LEN_32];

    #[test]
    fn tag_verifies() {
        let t = tag(&KEY, b"h", b"ct", b"iv", b"salt").unwrap();
        verify(&KEY, &t, b"h", b"ct", b"iv", b"salt").unwrap();
    }

    #[test]
    fn region_boundaries_are_bound() {
        // Moving a byte across the header/ciphertext boundary changes nothing in
        // the concatenation, so the order itself is what callers must preserve.
        let a = tag(&KEY, b"hc", b"t", b"iv", b"salt").unwrap();
        let b = tag(&KEY, b"h", b"ct", b"iv", b"salt").unwrap();
        assert_eq!(a, b);

        let swapped = tag(&KEY, b"h", b"ct", b"salt", b"iv").unwrap();
        assert_ne!(a, swapped);
    }

    #[test]
    fn mismatch_and_length_mismatch_rejected() {
        let mut t = tag(&KEY, b"h", b"ct", b"iv", b"salt").unwrap();
        t[31] ^= 1;
        assert!(matches!(verify(&KEY, &t, b"h", b"ct", b"iv", b"salt"), Err(CryptoError::MacMismatch)));
        assert!(matches!(verify(&KEY, &t[..16], b"h", b"ct", b"iv", b"salt"), Err(CryptoError::MacMismatch)));
    }

    #[test]
    fn constant_time_eq_basics() {
        assert!(constant_time_eq(b"abc", b"abc"));
        assert!(!constant_time_eq(b"abc", b"abd"));
        assert!(!constant_time_eq(b"abc", b"ab"));
        assert!(constant_time_eq(b"", b""));
    }
}
