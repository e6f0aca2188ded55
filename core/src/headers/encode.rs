//! headers/encode.rs
//!
//! Serializes `EnvelopeHeader` into its fixed 45-byte big-endian form and
//! seals it with a SHA-256 self-hash. No validation: every field comes from
//! encoder constants or a validated config.

use sha2::{Digest, Sha256};

use crate::constants::offsets;
use crate::headers::types::{EnvelopeHeader, HEADER_LEN_V1};

/// Build the header bytes for `h`.
///
/// Layout (big-endian):
/// ```text
/// 0..2   magic
/// 2      version
/// 3      purpose
/// 4      kdf id
/// 5      cipher id
/// 6      flags
/// 7..11  iterations
/// 11..13 reserved
/// 13..45 SHA-256 over bytes 0..13
/// ```
pub fn build_header(h: &EnvelopeHeader) -> [u8; HEADER_LEN_V1] {
    let mut out = [0u8; HEADER_LEN_V1];
    let mut i = 0usize;

    fn put_u8(out: &mut [u8], i: &mut usize, v: u8) {
        out[*i] = v;
        *i += 1;
    }
    fn put_u32(out: &mut [u8], i: &mut usize, v: u32) {
        out[*i..*i + 4].copy_from_slice(&v.to_be_bytes());
        *i += 4;
    }
    fn put_bytes(out: &mut [u8], i: &mut usize, b: &[u8]) {
        out[*i..*i + b.len()].copy_from_slice(b);
        *i += b.len();
    }

    put_bytes(&mut out, &mut i, &h.magic);   // 0..2
    put_u8(&mut out, &mut i, h.version);     // 2
    put_u8(&mut out, &mut i, h.purpose);     // 3
    put_u8(&mut out, &mut i, h.kdf_id);      // 4
    put_u8(&mut out, &mut i, h.cipher_id);   // 5
    put_u8(&mut out, &mut i, h.flags);       // 6
    put_u32(&mut out, &mut i, h.iterations); // 7..11
    put_bytes(&mut out, &mut i, &h.reserved); // 11..13

    debug_assert_eq!(i, offsets::HEADER_HASH, "header fields wrote incorrect length");

    let hash = header_hash(&out[..offsets::HEADER_HASH]);
    out[offsets::HEADER_HASH..].copy_from_slice(&hash);

    out
}

/// SHA-256 over the header field prefix.
pub(crate) fn header_hash(prefix: &[u8]) -> [u8; 32] {
    Sha256::digest(prefix).into()
}
