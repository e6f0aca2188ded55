//! headers/decode.rs
//!
//! Parses and validates the fixed 45-byte envelope header.
//!
//! Checks run in a fixed order and the first failure wins:
//! length, magic, version, self-hash, reserved, iterations, then the
//! algorithm and flag registries. Each failure carries a distinct reason;
//! callers above the envelope boundary collapse them into one opaque error.

use subtle::ConstantTimeEq;

use crate::constants::{flags, offsets};
use crate::constants::{ENVELOPE_V1, MAGIC_VE, MAX_ITERATIONS, MIN_ITERATIONS};
use crate::headers::encode::header_hash;
use crate::headers::types::{CipherSuite, EnvelopeHeader, HeaderError, KdfAlgorithm, Purpose};

/// Parse the first `EnvelopeHeader::LEN` bytes of `buf`.
pub fn parse_header(buf: &[u8]) -> Result<EnvelopeHeader, HeaderError> {
    if buf.len() < EnvelopeHeader::LEN {
        return Err(HeaderError::BufferTooShort { have: buf.len(), need: EnvelopeHeader::LEN });
    }
    let buf = &buf[..EnvelopeHeader::LEN];

    let mut i = 0usize;
    #[inline] fn get_u8(buf: &[u8], i: &mut usize) -> u8 { let v = buf[*i]; *i += 1; v }
    #[inline] fn get_u32(buf: &[u8], i: &mut usize) -> u32 {
        let v = u32::from_be_bytes([buf[*i], buf[*i + 1], buf[*i + 2], buf[*i + 3]]);
        *i += 4;
        v
    }
    #[inline] fn get_bytes<const N: usize>(buf: &[u8], i: &mut usize) -> [u8; N] {
        let mut dst = [0u8; N]; dst.copy_from_slice(&buf[*i..*i + N]); *i += N; dst
    }

    let h = EnvelopeHeader {
        magic:      get_bytes::<2>(buf, &mut i), // 0..2
        version:    get_u8(buf, &mut i),         // 2
        purpose:    get_u8(buf, &mut i),         // 3
        kdf_id:     get_u8(buf, &mut i),         // 4
        cipher_id:  get_u8(buf, &mut i),         // 5
        flags:      get_u8(buf, &mut i),         // 6
        iterations: get_u32(buf, &mut i),        // 7..11
        reserved:   get_bytes::<2>(buf, &mut i), // 11..13
    };
    debug_assert_eq!(i, offsets::HEADER_HASH);

    if h.magic != MAGIC_VE {
        return Err(HeaderError::InvalidMagic { have: h.magic, need: MAGIC_VE });
    }

    if h.version != ENVELOPE_V1 {
        return Err(HeaderError::UnsupportedVersion { have: h.version });
    }

    let computed = header_hash(&buf[..offsets::HEADER_HASH]);
    let stored = &buf[offsets::HEADER_HASH..];
    if computed[..].ct_eq(stored).unwrap_u8() != 1 {
        return Err(HeaderError::HeaderHashMismatch);
    }

    if h.reserved.iter().any(|&b| b != 0) {
        return Err(HeaderError::ReservedBytesNonZero { reserved: h.reserved });
    }

    if !(MIN_ITERATIONS..=MAX_ITERATIONS).contains(&h.iterations) {
        return Err(HeaderError::IterationsOutOfRange {
            have: h.iterations,
            min: MIN_ITERATIONS,
            max: MAX_ITERATIONS,
        });
    }

    KdfAlgorithm::verify(h.kdf_id)?;
    CipherSuite::verify(h.cipher_id)?;

    if h.flags & !flags::KNOWN != 0 {
        return Err(HeaderError::UnknownFlags { raw: h.flags });
    }

    Purpose::verify(h.purpose)?;

    Ok(h)
}
