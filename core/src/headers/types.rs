//! headers/types.rs
//! Envelope header struct, algorithm registries, and header errors.
//!
//! - Fixed 45-byte header: 13 bytes of fields followed by a SHA-256 self-hash.
//! - Big-endian integers throughout for cross-implementation parity.
//! - Reserved bytes allow future fields without changing size; always zero them.

use std::fmt;
use num_enum::TryFromPrimitive;
use thiserror::Error;

use crate::constants::{cipher_ids, flags, kdf_ids, purpose_ids};
use crate::constants::{DEFAULT_ITERATIONS, ENVELOPE_V1, HEADER_LEN, MAGIC_VE};
use crate::types::FailureKind;

/// Fixed header size in bytes.
pub const HEADER_LEN_V1: usize = HEADER_LEN;

/// Intended-use registry.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, TryFromPrimitive)]
pub enum Purpose {
    DataAtRest = purpose_ids::DATA_AT_REST,
}
impl Purpose {
    pub fn verify(raw: u8) -> Result<(), HeaderError> {
        Purpose::try_from_primitive(raw)
            .map(|_| ())
            .map_err(|_| HeaderError::UnknownPurpose { raw })
    }
}

/// Key-derivation registry.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, TryFromPrimitive)]
pub enum KdfAlgorithm {
    Pbkdf2Sha512 = kdf_ids::PBKDF2_SHA512,
}
impl KdfAlgorithm {
    pub fn verify(raw: u8) -> Result<(), HeaderError> {
        KdfAlgorithm::try_from_primitive(raw)
            .map(|_| ())
            .map_err(|_| HeaderError::UnknownKdf { raw })
    }
}

/// Cipher registry.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, TryFromPrimitive)]
pub enum CipherSuite {
    Aes256Gcm = cipher_ids::AES256_GCM,
}
impl CipherSuite {
    pub fn verify(raw: u8) -> Result<(), HeaderError> {
        CipherSuite::try_from_primitive(raw)
            .map(|_| ())
            .map_err(|_| HeaderError::UnknownCipherSuite { raw })
    }
}

/// Decoded header fields. The self-hash is not stored: `build_header`
/// computes it and `parse_header` checks it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvelopeHeader {
    pub magic: [u8; 2],    // "VE"
    pub version: u8,       // format version
    pub purpose: u8,       // intended use tag
    pub kdf_id: u8,        // key derivation enum
    pub cipher_id: u8,     // cipher enum
    pub flags: u8,         // payload transform bits
    pub iterations: u32,   // KDF work factor
    pub reserved: [u8; 2], // future fields; must be zero
}

impl Default for EnvelopeHeader {
    fn default() -> Self {
        Self::new(DEFAULT_ITERATIONS)
    }
}

impl EnvelopeHeader {
    pub const LEN: usize = HEADER_LEN_V1;

    /// Header for a fresh envelope: PBKDF2-SHA512, AES-256-GCM, compressed payload.
    pub fn new(iterations: u32) -> Self {
        Self {
            magic: MAGIC_VE,
            version: ENVELOPE_V1,
            purpose: Purpose::DataAtRest as u8,
            kdf_id: KdfAlgorithm::Pbkdf2Sha512 as u8,
            cipher_id: CipherSuite::Aes256Gcm as u8,
            flags: flags::COMPRESSED,
            iterations,
            reserved: [0u8; 2],
        }
    }

    /// Whether the payload was deflated before encryption.
    pub fn is_compressed(&self) -> bool {
        self.flags & flags::COMPRESSED != 0
    }
}

pub fn enum_name_or_hex<T>(raw: T::Primitive) -> String
where
    T: TryFromPrimitive + fmt::Debug,
    T::Primitive: fmt::LowerHex,
{
    match T::try_from_primitive(raw) {
        Ok(variant) => format!("{:?}", variant),
        Err(_) => format!("0x{:02x}", raw),
    }
}

pub fn registry_name<T>(raw: &u8) -> String
where
    T: TryFromPrimitive<Primitive = u8> + fmt::Debug,
{
    enum_name_or_hex::<T>(*raw)
}

pub fn fmt_bytes(b: &[u8]) -> String {
    if b.iter().all(|&c| c.is_ascii_graphic() || c == b' ') {
        format!("b\"{}\"", String::from_utf8_lossy(b))
    } else {
        format!("0x{}", hex::encode(b))
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HeaderError {
    /// Buffer too short to contain a header.
    #[error("header buffer too short: {have} < {need}")]
    BufferTooShort { have: usize, need: usize },

    #[error("invalid magic: expected {}, got {}", fmt_bytes(.need), fmt_bytes(.have))]
    InvalidMagic { have: [u8; 2], need: [u8; 2] },

    #[error("unsupported version: {have}")]
    UnsupportedVersion { have: u8 },

    /// Recomputed SHA-256 over the header prefix differs from the stored hash.
    #[error("header hash mismatch")]
    HeaderHashMismatch,

    #[error("reserved bytes must be zero, got {}", fmt_bytes(.reserved))]
    ReservedBytesNonZero { reserved: [u8; 2] },

    #[error("iterations out of range: {have} not in [{min}, {max}]")]
    IterationsOutOfRange { have: u32, min: u32, max: u32 },

    #[error("unknown key derivation: {}", registry_name::<KdfAlgorithm>(.raw))]
    UnknownKdf { raw: u8 },

    #[error("unknown cipher suite: {}", registry_name::<CipherSuite>(.raw))]
    UnknownCipherSuite { raw: u8 },

    #[error("unknown flag bits: 0x{raw:02x}")]
    UnknownFlags { raw: u8 },

    #[error("unknown purpose: {}", registry_name::<Purpose>(.raw))]
    UnknownPurpose { raw: u8 },
}

impl HeaderError {
    pub fn kind(&self) -> FailureKind {
        use HeaderError::*;
        match self {
            HeaderHashMismatch => FailureKind::Integrity,
            UnknownKdf { .. } | UnknownCipherSuite { .. } => FailureKind::UnsupportedAlgorithm,
            BufferTooShort { .. }
            | InvalidMagic { .. }
            | UnsupportedVersion { .. }
            | ReservedBytesNonZero { .. }
            | IterationsOutOfRange { .. }
            | UnknownFlags { .. }
            | UnknownPurpose { .. } => FailureKind::Format,
        }
    }
}
