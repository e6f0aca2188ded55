//! constants.rs
//! Wire constants for the envelope format.
//!
//! All multi-byte integers on the wire are big-endian. Field offsets and
//! lengths here are the single source of truth; the header and container
//! codecs derive their slicing from them.

/// Magic marker leading every envelope ("VE" = vault envelope).
pub const MAGIC_VE: [u8; 2] = *b"VE";

/// Envelope format version this implementation writes and understands.
pub const ENVELOPE_V1: u8 = 1;

/// Intended-use tags.
pub mod purpose_ids {
    /// Generic data at rest.
    pub const DATA_AT_REST: u8 = 0x01;
}

/// Key-derivation identifiers (mirrored in headers).
pub mod kdf_ids {
    pub const PBKDF2_SHA512: u8 = 0x01;
}

/// Cipher identifiers (mirrored in headers).
pub mod cipher_ids {
    pub const AES256_GCM: u8 = 0x01;
}

/// Flag bitmask for payload transforms.
pub mod flags {
    /// Payload was deflated before encryption.
    pub const COMPRESSED: u8 = 0x01;

    /// Every bit this version recognises.
    pub const KNOWN: u8 = COMPRESSED;
}

/// Header field offsets.
pub mod offsets {
    pub const MAGIC: usize = 0;
    pub const VERSION: usize = 2;
    pub const PURPOSE: usize = 3;
    pub const KDF_ID: usize = 4;
    pub const CIPHER_ID: usize = 5;
    pub const FLAGS: usize = 6;
    pub const ITERATIONS: usize = 7;
    pub const RESERVED: usize = 11;
    pub const HEADER_HASH: usize = 13;
}

/// SHA-256 self-hash length at the tail of the header.
pub const HEADER_HASH_LEN: usize = 32;

/// Fixed header size in bytes (13 bytes of fields + 32 byte self-hash).
pub const HEADER_LEN: usize = offsets::HEADER_HASH + HEADER_HASH_LEN;

/// AES-GCM nonce length.
pub const IV_LEN: usize = 12;

/// PBKDF2 salt length.
pub const SALT_LEN: usize = 16;

/// HMAC-SHA256 tag length.
pub const MAC_LEN: usize = 32;

/// Smallest decodable container: header + iv + salt + mac, empty ciphertext.
pub const MIN_CONTAINER_LEN: usize = HEADER_LEN + IV_LEN + SALT_LEN + MAC_LEN;

/// KDF work-factor bounds. Below is insecure, above is a DoS vector.
pub const MIN_ITERATIONS: u32 = 10_000;
pub const MAX_ITERATIONS: u32 = 1_000_000;

/// Work factor written by a default-configured encoder.
pub const DEFAULT_ITERATIONS: u32 = 210_000;

/// Default deflate level (balanced).
pub const DEFAULT_COMPRESSION_LEVEL: u32 = 6;

/// Upper bound on inflated plaintext (16 MiB).
pub const DEFAULT_MAX_PLAINTEXT_LEN: usize = 16 * 1024 * 1024;
