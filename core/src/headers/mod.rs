//! headers/mod.rs
//! Envelope header codec.
//!
//! - Fixed-size header (45 bytes) with a trailing SHA-256 self-hash so corruption
//!   is caught before any key derivation happens.
//! - Explicit ids (purpose, KDF, cipher) avoid silent reinterpretation; unknown
//!   values are rejected, never defaulted.
//! - The whole header is also covered by the outer HMAC.

pub mod types;
pub mod encode;
pub mod decode;

pub use types::*;
pub use encode::*;
pub use decode::*;
