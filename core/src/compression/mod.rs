//! compression/mod.rs
//! Plaintext compression applied before encryption.
//!
//! - zlib-wrapped deflate, one stream per envelope.
//! - Inflate output is capped so a small envelope cannot expand without bound.
//! - Inflate failures are never surfaced with stream detail past the envelope
//!   boundary.

pub mod types;
pub mod deflate;

pub use types::*;
pub use deflate::*;
