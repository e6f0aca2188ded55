//! container/mod.rs
//! Envelope framing: region concatenation and base64 transport encoding.
//!
//! Responsibilities:
//! - Join `header ‖ ciphertext ‖ iv ‖ salt ‖ mac` and base64 it
//! - Split a decoded buffer back into regions without copying
//!
//! Non-responsibilities:
//! - Cryptography
//! - Header field validation

pub mod types;
pub mod encode;
pub mod decode;

pub use types::*;
pub use encode::*;
pub use decode::*;
