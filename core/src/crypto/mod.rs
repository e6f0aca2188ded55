pub mod types;
pub mod aead;
pub mod kdf;
pub mod mac;
pub mod nonce;

pub use types::*;
pub use aead::*;
pub use kdf::*;
pub use mac::*;
pub use nonce::*;
