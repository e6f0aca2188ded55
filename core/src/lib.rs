//! vault-envelope
//!
//! Password-derived, tamper-evident encryption envelope for data at rest.
//! Pure Rust, synchronous core with an optional worker pool.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod config;

// Layers
pub mod headers;
pub mod crypto;
pub mod compression;
pub mod container;
pub mod telemetry;

// Pipeline
pub mod envelope;
pub mod pool;

pub use config::{ConfigError, EnvelopeConfig, PoolConfig};
pub use envelope::{decrypt, decrypt_bytes, encrypt, encrypt_bytes, DecryptState, Envelope};
pub use headers::EnvelopeHeader;
pub use pool::{PoolError, Task, TaskError, Ticket, WorkerPool};
pub use types::{DecryptError, EnvelopeError, FailureKind};

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::{
        decrypt, encrypt, DecryptError, Envelope, EnvelopeConfig, EnvelopeError, PoolConfig,
        Task, WorkerPool,
    };
}
