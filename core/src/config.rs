//! config.rs
//! Encoder and worker-pool settings.
//!
//! Both structs deserialize with defaults for missing fields, so a partial
//! JSON document is enough. Validation is explicit: callers get a
//! `ConfigError` before anything is encrypted or spawned.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    DEFAULT_COMPRESSION_LEVEL, DEFAULT_ITERATIONS, DEFAULT_MAX_PLAINTEXT_LEN, MAX_ITERATIONS,
    MIN_ITERATIONS,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("iterations {have} outside [{min}, {max}]")]
    IterationsOutOfRange { have: u32, min: u32, max: u32 },

    #[error("compression level {have} outside 0..=9")]
    CompressionLevel { have: u32 },

    #[error("max_plaintext_len must be non-zero")]
    ZeroPlaintextCap,

    #[error("queue_depth must be at least 1")]
    ZeroQueueDepth,

    #[error("invalid config document: {0}")]
    Parse(String),
}

/// Envelope encoder/decoder settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnvelopeConfig {
    /// PBKDF2 work factor written into new envelopes. Decoding always uses
    /// the header's value.
    pub iterations: u32,

    /// Deflate level, 0..=9.
    pub compression_level: u32,

    /// Cap on inflated plaintext size.
    pub max_plaintext_len: usize,
}

impl Default for EnvelopeConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            compression_level: DEFAULT_COMPRESSION_LEVEL,
            max_plaintext_len: DEFAULT_MAX_PLAINTEXT_LEN,
        }
    }
}

impl EnvelopeConfig {
    /// Parse and validate a JSON document.
    pub fn from_json(doc: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(doc).map_err(|e| ConfigError::Parse(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_ITERATIONS..=MAX_ITERATIONS).contains(&self.iterations) {
            return Err(ConfigError::IterationsOutOfRange {
                have: self.iterations,
                min: MIN_ITERATIONS,
                max: MAX_ITERATIONS,
            });
        }
        if self.compression_level > 9 {
            return Err(ConfigError::CompressionLevel { have: self.compression_level });
        }
        if self.max_plaintext_len == 0 {
            return Err(ConfigError::ZeroPlaintextCap);
        }
        Ok(())
    }
}

/// Worker pool sizing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PoolConfig {
    /// Worker thread count; 0 picks logical CPUs minus one (at least one).
    pub workers: usize,

    /// Bounded per-worker queue capacity.
    pub queue_depth: usize,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self { workers: 0, queue_depth: 16 }
    }
}

impl PoolConfig {
    pub fn from_json(doc: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(doc).map_err(|e| ConfigError::Parse(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.queue_depth == 0 {
            return Err(ConfigError::ZeroQueueDepth);
        }
        Ok(())
    }

    /// Resolved worker count.
    pub fn worker_count(&self) -> usize {
        match self.workers {
            0 => num_cpus::get().saturating_sub(1).max(1), // leave one core free
            n => n,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        EnvelopeConfig::default().validate().unwrap();
        PoolConfig::default().validate().unwrap();
    }

    #[test]
    fn partial_json_fills_defaults() {
        let cfg = EnvelopeConfig::from_json(r#"{ "iterations": 50000 }"#).unwrap();
        assert_eq!(cfg.iterations, 50_000);
        assert_eq!(cfg.compression_level, DEFAULT_COMPRESSION_LEVEL);
        assert_eq!(cfg.max_plaintext_len, DEFAULT_MAX_PLAINTEXT_LEN);
    }

    #[test]
    fn out_of_bounds_iterations_rejected() {
        assert_eq!(
            EnvelopeConfig::from_json(r#"{ "iterations": 9999 }"#).unwrap_err(),
            ConfigError::IterationsOutOfRange { have: 9_999, min: MIN_ITERATIONS, max: MAX_ITERATIONS }
        );
        assert!(EnvelopeConfig::from_json(r#"{ "iterations": 1000001 }"#).is_err());
    }

    #[test]
    fn unknown_fields_rejected() {
        assert!(matches!(
            EnvelopeConfig::from_json(r#"{ "iteration": 50000 }"#),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn worker_count_resolves() {
        assert!(PoolConfig::default().worker_count() >= 1);
        assert_eq!(PoolConfig { workers: 3, queue_depth: 1 }.worker_count(), 3);
        assert_eq!(
            PoolConfig::from_json(r#"{ "queue_depth": 0 }"#).unwrap_err(),
            ConfigError::ZeroQueueDepth
        );
    }
}
