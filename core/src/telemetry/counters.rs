//! telemetry/counters.rs
//! Byte counts for one envelope operation.

use serde::{Deserialize, Serialize};

use crate::container::ContainerView;

#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvelopeCounters {
    pub bytes_plaintext: u64,
    pub bytes_compressed: u64,
    pub bytes_ciphertext: u64,
    pub bytes_overhead: u64,
}

impl EnvelopeCounters {
    /// Record payload sizes through the compress/encrypt stages.
    pub fn add_payload(&mut self, pt_len: usize, comp_len: usize, ct_len: usize) {
        self.bytes_plaintext += pt_len as u64;
        self.bytes_compressed += comp_len as u64;
        self.bytes_ciphertext += ct_len as u64;
    }

    /// Record the fixed header/iv/salt/mac overhead.
    pub fn add_overhead(&mut self) {
        self.bytes_overhead += ContainerView::OVERHEAD as u64;
    }

    /// Compressed size relative to plaintext, capped at 1.0.
    pub fn compression_ratio(&self) -> f64 {
        if self.bytes_plaintext == 0 {
            return 0.0;
        }
        (self.bytes_compressed as f64 / self.bytes_plaintext as f64).min(1.0)
    }
}
