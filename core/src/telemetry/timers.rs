//! telemetry/timers.rs
//! Stage timers for one envelope operation.

use std::collections::HashMap;
use std::fmt;
use std::time::{Duration, Instant};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    Encode,
    Decode,
    Validate,
    Derive,
    Authenticate,
    Compress,
    Decompress,
    Encrypt,
    Decrypt,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Encode       => "encode",
            Stage::Decode       => "decode",
            Stage::Validate     => "validate",
            Stage::Derive       => "derive",
            Stage::Authenticate => "authenticate",
            Stage::Compress     => "compress",
            Stage::Decompress   => "decompress",
            Stage::Encrypt      => "encrypt",
            Stage::Decrypt      => "decrypt",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StageTimes {
    times: HashMap<Stage, Duration>,
}

impl StageTimes {
    /// Add duration to a stage (accumulates if already present).
    pub fn add(&mut self, stage: Stage, dur: Duration) {
        *self.times.entry(stage).or_insert(Duration::ZERO) += dur;
    }

    /// Run `f`, charging its wall time to `stage`.
    pub fn time<T>(&mut self, stage: Stage, f: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let out = f();
        self.add(stage, start.elapsed());
        out
    }

    pub fn get(&self, stage: Stage) -> Duration {
        self.times.get(&stage).copied().unwrap_or(Duration::ZERO)
    }

    pub fn contains(&self, stage: Stage) -> bool {
        self.times.contains_key(&stage)
    }

    /// Sum all stage durations.
    pub fn total(&self) -> Duration {
        self.times.values().copied().sum()
    }

    /// One-line `stage=µs` summary in a stable order, for log fields.
    pub fn summary(&self) -> String {
        let mut stages: Vec<_> = self.times.iter().collect();
        stages.sort_by_key(|(s, _)| **s as u8);
        stages
            .into_iter()
            .map(|(s, d)| format!("{}={}us", s, d.as_micros()))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
