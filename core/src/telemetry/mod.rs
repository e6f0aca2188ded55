//! telemetry/mod.rs
//! Per-call counters and stage timers.
//!
//! Collected inside a single encrypt/decrypt call and emitted through
//! `tracing` at trace level. Nothing is aggregated across calls, so there is
//! no shared state to synchronise.

pub mod counters;
pub mod timers;

pub use counters::*;
pub use timers::*;
