//! telemetry/mod.rs
//! Counters, stage timers and immutable snapshots for codec calls.
//!
//! Industry notes:
//! - Counters are plain values merged after the fact, never shared between
//!   worker threads.
//! - Snapshots are serde-serializable so the service layer can persist them
//!   as-is.

pub mod counters;
pub mod timers;
pub mod snapshot;

pub use counters::*;
pub use timers::*;
pub use snapshot::*;
