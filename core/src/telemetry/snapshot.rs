//! telemetry/snapshot.rs
//! Immutable summary handed to the caller for reporting.

use std::time::Duration;
use serde::{Deserialize, Serialize};

use crate::compression::CompressionStats;
use crate::telemetry::counters::CodecCounters;
use crate::telemetry::timers::{StageTimes, TelemetryTimer};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    pub counters: CodecCounters,
    /// Aggregate over every successful document.
    pub stats: CompressionStats,
    pub throughput_bytes_per_sec: f64,
    pub elapsed: Duration,
    pub stage_times: StageTimes,
}

impl TelemetrySnapshot {
    pub fn from(counters: &CodecCounters, timer: &TelemetryTimer) -> Self {
        let elapsed = timer.elapsed();
        let throughput = if elapsed.as_secs_f64() > 0.0 {
            counters.bytes_original as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        Self {
            counters: counters.clone(),
            stats: CompressionStats::from_sizes(counters.bytes_original, counters.bytes_compressed),
            throughput_bytes_per_sec: throughput,
            elapsed,
            stage_times: timer.stage_times,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
