//! compression/stats.rs
//! Size statistics and per-call reports.

use serde::{Deserialize, Serialize};

use crate::telemetry::StageTimes;

/// Sizes of one document (or an aggregate) before and after compression.
///
/// `original_size` is measured in bytes of the declared encoding, not symbols.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CompressionStats {
    pub original_size: u64,
    pub compressed_size: u64,
    /// `(1 - compressed/original) * 100`, two decimals. Negative on expansion.
    pub ratio_percent: f64,
    /// `original - compressed`. Negative on expansion.
    pub bytes_saved: i64,
}

impl CompressionStats {
    pub fn from_sizes(original_size: u64, compressed_size: u64) -> Self {
        if original_size == 0 {
            return Self { original_size, compressed_size, ratio_percent: 0.0, bytes_saved: 0 };
        }

        let ratio = (1.0 - compressed_size as f64 / original_size as f64) * 100.0;
        Self {
            original_size,
            compressed_size,
            ratio_percent: round2(ratio),
            bytes_saved: original_size as i64 - compressed_size as i64,
        }
    }

    /// Combine two stats as if their documents were one.
    pub fn combine(&self, other: &CompressionStats) -> CompressionStats {
        CompressionStats::from_sizes(
            self.original_size + other.original_size,
            self.compressed_size + other.compressed_size,
        )
    }
}

#[inline]
fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Everything one `compress` call can tell the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompressionReport {
    pub stats: CompressionStats,
    /// Codes in the frame (literals count three).
    pub codes: u64,
    pub literals: u64,
    pub learned: u64,
    pub generations: u32,
    pub stage_times: StageTimes,
}
