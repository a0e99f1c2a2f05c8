//! telemetry/counters.rs
//! Mutable counters collected while compressing or decompressing documents.
//!
//! Converted into an immutable `TelemetrySnapshot` once the work is done.
use std::ops::AddAssign;
use serde::{Deserialize, Serialize};

use crate::compression::{CompressionReport, CompressionStats};

#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecCounters {
    pub documents: u64,
    pub failures: u64,
    /// Bytes of original text in the declared encoding.
    pub bytes_original: u64,
    /// Frame bytes.
    pub bytes_compressed: u64,
    pub codes_emitted: u64,
    pub literals_emitted: u64,
    pub entries_learned: u64,
    pub generations: u64,
}

impl CodecCounters {
    /// Record one successful compression.
    pub fn add_compressed(&mut self, report: &CompressionReport) {
        self.documents += 1;
        self.bytes_original += report.stats.original_size;
        self.bytes_compressed += report.stats.compressed_size;
        self.codes_emitted += report.codes;
        self.literals_emitted += report.literals;
        self.entries_learned += report.learned;
        self.generations += u64::from(report.generations);
    }

    /// Record one successful decompression.
    ///
    /// `stats` compares the frame with the reconstructed text. Under the
    /// hybrid variant that text is preprocessed, so `bytes_original` counts
    /// canonical text rather than the document that was compressed.
    pub fn add_decompressed(&mut self, stats: &CompressionStats) {
        self.documents += 1;
        self.bytes_original += stats.original_size;
        self.bytes_compressed += stats.compressed_size;
    }

    pub fn add_failure(&mut self) {
        self.failures += 1;
    }

    pub fn merge(&mut self, other: &CodecCounters) {
        self.documents += other.documents;
        self.failures += other.failures;
        self.bytes_original += other.bytes_original;
        self.bytes_compressed += other.bytes_compressed;
        self.codes_emitted += other.codes_emitted;
        self.literals_emitted += other.literals_emitted;
        self.entries_learned += other.entries_learned;
        self.generations += other.generations;
    }
}

impl AddAssign for CodecCounters {
    fn add_assign(&mut self, rhs: Self) {
        self.merge(&rhs);
    }
}
