//! compression/types.rs
//! Variant ids, codec descriptions, per-layer errors and the `Codec` seam.
use std::fmt;
use num_enum::TryFromPrimitive;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::compression::stats::{CompressionReport, CompressionStats};
use crate::dictionary::SeedSet;
use crate::encoding::EncodingError;
use crate::engine::EngineError;
use crate::framing::FrameError;
use crate::preprocess::PreprocessMode;
use crate::telemetry::StageTimes;
use crate::types::CodecError;

/// Stable variant ids.
pub mod variant_ids {
    pub const PLAIN: u8  = 0x01;
    pub const HYBRID: u8 = 0x02;
}

#[repr(u8)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, TryFromPrimitive, Serialize, Deserialize)]
pub enum CodecVariant {
    /// Base range only, NFC only.
    #[serde(rename = "lzw")]
    Plain  = variant_ids::PLAIN,
    /// Multilingual seeds, full preprocessing.
    #[default]
    #[serde(rename = "hybrid-lzw", alias = "lzw77", alias = "hybrid")]
    Hybrid = variant_ids::HYBRID,
}

impl fmt::Display for CodecVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecVariant::Plain  => f.write_str("lzw"),
            CodecVariant::Hybrid => f.write_str("hybrid-lzw"),
        }
    }
}

/// What a variant does, as resolved by the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecInfo {
    pub variant: CodecVariant,
    pub name: &'static str,
    pub seeded: bool,
    pub preprocess: PreprocessMode,
}

impl CodecInfo {
    pub fn seed_set(&self) -> &'static SeedSet {
        if self.seeded { SeedSet::multilingual() } else { SeedSet::empty() }
    }
}

/// Failure while turning text into a frame.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompressionError {
    #[error(transparent)]
    Encoding(#[from] EncodingError),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Frame(#[from] FrameError),

    #[error("code stream of {codes} codes does not fit a frame")]
    TooManyCodes { codes: usize },
}

/// Failure while turning a frame back into text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecompressionError {
    #[error(transparent)]
    Frame(#[from] FrameError),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

// Require Send + Sync so one codec can be shared by batch workers.
pub trait Codec: Send + Sync {
    /// Compress one document and describe what happened.
    fn compress_with_report(&self, text: &str) -> Result<(Vec<u8>, CompressionReport), CodecError>;

    /// Reconstruct the canonical text of one document, with stage timings.
    fn decompress_timed(&self, data: &[u8]) -> Result<(String, StageTimes), CodecError>;

    /// Size statistics for `original` against its compressed form.
    fn stats(&self, original: &str, compressed: &[u8]) -> CompressionStats;

    fn compress(&self, text: &str) -> Result<Vec<u8>, CodecError> {
        self.compress_with_report(text).map(|(bytes, _)| bytes)
    }

    fn decompress(&self, data: &[u8]) -> Result<String, CodecError> {
        self.decompress_timed(data).map(|(text, _)| text)
    }
}
