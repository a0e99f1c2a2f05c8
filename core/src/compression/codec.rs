//! compression/codec.rs
//! `TextCodec`: preprocess -> encode -> frame, and back.
//!
//! Every call owns a fresh `DictionaryEngine`; the codec itself only holds its
//! configuration and is freely shared between threads.

use log::debug;

use crate::compression::registry::describe;
use crate::compression::stats::{CompressionReport, CompressionStats};
use crate::compression::types::{Codec, CodecInfo, CompressionError, DecompressionError};
use crate::config::CodecConfig;
use crate::encoding::TextEncoding;
use crate::engine::DictionaryEngine;
use crate::framing::{decode_frame, encode_frame, CodeFrameHeader};
use crate::preprocess::preprocess;
use crate::telemetry::{Stage, StageTimes};
use crate::types::CodecError;

#[derive(Debug, Clone, Copy)]
pub struct TextCodec {
    config: CodecConfig,
    info: CodecInfo,
}

impl TextCodec {
    pub fn new(config: CodecConfig) -> Result<Self, CodecError> {
        config.validate()?;
        Ok(Self { config, info: describe(config.variant) })
    }

    /// Default hybrid codec for a declared encoding name.
    pub fn with_encoding(name: &str) -> Result<Self, CodecError> {
        Self::new(CodecConfig::for_encoding(name)?)
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    pub fn info(&self) -> &CodecInfo {
        &self.info
    }

    pub fn encoding(&self) -> TextEncoding {
        self.config.encoding
    }

    /// The canonical form `decompress(compress(text))` reproduces.
    pub fn preprocess(&self, text: &str) -> String {
        preprocess(text, self.info.preprocess)
    }

    fn engine(&self) -> DictionaryEngine {
        DictionaryEngine::new(self.config.encoding, self.info.seed_set(), self.config.max_dict_size)
    }

    fn compress_inner(&self, text: &str) -> Result<(Vec<u8>, CompressionReport), CompressionError> {
        let mut stage_times = StageTimes::default();
        let canonical = stage_times.measure(Stage::Preprocess, || self.preprocess(text));

        if canonical.is_empty() {
            let report = CompressionReport {
                stats: self.stats(text, &[]),
                stage_times,
                ..CompressionReport::default()
            };
            return Ok((Vec::new(), report));
        }

        self.config.encoding.ensure_encodable(&canonical)?;

        let mut engine = self.engine();
        let encoded = stage_times.measure(Stage::Encode, || engine.encode(&canonical))?;

        let code_count = u32::try_from(encoded.codes.len())
            .map_err(|_| CompressionError::TooManyCodes { codes: encoded.codes.len() })?;
        let learned = u32::try_from(encoded.learned).unwrap_or(u32::MAX);
        let header = CodeFrameHeader::new(code_count, learned);
        let bytes = stage_times.measure(Stage::Frame, || encode_frame(&header, &encoded.codes))?;

        let report = CompressionReport {
            stats: self.stats(text, &bytes),
            codes: encoded.codes.len() as u64,
            literals: encoded.literals as u64,
            learned: encoded.learned,
            generations: encoded.generations,
            stage_times,
        };
        debug!(
            "{} compress: {} -> {} bytes ({}%, {} generations)",
            self.info.name, report.stats.original_size, report.stats.compressed_size,
            report.stats.ratio_percent, report.generations
        );
        Ok((bytes, report))
    }

    fn decompress_inner(&self, data: &[u8]) -> Result<(String, StageTimes), DecompressionError> {
        let mut stage_times = StageTimes::default();
        if data.is_empty() {
            return Ok((String::new(), stage_times));
        }

        let frame = stage_times.measure(Stage::Unframe, || decode_frame(data, self.config.frame_policy))?;
        let mut engine = self.engine();
        let text = stage_times.measure(Stage::Decode, || engine.decode(&frame.codes))?;
        debug!(
            "{} decompress: {} bytes, {} codes -> {} bytes of text",
            self.info.name, data.len(), frame.codes.len(), text.len()
        );
        Ok((text, stage_times))
    }
}

impl Codec for TextCodec {
    fn compress_with_report(&self, text: &str) -> Result<(Vec<u8>, CompressionReport), CodecError> {
        Ok(self.compress_inner(text)?)
    }

    fn decompress_timed(&self, data: &[u8]) -> Result<(String, StageTimes), CodecError> {
        Ok(self.decompress_inner(data)?)
    }

    /// `original_size` counts bytes of `original` in the configured encoding.
    fn stats(&self, original: &str, compressed: &[u8]) -> CompressionStats {
        CompressionStats::from_sizes(
            self.config.encoding.encoded_len(original) as u64,
            compressed.len() as u64,
        )
    }
}
