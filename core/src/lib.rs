//! lzw-text-core
//!
//! Adaptive dictionary (LZW family) codec for multilingual text.
//! No Python, no PyO3, no FFI.
//!
//! `compress` preprocesses text (NFC, whitespace folding), encodes it into
//! 16-bit codes against a dictionary pre-loaded with multilingual seeds, and
//! frames the codes. Preprocessing is lossy by construction:
//! `decompress(compress(t)) == preprocess(t)`, not `t`.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod config;

// Codec layers, bottom-up
pub mod encoding;
pub mod dictionary;
pub mod engine;
pub mod framing;
pub mod preprocess;
pub mod compression;
pub mod telemetry;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::compression::{
        compress_batch, decompress_batch, BatchOutcome, Codec, CodecVariant, CompressionReport,
        CompressionStats, TextCodec,
    };
    pub use crate::config::CodecConfig;
    pub use crate::encoding::TextEncoding;
    pub use crate::framing::FramePolicy;
    pub use crate::preprocess::PreprocessMode;
    pub use crate::types::CodecError;
}
