//! compression/registry.rs
//! Variant registry: names and ids to codec descriptions.

use crate::compression::types::{CodecInfo, CodecVariant, variant_ids};
use crate::config::ConfigError;
use crate::preprocess::PreprocessMode;

pub fn describe(variant: CodecVariant) -> CodecInfo {
    match variant {
        CodecVariant::Plain => CodecInfo {
            variant,
            name: "lzw",
            seeded: false,
            preprocess: PreprocessMode::NormalizeOnly,
        },
        CodecVariant::Hybrid => CodecInfo {
            variant,
            name: "hybrid-lzw",
            seeded: true,
            preprocess: PreprocessMode::Full,
        },
    }
}

/// Resolve a variant label as sent by callers (`lzw`, `hybrid-lzw`, `lzw77`).
pub fn resolve(name: &str) -> Result<CodecInfo, ConfigError> {
    match name.trim().to_ascii_lowercase().as_str() {
        "lzw" | "plain" => Ok(describe(CodecVariant::Plain)),
        "hybrid-lzw" | "hybrid" | "lzw77" => Ok(describe(CodecVariant::Hybrid)),
        _ => Err(ConfigError::UnknownVariant { name: name.to_string() }),
    }
}

pub fn resolve_id(id: u8) -> Result<CodecInfo, ConfigError> {
    match id {
        variant_ids::PLAIN => Ok(describe(CodecVariant::Plain)),
        variant_ids::HYBRID => Ok(describe(CodecVariant::Hybrid)),
        other => Err(ConfigError::UnknownVariant { name: format!("0x{:02x}", other) }),
    }
}
