//! config.rs
//! Codec configuration.
//!
//! Carried next to every compressed blob by the caller: decompression needs
//! the same encoding, variant and dictionary size that compression used.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::compression::CodecVariant;
use crate::constants::{CODE_SPACE, DEFAULT_MAX_DICT_SIZE, MIN_DICT_SIZE};
use crate::encoding::TextEncoding;
use crate::framing::FramePolicy;
use crate::types::CodecError;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("max_dict_size {value} outside {min}..={max}")]
    DictSizeOutOfRange { value: u32, min: u32, max: u32 },

    #[error("unknown codec variant: {name}")]
    UnknownVariant { name: String },

    #[error("config json: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    pub encoding: TextEncoding,
    pub variant: CodecVariant,
    /// Exclusive bound on dictionary codes.
    pub max_dict_size: u32,
    pub frame_policy: FramePolicy,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            encoding: TextEncoding::Utf8,
            variant: CodecVariant::Hybrid,
            max_dict_size: DEFAULT_MAX_DICT_SIZE,
            frame_policy: FramePolicy::Strict,
        }
    }
}

impl CodecConfig {
    /// Default configuration for a declared encoding name.
    pub fn for_encoding(name: &str) -> Result<Self, CodecError> {
        let encoding = TextEncoding::from_name(name)?;
        Ok(Self { encoding, ..Self::default() })
    }

    /// Parse and validate a JSON config; missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: CodecConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn with_encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn with_variant(mut self, variant: CodecVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_max_dict_size(mut self, max_dict_size: u32) -> Self {
        self.max_dict_size = max_dict_size;
        self
    }

    pub fn with_frame_policy(mut self, frame_policy: FramePolicy) -> Self {
        self.frame_policy = frame_policy;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_DICT_SIZE..=CODE_SPACE).contains(&self.max_dict_size) {
            return Err(ConfigError::DictSizeOutOfRange {
                value: self.max_dict_size,
                min: MIN_DICT_SIZE,
                max: CODE_SPACE,
            });
        }
        Ok(())
    }
}
