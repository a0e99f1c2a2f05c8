use crate::{
    compression::{CompressionError, DecompressionError},
    config::ConfigError,
    encoding::EncodingError,
    engine::EngineError,
};

/// Unified codec error surfaced to callers.
/// - Ergonomic `From<T>` impls enable `?` from every layer.
/// - Messages aim to be stable so the service layer can map them to statuses.
#[derive(Debug)]
pub enum CodecError {
    /// Declared text encoding is not supported. Raised before any engine work.
    UnsupportedEncoding { name: String },

    /// Configuration rejected by `CodecConfig::validate` or failed to parse.
    InvalidConfig(ConfigError),

    /// Text could not be turned into a frame.
    Compression(CompressionError),

    /// Frame could not be turned back into text.
    Decompression(DecompressionError),

    /// A batch worker exited without reporting the document at `index`.
    WorkerLost { index: usize },
}

impl CodecError {
    /// Corrupted stream: a code that names no entry, or a broken literal.
    pub fn is_invalid_code(&self) -> bool {
        matches!(
            self,
            CodecError::Decompression(DecompressionError::Engine(EngineError::InvalidCode { .. }))
        )
    }

    /// Frame header disagrees with the buffer.
    pub fn is_malformed_frame(&self) -> bool {
        matches!(self, CodecError::Decompression(DecompressionError::Frame(_)))
    }
}

impl std::fmt::Display for CodecError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CodecError::UnsupportedEncoding { name } => write!(f, "unsupported encoding: {}", name),
            CodecError::InvalidConfig(e) => write!(f, "invalid config: {}", e),
            CodecError::Compression(e) => write!(f, "compression error: {}", e),
            CodecError::Decompression(e) => write!(f, "decompression error: {}", e),
            CodecError::WorkerLost { index } => write!(f, "batch worker lost document {}", index),
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CodecError::InvalidConfig(e) => Some(e),
            CodecError::Compression(e) => Some(e),
            CodecError::Decompression(e) => Some(e),
            CodecError::UnsupportedEncoding { .. } | CodecError::WorkerLost { .. } => None,
        }
    }
}

impl From<EncodingError> for CodecError {
    fn from(e: EncodingError) -> Self {
        match e {
            EncodingError::UnsupportedEncoding { name } => CodecError::UnsupportedEncoding { name },
            other => CodecError::Compression(CompressionError::Encoding(other)),
        }
    }
}

impl From<ConfigError> for CodecError {
    fn from(e: ConfigError) -> Self {
        CodecError::InvalidConfig(e)
    }
}

impl From<CompressionError> for CodecError {
    fn from(e: CompressionError) -> Self {
        CodecError::Compression(e)
    }
}

impl From<DecompressionError> for CodecError {
    fn from(e: DecompressionError) -> Self {
        CodecError::Decompression(e)
    }
}
