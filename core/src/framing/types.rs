use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{CODE_WIDTH, FRAME_HEADER_LEN};

/// Canonical frame header (fixed size, big-endian).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CodeFrameHeader {
    /// Number of 16-bit codes in the payload.
    pub code_count: u32,
    /// Dictionary entries learned while compressing (diagnostic only).
    pub learned: u32,
}

impl CodeFrameHeader {
    pub const LEN: usize = FRAME_HEADER_LEN;

    pub fn new(code_count: u32, learned: u32) -> Self {
        Self { code_count, learned }
    }

    /// Total wire length the header declares.
    #[inline]
    pub fn frame_len(&self) -> usize {
        Self::LEN + self.code_count as usize * CODE_WIDTH
    }
}

/// A decoded frame: header plus codes in emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeFrame {
    pub header: CodeFrameHeader,
    pub codes: Vec<u16>,
}

/// How a frame whose length disagrees with its header is treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FramePolicy {
    /// Any disagreement is a `MalformedFrame`.
    #[default]
    Strict,
    /// Read whole codes up to the declared count and ignore the rest.
    Lenient,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrameError {
    #[error("truncated frame: {have} bytes, header needs {need}")]
    Truncated { have: usize, need: usize },

    #[error("length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("code count mismatch: header declares {declared}, payload holds {actual}")]
    CountMismatch { declared: u32, actual: usize },
}
