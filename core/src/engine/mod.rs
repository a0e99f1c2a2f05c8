//! engine/mod.rs
//! Adaptive dictionary engine (LZW family) over Unicode symbols.
//!
//! Industry notes:
//! - Greedy longest-match: extend while `match + c` is known, emit on failure.
//! - Every call starts from a fresh generation 0; no state survives a call.
//! - Encoder and decoder issue the same `learn`/`admit` sequence, so resets
//!   land on the same token on both sides.

pub mod types;
pub mod encode;
pub mod decode;

pub use types::*;

use crate::dictionary::{DictionaryState, SeedSet};
use crate::encoding::TextEncoding;

/// One engine per call (or per thread). Not meant to be shared concurrently.
#[derive(Debug, Clone)]
pub struct DictionaryEngine {
    encoding: TextEncoding,
    seed: &'static SeedSet,
    max_dict_size: u32,
    state: DictionaryState,
}

impl DictionaryEngine {
    pub fn new(encoding: TextEncoding, seed: &'static SeedSet, max_dict_size: u32) -> Self {
        Self {
            encoding,
            seed,
            max_dict_size,
            state: DictionaryState::new(encoding, seed, max_dict_size),
        }
    }

    /// Discard all adaptive state and rebuild base + seeds as generation 0.
    pub fn reset(&mut self) -> &DictionaryState {
        self.state = DictionaryState::new(self.encoding, self.seed, self.max_dict_size);
        &self.state
    }

    /// Dictionary as left by the last `encode`/`decode`.
    pub fn state(&self) -> &DictionaryState {
        &self.state
    }

    pub fn encoding(&self) -> TextEncoding {
        self.encoding
    }

    pub fn max_dict_size(&self) -> u32 {
        self.max_dict_size
    }
}
