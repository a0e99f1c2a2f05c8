//! encoding/mod.rs
//! Declared text encodings and the base symbols they contribute.
//!
//! Industry notes:
//! - The encoding name travels with the compressed blob, never inside it.
//! - Base entries (codes 0..=255) are derived from the declared encoding, so
//!   compress and decompress must agree on it.

pub mod types;

pub use types::*;
