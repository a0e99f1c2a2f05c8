//! dictionary/mod.rs
//! Paired forward/reverse dictionary with explicit generations.
//!
//! Industry notes:
//! - Forward (text -> code) and reverse (code -> text) views live in one type
//!   and are only ever mutated together.
//! - A generation is the span between two resets; encoder and decoder drive
//!   the same `learn`/`admit` calls so they cross identical boundaries.
//! - The seed table is static and shared, never copied per dictionary.

pub mod types;
pub mod seed;
pub mod state;

pub use types::*;
pub use seed::*;
pub use state::*;
