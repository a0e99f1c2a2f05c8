//! compression/mod.rs
//! Compression facade: preprocess -> encode -> frame, and back.
//!
//! Industry notes:
//! - Stateless across calls: every call builds its own engine, so one codec
//!   value can serve many threads at once.
//! - The registry resolves variant names to codec descriptions.
//! - The batch layer fans documents out to worker threads and reports in
//!   input order.

pub mod types;
pub mod registry;
pub mod codec;
pub mod stats;
pub mod batch;

pub use types::*;
pub use registry::*;
pub use codec::*;
pub use stats::*;
pub use batch::*;
