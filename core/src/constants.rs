//! constants.rs
//! Code-space and wire constants shared by the dictionary, engine and frame.
//!
//! Industry notes:
//! - Codes are fixed 16-bit on the wire, so the whole code space is 65536 values.
//! - The top value is reserved as the literal escape, every other value may name an entry.

/// First code handed out after the single-byte base entries.
pub const FIRST_FREE_CODE: u32 = 256;

/// Number of distinct 16-bit codes.
pub const CODE_SPACE: u32 = 1 << 16;

/// Default upper bound (exclusive) for `next_code`.
pub const DEFAULT_MAX_DICT_SIZE: u32 = CODE_SPACE;

/// Smallest accepted `max_dict_size`.
/// Leaves room for the base range, the full seed set and adaptive entries.
pub const MIN_DICT_SIZE: u32 = 512;

/// Escape marker introducing a literal symbol: `[ESC, scalar_hi, scalar_lo]`.
pub const LITERAL_ESCAPE: u16 = 0xFFFF;

/// Number of codes a literal occupies in the stream (escape + two halves).
pub const LITERAL_WIDTH: usize = 3;

/// Packed width of one code in the frame (bytes).
pub const CODE_WIDTH: usize = 2;

/// Frame header: code count (u32 BE) + learned entries (u32 BE).
pub const FRAME_HEADER_LEN: usize = 4 + 4;
