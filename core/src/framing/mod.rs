//! Wire framing for compressed text.
//!
//! Responsibilities:
//! - Define the code frame header and its policy knobs
//! - Encode code streams into a canonical big-endian layout
//! - Decode frames with strict (or explicitly lenient) validation
//!
//! Non-responsibilities:
//! - Dictionary state
//! - Text preprocessing
//! - Encoding names (they travel beside the blob)

pub mod types;
pub mod encode;
pub mod decode;

pub use types::{
    CodeFrame,
    CodeFrameHeader,
    FrameError,
    FramePolicy,
};
pub use encode::encode_frame;
pub use decode::{decode_frame, parse_frame_header};
