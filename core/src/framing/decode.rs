use byteorder::{BigEndian, ByteOrder};
use log::warn;

use crate::constants::CODE_WIDTH;
use crate::framing::types::{CodeFrame, CodeFrameHeader, FrameError, FramePolicy};

#[inline]
pub fn parse_frame_header(wire: &[u8]) -> Result<CodeFrameHeader, FrameError> {
    if wire.len() < CodeFrameHeader::LEN {
        return Err(FrameError::Truncated { have: wire.len(), need: CodeFrameHeader::LEN });
    }

    Ok(CodeFrameHeader {
        code_count: BigEndian::read_u32(&wire[0..4]),
        learned: BigEndian::read_u32(&wire[4..8]),
    })
}

/// Decode a frame from bytes.
///
/// - `Strict`: the wire must be exactly `8 + 2 * code_count` bytes.
/// - `Lenient`: at most `code_count` whole codes are read; a short payload
///   yields fewer codes, extra bytes are ignored.
pub fn decode_frame(wire: &[u8], policy: FramePolicy) -> Result<CodeFrame, FrameError> {
    let header = parse_frame_header(wire)?;
    let payload = &wire[CodeFrameHeader::LEN..];
    let declared = header.code_count as usize;

    let available = match policy {
        FramePolicy::Strict => {
            let expected = header.frame_len();
            if wire.len() != expected {
                return Err(FrameError::LengthMismatch { expected, actual: wire.len() });
            }
            declared
        }
        FramePolicy::Lenient => {
            let whole = payload.len() / CODE_WIDTH;
            if whole < declared {
                warn!("lenient frame: header declares {} codes, payload holds {}", declared, whole);
            }
            whole.min(declared)
        }
    };

    let mut codes = vec![0u16; available];
    BigEndian::read_u16_into(&payload[..available * CODE_WIDTH], &mut codes);

    Ok(CodeFrame { header, codes })
}
