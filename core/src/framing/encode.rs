use byteorder::{BigEndian, ByteOrder};

use crate::constants::CODE_WIDTH;
use crate::framing::types::{CodeFrameHeader, FrameError};

/// Encode a code stream into canonical wire format.
///
/// Layout:
///
/// ```text
/// [ code_count (4, BE) ]
/// [ learned    (4, BE) ]
/// [ code       (2, BE) ] * code_count
/// ```
pub fn encode_frame(header: &CodeFrameHeader, codes: &[u16]) -> Result<Vec<u8>, FrameError> {
    if header.code_count as usize != codes.len() {
        return Err(FrameError::CountMismatch {
            declared: header.code_count,
            actual: codes.len(),
        });
    }

    let expected = header.frame_len();
    let mut out = vec![0u8; expected];

    // --- Header ---
    BigEndian::write_u32(&mut out[0..4], header.code_count);
    BigEndian::write_u32(&mut out[4..8], header.learned);

    // --- Body ---
    for (slot, &code) in out[CodeFrameHeader::LEN..].chunks_exact_mut(CODE_WIDTH).zip(codes) {
        BigEndian::write_u16(slot, code);
    }

    Ok(out)
}
