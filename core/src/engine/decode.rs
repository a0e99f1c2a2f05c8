//! engine/decode.rs
//! Decoder mirroring the encoder's dictionary updates token for token.
//!
//! The decoder learns `previous + first symbol of the next chunk` one token
//! later than the encoder (it only sees that symbol then). Literal tokens carry
//! the symbol themselves, so the pending entry is learned before the literal is
//! admitted, the same order the encoder used.

use log::debug;

use crate::constants::LITERAL_ESCAPE;
use crate::engine::DictionaryEngine;
use crate::engine::types::{EngineError, Token, TokenReader};

#[inline]
fn first_symbol(text: &str) -> Option<char> {
    text.chars().next()
}

impl DictionaryEngine {
    /// Decode a code stream produced by `encode` under the same configuration.
    pub fn decode(&mut self, codes: &[u16]) -> Result<String, EngineError> {
        self.reset();
        let dict = &mut self.state;

        let mut output = String::with_capacity(codes.len() * 2);
        // Previous chunk, waiting for the symbol that completes its entry.
        let mut pending: Option<String> = None;

        for token in TokenReader::new(codes) {
            let (position, token) = token?;
            match token {
                Token::Literal(symbol) => {
                    if let Some(mut prev) = pending.take() {
                        prev.push(symbol);
                        dict.learn(&prev);
                    }
                    // The encoder only spells out symbols it does not know.
                    if dict.contains_symbol(symbol) {
                        return Err(EngineError::InvalidCode { code: LITERAL_ESCAPE, position });
                    }
                    dict.admit(symbol);
                }
                Token::Code(code) => {
                    let chunk = match (dict.text_of(code), pending.as_deref()) {
                        (Some(text), _) => text.to_owned(),
                        // Self-referential case: the encoder emitted the entry it was
                        // defining, which can only be `previous + previous[0]`.
                        (None, Some(prev)) if u32::from(code) == dict.next_code() && !dict.is_full() => {
                            let head = first_symbol(prev).ok_or(EngineError::InvalidCode { code, position })?;
                            let mut text = String::with_capacity(prev.len() + head.len_utf8());
                            text.push_str(prev);
                            text.push(head);
                            text
                        }
                        _ => return Err(EngineError::InvalidCode { code, position }),
                    };

                    if let Some(mut prev) = pending.take() {
                        let head = first_symbol(&chunk).ok_or(EngineError::InvalidCode { code, position })?;
                        prev.push(head);
                        dict.learn(&prev);
                    }

                    output.push_str(&chunk);
                    pending = Some(chunk);
                }
            }
        }

        debug!(
            "decoded {} codes into {} bytes of text ({} generations)",
            codes.len(), output.len(), dict.resets() + 1
        );
        Ok(output)
    }
}
