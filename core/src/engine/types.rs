use thiserror::Error;

use crate::constants::{LITERAL_ESCAPE, LITERAL_WIDTH};

/// One unit of the code stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// Reference to a dictionary entry.
    Code(u16),
    /// Symbol absent from the current generation, spelled out in full.
    Literal(char),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Neither a known entry nor the pending self-referential code.
    #[error("invalid code {code} at position {position}")]
    InvalidCode { code: u16, position: usize },

    /// Encoder bookkeeping broke: the running match is not an entry.
    #[error("running match {text:?} is not a dictionary entry")]
    UnknownMatch { text: String },
}

/// Result of one `encode` call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodeOutput {
    pub codes: Vec<u16>,
    /// Entries learned or admitted, over all generations.
    pub learned: u64,
    /// Generations traversed (1 when no reset happened).
    pub generations: u32,
    /// Literal tokens emitted.
    pub literals: usize,
}

/// Appends tokens to a flat code vector.
#[derive(Debug, Default)]
pub struct TokenWriter {
    codes: Vec<u16>,
    literals: usize,
}

impl TokenWriter {
    pub fn with_capacity(n: usize) -> Self {
        Self { codes: Vec::with_capacity(n), literals: 0 }
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        match token {
            Token::Code(code) => {
                debug_assert_ne!(code, LITERAL_ESCAPE);
                self.codes.push(code);
            }
            Token::Literal(symbol) => {
                let scalar = symbol as u32;
                self.codes.push(LITERAL_ESCAPE);
                self.codes.push((scalar >> 16) as u16);
                self.codes.push((scalar & 0xFFFF) as u16);
                self.literals += 1;
            }
        }
    }

    pub fn literals(&self) -> usize {
        self.literals
    }

    pub fn into_codes(self) -> Vec<u16> {
        self.codes
    }
}

/// Splits a flat code slice back into tokens, tagged with their position.
#[derive(Debug, Clone)]
pub struct TokenReader<'a> {
    codes: &'a [u16],
    pos: usize,
}

impl<'a> TokenReader<'a> {
    pub fn new(codes: &'a [u16]) -> Self {
        Self { codes, pos: 0 }
    }
}

impl<'a> Iterator for TokenReader<'a> {
    type Item = Result<(usize, Token), EngineError>;

    fn next(&mut self) -> Option<Self::Item> {
        let position = self.pos;
        let code = *self.codes.get(position)?;
        if code != LITERAL_ESCAPE {
            self.pos += 1;
            return Some(Ok((position, Token::Code(code))));
        }

        let invalid = EngineError::InvalidCode { code, position };
        let Some(payload) = self.codes.get(position + 1..position + LITERAL_WIDTH) else {
            // Escape without its two payload codes: stop after reporting.
            self.pos = self.codes.len();
            return Some(Err(invalid));
        };
        self.pos += LITERAL_WIDTH;

        let scalar = (u32::from(payload[0]) << 16) | u32::from(payload[1]);
        match char::from_u32(scalar) {
            Some(symbol) => Some(Ok((position, Token::Literal(symbol)))),
            None => Some(Err(invalid)),
        }
    }
}
