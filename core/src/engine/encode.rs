//! engine/encode.rs
//! Greedy longest-match encoder.

use log::debug;

use crate::engine::DictionaryEngine;
use crate::engine::types::{EncodeOutput, EngineError, Token, TokenWriter};

impl DictionaryEngine {
    /// Encode already-preprocessed text into a code stream.
    ///
    /// Per symbol `c`:
    /// 1. extend the running match while `match + c` is known;
    /// 2. otherwise emit the match, learn `match + c` (a full dictionary starts
    ///    a new generation and drops that entry);
    /// 3. if `c` is unknown in the current generation, emit it as a literal and
    ///    admit it;
    /// 4. restart the match at `c`.
    pub fn encode(&mut self, text: &str) -> Result<EncodeOutput, EngineError> {
        self.reset();
        let dict = &mut self.state;

        let mut out = TokenWriter::with_capacity(text.len() / 2 + 1);
        let mut current = String::new();

        for c in text.chars() {
            if !current.is_empty() {
                current.push(c);
                if dict.contains(&current) {
                    continue;
                }

                let matched = &current[..current.len() - c.len_utf8()];
                let code = dict
                    .code_of(matched)
                    .ok_or_else(|| EngineError::UnknownMatch { text: matched.to_owned() })?;
                out.push(Token::Code(code));
                dict.learn(&current);
                current.clear();
            }

            if !dict.contains_symbol(c) {
                out.push(Token::Literal(c));
                dict.admit(c);
            }
            current.push(c);
        }

        if !current.is_empty() {
            let code = dict
                .code_of(&current)
                .ok_or_else(|| EngineError::UnknownMatch { text: current.clone() })?;
            out.push(Token::Code(code));
        }

        let output = EncodeOutput {
            learned: dict.learned(),
            generations: dict.resets() + 1,
            literals: out.literals(),
            codes: out.into_codes(),
        };
        debug!(
            "encoded {} bytes of text into {} codes ({} literals, {} learned, {} generations)",
            text.len(), output.codes.len(), output.literals, output.learned, output.generations
        );
        Ok(output)
    }
}
