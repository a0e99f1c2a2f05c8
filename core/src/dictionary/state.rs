//! dictionary/state.rs
//! The single bijection type behind the engine.
//!
//! Design notes:
//! - `forward` and `reverse` are private; `bind` is the only writer and always
//!   updates both, so the two views cannot drift apart.
//! - `reverse` is an arena indexed by code. Holes (`None`) mark base values that
//!   are not standalone symbols in the declared encoding.
//! - Every entry is tagged with the generation that created it; a reset clears
//!   the arena and rebuilds base + seeds under the next generation.

use std::collections::HashMap;
use log::trace;

use crate::constants::{FIRST_FREE_CODE, LITERAL_ESCAPE, MIN_DICT_SIZE};
use crate::dictionary::seed::SeedSet;
use crate::dictionary::types::{Entry, EntryOrigin, Generation, Insertion};
use crate::encoding::TextEncoding;

#[derive(Debug, Clone)]
pub struct DictionaryState {
    encoding: TextEncoding,
    seed: &'static SeedSet,
    capacity: u32,
    generation: Generation,
    forward: HashMap<Box<str>, u16>,
    reverse: Vec<Option<Entry>>,
    next_code: u32,
    learned: u64,
    resets: u32,
}

impl DictionaryState {
    /// Build generation 0.
    ///
    /// `max_dict_size` is the exclusive bound on `next_code`. It is clamped to
    /// `MIN_DICT_SIZE..=LITERAL_ESCAPE` since the escape value is never an entry.
    pub fn new(encoding: TextEncoding, seed: &'static SeedSet, max_dict_size: u32) -> Self {
        let capacity = max_dict_size.clamp(MIN_DICT_SIZE, LITERAL_ESCAPE as u32);
        let mut state = Self {
            encoding,
            seed,
            capacity,
            generation: Generation::default(),
            forward: HashMap::with_capacity(capacity as usize),
            reverse: Vec::with_capacity(capacity as usize),
            next_code: 0,
            learned: 0,
            resets: 0,
        };
        state.rebuild();
        state
    }

    /// Start a new generation: drop every entry and reload base + seeds.
    pub fn reset(&mut self) {
        let retired = self.generation;
        self.generation = self.generation.next();
        self.resets += 1;
        self.rebuild();
        trace!(
            "dictionary reset: {} -> {} (next_code={}, capacity={})",
            retired, self.generation, self.next_code, self.capacity
        );
    }

    fn rebuild(&mut self) {
        self.forward.clear();
        self.reverse.clear();
        self.next_code = 0;

        // Base range: code == raw value, holes keep the numbering fixed.
        for raw in 0..=u8::MAX {
            match self.encoding.base_symbol(raw) {
                Some(symbol) => {
                    let mut buf = [0u8; 4];
                    self.bind(symbol.encode_utf8(&mut buf), EntryOrigin::Base);
                }
                None => {
                    self.reverse.push(None);
                    self.next_code += 1;
                }
            }
        }
        debug_assert_eq!(self.next_code, FIRST_FREE_CODE);

        let seed = self.seed;
        for token in seed.iter() {
            if self.is_full() {
                break;
            }
            if !self.forward.contains_key(token) {
                self.bind(token, EntryOrigin::Seed);
            }
        }
    }

    /// Paired insert at `next_code`. Caller guarantees the key is absent and
    /// the dictionary is not full.
    fn bind(&mut self, text: &str, origin: EntryOrigin) -> u16 {
        debug_assert!(self.next_code < LITERAL_ESCAPE as u32);
        let code = self.next_code as u16;
        self.forward.insert(text.into(), code);
        self.reverse.push(Some(Entry { text: text.into(), generation: self.generation, origin }));
        self.next_code += 1;
        code
    }

    /// Add an adaptive entry.
    ///
    /// When full, a new generation starts and `text` is dropped. Encoder and
    /// decoder both rely on this exact policy.
    pub fn learn(&mut self, text: &str) -> Insertion {
        if let Some(&code) = self.forward.get(text) {
            return Insertion::Present { code };
        }
        if self.is_full() {
            self.reset();
            return Insertion::Reset { generation: self.generation };
        }
        let code = self.bind(text, EntryOrigin::Learned);
        self.learned += 1;
        Insertion::Bound { code }
    }

    /// Add a single symbol carried by a literal token.
    ///
    /// When full, a new generation starts first and the symbol is bound there.
    pub fn admit(&mut self, symbol: char) -> Insertion {
        let mut buf = [0u8; 4];
        let text: &str = symbol.encode_utf8(&mut buf);
        if let Some(&code) = self.forward.get(text) {
            return Insertion::Present { code };
        }
        let reset = self.is_full();
        if reset {
            self.reset();
        }
        let code = self.bind(text, EntryOrigin::Literal);
        self.learned += 1;
        if reset {
            Insertion::ResetThenBound { generation: self.generation, code }
        } else {
            Insertion::Bound { code }
        }
    }

    #[inline]
    pub fn code_of(&self, text: &str) -> Option<u16> {
        self.forward.get(text).copied()
    }

    #[inline]
    pub fn contains(&self, text: &str) -> bool {
        self.forward.contains_key(text)
    }

    pub fn contains_symbol(&self, symbol: char) -> bool {
        let mut buf = [0u8; 4];
        self.contains(symbol.encode_utf8(&mut buf))
    }

    #[inline]
    pub fn entry(&self, code: u16) -> Option<&Entry> {
        let entry = self.reverse.get(code as usize)?.as_ref()?;
        debug_assert_eq!(entry.generation, self.generation);
        Some(entry)
    }

    #[inline]
    pub fn text_of(&self, code: u16) -> Option<&str> {
        self.entry(code).map(|e| &*e.text)
    }

    /// Live entries in code order.
    pub fn entries(&self) -> impl Iterator<Item = (u16, &Entry)> + '_ {
        self.reverse
            .iter()
            .enumerate()
            .filter_map(|(code, slot)| slot.as_ref().map(|e| (code as u16, e)))
    }

    pub fn next_code(&self) -> u32 {
        self.next_code
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.next_code >= self.capacity
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Entries bound through `learn`/`admit`, summed over all generations.
    pub fn learned(&self) -> u64 {
        self.learned
    }

    pub fn resets(&self) -> u32 {
        self.resets
    }

    /// Number of live entries (holes excluded).
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    pub fn encoding(&self) -> TextEncoding {
        self.encoding
    }

    pub fn seed(&self) -> &'static SeedSet {
        self.seed
    }
}
