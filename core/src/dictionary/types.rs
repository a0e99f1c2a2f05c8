use std::fmt;

/// Dictionary generation counter. Starts at 0 and grows by one per reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(pub u32);

impl Generation {
    #[inline]
    pub const fn next(self) -> Self {
        Generation(self.0.wrapping_add(1))
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gen#{}", self.0)
    }
}

/// How an entry entered the dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryOrigin {
    /// Single-byte base symbol (codes 0..=255).
    Base,
    /// Pre-loaded from the seed table.
    Seed,
    /// Learned from the input (match + next symbol).
    Learned,
    /// Symbol introduced by a literal token.
    Literal,
}

/// One slot of the reverse arena.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub text: Box<str>,
    pub generation: Generation,
    pub origin: EntryOrigin,
}

/// Outcome of `learn`/`admit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    /// Bound at `code` in the current generation.
    Bound { code: u16 },
    /// Key already present; nothing changed.
    Present { code: u16 },
    /// Dictionary was full: a new generation started and the entry was dropped.
    Reset { generation: Generation },
    /// Dictionary was full: a new generation started, then the entry was bound.
    ResetThenBound { generation: Generation, code: u16 },
}

impl Insertion {
    pub fn code(&self) -> Option<u16> {
        match *self {
            Insertion::Bound { code }
            | Insertion::Present { code }
            | Insertion::ResetThenBound { code, .. } => Some(code),
            Insertion::Reset { .. } => None,
        }
    }

    pub fn started_generation(&self) -> bool {
        matches!(self, Insertion::Reset { .. } | Insertion::ResetThenBound { .. })
    }
}
