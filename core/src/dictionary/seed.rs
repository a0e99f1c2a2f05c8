//! dictionary/seed.rs
//! Static multilingual seed table.
//!
//! Summary: frequent short tokens shared by multilingual corpora. Every fresh
//! generation pre-loads them right after the base range so short documents do
//! not pay the cold-start learning cost for them.
//!
//! The table order is part of the wire contract: seed codes are assigned in
//! this order, so reordering or editing entries requires bumping `SEED_VERSION`.

/// Version of the seed table layout.
pub const SEED_VERSION: u16 = 1;

/// Function words, grouped by language. Duplicates across languages are kept
/// here and skipped on insertion.
const COMMON_WORDS: &[&str] = &[
    // English
    "the", "and", "is", "in", "to", "of", "a", "that", "it", "with", "for", "as", "was", "on", "are",
    // Spanish
    "el", "la", "de", "que", "y", "en", "un", "es", "se", "no", "te", "lo", "le", "da", "su",
    // French
    "le", "de", "et", "à", "un", "il", "être", "et", "en", "avoir", "que", "pour", "dans", "ce", "son",
    // German
    "der", "die", "und", "in", "den", "von", "zu", "das", "mit", "sich", "des", "auf", "für", "ist", "im",
    // Portuguese
    "o", "a", "do", "da", "em", "um", "para", "é", "com", "não", "uma", "os", "no", "se", "na",
    // Italian
    "il", "di", "che", "è", "e", "la", "per", "una", "in", "del", "un", "da", "essere", "con", "su",
    // Russian
    "и", "в", "не", "на", "я", "быть", "он", "с", "а", "как", "по", "это", "она", "к", "но",
    // Chinese
    "的", "一", "是", "在", "不", "了", "有", "和", "人", "这", "中", "大", "为", "上", "个",
    // Arabic
    "في", "من", "إلى", "على", "أن", "هذا", "هذه", "التي", "الذي", "كان", "كل", "عن", "مع", "أو", "كما",
];

/// Punctuation and whitespace bigrams.
const COMMON_PATTERNS: &[&str] = &[
    ". ", ", ", "; ", ": ", "! ", "? ", "\n", "\r\n", "\t", "  ",
    "()", "[]", "{}", "\"\"", "''", "--", "...", " - ", " / ",
];

/// Immutable seed table, shared by reference across every dictionary.
#[derive(Debug)]
pub struct SeedSet {
    words: &'static [&'static str],
    patterns: &'static [&'static str],
}

static MULTILINGUAL: SeedSet = SeedSet { words: COMMON_WORDS, patterns: COMMON_PATTERNS };
static EMPTY: SeedSet = SeedSet { words: &[], patterns: &[] };

impl SeedSet {
    /// The process-wide multilingual table.
    pub fn multilingual() -> &'static SeedSet {
        &MULTILINGUAL
    }

    /// No seeds: the dictionary starts from the base range only.
    pub fn empty() -> &'static SeedSet {
        &EMPTY
    }

    pub fn words(&self) -> &'static [&'static str] {
        self.words
    }

    pub fn patterns(&self) -> &'static [&'static str] {
        self.patterns
    }

    /// Words first, then patterns, in table order (duplicates included).
    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.words.iter().chain(self.patterns.iter()).copied()
    }

    pub fn len(&self) -> usize {
        self.words.len() + self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, token: &str) -> bool {
        self.iter().any(|s| s == token)
    }
}
