//! preprocess.rs
//! Text canonicalization applied before compression.
//!
//! Notes:
//! - NFC makes visually identical glyphs with different symbol sequences
//!   compress identically.
//! - Whitespace folding is lossy: decompression yields the canonical text,
//!   not the original bytes. Callers that need byte-exact round trips must use
//!   `PreprocessMode::NormalizeOnly`.

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PreprocessMode {
    /// NFC, whitespace folding, trimming.
    #[default]
    Full,
    /// NFC only.
    NormalizeOnly,
}

/// Canonicalize `text` according to `mode`.
pub fn preprocess(text: &str, mode: PreprocessMode) -> String {
    let normalized: String = text.nfc().collect();
    match mode {
        PreprocessMode::NormalizeOnly => normalized,
        PreprocessMode::Full => fold_whitespace(&normalized),
    }
}

/// Whitespace as folded by `fold_whitespace`: Unicode `White_Space` plus the
/// ASCII information separators U+001C..=U+001F.
#[inline]
pub fn is_fold_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Collapse every whitespace run (newlines included) to one `' '`, then drop
/// leading and trailing whitespace.
pub fn fold_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    for c in text.chars() {
        if is_fold_space(c) {
            pending_space = true;
            continue;
        }
        if pending_space && !out.is_empty() {
            out.push(' ');
        }
        pending_space = false;
        out.push(c);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_runs_and_trims() {
        assert_eq!(fold_whitespace("  a \t b  "), "a b");
        assert_eq!(fold_whitespace("a \r\n\n  b"), "a b");
        assert_eq!(fold_whitespace("\n\n"), "");
    }

    #[test]
    fn composes_to_nfc() {
        assert_eq!(preprocess("e\u{301}", PreprocessMode::NormalizeOnly), "é");
    }
}
