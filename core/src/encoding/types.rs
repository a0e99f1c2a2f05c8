use std::fmt;
use num_enum::TryFromPrimitive;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable ids for the supported text encodings.
pub mod encoding_ids {
    pub const UTF8: u8   = 0x01;
    pub const UTF16: u8  = 0x02;
    pub const LATIN1: u8 = 0x03;
}

#[repr(u8)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, TryFromPrimitive, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TextEncoding {
    #[default]
    Utf8   = encoding_ids::UTF8,
    Utf16  = encoding_ids::UTF16,
    Latin1 = encoding_ids::LATIN1,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    #[error("unsupported text encoding: {name:?}")]
    UnsupportedEncoding { name: String },

    #[error("symbol {symbol:?} is not encodable as {encoding}")]
    Unencodable { symbol: char, encoding: TextEncoding },
}

impl TextEncoding {
    pub const ALL: [TextEncoding; 3] = [TextEncoding::Utf8, TextEncoding::Utf16, TextEncoding::Latin1];

    /// Resolve a declared encoding label (case-insensitive).
    pub fn from_name(name: &str) -> Result<Self, EncodingError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Ok(TextEncoding::Utf8),
            "utf-16" | "utf16" => Ok(TextEncoding::Utf16),
            "latin-1" | "latin1" | "iso-8859-1" => Ok(TextEncoding::Latin1),
            _ => Err(EncodingError::UnsupportedEncoding { name: name.to_string() }),
        }
    }

    /// Canonical label.
    pub const fn name(self) -> &'static str {
        match self {
            TextEncoding::Utf8   => "utf-8",
            TextEncoding::Utf16  => "utf-16",
            TextEncoding::Latin1 => "latin-1",
        }
    }

    /// The base entry for `code` in `0..=255`, or `None` when that raw value
    /// is not a complete character on its own in this encoding.
    ///
    /// - UTF-8: only `0x00..=0x7F` stand alone; higher bytes are lead or
    ///   continuation bytes.
    /// - Latin-1: every byte is the code point of the same value.
    /// - UTF-16: the value is read as one 16-bit code unit, which for
    ///   `0..=255` is always a complete BMP character. A lone byte is never a
    ///   complete UTF-16 unit, so skipping it would leave no base entries at
    ///   all; the code unit reading is used instead.
    #[inline]
    pub fn base_symbol(self, code: u8) -> Option<char> {
        match self {
            TextEncoding::Utf8 if code < 0x80 => Some(char::from(code)),
            TextEncoding::Utf8 => None,
            TextEncoding::Utf16 | TextEncoding::Latin1 => Some(char::from(code)),
        }
    }

    /// Byte length of `text` in this encoding (UTF-16 without a BOM).
    pub fn encoded_len(self, text: &str) -> usize {
        match self {
            TextEncoding::Utf8 => text.len(),
            TextEncoding::Utf16 => text.encode_utf16().count() * 2,
            TextEncoding::Latin1 => text.chars().count(),
        }
    }

    #[inline]
    pub fn can_encode(self, symbol: char) -> bool {
        match self {
            TextEncoding::Latin1 => (symbol as u32) <= 0xFF,
            TextEncoding::Utf8 | TextEncoding::Utf16 => true,
        }
    }

    /// Fail on the first symbol this encoding cannot represent.
    pub fn ensure_encodable(self, text: &str) -> Result<(), EncodingError> {
        match text.chars().find(|&c| !self.can_encode(c)) {
            Some(symbol) => Err(EncodingError::Unencodable { symbol, encoding: self }),
            None => Ok(()),
        }
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<String> for TextEncoding {
    type Error = EncodingError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        TextEncoding::from_name(&name)
    }
}

impl From<TextEncoding> for String {
    fn from(enc: TextEncoding) -> Self {
        enc.name().to_string()
    }
}

impl std::str::FromStr for TextEncoding {
    type Err = EncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TextEncoding::from_name(s)
    }
}
