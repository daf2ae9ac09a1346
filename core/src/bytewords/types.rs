// ## 📂 File: `src/bytewords/types.rs`

//! bytewords/types.rs
//! Wire styles and codec errors.
//!
//! Design notes:
//! - Style decides word width and separator; it is chosen by the caller, never sniffed.
//! - Standard and Uri carry full words and share the interior-letter check.
//! - Errors carry the zero-based token position so corrupted input can be pointed at.

use std::fmt;

use crate::constants::{MINIMAL_WORD_LEN, STANDARD_SEPARATOR, URI_SEPARATOR, WORD_LEN};
use crate::utils::fmt_bytes;

/// Bytewords wire style.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Style {
    /// First and last letter of each word, no separator.
    #[default]
    Minimal,
    /// Full words separated by a space.
    Standard,
    /// Full words separated by `-` (URI safe).
    Uri,
}

impl Style {
    /// Characters each byte occupies on the wire.
    pub fn word_len(self) -> usize {
        match self {
            Style::Minimal => MINIMAL_WORD_LEN,
            Style::Standard | Style::Uri => WORD_LEN,
        }
    }

    /// Separator placed between words, empty for `Minimal`.
    pub fn separator(self) -> &'static str {
        match self {
            Style::Minimal => "",
            Style::Standard => STANDARD_SEPARATOR,
            Style::Uri => URI_SEPARATOR,
        }
    }

    /// Whether tokens carry the two interior letters that must be verified.
    pub fn is_full_word(self) -> bool {
        self.word_len() == WORD_LEN
    }
}

/// Why a token was rejected before lookup.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TokenFault {
    /// Token width differs from the style's word width.
    Length { have: usize, need: usize },
    /// Byte outside `a`..=`z` after case folding.
    Character { byte: u8 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BytewordsError {
    /// Wrong token width or out-of-alphabet character.
    MalformedToken { position: usize, token: String, fault: TokenFault },

    /// First/last letter pair is not in the word table.
    UnknownWord { position: usize, token: String },

    /// Ends match a word but the interior letters do not.
    CorruptWord { position: usize, token: String, expected: &'static str },

    /// Fewer bytes than a non-empty body plus checksum.
    TooShort { have: usize, need: usize },

    /// Trailing CRC-32 does not match the body.
    ChecksumMismatch { expected: u32, actual: u32 },
}

impl fmt::Display for BytewordsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use BytewordsError::*;
        match self {
            MalformedToken { position, token, fault: TokenFault::Length { have, need } } =>
                write!(f, "malformed token {} at {}: length {} != {}",
                       fmt_bytes(token.as_bytes()), position, have, need),
            MalformedToken { position, token, fault: TokenFault::Character { byte } } =>
                write!(f, "malformed token {} at {}: invalid character 0x{:02x}",
                       fmt_bytes(token.as_bytes()), position, byte),
            UnknownWord { position, token } =>
                write!(f, "unknown word {} at {}", fmt_bytes(token.as_bytes()), position),
            CorruptWord { position, token, expected } =>
                write!(f, "corrupt word {} at {}: expected {}",
                       fmt_bytes(token.as_bytes()), position, expected),
            TooShort { have, need } =>
                write!(f, "payload too short: {} < {} bytes", have, need),
            ChecksumMismatch { expected, actual } =>
                write!(f, "checksum mismatch: expected {:#010x}, got {:#010x}", expected, actual),
        }
    }
}

impl std::error::Error for BytewordsError {}
