// ## 📂 File: `src/bytewords/decode.rs`
//! src/bytewords/decode.rs
//!
//! Bytewords decoding.
//!
//! Design notes:
//! - Minimal input is consumed in fixed 2-letter chunks; full-word styles split on the separator.
//! - Tokens are ASCII-lowercased before lookup and before the interior check.
//! - The trailing 4 bytes must equal CRC-32 of everything before them; only the body is returned.

use log::{debug, trace};

use crate::bytewords::checksum;
use crate::bytewords::table::WordTable;
use crate::bytewords::types::{BytewordsError, Style, TokenFault};
use crate::constants::{CHECKSUM_LEN, MIN_PAYLOAD_LEN, WORD_LEN};

/// Decode `input` in the given style and return the body with its checksum stripped.
///
/// # Errors
/// - `MalformedToken` for a token of the wrong width or a letter outside `a`..=`z`.
/// - `UnknownWord` when the first/last pair is not a word.
/// - `CorruptWord` (full-word styles) when the interior letters disagree with the table.
/// - `TooShort` when fewer than 5 bytes decode.
/// - `ChecksumMismatch` when the trailer does not match.
pub fn decode(input: &str, style: Style) -> Result<Vec<u8>, BytewordsError> {
    let table = WordTable::global();

    let mut bytes = if input.is_empty() {
        Vec::new()
    } else {
        match style {
            Style::Minimal => input
                .as_bytes()
                .chunks(style.word_len())
                .enumerate()
                .map(|(i, token)| decode_token(table, i, token, style))
                .collect::<Result<Vec<u8>, _>>()?,
            Style::Standard | Style::Uri => input
                .split(style.separator())
                .enumerate()
                .map(|(i, token)| decode_token(table, i, token.as_bytes(), style))
                .collect::<Result<Vec<u8>, _>>()?,
        }
    };
    trace!("bytewords decode: {} tokens, style {:?}", bytes.len(), style);

    if bytes.len() < MIN_PAYLOAD_LEN {
        return Err(BytewordsError::TooShort { have: bytes.len(), need: MIN_PAYLOAD_LEN });
    }

    let body_len = bytes.len() - CHECKSUM_LEN;
    let (body, trailer) = bytes.split_at(body_len);
    let expected = checksum::read(trailer)
        .ok_or(BytewordsError::TooShort { have: bytes.len(), need: MIN_PAYLOAD_LEN })?;
    let actual = checksum::crc32(body);
    if expected != actual {
        return Err(BytewordsError::ChecksumMismatch { expected, actual });
    }

    bytes.truncate(body_len);
    debug!("bytewords decode ok: {} body bytes", bytes.len());
    Ok(bytes)
}

/// Minimal style.
pub fn decode_minimal(input: &str) -> Result<Vec<u8>, BytewordsError> {
    decode(input, Style::Minimal)
}

/// Standard style.
pub fn decode_standard(input: &str) -> Result<Vec<u8>, BytewordsError> {
    decode(input, Style::Standard)
}

/// Map one token to its byte value.
fn decode_token(
    table: &WordTable,
    position: usize,
    token: &[u8],
    style: Style,
) -> Result<u8, BytewordsError> {
    let need = style.word_len();
    if token.len() != need {
        return Err(BytewordsError::MalformedToken {
            position,
            token: String::from_utf8_lossy(token).into_owned(),
            fault: TokenFault::Length { have: token.len(), need },
        });
    }

    let mut lower = [0u8; WORD_LEN];
    for (dst, &c) in lower.iter_mut().zip(token) {
        let c = c.to_ascii_lowercase();
        if !c.is_ascii_lowercase() {
            return Err(BytewordsError::MalformedToken {
                position,
                token: String::from_utf8_lossy(token).into_owned(),
                fault: TokenFault::Character { byte: c },
            });
        }
        *dst = c;
    }
    let word = &lower[..need];

    let value = table
        .byte_for(word[0], word[need - 1])
        .ok_or_else(|| BytewordsError::UnknownWord {
            position,
            token: String::from_utf8_lossy(token).into_owned(),
        })?;

    if style.is_full_word() {
        let expected = table.word(value);
        if word[1..WORD_LEN - 1] != expected.as_bytes()[1..WORD_LEN - 1] {
            return Err(BytewordsError::CorruptWord {
                position,
                token: String::from_utf8_lossy(token).into_owned(),
                expected,
            });
        }
    }

    Ok(value)
}
