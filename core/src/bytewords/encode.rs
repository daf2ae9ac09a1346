// ## 📂 File: `src/bytewords/encode.rs`
//! src/bytewords/encode.rs
//!
//! Bytewords encoding.
//!
//! Design notes:
//! - Appends the CRC-32 trailer, then maps every byte (trailer included) to a word.
//! - Infallible: any byte sequence, including an empty one, has an encoding.

use log::trace;

use crate::bytewords::checksum;
use crate::bytewords::table::WordTable;
use crate::bytewords::types::Style;

/// Encode `body` in the requested style.
pub fn encode(body: &[u8], style: Style) -> String {
    let table = WordTable::global();
    let payload = checksum::append(body);
    trace!("bytewords encode: {} body bytes, style {:?}", body.len(), style);

    match style {
        Style::Minimal => {
            let mut out = String::with_capacity(payload.len() * style.word_len());
            for &b in &payload {
                let [first, last] = table.minimal(b);
                out.push(first as char);
                out.push(last as char);
            }
            out
        }
        Style::Standard | Style::Uri => payload
            .iter()
            .map(|&b| table.word(b))
            .collect::<Vec<_>>()
            .join(style.separator()),
    }
}

/// Minimal style (2 letters per byte).
pub fn encode_minimal(body: &[u8]) -> String {
    encode(body, Style::Minimal)
}

/// Standard style (space-separated words).
pub fn encode_standard(body: &[u8]) -> String {
    encode(body, Style::Standard)
}
