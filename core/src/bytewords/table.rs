// ## 📂 File: `src/bytewords/table.rs`

//! bytewords/table.rs
//! Byte ⇄ word table.
//!
//! Design notes:
//! - Forward map is a fixed `[&str; 256]` sliced out of `BYTEWORDS`.
//! - Reverse map is a 26×26 grid indexed by `(last - 'a') * 26 + (first - 'a')`.
//! - Every word has a unique first/last pair, so the grid is a bijection and the
//!   minimal style is lossless.
//! - Built once per process through `OnceLock`; read-only afterwards.

use std::sync::OnceLock;

use log::trace;

use crate::constants::{ALPHABET_LEN, BYTEWORDS, WORD_LEN};

/// Immutable byte ⇄ word table.
#[derive(Debug)]
pub struct WordTable {
    words: [&'static str; 256],
    lookup: [Option<u8>; ALPHABET_LEN * ALPHABET_LEN],
}

static TABLE: OnceLock<WordTable> = OnceLock::new();

impl WordTable {
    /// Process-wide table, built on first use.
    pub fn global() -> &'static WordTable {
        TABLE.get_or_init(WordTable::build)
    }

    fn build() -> Self {
        let mut words = [""; 256];
        let mut lookup = [None; ALPHABET_LEN * ALPHABET_LEN];

        for (i, word) in words.iter_mut().enumerate() {
            *word = &BYTEWORDS[i * WORD_LEN..(i + 1) * WORD_LEN];
            let w = word.as_bytes();
            if let Some(slot) = Self::slot(w[0], w[WORD_LEN - 1]) {
                debug_assert!(lookup[slot].is_none(), "duplicate first/last pair for {}", word);
                lookup[slot] = Some(i as u8);
            }
        }

        trace!("word table built: {} words", words.len());
        Self { words, lookup }
    }

    /// Grid offset for a lowercase first/last pair, `None` outside `a`..=`z`.
    #[inline]
    fn slot(first: u8, last: u8) -> Option<usize> {
        if !first.is_ascii_lowercase() || !last.is_ascii_lowercase() {
            return None;
        }
        let x = (first - b'a') as usize;
        let y = (last - b'a') as usize;
        Some(y * ALPHABET_LEN + x)
    }

    /// Full four-letter word for `b`.
    #[inline]
    pub fn word(&self, b: u8) -> &'static str {
        self.words[b as usize]
    }

    /// Two-letter minimal form (first + last) for `b`.
    #[inline]
    pub fn minimal(&self, b: u8) -> [u8; 2] {
        let w = self.words[b as usize].as_bytes();
        [w[0], w[WORD_LEN - 1]]
    }

    /// Reverse lookup by lowercase first/last letters.
    #[inline]
    pub fn byte_for(&self, first: u8, last: u8) -> Option<u8> {
        Self::slot(first, last).and_then(|slot| self.lookup[slot])
    }

    /// All words in byte order.
    pub fn words(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.words.iter().copied()
    }
}

/// Full word for `b` from the global table.
pub fn word_for_byte(b: u8) -> &'static str {
    WordTable::global().word(b)
}

/// Byte for a lowercase first/last pair from the global table.
pub fn byte_for_chars(first: u8, last: u8) -> Option<u8> {
    WordTable::global().byte_for(first, last)
}
