//! bytewords/mod.rs
//! Byte ⇄ word text codec with a CRC-32 trailer.
//!
//! Notes:
//! - One four-letter word per byte value; first/last letters are unique per word.
//! - Minimal style keeps only first + last letter; standard/uri keep the full word.
//! - Payload on the wire is `body || crc32(body)` (big-endian).

pub mod types;
pub mod table;
pub mod checksum;
pub mod encode;
pub mod decode;

pub use types::*;
pub use table::*;
pub use encode::*;
pub use decode::*;
