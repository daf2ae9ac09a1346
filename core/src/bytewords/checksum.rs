// ## 📂 File: `src/bytewords/checksum.rs`

//! bytewords/checksum.rs
//! CRC-32 (IEEE) trailer, serialized big-endian.

use byteorder::{BigEndian, ByteOrder};
use crc32fast::Hasher;

use crate::constants::CHECKSUM_LEN;

/// CRC-32 of `body` as a `u32`.
pub fn crc32(body: &[u8]) -> u32 {
    let mut hasher = Hasher::new();
    hasher.update(body);
    hasher.finalize()
}

/// Big-endian 4-byte checksum of `body`.
pub fn compute(body: &[u8]) -> [u8; CHECKSUM_LEN] {
    let mut out = [0u8; CHECKSUM_LEN];
    BigEndian::write_u32(&mut out, crc32(body));
    out
}

/// Recompute and compare. A trailer of the wrong length never verifies.
pub fn verify(body: &[u8], checksum: &[u8]) -> bool {
    checksum.len() == CHECKSUM_LEN && compute(body)[..] == *checksum
}

/// Read a big-endian trailer back into a `u32`, `None` unless it is exactly `CHECKSUM_LEN` bytes.
pub fn read(checksum: &[u8]) -> Option<u32> {
    if checksum.len() != CHECKSUM_LEN {
        return None;
    }
    Some(BigEndian::read_u32(checksum))
}

/// `body || checksum(body)`.
pub fn append(body: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(body.len() + CHECKSUM_LEN);
    out.extend_from_slice(body);
    out.extend_from_slice(&compute(body));
    out
}
