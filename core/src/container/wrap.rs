//! container/wrap.rs
//!
//! Reverse of `unwrap`: value tree → inner object → compress → outer byte string.
//! Used to produce payloads for tooling and tests; `unwrap(wrap(t)) == t`.

use std::io::Write;

use flate2::write::{GzEncoder, ZlibEncoder};
use flate2::Compression as Level;

use crate::container::types::{Compression, ContainerError, Step, ValueTree};

/// Serialize one value as a binary object.
pub fn encode_object(value: &ValueTree, step: Step) -> Result<Vec<u8>, ContainerError> {
    let mut out = Vec::new();
    ciborium::ser::into_writer(value, &mut out)
        .map_err(|e| ContainerError::Wrap { step, msg: e.to_string() })?;
    Ok(out)
}

/// Compress `data` as a single stream. Levels above 9 fall back to the default.
pub fn deflate(data: &[u8], codec: Compression, level: u32) -> Result<Vec<u8>, ContainerError> {
    let lvl = match level {
        0..=9 => Level::new(level),
        _ => Level::default(),
    };
    let err = |e: std::io::Error| ContainerError::Wrap { step: Step::Inflate, msg: e.to_string() };

    match codec {
        Compression::Gzip => {
            let mut enc = GzEncoder::new(Vec::new(), lvl);
            enc.write_all(data).map_err(err)?;
            enc.finish().map_err(err)
        }
        Compression::Zlib => {
            let mut enc = ZlibEncoder::new(Vec::new(), lvl);
            enc.write_all(data).map_err(err)?;
            enc.finish().map_err(err)
        }
    }
}

/// Wrap a value tree into the outer-object body that bytewords encodes.
pub fn wrap(tree: &ValueTree, codec: Compression, level: u32) -> Result<Vec<u8>, ContainerError> {
    let inner = encode_object(tree, Step::Inner)?;
    let compressed = deflate(&inner, codec, level)?;
    encode_object(&ValueTree::Bytes(compressed), Step::Outer)
}
