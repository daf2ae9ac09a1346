//! container/unwrap.rs
//!
//! Layered unwrap: outer object → byte string → inflate → inner object → value tree.
//!
//! Design notes:
//! - Each step is strict; the first failure aborts the whole unwrap.
//! - Each object layer must hold exactly one top-level item with nothing after it.
//! - Inflate reads at most `max_inflated_size + 1` bytes so oversized output is
//!   detected without buffering it.

use std::io::Read;

use flate2::read::{MultiGzDecoder, ZlibDecoder};
use log::{debug, trace};

use crate::container::types::{value_kind, Compression, ContainerError, Step, ValueTree};

/// Decode one binary object from `bytes`, rejecting trailing data.
pub fn decode_object(bytes: &[u8], step: Step) -> Result<ValueTree, ContainerError> {
    let mut rest = bytes;
    let value: ValueTree = ciborium::de::from_reader(&mut rest)
        .map_err(|e| ContainerError::Malformed { step, msg: e.to_string() })?;
    if !rest.is_empty() {
        return Err(ContainerError::TrailingBytes { step, count: rest.len() });
    }
    Ok(value)
}

/// Step 1: extract the embedded byte string. Tags around it are ignored.
pub fn outer_bytes(body: &[u8]) -> Result<Vec<u8>, ContainerError> {
    let mut value = decode_object(body, Step::Outer)?;
    loop {
        match value {
            ValueTree::Bytes(b) => return Ok(b),
            ValueTree::Tag(_, inner) => value = *inner,
            other => return Err(ContainerError::NotByteString { found: value_kind(&other) }),
        }
    }
}

/// Step 2: inflate `compressed`, failing once output passes `limit` bytes.
pub fn inflate(compressed: &[u8], codec: Compression, limit: usize) -> Result<Vec<u8>, ContainerError> {
    let cap = (limit as u64).saturating_add(1);
    let mut out = Vec::new();
    let res = match codec {
        Compression::Gzip => MultiGzDecoder::new(compressed).take(cap).read_to_end(&mut out),
        Compression::Zlib => ZlibDecoder::new(compressed).take(cap).read_to_end(&mut out),
    };
    res.map_err(|e| ContainerError::Inflate { codec: codec.name(), msg: e.to_string() })?;

    if out.len() > limit {
        return Err(ContainerError::InflatedTooLarge { limit });
    }
    trace!("{} inflate: {} -> {} bytes", codec.name(), compressed.len(), out.len());
    Ok(out)
}

/// Steps 1–3 over a bytewords-decoded body.
pub fn unwrap(body: &[u8], codec: Compression, limit: usize) -> Result<ValueTree, ContainerError> {
    let outer = outer_bytes(body)?;
    let inner = inflate(&outer, codec, limit)?;
    let tree = decode_object(&inner, Step::Inner)?;
    debug!(
        "container unwrap ok: body {} bytes, compressed {} bytes, inflated {} bytes",
        body.len(),
        outer.len(),
        inner.len()
    );
    Ok(tree)
}
