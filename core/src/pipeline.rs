//! pipeline.rs
//! Stable public API: bytewords text ⇄ records.
//!
//! Decode: text → bytewords body → outer object → inflate → inner object → records.
//! Encode: records → value tree → wrap → bytewords text.

use log::debug;

use crate::bytewords::{self, Style};
use crate::constants::{DEFAULT_COMPRESSION_LEVEL, DEFAULT_MAX_INFLATED_SIZE};
use crate::container::{self, Compression, ContainerError, ValueTree};
use crate::records::{map_root, Root};
use crate::types::DecodeError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeConfig {
    /// Bytewords style of the input text.
    pub style: Style,

    /// Compressed stream format of the middle layer.
    pub compression: Compression,

    /// Largest inflated payload accepted, in bytes.
    pub max_inflated_size: usize,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            style: Style::Minimal,
            compression: Compression::Gzip,
            max_inflated_size: DEFAULT_MAX_INFLATED_SIZE,
        }
    }
}

impl DecodeConfig {
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn with_compression(mut self, compression: Compression) -> Self {
        self.compression = compression;
        self
    }

    pub fn with_max_inflated_size(mut self, limit: usize) -> Self {
        self.max_inflated_size = limit;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeConfig {
    pub style: Style,
    pub compression: Compression,
    /// 0..=9; anything else uses the codec default.
    pub level: u32,
}

impl Default for EncodeConfig {
    fn default() -> Self {
        Self {
            style: Style::Minimal,
            compression: Compression::Gzip,
            level: DEFAULT_COMPRESSION_LEVEL,
        }
    }
}

impl EncodeConfig {
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn with_compression(mut self, compression: Compression) -> Self {
        self.compression = compression;
        self
    }

    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }
}

/// Decode text down to the untyped value tree (no record mapping).
pub fn decode_value(input: &str, config: &DecodeConfig) -> Result<ValueTree, DecodeError> {
    let body = bytewords::decode(input, config.style)?;
    let tree = container::unwrap(&body, config.compression, config.max_inflated_size)?;
    Ok(tree)
}

/// 🔓 Decode bytewords text into records.
///
/// # Errors
/// The first failing stage's error; nothing partial is returned.
pub fn decode_root(input: &str, config: &DecodeConfig) -> Result<Root, DecodeError> {
    let tree = decode_value(input, config)?;
    let root = map_root(&tree)?;
    debug!("decoded root: version {}, {} accounts", root.version, root.accounts.len());
    Ok(root)
}

/// Wrap a value tree and encode it as bytewords text.
pub fn encode_value(tree: &ValueTree, config: &EncodeConfig) -> Result<String, ContainerError> {
    let body = container::wrap(tree, config.compression, config.level)?;
    Ok(bytewords::encode(&body, config.style))
}

/// 🔒 Encode records as bytewords text.
pub fn encode_root(root: &Root, config: &EncodeConfig) -> Result<String, ContainerError> {
    encode_value(&root.to_value(), config)
}
