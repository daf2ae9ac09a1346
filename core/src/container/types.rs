//! container/types.rs
//! Compression selection, the untyped value tree, and container errors.
use std::fmt;

/// Untyped tree produced by the inner binary-object layer.
pub type ValueTree = ciborium::value::Value;

/// Compressed stream format of the middle layer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Compression {
    /// Gzip member(s) with header and CRC trailer.
    #[default]
    Gzip,
    /// Zlib wrapper around a raw deflate stream.
    Zlib,
}

impl Compression {
    pub fn name(self) -> &'static str {
        match self {
            Compression::Gzip => "gzip",
            Compression::Zlib => "zlib",
        }
    }
}

/// Which of the three unwrap steps (or the wrap direction) failed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// Outer binary object holding the compressed byte string.
    Outer,
    /// Compressed stream.
    Inflate,
    /// Inner binary object holding the record tree.
    Inner,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Outer => write!(f, "outer object"),
            Step::Inflate => write!(f, "inflate"),
            Step::Inner => write!(f, "inner object"),
        }
    }
}

#[derive(Debug)]
pub enum ContainerError {
    /// Binary-object stream could not be parsed.
    Malformed { step: Step, msg: String },

    /// Bytes left over after the single top-level item.
    TrailingBytes { step: Step, count: usize },

    /// Outer object is not a byte string.
    NotByteString { found: &'static str },

    /// Compressed stream could not be inflated.
    Inflate { codec: &'static str, msg: String },

    /// Inflated output exceeded the configured cap.
    InflatedTooLarge { limit: usize },

    /// Serialising or compressing failed while wrapping.
    Wrap { step: Step, msg: String },
}

impl fmt::Display for ContainerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ContainerError::*;
        match self {
            Malformed { step, msg } =>
                write!(f, "{} decode failed: {}", step, msg),
            TrailingBytes { step, count } =>
                write!(f, "{} decode failed: {} trailing bytes", step, count),
            NotByteString { found } =>
                write!(f, "outer object is {}, expected byte string", found),
            Inflate { codec, msg } =>
                write!(f, "{} inflate failed: {}", codec, msg),
            InflatedTooLarge { limit } =>
                write!(f, "inflated payload exceeds {} bytes", limit),
            Wrap { step, msg } =>
                write!(f, "{} wrap failed: {}", step, msg),
        }
    }
}

impl std::error::Error for ContainerError {}

/// Short kind name of a value, for diagnostics.
pub fn value_kind(v: &ValueTree) -> &'static str {
    match v {
        ValueTree::Integer(_) => "integer",
        ValueTree::Bytes(_) => "byte string",
        ValueTree::Float(_) => "float",
        ValueTree::Text(_) => "text",
        ValueTree::Bool(_) => "bool",
        ValueTree::Null => "null",
        ValueTree::Tag(_, _) => "tag",
        ValueTree::Array(_) => "array",
        ValueTree::Map(_) => "map",
        _ => "unknown",
    }
}
