//! records/types.rs
//! Typed wallet export records and positional schema errors.
//!
//! Notes:
//! - Records are plain owned data; `Root` owns its accounts, each account owns its wallet info.
//! - Account order is source order.
//! - The opaque wallet field is raw bytes; JSON renders it as lowercase hex.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletInfo {
    pub derivation_path: String,
    pub chain_code: String,
    pub name: String,
    pub flag_a: bool,
    pub flag_b: bool,
    #[serde(with = "hex_bytes")]
    pub opaque: Vec<u8>,
    pub xpub: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: i64,
    pub index: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub block: i64,
    pub wallet: WalletInfo,
}

/// Decoded export: format version plus accounts in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Root {
    pub version: i64,
    pub accounts: Vec<Account>,
}

impl Root {
    /// Indented JSON rendering of the records.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

mod hex_bytes {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&hex::encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<u8>, D::Error> {
        let s = String::deserialize(d)?;
        hex::decode(s).map_err(serde::de::Error::custom)
    }
}

/// What the mapper found at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Found {
    /// Position past the end of the sequence.
    Missing,
    /// Value of another kind (kind name).
    Kind(&'static str),
    /// Integer that does not fit `i64`.
    OutOfRange,
}

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Found::Missing => write!(f, "nothing"),
            Found::Kind(kind) => write!(f, "{}", kind),
            Found::OutOfRange => write!(f, "out-of-range integer"),
        }
    }
}

/// Value tree does not have the fixed positional shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaError {
    /// Position path, e.g. `$[1][0][4][2]`.
    pub path: String,
    pub expected: &'static str,
    pub found: Found,
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "schema mismatch at {}: expected {}, found {}", self.path, self.expected, self.found)
    }
}

impl std::error::Error for SchemaError {}
