//! bytewords-core
//!
//! Bytewords text codec and layered container decode for wallet exports.
//! No I/O, no FFI.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod utils;

// Layers, leaf first
pub mod bytewords;
pub mod container;
pub mod records;

// Public API
pub mod pipeline;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::bytewords::{decode, encode, BytewordsError, Style, WordTable};
    pub use crate::container::{Compression, ContainerError, ValueTree};
    pub use crate::pipeline::{decode_root, decode_value, encode_root, encode_value, DecodeConfig, EncodeConfig};
    pub use crate::records::{Account, Root, SchemaError, WalletInfo};
    pub use crate::types::{DecodeError, ErrorKind};
}
