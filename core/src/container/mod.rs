//! container/mod.rs
//! Nested binary containers between the bytewords body and the record tree.
//!
//! Layout of a body:
//! - outer binary object (CBOR) holding one byte string,
//! - that byte string is a compressed stream (gzip by default),
//! - the inflated bytes are a second binary object holding the record tree.

pub mod types;
pub mod unwrap;
pub mod wrap;

pub use types::*;
pub use unwrap::*;
pub use wrap::*;
