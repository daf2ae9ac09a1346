//! records/mod.rs
//! Fixed positional mapping from the value tree into wallet export records.

pub mod types;
pub mod mapper;

pub use types::*;
pub use mapper::*;
