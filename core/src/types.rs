use thiserror::Error;

use crate::bytewords::BytewordsError;
use crate::container::ContainerError;
use crate::records::SchemaError;

/// Flat error classification across all stages.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MalformedToken,
    UnknownWord,
    CorruptWord,
    TooShort,
    ChecksumMismatch,
    ContainerDecodeError,
    SchemaMismatch,
}

/// Unified decode error covering the bytewords, container and record stages.
/// - `From<T>` impls let `?` carry stage errors through the pipeline.
/// - No stage recovers; the first error is the one reported.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("bytewords error: {0}")]
    Bytewords(#[from] BytewordsError),

    #[error("container error: {0}")]
    Container(#[from] ContainerError),

    #[error("{0}")]
    Schema(#[from] SchemaError),
}

impl DecodeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DecodeError::Bytewords(e) => match e {
                BytewordsError::MalformedToken { .. } => ErrorKind::MalformedToken,
                BytewordsError::UnknownWord { .. } => ErrorKind::UnknownWord,
                BytewordsError::CorruptWord { .. } => ErrorKind::CorruptWord,
                BytewordsError::TooShort { .. } => ErrorKind::TooShort,
                BytewordsError::ChecksumMismatch { .. } => ErrorKind::ChecksumMismatch,
            },
            DecodeError::Container(_) => ErrorKind::ContainerDecodeError,
            DecodeError::Schema(_) => ErrorKind::SchemaMismatch,
        }
    }
}
