use thiserror::Error;

use crate::layout::MAX_WORD_OFFSET;

/// Errors produced while building, appending to, or validating a container.
///
/// A missing identifier is not an error: [`lookup`](crate::lookup) returns
/// `None` for it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// A table entry would need a word offset that does not fit in one byte.
    #[error("metadata too long: word offset {offset} exceeds {max}", max = MAX_WORD_OFFSET)]
    MetadataTooLong {
        /// The offending word offset.
        offset: usize,
    },

    /// `build` was given a different number of identifiers and payloads.
    #[error("length mismatch: {identifiers} identifiers but {payloads} payloads")]
    LengthMismatch { identifiers: usize, payloads: usize },

    /// `build` was given no entries at all.
    #[error("refusing to build an empty container (no entries)")]
    EmptyContainer,

    /// An identifier string was not exactly 8 hex digits.
    #[error("invalid identifier {0:?}: expected 8 hex digits")]
    InvalidIdentifier(String),

    /// The input buffer is too short or its table is inconsistent.
    #[error("malformed buffer: {0}")]
    MalformedBuffer(String),
}

/// Convenience alias used throughout the codec.
pub type Result<T> = std::result::Result<T, CodecError>;
