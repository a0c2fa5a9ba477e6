//! # delegate-meta - Delegate Metadata Container
//!
//! A compact binary container that carries metadata for several independent
//! delegates in one buffer, each entry addressed by a 4-byte [`Identifier`].
//!
//! The container is cheap to probe for a single identifier ([`lookup`] reads
//! only the table), can be built offline from a list of pairs ([`build`]),
//! and can be extended without re-encoding existing payloads ([`append`]).
//! Every operation is a pure function from byte buffers to byte buffers.
//!
//! ## Layout
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │ RESERVED (word 0, 32 bytes, opaque)                            │
//! ├───────────────────────────────────────────────────────────────┤
//! │ TABLE (words 1 ..= T)                                          │
//! │                                                               │
//! │ id (4 bytes) | word_offset (u8)                               │
//! │ ... repeated for each entry, in insertion order ...            │
//! │ zero padding up to a word boundary                            │
//! ├───────────────────────────────────────────────────────────────┤
//! │ PAYLOADS (word T+1 ..)                                         │
//! │                                                               │
//! │ payload of entry 0, zero-padded to a word                      │
//! │ payload of entry 1, zero-padded to a word                      │
//! │ ...                                                           │
//! └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! `word_offset` counts whole 32-byte words from the start of the buffer.
//! The table ends at the first entry's `word_offset` or at the first slot
//! whose offset byte is zero. An entry's payload runs up to the next entry's
//! offset, or to the end of the buffer for the last entry. Buffers shorter
//! than [`MIN_CONTAINER_BYTES`] (37) carry no metadata.
//!
//! ## Example
//!
//! ```rust
//! use delegate_meta::{append, build, lookup, Identifier};
//!
//! let a = Identifier::from(0x1111_1111_u32);
//! let b = Identifier::from(0x2222_2222_u32);
//!
//! let buf = build(&[a], &[b"alpha"]).unwrap();
//! let buf = append(b, b"beta", &buf).unwrap();
//!
//! assert_eq!(&lookup(a, &buf).unwrap()[..5], b"alpha");
//! assert_eq!(&lookup(b, &buf).unwrap()[..4], b"beta");
//! assert_eq!(lookup(Identifier::from(0x3333_3333_u32), &buf), None);
//! ```

mod appender;
mod builder;
mod error;
mod identifier;
mod layout;
mod parser;
mod table;

pub use appender::append;
pub use builder::build;
pub use error::{CodecError, Result};
pub use identifier::Identifier;
pub use layout::{
    table_words, words_for, ENTRY_BYTES, ID_BYTES, MAX_WORD_OFFSET, MIN_CONTAINER_BYTES,
    OFFSET_BYTES, RESERVED_BYTES, WORD_BYTES,
};
pub use parser::lookup;
pub use table::{Entry, MetadataView, Slot};

#[cfg(test)]
mod tests;
