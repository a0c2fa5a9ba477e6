//! Lookup-table decoding.
//!
//! A table slot is 5 bytes: `[id: 4][word_offset: u8]`. On the wire a zero
//! offset byte marks the end of the table (real offsets always point past the
//! reserved word and the table, so they are never zero). That sentinel is
//! decoded once, here, into [`Slot::Empty`]; the rest of the codec only ever
//! sees [`Slot::Occupied`] entries.

use crate::error::{CodecError, Result};
use crate::identifier::Identifier;
use crate::layout::{
    ENTRY_BYTES, FIRST_OFFSET_POS, ID_BYTES, MIN_CONTAINER_BYTES, RESERVED_BYTES, RESERVED_WORDS,
    WORD_BYTES,
};

/// One `(identifier, word_offset)` pair from the lookup table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub id: Identifier,
    pub word_offset: u8,
}

impl Entry {
    /// Creates an entry, failing with [`CodecError::MetadataTooLong`] if
    /// `word_offset` does not fit in the one-byte offset field.
    pub fn at(id: Identifier, word_offset: usize) -> Result<Self> {
        let word_offset = u8::try_from(word_offset)
            .map_err(|_| CodecError::MetadataTooLong { offset: word_offset })?;
        Ok(Self { id, word_offset })
    }

    /// Byte position of this entry's payload within the buffer.
    #[must_use]
    pub fn byte_offset(&self) -> usize {
        self.word_offset as usize * WORD_BYTES
    }

    /// Returns a copy whose payload sits `words` words later.
    pub fn shifted(&self, words: usize) -> Result<Self> {
        Self::at(self.id, self.word_offset as usize + words)
    }

    pub(crate) fn write_to(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(self.id.as_bytes());
        buf.push(self.word_offset);
    }
}

/// A decoded table slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Occupied(Entry),
    /// Padding after the last entry.
    Empty,
}

impl Slot {
    /// Decodes one slot from the first [`ENTRY_BYTES`] bytes of `bytes`.
    ///
    /// # Panics
    ///
    /// Panics if `bytes` is shorter than [`ENTRY_BYTES`].
    #[must_use]
    pub fn decode(bytes: &[u8]) -> Slot {
        match bytes[ID_BYTES] {
            0 => Slot::Empty,
            word_offset => Slot::Occupied(Entry {
                id: Identifier::from_slice(bytes),
                word_offset,
            }),
        }
    }

    /// Returns the entry if this slot is occupied.
    #[must_use]
    pub fn occupied(self) -> Option<Entry> {
        match self {
            Slot::Occupied(entry) => Some(entry),
            Slot::Empty => None,
        }
    }
}

/// Word offset advertised by the first table entry. This is also where the
/// table region ends.
///
/// The caller must ensure `buf.len() >= MIN_CONTAINER_BYTES`.
pub(crate) fn first_word_offset(buf: &[u8]) -> usize {
    buf[FIRST_OFFSET_POS] as usize
}

/// Iterates the slots lying completely inside `buf[RESERVED_BYTES..table_end]`.
pub(crate) fn slots(buf: &[u8], table_end: usize) -> impl Iterator<Item = Slot> + '_ {
    let table_end = table_end.min(buf.len());
    (RESERVED_BYTES..)
        .step_by(ENTRY_BYTES)
        .take_while(move |pos| pos + ENTRY_BYTES <= table_end)
        .map(move |pos| Slot::decode(&buf[pos..pos + ENTRY_BYTES]))
}

/// Iterates the occupied entries of the table, stopping at the first empty
/// slot or at the table boundary.
pub(crate) fn entries(buf: &[u8], table_end: usize) -> impl Iterator<Item = Entry> + '_ {
    slots(buf, table_end).map_while(Slot::occupied)
}

fn malformed(reason: impl Into<String>) -> CodecError {
    CodecError::MalformedBuffer(reason.into())
}

/// A validated, decoded view over an encoded container.
///
/// Unlike [`lookup`](crate::lookup), which scans lazily and tolerates damage
/// by reporting "not found", `parse` checks the whole table up front:
///
/// - the buffer is at least [`MIN_CONTAINER_BYTES`] long and a whole number
///   of words;
/// - the first entry's offset points past the reserved word and inside the
///   buffer;
/// - offsets never decrease and never point past the end of the buffer.
#[derive(Debug, Clone)]
pub struct MetadataView<'a> {
    buf: &'a [u8],
    entries: Vec<Entry>,
}

impl<'a> MetadataView<'a> {
    /// Decodes and validates the table of `buf`.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::MalformedBuffer`] describing the first
    /// inconsistency found.
    pub fn parse(buf: &'a [u8]) -> Result<Self> {
        if buf.len() < MIN_CONTAINER_BYTES {
            return Err(malformed(format!(
                "buffer is {} bytes, need at least {}",
                buf.len(),
                MIN_CONTAINER_BYTES
            )));
        }
        if buf.len() % WORD_BYTES != 0 {
            return Err(malformed(format!(
                "buffer length {} is not a multiple of {}",
                buf.len(),
                WORD_BYTES
            )));
        }

        let first = first_word_offset(buf);
        if first <= RESERVED_WORDS {
            return Err(malformed(format!(
                "first word offset {} does not point past the table",
                first
            )));
        }
        let table_end = first * WORD_BYTES;
        if table_end > buf.len() {
            return Err(malformed(format!(
                "first word offset {} points past the end of a {}-word buffer",
                first,
                buf.len() / WORD_BYTES
            )));
        }

        let entries: Vec<Entry> = entries(buf, table_end).collect();
        let mut prev = first;
        for (i, entry) in entries.iter().enumerate() {
            let offset = entry.word_offset as usize;
            if offset < prev {
                return Err(malformed(format!(
                    "entry {} ({}) has word offset {}, before {}",
                    i, entry.id, offset, prev
                )));
            }
            if entry.byte_offset() > buf.len() {
                return Err(malformed(format!(
                    "entry {} ({}) points past the end of the buffer",
                    i, entry.id
                )));
            }
            prev = offset;
        }

        Ok(Self { buf, entries })
    }

    /// All entries in table order.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false` for a parsed view; provided for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The last entry in the table.
    #[must_use]
    pub fn last(&self) -> Option<&Entry> {
        self.entries.last()
    }

    /// Number of words the table region occupies, padding included.
    #[must_use]
    pub fn table_words(&self) -> usize {
        first_word_offset(self.buf) - RESERVED_WORDS
    }

    /// The opaque reserved word.
    #[must_use]
    pub fn reserved(&self) -> &'a [u8] {
        &self.buf[..RESERVED_BYTES]
    }

    /// Every payload, back to back, as stored.
    #[must_use]
    pub fn payload_region(&self) -> &'a [u8] {
        &self.buf[first_word_offset(self.buf) * WORD_BYTES..]
    }

    /// The stored payload of the entry at `index`.
    #[must_use]
    pub fn payload_of(&self, index: usize) -> Option<&'a [u8]> {
        let start = self.entries.get(index)?.byte_offset();
        let end = self
            .entries
            .get(index + 1)
            .map_or(self.buf.len(), Entry::byte_offset);
        Some(&self.buf[start..end])
    }

    /// The stored payload for `id`, if present.
    #[must_use]
    pub fn get(&self, id: Identifier) -> Option<&'a [u8]> {
        let index = self.entries.iter().position(|e| e.id == id)?;
        self.payload_of(index)
    }

    #[must_use]
    pub fn contains(&self, id: Identifier) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// The underlying buffer.
    #[must_use]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.buf
    }
}
