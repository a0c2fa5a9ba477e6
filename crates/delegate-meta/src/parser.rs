use tracing::trace;

use crate::identifier::Identifier;
use crate::layout::{MIN_CONTAINER_BYTES, WORD_BYTES};
use crate::table::{entries, first_word_offset};

/// Returns the stored payload for `id`, or `None` if it is absent.
///
/// Only the table is scanned; unrelated payloads are never decoded. The scan
/// stops at the first empty slot or at the word offset of the first entry,
/// whichever comes first. The payload runs up to the next entry's offset, or
/// to the end of the buffer for the last entry.
///
/// Buffers shorter than [`MIN_CONTAINER_BYTES`] carry no metadata and always
/// yield `None`. Offsets that point outside the buffer also yield `None`
/// instead of panicking.
///
/// The returned slice is word-padded exactly as stored; a zero-length payload
/// comes back as `Some(&[])`.
#[must_use]
pub fn lookup(id: Identifier, buf: &[u8]) -> Option<&[u8]> {
    if buf.len() < MIN_CONTAINER_BYTES {
        return None;
    }

    let table_end = first_word_offset(buf) * WORD_BYTES;
    let mut table = entries(buf, table_end).peekable();

    while let Some(entry) = table.next() {
        if entry.id != id {
            continue;
        }
        let start = entry.byte_offset();
        let end = table.peek().map_or(buf.len(), |next| next.byte_offset());
        return buf.get(start..end);
    }

    trace!(%id, len = buf.len(), "identifier not present");
    None
}
