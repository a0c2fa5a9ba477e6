use tracing::debug;

use crate::error::{CodecError, Result};
use crate::identifier::Identifier;
use crate::layout::{pad_to_word, table_words, words_for, RESERVED_BYTES, WORD_BYTES};
use crate::table::{Entry, MetadataView};

/// Returns a copy of `original` with `(id, payload)` added as its last entry.
///
/// The existing payload region is copied byte for byte. The new payload is
/// zero-padded to a word and placed right after the previous last payload.
///
/// When the table has no room left for one more 5-byte entry it grows by one
/// word, which moves every existing payload one word later; all existing
/// offsets are rewritten to match. The reserved word is carried over as is.
///
/// # Errors
///
/// - [`CodecError::MalformedBuffer`] if `original` does not parse as a
///   container (see [`MetadataView::parse`]).
/// - [`CodecError::MetadataTooLong`] if a rewritten or new offset exceeds 255.
pub fn append(id: Identifier, payload: &[u8], original: &[u8]) -> Result<Vec<u8>> {
    let view = MetadataView::parse(original)?;
    let last = *view
        .last()
        .ok_or_else(|| CodecError::MalformedBuffer("table has no entries".to_string()))?;

    let old_table_words = view.table_words();
    let new_table_words = old_table_words.max(table_words(view.len() + 1));
    let growth = new_table_words - old_table_words;
    let last_payload_words = (original.len() - last.byte_offset()) / WORD_BYTES;

    let mut out = Vec::with_capacity(
        original.len() + growth * WORD_BYTES + words_for(payload.len()) * WORD_BYTES,
    );
    out.extend_from_slice(view.reserved());

    // Rewrite TABLE, shifting every payload past the grown table
    for entry in view.entries() {
        entry.shifted(growth)?.write_to(&mut out);
    }
    let new_offset = last.word_offset as usize + growth + last_payload_words;
    Entry::at(id, new_offset)?.write_to(&mut out);
    out.resize(RESERVED_BYTES + new_table_words * WORD_BYTES, 0);

    // Copy existing PAYLOADS, then the new one
    out.extend_from_slice(view.payload_region());
    pad_to_word(&mut out);
    out.extend_from_slice(payload);
    pad_to_word(&mut out);

    debug!(
        %id,
        existing = view.len(),
        grew = growth > 0,
        word_offset = new_offset,
        len = out.len(),
        "appended metadata entry"
    );
    Ok(out)
}
