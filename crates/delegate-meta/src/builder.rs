use tracing::debug;

use crate::error::{CodecError, Result};
use crate::identifier::Identifier;
use crate::layout::{pad_to_word, table_words, words_for, RESERVED_BYTES, RESERVED_WORDS, WORD_BYTES};
use crate::table::Entry;

/// Encodes `(identifiers[i], payloads[i])` pairs into a new container.
///
/// # Layout
///
/// ```text
/// [RESERVED] 32 zero bytes
/// [TABLE]    repeated: id(4) | word_offset(u8), zero-padded to a word
/// [PAYLOADS] each payload zero-padded to a word, in table order
/// ```
///
/// Payloads may have any length; each one is padded to a whole number of
/// words and its entry's offset advances by that many words. A zero-length
/// payload takes no space and shares its offset with the next entry.
///
/// # Errors
///
/// - [`CodecError::LengthMismatch`] if the two lists differ in length.
/// - [`CodecError::EmptyContainer`] if there are no entries (the result
///   would be indistinguishable from "no metadata").
/// - [`CodecError::MetadataTooLong`] if any entry's word offset exceeds 255.
pub fn build<P: AsRef<[u8]>>(identifiers: &[Identifier], payloads: &[P]) -> Result<Vec<u8>> {
    if identifiers.len() != payloads.len() {
        return Err(CodecError::LengthMismatch {
            identifiers: identifiers.len(),
            payloads: payloads.len(),
        });
    }
    if identifiers.is_empty() {
        return Err(CodecError::EmptyContainer);
    }

    let table_words = table_words(identifiers.len());
    let payload_words: usize = payloads.iter().map(|p| words_for(p.as_ref().len())).sum();
    let mut out =
        Vec::with_capacity(RESERVED_BYTES + (table_words + payload_words) * WORD_BYTES);
    out.resize(RESERVED_BYTES, 0);

    // Write TABLE
    let mut word_offset = RESERVED_WORDS + table_words;
    for (id, payload) in identifiers.iter().zip(payloads) {
        Entry::at(*id, word_offset)?.write_to(&mut out);
        word_offset += words_for(payload.as_ref().len());
    }
    pad_to_word(&mut out);

    // Write PAYLOADS
    for payload in payloads {
        out.extend_from_slice(payload.as_ref());
        pad_to_word(&mut out);
    }

    debug!(
        entries = identifiers.len(),
        table_words,
        len = out.len(),
        "built metadata container"
    );
    Ok(out)
}
