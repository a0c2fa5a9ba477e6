//! Container layout constants and word-padding helpers.
//!
//! ```text
//! word 0            reserved (opaque, 32 bytes)
//! word 1 ..= T      lookup table: [id: 4 bytes][word_offset: u8] * n, zero-padded
//! word T+1 ..       payloads, each zero-padded to a whole word
//! ```
//!
//! Every offset stored in the table is a count of whole words from the start
//! of the buffer, so a single byte can address at most [`MAX_WORD_OFFSET`]
//! words.

/// Alignment unit for offsets and padding, in bytes.
pub const WORD_BYTES: usize = 32;

/// Width of an entry identifier in bytes.
pub const ID_BYTES: usize = 4;

/// Width of an entry's word offset in bytes.
pub const OFFSET_BYTES: usize = 1;

/// Size of one table entry: 4 (`id`) + 1 (`word_offset`).
pub const ENTRY_BYTES: usize = ID_BYTES + OFFSET_BYTES;

/// Words occupied by the reserved region at the start of every container.
pub const RESERVED_WORDS: usize = 1;

/// Size of the reserved region in bytes.
pub const RESERVED_BYTES: usize = RESERVED_WORDS * WORD_BYTES;

/// Shortest buffer that can hold a container: the reserved word plus one
/// table entry. Anything shorter means "no metadata".
pub const MIN_CONTAINER_BYTES: usize = RESERVED_BYTES + ENTRY_BYTES;

/// Largest word offset a table entry can carry.
pub const MAX_WORD_OFFSET: usize = u8::MAX as usize;

/// Byte position of the first table entry's offset byte.
pub const FIRST_OFFSET_POS: usize = RESERVED_BYTES + ID_BYTES;

/// Number of whole words needed to hold `len` bytes.
#[must_use]
pub fn words_for(len: usize) -> usize {
    len.div_ceil(WORD_BYTES)
}

/// Number of words the lookup table occupies for `count` entries.
#[must_use]
pub fn table_words(count: usize) -> usize {
    words_for(count * ENTRY_BYTES)
}

/// Zero-pads `buf` up to the next word boundary. A buffer already on a
/// boundary is left untouched.
pub fn pad_to_word(buf: &mut Vec<u8>) {
    let target = words_for(buf.len()) * WORD_BYTES;
    buf.resize(target, 0);
}
