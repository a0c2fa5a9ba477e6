use crate::*;

pub fn id(value: u32) -> Identifier {
    Identifier::from(value)
}

/// A one-word payload filled with `byte`.
pub fn word(byte: u8) -> Vec<u8> {
    vec![byte; WORD_BYTES]
}

/// `n` distinct identifiers with one-word payloads, entry `i` filled with `i`.
pub fn sample(n: usize) -> (Vec<Identifier>, Vec<Vec<u8>>) {
    let ids = (0..n as u32).map(|i| id(0x1000_0000 + i)).collect();
    let payloads = (0..n).map(|i| word(i as u8)).collect();
    (ids, payloads)
}

/// The hand-assembled container from the format description: reserved word
/// of all ones, `0x11111111 -> word 2` holding `0xdeadbeefdeadbeef`, and
/// `0x33333333 -> word 3` holding a word of all ones.
pub fn hand_built() -> Vec<u8> {
    let mut buf = vec![0xff; WORD_BYTES];

    let mut table = vec![0x11, 0x11, 0x11, 0x11, 2, 0x33, 0x33, 0x33, 0x33, 3];
    table.resize(WORD_BYTES, 0);
    buf.extend_from_slice(&table);

    let mut value = 0xdead_beef_dead_beef_u64.to_be_bytes().to_vec();
    value.resize(WORD_BYTES, 0);
    buf.extend_from_slice(&value);

    buf.extend_from_slice(&word(0xff));
    buf
}
