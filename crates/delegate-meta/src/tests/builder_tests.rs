use super::helpers::*;
use crate::*;

// -------------------- Validation --------------------

#[test]
fn build_rejects_length_mismatch() {
    let err = build(&[id(1), id(2)], &[word(1)]).unwrap_err();
    assert_eq!(
        err,
        CodecError::LengthMismatch {
            identifiers: 2,
            payloads: 1
        }
    );
}

#[test]
fn build_rejects_empty_input() {
    let payloads: [Vec<u8>; 0] = [];
    let err = build(&[], &payloads).unwrap_err();
    assert_eq!(err, CodecError::EmptyContainer);
    assert!(err.to_string().contains("empty"));
}

// -------------------- Byte layout --------------------

#[test]
fn build_matches_hand_assembled_layout() -> anyhow::Result<()> {
    let expected = hand_built();
    let buf = build(
        &[id(0x1111_1111), id(0x3333_3333)],
        &[0xdead_beef_dead_beef_u64.to_be_bytes().to_vec(), word(0xff)],
    )?;

    assert_eq!(buf.len(), expected.len());
    // Reserved word is written as zeros; everything after it is identical.
    assert!(buf[..RESERVED_BYTES].iter().all(|&b| b == 0));
    assert_eq!(&buf[RESERVED_BYTES..], &expected[RESERVED_BYTES..]);
    Ok(())
}

#[test]
fn build_pads_every_payload_to_a_word() -> anyhow::Result<()> {
    let buf = build(&[id(1), id(2)], &[vec![1u8; 33], vec![2u8; 1]])?;

    // reserved + table + 2 words + 1 word
    assert_eq!(buf.len(), 5 * WORD_BYTES);
    assert_eq!(buf[RESERVED_BYTES + 4], 2);
    assert_eq!(buf[RESERVED_BYTES + 9], 4);

    let first = lookup(id(1), &buf).unwrap();
    assert_eq!(first.len(), 2 * WORD_BYTES);
    assert_eq!(&first[..33], &[1u8; 33][..]);
    assert!(first[33..].iter().all(|&b| b == 0));

    let second = lookup(id(2), &buf).unwrap();
    assert_eq!(second.len(), WORD_BYTES);
    assert_eq!(second[0], 2);
    Ok(())
}

#[test]
fn table_grows_to_a_second_word_at_seven_entries() -> anyhow::Result<()> {
    let (ids, payloads) = sample(7);
    let buf = build(&ids, &payloads)?;

    assert_eq!(table_words(7), 2);
    assert_eq!(buf[RESERVED_BYTES + 4], 3);
    assert_eq!(buf.len(), (1 + 2 + 7) * WORD_BYTES);
    Ok(())
}

// -------------------- Round trip --------------------

#[test]
fn every_entry_round_trips() -> anyhow::Result<()> {
    for n in [1, 2, 6, 7, 13, 64, 220] {
        let (ids, payloads) = sample(n);
        let buf = build(&ids, &payloads)?;
        for (id, payload) in ids.iter().zip(&payloads) {
            assert_eq!(
                lookup(*id, &buf),
                Some(&payload[..]),
                "entry {} of {} did not round trip",
                id,
                n
            );
        }
    }
    Ok(())
}

#[test]
fn multi_word_payloads_round_trip() -> anyhow::Result<()> {
    let ids: Vec<Identifier> = (1..=5).map(id).collect();
    let payloads: Vec<Vec<u8>> = (1..=5u8)
        .map(|i| vec![i; i as usize * WORD_BYTES])
        .collect();
    let buf = build(&ids, &payloads)?;

    for (id, payload) in ids.iter().zip(&payloads) {
        assert_eq!(lookup(*id, &buf), Some(&payload[..]));
    }
    Ok(())
}

// -------------------- Offset overflow --------------------

#[test]
fn two_hundred_twenty_single_word_entries_fit() -> anyhow::Result<()> {
    let (ids, payloads) = sample(220);
    let buf = build(&ids, &payloads)?;
    // 35 table words; the last entry sits at word 255.
    assert_eq!(buf[RESERVED_BYTES + 219 * ENTRY_BYTES + ID_BYTES], 255);
    Ok(())
}

#[test]
fn one_more_entry_overflows_the_offset_byte() {
    let (ids, payloads) = sample(221);
    let err = build(&ids, &payloads).unwrap_err();
    assert_eq!(err, CodecError::MetadataTooLong { offset: 256 });
}

#[test]
fn large_payload_overflows_later_offsets() {
    // First payload is 254 words, pushing the second entry to word 256.
    let err = build(&[id(1), id(2)], &[vec![0u8; 254 * WORD_BYTES], word(1)]).unwrap_err();
    assert!(matches!(err, CodecError::MetadataTooLong { offset: 256 }));
}

#[test]
fn last_payload_may_extend_past_word_255() -> anyhow::Result<()> {
    let big = vec![9u8; 300 * WORD_BYTES];
    let buf = build(&[id(1)], &[big.clone()])?;
    assert_eq!(lookup(id(1), &buf), Some(&big[..]));
    Ok(())
}
