//! VLC integration tests.

use oxivlc_core::chunks::{BinaryChunks, CHUNK_SIZE};
use oxivlc_vlc::{
    EncodingTable, OxiVlcError, Packer, Unpacker, VlcCodec, escape_upper, pack, unescape_upper,
    unpack,
};
use proptest::prelude::*;
use std::sync::Arc;
use std::thread;

/// Text over the supported alphabet: letters of either case and space.
fn supported_text() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            proptest::char::range('a', 'z'),
            proptest::char::range('A', 'Z'),
            Just(' '),
        ],
        0..200,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

#[test]
fn test_spec_scenarios() {
    assert_eq!(pack("Ted").expect("pack failed"), [0x22, 0x69, 0x40]);
    assert_eq!(
        pack("My name is Ted").expect("pack failed"),
        [0x20, 0x30, 0x3C, 0x18, 0x77, 0x4A, 0xE4, 0x4D, 0x28]
    );

    let packed = pack("Some pretty SUBsequence").expect("pack failed");
    assert_eq!(packed.len(), 17);
    assert_eq!(&packed[..3], &[0x21, 0x62, 0x1D]);
    assert_eq!(packed[16], 0x68);
    assert_eq!(
        unpack(&packed).expect("unpack failed"),
        "Some pretty SUBsequence"
    );
}

#[test]
fn test_unsupported_character_is_reported() {
    let err = pack("Ω").unwrap_err();
    assert!(matches!(err, OxiVlcError::UnsupportedCharacter { ch: 'Ω' }));
    assert!(err.to_string().contains('Ω'));
}

#[test]
fn test_pangram_roundtrip() {
    let original = "The quick brown fox jumps over the lazy dog";
    let packed = pack(original).expect("pack failed");

    println!("Original size: {} bytes", original.len());
    println!("Packed size: {} bytes", packed.len());

    assert!(packed.len() < original.len());
    assert_eq!(unpack(&packed).expect("unpack failed"), original);
}

#[test]
fn test_every_letter_at_every_padding_offset() {
    // Shift each character through all bit offsets within a byte.
    for prefix in 0..CHUNK_SIZE {
        for ch in ('a'..='z').chain('A'..='Z').chain([' ']) {
            let text: String = std::iter::repeat_n(' ', prefix).chain([ch]).collect();
            let packed = pack(&text).expect("pack failed");
            assert_eq!(unpack(&packed).expect("unpack failed"), text);
        }
    }
}

#[test]
fn test_long_text_roundtrip() {
    let original = "How vexingly quick daft Zebras jump ".repeat(500);
    let packed = pack(&original).expect("pack failed");
    assert_eq!(unpack(&packed).expect("unpack failed"), original);
}

#[test]
fn test_shared_codec_across_threads() {
    let codec = Arc::new(VlcCodec::new());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let codec = Arc::clone(&codec);
            thread::spawn(move || {
                let text = format!("Worker {} says hello", ["one", "two", "six", "ten"][i]);
                let packed = codec.pack(&text).expect("pack failed");
                assert_eq!(codec.unpack(&packed).expect("unpack failed"), text);
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("worker panicked");
    }
}

#[test]
fn test_corrupted_tail_is_fatal() {
    let mut packed = pack("Ted").expect("pack failed");
    // Flip a padding bit to one so the tail is no longer padding.
    *packed.last_mut().expect("non-empty") |= 0b0000_0001;
    assert!(unpack(&packed).is_err());
}

proptest! {
    #[test]
    fn prop_roundtrip(text in supported_text()) {
        let packed = pack(&text).unwrap();
        prop_assert_eq!(unpack(&packed).unwrap(), text);
    }

    #[test]
    fn prop_escape_roundtrip(text in supported_text()) {
        prop_assert_eq!(unescape_upper(&escape_upper(&text, '!'), '!'), text);
    }

    #[test]
    fn prop_byte_count(text in supported_text()) {
        let bits = EncodingTable::standard()
            .encode_binary(&escape_upper(&text, '!'))
            .unwrap();
        let packed = pack(&text).unwrap();
        prop_assert_eq!(packed.len(), bits.len().div_ceil(CHUNK_SIZE));
    }

    #[test]
    fn prop_padding_never_decodes(text in supported_text()) {
        let escaped = escape_upper(&text, '!');
        let packed = pack(&text).unwrap();
        let bits = BinaryChunks::from_bytes(&packed).to_string();
        let decoded = oxivlc_vlc::DecodingTree::new(EncodingTable::standard())
            .decode_binary(&bits)
            .unwrap();
        prop_assert_eq!(decoded, escaped);
    }
}
