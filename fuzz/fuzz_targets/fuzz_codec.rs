#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use unicodec::{
    ErrorMode, MAX_CODEPOINT, decode_iter, decode_string, encode_string, is_valid_range,
    is_valid_unit, is_valid_utf8,
};

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    bytes: &'a [u8],
    codepoints: Vec<u32>,
    range: (usize, usize),
}

fn check(input: Input<'_>) {
    let Input {
        bytes,
        codepoints,
        range: (begin, end),
    } = input;

    // Decoding
    let valid = is_valid_utf8(bytes);
    let strict = decode_string(bytes, ErrorMode::Strict);
    assert_eq!(strict.is_ok(), valid);

    let lenient = decode_string(bytes, ErrorMode::Replace).expect("replace mode never fails");
    assert!(lenient.len() <= bytes.len());
    if let Ok(strict) = &strict {
        assert_eq!(strict, &lenient);
    }

    // Anything std accepts, we accept with the same codepoints.
    if let Ok(text) = std::str::from_utf8(bytes) {
        assert!(valid);
        let expected: Vec<u32> = text.chars().map(u32::from).collect();
        assert_eq!(lenient, expected);
    }

    // The lazy decoder ends exactly at the input length.
    let mut iter = decode_iter(bytes, ErrorMode::Replace);
    while iter.next().is_some() {}
    assert_eq!(iter.offset(), bytes.len());

    // Validation entry points
    let _ = is_valid_range(bytes, begin, end);
    if is_valid_unit(bytes) {
        assert!(valid);
        assert_eq!(lenient.len(), 1);
    }

    // Encoding
    let in_range = codepoints.iter().all(|&cp| cp <= MAX_CODEPOINT);
    let encoded = encode_string(&codepoints, ErrorMode::Replace).expect("replace mode never fails");
    assert_eq!(encode_string(&codepoints, ErrorMode::Strict).is_ok(), in_range);
    assert!(is_valid_utf8(&encoded));
    if in_range {
        assert_eq!(decode_string(&encoded, ErrorMode::Strict).as_ref(), Ok(&codepoints));
    }
}

fuzz_target!(|input: Input<'_>| check(input));
