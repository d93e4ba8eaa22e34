use alloc::vec;

use rstest::rstest;

use crate::{
    CodecError, ErrorMode, REPLACEMENT_CHARACTER, REPLACEMENT_UTF8, classify_leading_byte,
    decode_string, encode_codepoint, encode_string, is_valid_unit,
};

#[rstest]
#[case::one_byte(0x01)]
#[case::two_byte(0x80)]
#[case::three_byte(0x800)]
#[case::four_byte(0x10_FFFF)]
fn roundtrip_each_length_class(#[case] codepoint: u32) {
    let bytes = encode_codepoint(codepoint, ErrorMode::Strict).unwrap();
    assert!(is_valid_unit(&bytes));
    assert_eq!(classify_leading_byte(bytes[0]), bytes.len());
    assert_eq!(decode_string(&bytes, ErrorMode::Strict), Ok(vec![codepoint]));
}

#[test]
fn replacement_output_decodes_to_replacement_character() {
    let bytes = encode_codepoint(0x11_0000, ErrorMode::Replace).unwrap();
    assert_eq!(bytes, REPLACEMENT_UTF8);
    assert_eq!(
        decode_string(&bytes, ErrorMode::Strict),
        Ok(vec![REPLACEMENT_CHARACTER])
    );
}

#[test]
fn lossy_decode_then_encode_is_valid_utf8() {
    let input = b"\x1b[A\xC3\x28caf\xC3\xA9\xF0\x9F";
    let codepoints = decode_string(input, ErrorMode::Replace).unwrap();
    assert_eq!(
        codepoints,
        [0x1B, 0x5B, 0x41, 0xFFFD, 0x63, 0x61, 0x66, 0xE9, 0xFFFD]
    );
    let bytes = encode_string(&codepoints, ErrorMode::Strict).unwrap();
    assert_eq!(
        core::str::from_utf8(&bytes),
        Ok("\x1b[A\u{FFFD}café\u{FFFD}")
    );
}

#[test]
fn flag_form_of_the_policy() {
    assert_eq!(
        encode_codepoint(0x11_0000, true.into()),
        Err(CodecError::InvalidCodepoint(0x11_0000))
    );
    assert_eq!(
        decode_string(b"\xC3\x28", false.into()),
        Ok(vec![REPLACEMENT_CHARACTER])
    );
}
