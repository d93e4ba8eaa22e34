//! Structural UTF-8 validation.
//!
//! Validation is purely structural: every code unit must start with a byte
//! that [`classify_leading_byte`] accepts, fit inside the input, and carry
//! only `10xxxxxx` continuation bytes after its leader. Overlong forms,
//! surrogates and the `F5..=F7` leaders pass as long as their bit patterns are
//! well formed.

use crate::classify::{classify_leading_byte, is_continuation};

/// Returns `true` if `bytes` is a sequence of zero or more well-formed code
/// units.
///
/// ```rust
/// assert!(unicodec::is_valid_utf8(b"\xE2\x82\xA1"));
/// assert!(!unicodec::is_valid_utf8(b"\xE2\x82"));
/// assert!(unicodec::is_valid_utf8(b""));
/// ```
#[must_use]
pub fn is_valid_utf8(bytes: &[u8]) -> bool {
    let mut rest = bytes;
    while let Some(&lead) = rest.first() {
        let len = classify_leading_byte(lead);
        if len == 0 || len > rest.len() {
            return false;
        }
        let (unit, tail) = rest.split_at(len);
        if !unit[1..].iter().copied().all(is_continuation) {
            return false;
        }
        rest = tail;
    }
    true
}

/// Validates the half-open range `begin..end` of `bytes`.
///
/// A reversed range (`begin > end`) or one that runs past the end of `bytes`
/// is invalid. An empty range is valid.
#[must_use]
pub fn is_valid_range(bytes: &[u8], begin: usize, end: usize) -> bool {
    bytes.get(begin..end).is_some_and(is_valid_utf8)
}

/// Returns `true` if `bytes` is exactly one well-formed code unit: its length
/// equals the length announced by its first byte.
///
/// ```rust
/// assert!(unicodec::is_valid_unit(b"\xC3\xB1"));
/// assert!(!unicodec::is_valid_unit(b"ab"));
/// ```
#[must_use]
pub fn is_valid_unit(bytes: &[u8]) -> bool {
    bytes
        .first()
        .is_some_and(|&lead| classify_leading_byte(lead) == bytes.len())
        && is_valid_utf8(bytes)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{is_valid_range, is_valid_unit, is_valid_utf8};

    #[rstest]
    #[case::bad_second_byte(b"\xC3\x28")]
    #[case::lone_continuations(b"\xA0\xA1")]
    #[case::three_byte_bad_second(b"\xE2\x28\xA1")]
    #[case::three_byte_bad_third(b"\xE2\x82\x28")]
    #[case::four_byte_bad_second(b"\xF0\x28\x8C\xBC")]
    #[case::four_byte_bad_third(b"\xF0\x90\x28\xBC")]
    #[case::four_byte_bad_second_and_fourth(b"\xF0\x28\x8C\x28")]
    #[case::three_byte_truncated(b"\xE2\x82")]
    #[case::lone_continuation(b"\x80")]
    #[case::legacy_five_byte(b"\xF8\x88\x80\x80\x80")]
    #[case::trailing_truncation(b"ok\xF0\x9F\xA7")]
    fn rejects(#[case] bytes: &[u8]) {
        assert!(!is_valid_utf8(bytes), "{:?}", bstr::BStr::new(bytes));
        assert!(
            !is_valid_range(bytes, 0, bytes.len()),
            "{:?}",
            bstr::BStr::new(bytes)
        );
    }

    #[rstest]
    #[case::digit(b"0")]
    #[case::letter(b"a")]
    #[case::two_byte(b"\xC3\xB1")]
    #[case::three_byte(b"\xE2\x82\xA1")]
    #[case::four_byte(b"\xF0\x90\x8C\xBC")]
    #[case::empty(b"")]
    #[case::surrogate(b"\xED\xA0\x80")]
    #[case::overlong_nul(b"\xC0\x80")]
    fn accepts(#[case] bytes: &[u8]) {
        assert!(is_valid_utf8(bytes), "{:?}", bstr::BStr::new(bytes));
        assert!(
            is_valid_range(bytes, 0, bytes.len()),
            "{:?}",
            bstr::BStr::new(bytes)
        );
    }

    #[test]
    fn accepts_mixed_script_text() {
        let text = "n → ∞, ∑ f(i) = ∏ g(i)γνωρίζω ἀπὸ τὴν ὄψηდარგებში⠝⠁⠊⠇ ⠁⠎ ⠹⠑ ⠙როგორიცააᚻ∂∈ℝ∧∪≡∞ ↑";
        assert!(is_valid_utf8(text.as_bytes()));
    }

    #[test]
    fn ranges() {
        let bytes = b"a\xC3\xB1\xE2\x82\xA1";
        assert!(is_valid_range(bytes, 0, bytes.len()));
        assert!(is_valid_range(bytes, 1, 3));
        assert!(is_valid_range(bytes, 3, 6));
        // Splits a code unit.
        assert!(!is_valid_range(bytes, 0, 2));
        // Starts on a continuation byte.
        assert!(!is_valid_range(bytes, 2, 6));
        // Empty and reversed.
        assert!(is_valid_range(bytes, 4, 4));
        assert!(!is_valid_range(bytes, 4, 2));
        // Past the end.
        assert!(!is_valid_range(bytes, 0, 7));
    }

    #[test]
    fn units() {
        assert!(is_valid_unit(b"a"));
        assert!(is_valid_unit(b"\xC3\xB1"));
        assert!(is_valid_unit(b"\xE2\x82\xA1"));
        assert!(is_valid_unit(b"\xF0\x90\x8C\xBC"));

        assert!(!is_valid_unit(b""));
        // Two complete code units are not one.
        assert!(!is_valid_unit(b"ab"));
        assert!(!is_valid_unit(b"\xC3\xB1a"));
        assert!(!is_valid_unit(b"\xC3"));
        assert!(!is_valid_unit(b"\xC3\x28"));
        assert!(!is_valid_unit(b"\x80"));
    }
}
