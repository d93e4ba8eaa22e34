//! Leading-byte classification.
//!
//! A UTF-8 code unit announces its own length in the high bits of its first
//! byte. Continuation bytes (`10xxxxxx`) and the legacy 5/6-byte leaders
//! (`11111xxx`) never start a code unit and classify as `0`.

/// `(mask, pattern)` pairs indexed by code unit length minus one.
const LEADERS: [(u8, u8); 4] = [
    (0b1000_0000, 0b0000_0000),
    (0b1110_0000, 0b1100_0000),
    (0b1111_0000, 0b1110_0000),
    (0b1111_1000, 0b1111_0000),
];

/// Mask selecting the tag bits of a continuation byte.
pub(crate) const CONT_MASK: u8 = 0b1100_0000;

/// Tag carried by every continuation byte.
pub(crate) const CONT_TAG: u8 = 0b1000_0000;

/// Returns the length of the code unit that `byte` starts, or `0` if `byte`
/// cannot lead a code unit.
///
/// | leading byte | result |
/// |---|---|
/// | `00..=7F` | 1 |
/// | `C0..=DF` | 2 |
/// | `E0..=EF` | 3 |
/// | `F0..=F7` | 4 |
/// | anything else | 0 |
///
/// ```rust
/// assert_eq!(unicodec::classify_leading_byte(b'a'), 1);
/// assert_eq!(unicodec::classify_leading_byte(0xE2), 3);
/// assert_eq!(unicodec::classify_leading_byte(0x80), 0);
/// ```
#[must_use]
#[inline]
pub const fn classify_leading_byte(byte: u8) -> usize {
    let mut i = 0;
    while i < LEADERS.len() {
        let (mask, pattern) = LEADERS[i];
        if byte & mask == pattern {
            return i + 1;
        }
        i += 1;
    }
    0
}

#[inline]
pub(crate) const fn is_continuation(byte: u8) -> bool {
    byte & CONT_MASK == CONT_TAG
}
