//! UTF-8 → UTF-32 decoding.
//!
//! The scan classifies each leading byte, validates exactly the code unit it
//! announces, and unpacks the payload bits. A malformed unit is replaced by a
//! single [`REPLACEMENT_CHARACTER`] (or reported, in [`ErrorMode::Strict`]),
//! and the scan then resumes after the *announced* length, not after the
//! first bad byte. A lead byte that does not classify at all is skipped on its
//! own. This means `E2 28 A1` decodes to one U+FFFD even though `28` alone is
//! valid ASCII.

use core::iter::FusedIterator;

use alloc::vec::Vec;

use crate::{
    Codepoint, CodecError, ErrorMode, REPLACEMENT_CHARACTER, classify::classify_leading_byte,
    validate::is_valid_utf8,
};

/// Payload mask of a leading byte, indexed by the number of continuation
/// bytes that follow it.
const LEAD_PAYLOAD: [u8; 4] = [0x7F, 0x1F, 0x0F, 0x07];

/// Payload mask of a continuation byte.
const CONT_PAYLOAD: u8 = 0x3F;

/// Bits carried by each continuation byte.
const CONT_BITS: u32 = 6;

/// Decodes a single byte of input.
///
/// NUL decodes to nothing. Bytes above `0x7F` are not code units on their own
/// and are replaced by U+FFFD, or rejected in [`ErrorMode::Strict`].
///
/// # Errors
///
/// [`CodecError::NonAsciiByte`] for a non-ASCII byte in strict mode.
///
/// ```rust
/// use unicodec::{decode_byte, ErrorMode};
///
/// assert_eq!(decode_byte(b'A', ErrorMode::Strict), Ok(Some(0x41)));
/// assert_eq!(decode_byte(0, ErrorMode::Strict), Ok(None));
/// assert_eq!(decode_byte(0xE9, ErrorMode::Replace), Ok(Some(0xFFFD)));
/// ```
pub fn decode_byte(byte: u8, mode: ErrorMode) -> Result<Option<Codepoint>, CodecError> {
    match byte {
        0 => Ok(None),
        0x01..=0x7F => Ok(Some(Codepoint::from(byte))),
        _ if mode.is_strict() => Err(CodecError::NonAsciiByte(byte)),
        _ => {
            tracing::trace!(byte, "replacing non-ASCII byte");
            Ok(Some(REPLACEMENT_CHARACTER))
        }
    }
}

/// Decodes a whole byte string into codepoints.
///
/// # Errors
///
/// In [`ErrorMode::Strict`], [`CodecError::InvalidByteSequence`] for the first
/// malformed code unit. [`ErrorMode::Replace`] never fails.
///
/// ```rust
/// use unicodec::{decode_string, ErrorMode};
///
/// let cps = decode_string("añ🧾".as_bytes(), ErrorMode::Strict).unwrap();
/// assert_eq!(cps, [0x61, 0xF1, 0x1F9FE]);
/// ```
pub fn decode_string(bytes: &[u8], mode: ErrorMode) -> Result<Vec<Codepoint>, CodecError> {
    decode_iter(bytes, mode).collect()
}

/// Returns an iterator that decodes `bytes` one code unit at a time.
///
/// In [`ErrorMode::Strict`] the iterator yields the first error and then
/// stops.
#[must_use]
pub fn decode_iter(bytes: &[u8], mode: ErrorMode) -> DecodeIter<'_> {
    DecodeIter {
        bytes,
        pos: 0,
        mode,
        failed: false,
    }
}

/// Lazy UTF-8 decoder returned by [`decode_iter`].
#[derive(Debug, Clone)]
pub struct DecodeIter<'a> {
    bytes: &'a [u8],
    pos: usize,
    mode: ErrorMode,
    failed: bool,
}

impl DecodeIter<'_> {
    /// Byte offset of the next code unit to decode.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.pos
    }

    fn malformed(&mut self, offset: usize) -> Result<Codepoint, CodecError> {
        if self.mode.is_strict() {
            self.failed = true;
            return Err(CodecError::InvalidByteSequence { offset });
        }
        tracing::trace!(offset, "replacing malformed UTF-8 code unit");
        Ok(REPLACEMENT_CHARACTER)
    }
}

impl Iterator for DecodeIter<'_> {
    type Item = Result<Codepoint, CodecError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let start = self.pos;
        let lead = *self.bytes.get(start)?;
        let len = classify_leading_byte(lead);

        let decoded = if len == 0 {
            self.pos = start + 1;
            None
        } else {
            self.pos = (start + len).min(self.bytes.len());
            self.bytes
                .get(start..start + len)
                .filter(|unit| is_valid_utf8(unit))
                .map(|unit| unpack(lead, &unit[1..]))
        };

        Some(match decoded {
            Some(codepoint) => Ok(codepoint),
            None => self.malformed(start),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            return (0, Some(0));
        }
        (0, Some(self.bytes.len() - self.pos))
    }
}

impl FusedIterator for DecodeIter<'_> {}

/// Packs the payload bits of one validated code unit.
#[inline]
fn unpack(lead: u8, tail: &[u8]) -> Codepoint {
    let init = Codepoint::from(lead & LEAD_PAYLOAD[tail.len()]);
    tail.iter().fold(init, |acc, &byte| {
        (acc << CONT_BITS) | Codepoint::from(byte & CONT_PAYLOAD)
    })
}
