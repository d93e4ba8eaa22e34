//! UTF-32 → UTF-8 encoding.
//!
//! Every in-range codepoint is written in its shortest form; values above
//! [`MAX_CODEPOINT`] become [`REPLACEMENT_UTF8`] or an error. Surrogates are
//! encoded like any other 3-byte value.

use alloc::vec::Vec;

use crate::{
    Codepoint, CodecError, ErrorMode, MAX_CODEPOINT, REPLACEMENT_UTF8, classify::CONT_TAG,
};

/// Largest codepoint for each encoded length, indexed by length minus one.
const RANGES: [Codepoint; 4] = [0x7F, 0x7FF, 0xFFFF, MAX_CODEPOINT];

/// Tag bits of the leading byte, indexed by the number of continuation bytes.
const LEAD_TAG: [u8; 4] = [0x00, 0xC0, 0xE0, 0xF0];

/// Payload mask of the leading byte, indexed like [`LEAD_TAG`].
const LEAD_PAYLOAD: [Codepoint; 4] = [0x7F, 0x1F, 0x0F, 0x07];

const CONT_PAYLOAD: Codepoint = 0x3F;

/// Right shift that brings the bits of the n-th byte from the end down.
const SHIFTS: [u32; 4] = [0, 6, 12, 18];

/// Number of bytes `codepoint` encodes to, or `None` above
/// [`MAX_CODEPOINT`].
///
/// ```rust
/// assert_eq!(unicodec::encoded_len(0x24), Some(1));
/// assert_eq!(unicodec::encoded_len(0x20AC), Some(3));
/// assert_eq!(unicodec::encoded_len(0x11_0000), None);
/// ```
#[must_use]
pub const fn encoded_len(codepoint: Codepoint) -> Option<usize> {
    let mut i = 0;
    while i < RANGES.len() {
        if codepoint <= RANGES[i] {
            return Some(i + 1);
        }
        i += 1;
    }
    None
}

/// Appends the UTF-8 form of `codepoint` to `out` and returns the number of
/// bytes written.
///
/// # Errors
///
/// [`CodecError::InvalidCodepoint`] above [`MAX_CODEPOINT`] in
/// [`ErrorMode::Strict`]; `out` is left untouched in that case.
#[allow(clippy::cast_possible_truncation)]
pub fn encode_into(
    codepoint: Codepoint,
    mode: ErrorMode,
    out: &mut Vec<u8>,
) -> Result<usize, CodecError> {
    let Some(len) = encoded_len(codepoint) else {
        if mode.is_strict() {
            return Err(CodecError::InvalidCodepoint(codepoint));
        }
        tracing::trace!(codepoint, "replacing out-of-range codepoint");
        out.extend_from_slice(&REPLACEMENT_UTF8);
        return Ok(REPLACEMENT_UTF8.len());
    };

    let tail = len - 1;
    out.push(LEAD_TAG[tail] | ((codepoint >> SHIFTS[tail]) & LEAD_PAYLOAD[tail]) as u8);
    for &shift in SHIFTS[..tail].iter().rev() {
        out.push(CONT_TAG | ((codepoint >> shift) & CONT_PAYLOAD) as u8);
    }
    Ok(len)
}

/// Encodes one codepoint.
///
/// # Errors
///
/// [`CodecError::InvalidCodepoint`] above [`MAX_CODEPOINT`] in
/// [`ErrorMode::Strict`].
///
/// ```rust
/// use unicodec::{encode_codepoint, ErrorMode};
///
/// assert_eq!(encode_codepoint(0x80, ErrorMode::Strict).unwrap(), b"\xC2\x80");
/// assert_eq!(
///     encode_codepoint(0x11_0000, ErrorMode::Replace).unwrap(),
///     b"\xEF\xBF\xBD"
/// );
/// ```
pub fn encode_codepoint(codepoint: Codepoint, mode: ErrorMode) -> Result<Vec<u8>, CodecError> {
    let mut out = Vec::with_capacity(4);
    encode_into(codepoint, mode, &mut out)?;
    Ok(out)
}

/// Encodes a sequence of codepoints, in order.
///
/// # Errors
///
/// [`CodecError::InvalidCodepoint`] for the first out-of-range value in
/// [`ErrorMode::Strict`]. No partial output is returned.
pub fn encode_string(codepoints: &[Codepoint], mode: ErrorMode) -> Result<Vec<u8>, CodecError> {
    let mut out = Vec::with_capacity(codepoints.len());
    for &codepoint in codepoints {
        encode_into(codepoint, mode, &mut out)?;
    }
    Ok(out)
}
