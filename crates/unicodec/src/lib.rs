//! UTF-8 / UTF-32 transcoding and validation for terminal input and output.
//!
//! The codec works at the codepoint level only: it classifies leading bytes,
//! validates byte ranges, decodes UTF-8 into UTF-32 codepoints and encodes
//! codepoints back into their shortest UTF-8 form. Malformed input is either
//! replaced by U+FFFD or reported, depending on the [`ErrorMode`] passed to
//! each call.
//!
//! ```rust
//! use unicodec::{decode_string, encode_string, ErrorMode};
//!
//! let codepoints = decode_string("→ ∞".as_bytes(), ErrorMode::Strict).unwrap();
//! assert_eq!(codepoints, [0x2192, 0x20, 0x221E]);
//! assert_eq!(
//!     encode_string(&codepoints, ErrorMode::Strict).unwrap(),
//!     "→ ∞".as_bytes()
//! );
//! ```
//!
//! On Windows the [`windows`] module also converts between UTF-8 and the
//! UTF-16 used by the console API.

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod classify;
mod decode;
mod encode;
mod error;
mod options;
mod validate;

#[cfg(windows)]
pub mod windows;

#[cfg(test)]
mod tests;

pub use classify::classify_leading_byte;
pub use decode::{DecodeIter, decode_byte, decode_iter, decode_string};
pub use encode::{encode_codepoint, encode_into, encode_string, encoded_len};
pub use error::CodecError;
pub use options::ErrorMode;
pub use validate::{is_valid_range, is_valid_unit, is_valid_utf8};

/// A UTF-32 code unit.
///
/// Values are not restricted to Unicode scalar values: surrogates round-trip
/// through the codec unchanged.
pub type Codepoint = u32;

/// Largest codepoint the encoder accepts.
pub const MAX_CODEPOINT: Codepoint = 0x10_FFFF;

/// U+FFFD, substituted for malformed input in [`ErrorMode::Replace`].
pub const REPLACEMENT_CHARACTER: Codepoint = 0xFFFD;

/// UTF-8 encoding of [`REPLACEMENT_CHARACTER`].
pub const REPLACEMENT_UTF8: [u8; 3] = [0xEF, 0xBF, 0xBD];
