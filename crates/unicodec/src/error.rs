use thiserror::Error;

use crate::Codepoint;

/// Errors surfaced by the codec when [`ErrorMode::Strict`] is requested, and
/// unconditionally by the Windows bridge.
///
/// [`ErrorMode::Strict`]: crate::ErrorMode::Strict
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    /// The value to encode lies above [`MAX_CODEPOINT`](crate::MAX_CODEPOINT).
    #[error("Invalid UTF32 codepoint.")]
    InvalidCodepoint(Codepoint),
    /// A single byte handed to [`decode_byte`](crate::decode_byte) is not
    /// ASCII.
    #[error("the char is not in UTF-8 range.")]
    NonAsciiByte(u8),
    /// The input is not well-formed UTF-8.
    #[error("Bad UTF-8 sequence.")]
    InvalidByteSequence {
        /// Byte offset of the malformed code unit within the input.
        offset: usize,
    },
    /// The input is longer than the host conversion API can address.
    #[error("string size is too big {size}/{max}")]
    SizeOverflow {
        /// Length of the rejected input, in code units.
        size: usize,
        /// Largest length the host API accepts.
        max: usize,
    },
    /// The host codepage conversion reported a failure.
    #[error("platform conversion failed with OS error {code}")]
    PlatformConversionFailure {
        /// Error code returned by the operating system.
        code: u32,
    },
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::CodecError;

    #[test]
    fn messages_match_the_terminal_layer_expectations() {
        assert_eq!(
            CodecError::InvalidCodepoint(0x11_0000).to_string(),
            "Invalid UTF32 codepoint."
        );
        assert_eq!(
            CodecError::NonAsciiByte(0xE9).to_string(),
            "the char is not in UTF-8 range."
        );
        assert_eq!(
            CodecError::InvalidByteSequence { offset: 3 }.to_string(),
            "Bad UTF-8 sequence."
        );
        assert_eq!(
            CodecError::SizeOverflow { size: 10, max: 5 }.to_string(),
            "string size is too big 10/5"
        );
        assert_eq!(
            CodecError::PlatformConversionFailure { code: 1113 }.to_string(),
            "platform conversion failed with OS error 1113"
        );
    }
}
