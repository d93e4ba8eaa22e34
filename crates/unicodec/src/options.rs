/// How the codec reacts to malformed input or out-of-range codepoints.
///
/// Every encode and decode entry point takes one `ErrorMode`, and the mode
/// applies uniformly to the whole call.
///
/// # Examples
///
/// ```rust
/// use unicodec::{decode_string, ErrorMode, REPLACEMENT_CHARACTER};
///
/// let lossy = decode_string(b"\xC3\x28", ErrorMode::Replace).unwrap();
/// assert_eq!(lossy, [REPLACEMENT_CHARACTER]);
///
/// assert!(decode_string(b"\xC3\x28", ErrorMode::Strict).is_err());
/// ```
///
/// # Default
///
/// [`ErrorMode::Replace`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ErrorMode {
    /// Substitute U+FFFD (or its UTF-8 form `EF BF BD`) and keep going.
    #[default]
    Replace,
    /// Abort the call with the first [`CodecError`](crate::CodecError).
    Strict,
}

impl ErrorMode {
    /// Returns `true` for [`ErrorMode::Strict`].
    #[must_use]
    pub const fn is_strict(self) -> bool {
        matches!(self, ErrorMode::Strict)
    }
}

/// `true` selects [`ErrorMode::Strict`], `false` selects
/// [`ErrorMode::Replace`].
impl From<bool> for ErrorMode {
    fn from(fail_on_error: bool) -> Self {
        if fail_on_error {
            ErrorMode::Strict
        } else {
            ErrorMode::Replace
        }
    }
}
