//! UTF-16 ↔ UTF-8 conversion through the Windows codepage API.
//!
//! Both directions ask the OS to reject invalid input
//! (`WC_ERR_INVALID_CHARS` / `MB_ERR_INVALID_CHARS`) and go through the usual
//! two-call protocol: measure, allocate, convert. There is no lossy mode here;
//! every failure is returned.

use alloc::{vec, vec::Vec};
use core::ptr;

use windows_sys::Win32::{
    Foundation::GetLastError,
    Globalization::{
        CP_UTF8, MB_ERR_INVALID_CHARS, MultiByteToWideChar, WC_ERR_INVALID_CHARS,
        WideCharToMultiByte,
    },
};

use crate::CodecError;

/// Largest input length, in code units, the conversion API accepts.
pub const MAX_INPUT_LEN: usize = i32::MAX as usize;

/// Converts UTF-16 to UTF-8.
///
/// # Errors
///
/// - [`CodecError::SizeOverflow`] if `wide` is longer than
///   [`MAX_INPUT_LEN`].
/// - [`CodecError::PlatformConversionFailure`] if the OS rejects the input,
///   for example an unpaired surrogate.
pub fn narrow(wide: &[u16]) -> Result<Vec<u8>, CodecError> {
    if wide.is_empty() {
        return Ok(Vec::new());
    }
    let in_len = input_len(wide.len())?;

    // SAFETY: `wide` is valid for `in_len` units; a null output buffer with a
    // zero size asks for the required length only.
    let needed = unsafe {
        WideCharToMultiByte(
            CP_UTF8,
            WC_ERR_INVALID_CHARS,
            wide.as_ptr(),
            in_len,
            ptr::null_mut(),
            0,
            ptr::null(),
            ptr::null_mut(),
        )
    };
    let out_len = output_len(needed)?;

    let mut out = vec![0u8; out_len];
    // SAFETY: `out` holds exactly `needed` writable bytes.
    let written = unsafe {
        WideCharToMultiByte(
            CP_UTF8,
            WC_ERR_INVALID_CHARS,
            wide.as_ptr(),
            in_len,
            out.as_mut_ptr(),
            needed,
            ptr::null(),
            ptr::null_mut(),
        )
    };
    out.truncate(output_len(written)?);
    Ok(out)
}

/// Converts UTF-8 to UTF-16.
///
/// # Errors
///
/// - [`CodecError::SizeOverflow`] if `bytes` is longer than
///   [`MAX_INPUT_LEN`].
/// - [`CodecError::PlatformConversionFailure`] if the OS rejects the input as
///   malformed UTF-8.
pub fn wide(bytes: &[u8]) -> Result<Vec<u16>, CodecError> {
    if bytes.is_empty() {
        return Ok(Vec::new());
    }
    let in_len = input_len(bytes.len())?;

    // SAFETY: `bytes` is valid for `in_len` bytes; the null output buffer
    // with a zero size only measures.
    let needed = unsafe {
        MultiByteToWideChar(
            CP_UTF8,
            MB_ERR_INVALID_CHARS,
            bytes.as_ptr(),
            in_len,
            ptr::null_mut(),
            0,
        )
    };
    let out_len = output_len(needed)?;

    let mut out = vec![0u16; out_len];
    // SAFETY: `out` holds exactly `needed` writable UTF-16 units.
    let written = unsafe {
        MultiByteToWideChar(
            CP_UTF8,
            MB_ERR_INVALID_CHARS,
            bytes.as_ptr(),
            in_len,
            out.as_mut_ptr(),
            needed,
        )
    };
    out.truncate(output_len(written)?);
    Ok(out)
}

fn input_len(size: usize) -> Result<i32, CodecError> {
    i32::try_from(size).map_err(|_| {
        tracing::debug!(size, max = MAX_INPUT_LEN, "input too large for codepage conversion");
        CodecError::SizeOverflow {
            size,
            max: MAX_INPUT_LEN,
        }
    })
}

/// Maps the API's return value to a length; `0` means failure.
fn output_len(ret: i32) -> Result<usize, CodecError> {
    match usize::try_from(ret) {
        Ok(len) if len > 0 => Ok(len),
        _ => Err(last_error()),
    }
}

fn last_error() -> CodecError {
    // SAFETY: reads the calling thread's last-error value; no preconditions.
    let code = unsafe { GetLastError() };
    tracing::debug!(code, "codepage conversion failed");
    CodecError::PlatformConversionFailure { code }
}
