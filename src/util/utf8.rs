use crate::error::{Error, ErrorCode, Result};

/// Validates the whole input as UTF-8 before decoding, so the decoder can work on `str` slices.
///
/// The error points at the first byte of the first invalid sequence.
#[inline(always)]
pub(crate) fn from_utf8(data: &[u8]) -> Result<&str> {
    simdutf8::basic::from_utf8(data).or_else(|_| locate_invalid(data))
}

// `basic` only reports that the input is invalid; `compat` is slower but knows where.
#[cold]
fn locate_invalid(data: &[u8]) -> Result<&str> {
    simdutf8::compat::from_utf8(data)
        .map_err(|err| Error::syntax(ErrorCode::InvalidUtf8, data, err.valid_up_to()))
}
