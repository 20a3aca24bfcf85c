use bytes::Bytes;
use faststr::FastStr;

use crate::{error::Result, util::private::Sealed, util::utf8::from_utf8};

/// A source of JSON text.
///
/// Implemented for `&str`, `&String`, `&[u8]`, `&Vec<u8>`, `&Bytes` and `&FastStr`. Inputs that
/// are already `str`-typed are used as is; byte inputs are validated as UTF-8 first.
///
/// # Examples
/// ```
/// use bytes::Bytes;
/// use faststr::FastStr;
/// use tagged_json::decode;
///
/// assert_eq!(decode("123").unwrap(), 123);
/// assert_eq!(decode(&b"123"[..]).unwrap(), 123);
/// assert_eq!(decode(&Bytes::from_static(b"123")).unwrap(), 123);
/// assert_eq!(decode(&FastStr::new("123")).unwrap(), 123);
///
/// let err = decode(&b"\"\xff\""[..]).unwrap_err();
/// assert!(err.is_encoding());
/// ```
pub trait JsonInput<'de>: Sealed {
    /// Returns the input as validated UTF-8 text.
    fn to_json_str(&self) -> Result<&'de str>;
}

impl<'de> JsonInput<'de> for &'de [u8] {
    fn to_json_str(&self) -> Result<&'de str> {
        from_utf8(*self)
    }
}

impl<'de> JsonInput<'de> for &'de Vec<u8> {
    fn to_json_str(&self) -> Result<&'de str> {
        let vec: &'de Vec<u8> = *self;
        from_utf8(vec.as_slice())
    }
}

impl<'de> JsonInput<'de> for &'de str {
    fn to_json_str(&self) -> Result<&'de str> {
        Ok(*self)
    }
}

impl<'de> JsonInput<'de> for &'de String {
    fn to_json_str(&self) -> Result<&'de str> {
        let s: &'de String = *self;
        Ok(s.as_str())
    }
}

impl<'de> JsonInput<'de> for &'de Bytes {
    fn to_json_str(&self) -> Result<&'de str> {
        let bytes: &'de Bytes = *self;
        from_utf8(bytes.as_ref())
    }
}

impl<'de> JsonInput<'de> for &'de FastStr {
    fn to_json_str(&self) -> Result<&'de str> {
        let s: &'de FastStr = *self;
        Ok(s.as_str())
    }
}
