//! Encodes a [`Value`] tree as canonical compact JSON text.

use std::io;

use bytes::{BufMut, Bytes, BytesMut};

use crate::{
    format::{CompactFormatter, Formatter},
    value::Value,
};

/// Encodes `value` into `writer` with the given formatter.
pub fn to_writer_with_formatter<W, F>(writer: &mut W, value: &Value, fmt: &mut F) -> io::Result<()>
where
    W: ?Sized + io::Write,
    F: Formatter,
{
    match value {
        Value::Null => fmt.write_null(writer),
        Value::True => fmt.write_bool(writer, true),
        Value::False => fmt.write_bool(writer, false),
        Value::Number(n) => fmt.write_f64(writer, *n),
        Value::String(s) => fmt.write_string(writer, s),
        Value::Array(arr) => {
            fmt.begin_array(writer)?;
            for (i, v) in arr.iter().enumerate() {
                fmt.begin_array_value(writer, i == 0)?;
                to_writer_with_formatter(writer, v, fmt)?;
            }
            fmt.end_array(writer)
        }
        Value::Object(obj) => {
            fmt.begin_object(writer)?;
            for (i, (k, v)) in obj.iter().enumerate() {
                fmt.begin_object_key(writer, i == 0)?;
                fmt.write_string(writer, k)?;
                fmt.begin_object_value(writer)?;
                to_writer_with_formatter(writer, v, fmt)?;
            }
            fmt.end_object(writer)
        }
    }
}

/// Encodes `value` as compact JSON into the IO stream.
///
/// Only the writer can fail; every `Value` has a text form.
#[inline]
pub fn to_writer<W: io::Write>(mut writer: W, value: &Value) -> io::Result<()> {
    to_writer_with_formatter(&mut writer, value, &mut CompactFormatter)
}

/// Encodes `value` as compact JSON bytes.
#[inline]
pub fn to_vec(value: &Value) -> Vec<u8> {
    let mut buf = Vec::with_capacity(128);
    // writing into a Vec never fails
    let _ = to_writer(&mut buf, value);
    buf
}

/// Encodes `value` as compact JSON into a `Bytes` buffer.
///
/// # Examples
/// ```
/// use tagged_json::{array, Value};
///
/// let bytes = tagged_json::to_bytes(&Value::from(array![1, "a"]));
/// assert_eq!(&bytes[..], br#"[1,"a"]"#);
/// ```
pub fn to_bytes(value: &Value) -> Bytes {
    let mut writer = BytesMut::with_capacity(128).writer();
    let _ = to_writer(&mut writer, value);
    writer.into_inner().freeze()
}

/// Encodes `value` as a compact JSON string.
///
/// # Examples
/// ```
/// use tagged_json::{object, Value};
///
/// let value = Value::from(object! {"a": 1.5, "b": [true, false].as_slice()});
/// assert_eq!(tagged_json::to_string(&value), r#"{"a":1.5,"b":[true,false]}"#);
/// ```
#[inline]
pub fn to_string(value: &Value) -> String {
    let vec = to_vec(value);
    debug_assert!(std::str::from_utf8(&vec).is_ok());
    unsafe {
        // SAFETY: the encoder only writes ASCII tokens and whole `str` content, so the output is
        // always valid UTF-8.
        String::from_utf8_unchecked(vec)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{array, object};

    #[test]
    fn test_to_string_canonical() {
        let value = Value::from(object! {
            "n": Value::Null,
            "t": true,
            "f": false,
            "num": -12.25,
            "s": "line\nbreak\u{1f}",
            "arr": array![array![], object! {}],
        });
        assert_eq!(
            to_string(&value),
            r#"{"n":null,"t":true,"f":false,"num":-12.25,"s":"line\nbreak\u001F","arr":[[],{}]}"#
        );
    }

    #[test]
    fn test_to_string_multibyte() {
        let value = Value::from(object! {"中文": array!["é\u{0}😀", "\u{7f}\u{80}"]});
        let out = to_string(&value);
        assert_eq!(out, "{\"中文\":[\"é\\u0000😀\",\"\u{7f}\u{80}\"]}");
        assert_eq!(out.as_bytes(), to_vec(&value).as_slice());
        assert_eq!(crate::from_str(&out).unwrap(), value);
    }

    #[test]
    fn test_to_writer() {
        let value = Value::from(array![1, "x"]);
        let mut out = Vec::new();
        to_writer(&mut out, &value).unwrap();
        assert_eq!(out, to_vec(&value));
        assert_eq!(to_bytes(&value), Bytes::from_static(b"[1,\"x\"]"));
    }

    #[test]
    fn test_to_writer_error() {
        struct Broken;

        impl io::Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::Other, "broken"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let err = to_writer(Broken, &Value::Null).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::Other);
    }

    #[test]
    fn test_encode_matches_serde_json() {
        let inputs = [
            r#"{"a":[1,2.5,-3e-5],"b":{"c":"é\"\\"}}"#,
            r#"["😀","\/",1.5E-2,0.000001]"#,
            "[null,true,false,{}]",
        ];
        for input in inputs {
            let ours: Value = crate::from_str(input).unwrap();
            let expect: serde_json::Value = serde_json::from_str(input).unwrap();
            let reparsed: serde_json::Value = serde_json::from_str(&to_string(&ours)).unwrap();
            assert_eq!(reparsed, expect, "{input}");
        }
    }
}
