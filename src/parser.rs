//! Recursive-descent decoder from JSON text into a [`Value`] tree.

use crate::{
    config::{DecodeOptions, DuplicateKeys},
    error::{
        Error,
        ErrorCode::{self, *},
        Result,
    },
    input::JsonInput,
    reader::Read,
    util::{
        string::ESCAPED_TAB,
        unicode::{combine_surrogates, hex_to_u32, is_high_surrogate, is_low_surrogate},
    },
    value::{Array, Object, Value},
};

macro_rules! perr {
    ($self:ident, $err:expr) => {{
        Err($self.error($err))
    }};
}

#[inline(always)]
fn is_whitespace(ch: u8) -> bool {
    matches!(ch, b' ' | b'\t' | b'\n' | b'\r')
}

pub(crate) struct Parser<'de> {
    read: Read<'de>,
    cfg: DecodeOptions,
    depth: usize,
}

impl<'de> Parser<'de> {
    pub(crate) fn new(input: &'de str) -> Self {
        Self {
            read: Read::new(input),
            cfg: DecodeOptions::default(),
            depth: 0,
        }
    }

    pub(crate) fn with_config(mut self, cfg: DecodeOptions) -> Self {
        self.cfg = cfg;
        self
    }

    /// Error at the current position, which is the byte that has not been consumed yet.
    #[cold]
    fn error(&self, code: ErrorCode) -> Error {
        self.error_at(code, self.read.index())
    }

    #[cold]
    fn error_at(&self, code: ErrorCode, index: usize) -> Error {
        Error::syntax(code, self.read.as_u8_slice(), index)
    }

    /// Skips whitespace and returns the next byte without consuming it.
    #[inline(always)]
    fn skip_space_peek(&mut self) -> Option<u8> {
        while let Some(ch) = self.read.peek() {
            if !is_whitespace(ch) {
                return Some(ch);
            }
            self.read.eat(1);
        }
        None
    }

    /// Parses exactly one value followed by optional whitespace.
    pub(crate) fn parse_root(&mut self) -> Result<Value> {
        let value = self.parse_value()?;
        self.parse_trailing()?;
        Ok(value)
    }

    #[inline]
    fn parse_trailing(&mut self) -> Result<()> {
        match self.skip_space_peek() {
            None => Ok(()),
            Some(_) => perr!(self, RootNotSingular),
        }
    }

    fn parse_value(&mut self) -> Result<Value> {
        match self.skip_space_peek() {
            None => perr!(self, ExpectedValue),
            Some(b'n') => self.parse_literal("null").map(|_| Value::Null),
            Some(b't') => self.parse_literal("true").map(|_| Value::True),
            Some(b'f') => self.parse_literal("false").map(|_| Value::False),
            Some(b'"') => self.parse_string().map(Value::String),
            Some(b'[') => self.parse_array(),
            Some(b'{') => self.parse_object(),
            Some(b'-' | b'0'..=b'9') => self.parse_number().map(Value::Number),
            Some(_) => perr!(self, InvalidValue),
        }
    }

    #[inline]
    fn parse_literal(&mut self, literal: &'static str) -> Result<()> {
        let start = self.read.index();
        match self.read.next_n(literal.len()) {
            Some(chunk) if chunk == literal.as_bytes() => Ok(()),
            _ => Err(self.error_at(InvalidValue, start)),
        }
    }

    #[inline(always)]
    fn skip_digits(&mut self) {
        while matches!(self.read.peek(), Some(b'0'..=b'9')) {
            self.read.eat(1);
        }
    }

    /// Consumes one digit, or fails with `InvalidValue` reported at the start of the number.
    #[inline(always)]
    fn skip_single_digit(&mut self, start: usize) -> Result<()> {
        match self.read.peek() {
            Some(b'0'..=b'9') => {
                self.read.eat(1);
                Ok(())
            }
            _ => Err(self.error_at(InvalidValue, start)),
        }
    }

    fn parse_number(&mut self) -> Result<f64> {
        let start = self.read.index();
        if self.read.peek() == Some(b'-') {
            self.read.eat(1);
        }

        // integer part, leading zeros are not allowed
        match self.read.peek() {
            Some(b'0') => {
                self.read.eat(1);
                if matches!(self.read.peek(), Some(b'0'..=b'9')) {
                    return Err(self.error_at(InvalidValue, start));
                }
            }
            Some(b'1'..=b'9') => {
                self.read.eat(1);
                self.skip_digits();
            }
            _ => return Err(self.error_at(InvalidValue, start)),
        }

        if self.read.peek() == Some(b'.') {
            self.read.eat(1);
            self.skip_single_digit(start)?;
            self.skip_digits();
        }

        if matches!(self.read.peek(), Some(b'e' | b'E')) {
            self.read.eat(1);
            if matches!(self.read.peek(), Some(b'+' | b'-')) {
                self.read.eat(1);
            }
            self.skip_single_digit(start)?;
            self.skip_digits();
        }

        let lexeme = self
            .read
            .slice_str(start, self.read.index())
            .ok_or_else(|| self.error_at(InvalidValue, start))?;
        let num: f64 = lexeme
            .parse()
            .map_err(|_| self.error_at(InvalidValue, start))?;
        if num.is_infinite() {
            return Err(self.error_at(NumberTooLarge, start));
        }
        Ok(num)
    }

    /// Parses a string starting at the opening quote.
    fn parse_string(&mut self) -> Result<String> {
        // the opening quote
        self.read.eat(1);
        let mut buf = String::new();
        loop {
            let start = self.read.index();
            while let Some(ch) = self.read.peek() {
                if ch == b'"' || ch == b'\\' || ch < 0x20 {
                    break;
                }
                self.read.eat(1);
            }
            // both ends sit next to an ASCII byte or at the end of input
            let run = self
                .read
                .slice_str(start, self.read.index())
                .ok_or_else(|| self.error(InvalidStringChar))?;
            buf.push_str(run);

            match self.read.peek() {
                None => return perr!(self, MissingQuote),
                Some(b'"') => {
                    self.read.eat(1);
                    return Ok(buf);
                }
                Some(b'\\') => self.parse_escape(&mut buf)?,
                Some(_) => return perr!(self, InvalidStringChar),
            }
        }
    }

    /// Decodes one escape sequence starting at the backslash.
    fn parse_escape(&mut self, buf: &mut String) -> Result<()> {
        let start = self.read.index();
        self.read.eat(1);
        let ch = match self.read.next() {
            Some(ch) => ch,
            None => return perr!(self, MissingQuote),
        };

        if ch != b'u' {
            return match ESCAPED_TAB[ch as usize] {
                0 => Err(self.error_at(InvalidStringEscape, start)),
                unescaped => {
                    buf.push(unescaped as char);
                    Ok(())
                }
            };
        }

        let code = self.parse_hex4()?;
        let scalar = if is_high_surrogate(code) {
            if !matches!(self.read.next_n(2), Some(b"\\u")) {
                return Err(self.error_at(InvalidUnicodeSurrogate, start));
            }
            let low = self.parse_hex4()?;
            if !is_low_surrogate(low) {
                return Err(self.error_at(InvalidUnicodeSurrogate, start));
            }
            combine_surrogates(code, low)
        } else if is_low_surrogate(code) {
            return Err(self.error_at(InvalidUnicodeSurrogate, start));
        } else {
            code
        };

        match char::from_u32(scalar) {
            Some(c) => {
                buf.push(c);
                Ok(())
            }
            None => Err(self.error_at(InvalidUnicodeSurrogate, start)),
        }
    }

    /// Reads the four hex digits after `\u`.
    #[inline]
    fn parse_hex4(&mut self) -> Result<u32> {
        let start = self.read.index();
        match self.read.next_n(4).and_then(hex_to_u32) {
            Some(code) => Ok(code),
            None => Err(self.error_at(InvalidUnicodeHex, start)),
        }
    }

    /// Enters a container that starts at `start`.
    #[inline]
    fn enter(&mut self, start: usize) -> Result<()> {
        self.depth += 1;
        if self.depth > self.cfg.max_depth {
            tracing::debug!(
                max_depth = self.cfg.max_depth,
                index = start,
                "json nesting exceeds the depth limit"
            );
            return Err(self.error_at(RecursionLimitExceeded, start));
        }
        Ok(())
    }

    fn parse_array(&mut self) -> Result<Value> {
        self.enter(self.read.index())?;
        self.read.eat(1);

        let mut arr = Array::new();
        if self.skip_space_peek() == Some(b']') {
            self.read.eat(1);
            self.depth -= 1;
            return Ok(Value::Array(arr));
        }

        loop {
            arr.push(self.parse_value()?);
            match self.skip_space_peek() {
                Some(b',') => {
                    self.read.eat(1);
                    // trailing comma
                    if self.skip_space_peek() == Some(b']') {
                        return perr!(self, MissingCommaOrBracket);
                    }
                }
                Some(b']') => {
                    self.read.eat(1);
                    break;
                }
                _ => return perr!(self, MissingCommaOrBracket),
            }
        }

        self.depth -= 1;
        Ok(Value::Array(arr))
    }

    fn parse_object(&mut self) -> Result<Value> {
        self.enter(self.read.index())?;
        self.read.eat(1);

        let mut obj = Object::new();
        if self.skip_space_peek() == Some(b'}') {
            self.read.eat(1);
            self.depth -= 1;
            return Ok(Value::Object(obj));
        }

        loop {
            if self.skip_space_peek() != Some(b'"') {
                return perr!(self, MissingKey);
            }
            let key = self.parse_string()?;

            if self.skip_space_peek() != Some(b':') {
                return perr!(self, MissingColon);
            }
            self.read.eat(1);

            let val = self.parse_value()?;
            match self.cfg.duplicate_keys {
                DuplicateKeys::KeepLast => {
                    obj.insert(&key, val);
                }
                DuplicateKeys::KeepAll => obj.push(key, val),
            }

            match self.skip_space_peek() {
                Some(b',') => self.read.eat(1),
                Some(b'}') => {
                    self.read.eat(1);
                    break;
                }
                _ => return perr!(self, MissingCommaOrBrace),
            }
        }

        self.depth -= 1;
        Ok(Value::Object(obj))
    }
}

/// Decodes JSON text into a new [`Value`] with the default [`DecodeOptions`].
///
/// The input may be `&str`, `&[u8]`, `&Vec<u8>`, `&String`, `&Bytes` or `&FastStr`. Byte inputs
/// are checked to be UTF-8 first.
///
/// # Examples
/// ```
/// use tagged_json::{decode, ErrorCode, JsonValueTrait};
///
/// let value = decode(r#"{"a": [1, 2.5, "x"]}"#).unwrap();
/// assert_eq!(value.get("a").get_index(2).as_str(), Some("x"));
///
/// let err = decode("[1, 2,]").unwrap_err();
/// assert_eq!(err.code(), ErrorCode::MissingCommaOrBracket);
/// assert_eq!(err.to_string(), "miss comma or square bracket at line 1 column 7");
/// ```
#[inline]
pub fn decode<'de, I: JsonInput<'de>>(input: I) -> Result<Value> {
    decode_with(input, DecodeOptions::default())
}

/// Decodes JSON text into a new [`Value`] with the given options.
pub fn decode_with<'de, I: JsonInput<'de>>(input: I, opts: DecodeOptions) -> Result<Value> {
    let json = input.to_json_str()?;
    Parser::new(json).with_config(opts).parse_root()
}

/// Decodes a JSON string into a new [`Value`].
#[inline]
pub fn from_str(json: &str) -> Result<Value> {
    decode(json)
}

/// Decodes UTF-8 JSON bytes into a new [`Value`].
#[inline]
pub fn from_slice(json: &[u8]) -> Result<Value> {
    decode(json)
}

#[cfg(test)]
mod test {
    use bytes::Bytes;
    use faststr::FastStr;

    use super::*;
    use crate::{array, object, JsonValueTrait};

    macro_rules! test_error {
        ($($name:ident: $code:ident => [$($input:expr),+ $(,)?]),+ $(,)?) => {
            $(
                paste::paste! {
                    #[test]
                    fn [<test_error_ $name>]() {
                        for input in [$($input),+] {
                            let err = from_str(input).unwrap_err();
                            assert_eq!(err.code(), ErrorCode::$code, "input: {:?}", input);
                            assert!(err.is_syntax(), "input: {:?}", input);
                        }
                    }
                }
            )+
        };
    }

    test_error! {
        expected_value: ExpectedValue => ["", " ", "\n\t", "[", "[1,", "{\"a\":"],
        invalid_value: InvalidValue => [
            "nul", "?", "tru", "falsy", "nulL", "01", "-01", "1.", ".1", "1e", "1e+", "-",
            "+1", "INF", "inf", "NaN", "nan", "[1,?]", "[1,}", "{\"a\":-}",
        ],
        root_not_singular: RootNotSingular => [
            "1 2", "null x", "0x0", "0x123", "\"a\"\"b\"", "[]]", "{} {}", "true false",
        ],
        number_too_large: NumberTooLarge => ["1e309", "-1e309", "[1.8e308]"],
        missing_quote: MissingQuote => ["\"", "\"abc", "\"abc\\", "[\"a"],
        invalid_string_escape: InvalidStringEscape => [
            "\"\\v\"", "\"\\'\"", "\"\\0\"", "\"\\x12\"", "\"\\é\"",
        ],
        invalid_string_char: InvalidStringChar => ["\"\x01\"", "\"\x1F\"", "\"a\nb\"", "\"\t\""],
        invalid_unicode_hex: InvalidUnicodeHex => [
            "\"\\u\"", "\"\\u0\"", "\"\\u01\"", "\"\\u012\"", "\"\\u/000\"", "\"\\uG000\"",
            "\"\\u0/00\"", "\"\\u0G00\"", "\"\\u00/0\"", "\"\\u00G0\"", "\"\\u000/\"",
            "\"\\u000G\"", "\"\\u 123\"", "\"\\uD800\\uZZZZ\"",
        ],
        invalid_unicode_surrogate: InvalidUnicodeSurrogate => [
            "\"\\uD800\"", "\"\\uDBFF\"", "\"\\uD800\\\\\"", "\"\\uD800\\uDBFF\"",
            "\"\\uD800\\uE000\"", "\"\\uDC00\"", "\"\\udfff\"",
        ],
        missing_comma_or_bracket: MissingCommaOrBracket => [
            "[1", "[1}", "[1 2", "[[]", "[1,2,]", "[1, ]",
        ],
        missing_key: MissingKey => [
            "{", "{:1,", "{1:1,", "{true:1,", "{false:1,", "{null:1,", "{[]:1,", "{{}:1,",
            "{\"a\":1,", "{\"a\":1,}",
        ],
        missing_colon: MissingColon => ["{\"a\"}", "{\"a\",\"b\"}", "{\"a\"", "{\"a\" 1}"],
        missing_comma_or_brace: MissingCommaOrBrace => [
            "{\"a\":1", "{\"a\":1]", "{\"a\":1 \"b\"", "{\"a\":{}",
        ],
    }

    #[test]
    fn test_error_position() {
        let err = from_str("[1 2]").unwrap_err();
        assert_eq!((err.line(), err.column()), (1, 4));

        let err = from_str("{\n\"a\" 1}").unwrap_err();
        assert_eq!(err.code(), ErrorCode::MissingColon);
        assert_eq!((err.line(), err.column()), (2, 5));

        let err = from_str("\"abc").unwrap_err();
        assert_eq!((err.line(), err.column()), (1, 5));

        let err = from_str("  01").unwrap_err();
        assert_eq!((err.line(), err.column()), (1, 3));

        let err = from_str("\"ok\\q\"").unwrap_err();
        assert_eq!((err.line(), err.column()), (1, 4));
    }

    #[test]
    fn test_invalid_utf8() {
        let err = from_slice(b"[\"\xff\"]").unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidUtf8);
        assert!(err.is_encoding());
        assert_eq!((err.line(), err.column()), (1, 3));
    }

    #[test]
    fn test_parse_literal() {
        assert_eq!(from_str("null").unwrap(), Value::Null);
        assert_eq!(from_str(" true ").unwrap(), Value::True);
        assert_eq!(from_str("\r\nfalse\t").unwrap(), Value::False);
    }

    #[test]
    fn test_parse_number() {
        let cases: &[(&str, f64)] = &[
            ("0", 0.0),
            ("-0", -0.0),
            ("-0.0", -0.0),
            ("0.0", 0.0),
            ("1", 1.0),
            ("-1", -1.0),
            ("1.5", 1.5),
            ("-1.5", -1.5),
            ("3.1416", 3.1416),
            ("1E10", 1e10),
            ("1e10", 1e10),
            ("1E+10", 1e10),
            ("1E-10", 1e-10),
            ("-1E10", -1e10),
            ("-1e10", -1e10),
            ("-1E+10", -1e10),
            ("-1E-10", -1e-10),
            ("-1.5e-3", -1.5e-3),
            ("1.234E+10", 1.234e10),
            ("1.234E-10", 1.234e-10),
            ("1e-10000", 0.0),
            ("1.0000000000000002", 1.000_000_000_000_000_2),
            ("4.9406564584124654e-324", 4.940_656_458_412_465_4e-324),
            ("-4.9406564584124654e-324", -4.940_656_458_412_465_4e-324),
            ("2.2250738585072009e-308", 2.225_073_858_507_200_9e-308),
            ("2.2250738585072014e-308", 2.225_073_858_507_201_4e-308),
            ("1.7976931348623157e+308", f64::MAX),
            ("-1.7976931348623157e+308", f64::MIN),
        ];
        for (input, expect) in cases {
            let v = from_str(input).unwrap();
            let n = v.as_f64().unwrap();
            assert_eq!(n, *expect, "input: {input}");
            assert_eq!(
                n.is_sign_negative(),
                expect.is_sign_negative(),
                "input: {input}"
            );
        }
    }

    #[test]
    fn test_parse_string() {
        let cases: &[(&str, &str)] = &[
            ("\"\"", ""),
            ("\"Hello\"", "Hello"),
            ("\"Hello\\nWorld\"", "Hello\nWorld"),
            (
                "\"\\\" \\\\ \\/ \\b \\f \\n \\r \\t\"",
                "\" \\ / \u{8} \u{c} \n \r \t",
            ),
            ("\"Hello\\u0000World\"", "Hello\0World"),
            ("\"\\u0024\"", "$"),
            ("\"\\u00A2\"", "\u{a2}"),
            ("\"\\u20AC\"", "\u{20ac}"),
            ("\"\\uD834\\uDD1E\"", "\u{1d11e}"),
            ("\"\\ud834\\udd1e\"", "\u{1d11e}"),
            ("\"中文 é\"", "中文 é"),
        ];
        for (input, expect) in cases {
            let v = from_str(input).unwrap();
            assert_eq!(v.as_str(), Some(*expect), "input: {input}");
        }

        let v = from_str("\"a\\nb\"").unwrap();
        assert_eq!(v.as_str().map(str::len), Some(3));

        let v = from_str(r#""\ud83d\ude00""#).unwrap();
        assert_eq!(v.as_str(), Some("😀"));
        assert_eq!(v.as_str().map(str::len), Some(4));

        let v = from_str("\"Hello\\u0000World\"").unwrap();
        assert_eq!(v.as_str().map(str::len), Some(11));
    }

    #[test]
    fn test_parse_array() {
        assert_eq!(from_str("[ ]").unwrap(), Value::Array(Array::new()));
        assert_eq!(
            from_str("[ null , false , true , 123 , \"abc\" ]").unwrap(),
            array![Value::Null, false, true, 123, "abc"]
        );
        assert_eq!(
            from_str("[ [ ] , [ 0 ] , [ 0 , 1 ] , [ 0 , 1 , 2 ] ]").unwrap(),
            array![array![], array![0], array![0, 1], array![0, 1, 2]]
        );
    }

    #[test]
    fn test_parse_object() {
        assert_eq!(from_str(" { } ").unwrap(), Value::Object(Object::new()));

        let v = from_str(
            " { \
             \"n\" : null , \
             \"f\" : false , \
             \"t\" : true , \
             \"i\" : 123 , \
             \"s\" : \"abc\", \
             \"a\" : [ 1, 2, 3 ], \
             \"o\" : { \"1\" : 1, \"2\" : 2, \"3\" : 3 } \
             } ",
        )
        .unwrap();
        let obj = v.as_object().unwrap();
        assert_eq!(obj.len(), 7);
        assert_eq!(obj.key_at(0), Some("n"));
        assert_eq!(obj.key_at(6), Some("o"));
        assert!(v.get("n").is_null());
        assert!(v.get("f").is_false());
        assert!(v.get("t").is_true());
        assert_eq!(v.get("i").as_f64(), Some(123.0));
        assert_eq!(v.get("s").as_str(), Some("abc"));
        assert_eq!(v.get("a"), Some(&Value::from(array![1, 2, 3])));
        assert_eq!(v.get("o").get("2").as_f64(), Some(2.0));
        assert_eq!(v.get("o").as_object().map(|o| o.len()), Some(3));
    }

    #[test]
    fn test_duplicate_keys() {
        let json = r#"{"a":1,"b":0,"a":2}"#;

        let v = decode(json).unwrap();
        let obj = v.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert_eq!(obj.find_index("a"), Some(0));
        assert_eq!(obj.value_at(0).as_f64(), Some(2.0));
        assert_eq!(v.stringify(), r#"{"a":2,"b":0}"#);

        let opts = DecodeOptions::new().with_duplicate_keys(DuplicateKeys::KeepAll);
        let v = decode_with(json, opts).unwrap();
        let obj = v.as_object().unwrap();
        assert_eq!(obj.len(), 3);
        assert_eq!(obj.find_index("a"), Some(0));
        assert_eq!(obj.get("a").as_f64(), Some(1.0));
        assert_eq!(obj.value_at(2).as_f64(), Some(2.0));
        assert_eq!(v.stringify(), json);
    }

    #[test]
    fn test_depth_limit() {
        let nested = |n: usize| format!("{}{}", "[".repeat(n), "]".repeat(n));

        assert!(from_str(&nested(128)).is_ok());
        let err = from_str(&nested(129)).unwrap_err();
        assert_eq!(err.code(), ErrorCode::RecursionLimitExceeded);
        assert!(err.is_limit());
        assert_eq!(err.column(), 129);

        // far beyond the limit still fails cleanly instead of exhausting the stack
        let err = from_str(&nested(100_000)).unwrap_err();
        assert_eq!(err.code(), ErrorCode::RecursionLimitExceeded);

        let opts = DecodeOptions::new().with_max_depth(2);
        assert!(decode_with("[{\"a\":[]}]", opts).is_err());
        assert!(decode_with("[{\"a\":1}, {}, []]", opts).is_ok());

        let opts = DecodeOptions::new().with_max_depth(0);
        assert!(decode_with("1", opts).is_ok());
        assert!(decode_with("{}", opts).is_err());
    }

    #[test]
    fn test_depth_limit_logs() {
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new("tagged_json=debug"))
            .with_test_writer()
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            let opts = DecodeOptions::new().with_max_depth(1);
            let err = decode_with("[[1]]", opts).unwrap_err();
            assert_eq!(err.code(), ErrorCode::RecursionLimitExceeded);
        });
    }

    #[test]
    fn test_json_inputs() {
        let text = String::from(r#"{"k":[true]}"#);
        let expect = Value::from(object! {"k": array![true]});

        assert_eq!(decode(text.as_str()).unwrap(), expect);
        assert_eq!(decode(&text).unwrap(), expect);
        assert_eq!(decode(text.as_bytes()).unwrap(), expect);
        let vec = text.clone().into_bytes();
        assert_eq!(decode(&vec).unwrap(), expect);
        let bytes = Bytes::from(text.clone());
        assert_eq!(decode(&bytes).unwrap(), expect);
        let fast = FastStr::new(&text);
        assert_eq!(decode(&fast).unwrap(), expect);
    }

    const CORPUS: &[&str] = &[
        "null",
        "true",
        "-0",
        "[]",
        "{}",
        "0.1",
        "-1.5e-3",
        "123456789",
        "1e21",
        "5e-324",
        "1.7976931348623157e308",
        r#""""#,
        r#""\u0000\u001f\"\\\/\b\f\n\r\t""#,
        r#""中文😀""#,
        r#"[1,[2,[3,[4]]],{"a":{"b":{"c":null}}}]"#,
        r#"{"name":"tagged","tags":["json","dom"],"nested":{"depth":2,"ok":true},"empty":[]}"#,
        r#" { "spaced" : [ 1 , 2 ] , "x" : "y" } "#,
    ];

    #[test]
    fn test_round_trip() {
        for input in CORPUS {
            let v = from_str(input).unwrap();
            let text = v.stringify();
            let again = from_str(&text).unwrap();
            assert_eq!(again, v, "input: {input}");
            // canonical text is a fixed point
            assert_eq!(again.stringify(), text, "input: {input}");
        }
    }

    #[test]
    fn test_decode_matches_serde_json() {
        for input in CORPUS {
            let ours = from_str(input).unwrap();
            let theirs: Value = serde_json::from_str(input).unwrap();
            assert_eq!(ours, theirs, "input: {input}");

            let reparsed: serde_json::Value = serde_json::from_str(&ours.stringify()).unwrap();
            let expect: serde_json::Value = serde_json::from_str(input).unwrap();
            assert_eq!(reparsed, expect, "input: {input}");
        }
    }
}
