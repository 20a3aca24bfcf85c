//! When decoding JSON or accessing a value goes wrong.

// The boxed layout follows serde_json: keeping `Error` one pointer wide keeps every
// `Result<T, Error>` on the hot decode path small.

use core::fmt::{self, Debug, Display};
use core::result;
use std::error;

use crate::reader::Position;
use crate::value::JsonType;

/// This type represents all possible errors that can occur when decoding JSON text or when
/// reading and mutating a [`Json`](crate::Json) through its checked accessors.
pub struct Error {
    err: Box<ErrorImpl>,
}

/// Alias for a `Result` with the error type `tagged_json::Error`.
pub type Result<T> = result::Result<T, Error>;

impl Error {
    /// The specific error category.
    pub fn code(&self) -> ErrorCode {
        self.err.code
    }

    /// One-based line number at which the error was detected.
    ///
    /// Errors that are not tied to an input position, such as accessor errors, report line 0.
    pub fn line(&self) -> usize {
        self.err.line
    }

    /// One-based column number, counted in bytes from the start of the line, of the byte at
    /// which the error was detected.
    ///
    /// Errors that are not tied to an input position report column 0.
    pub fn column(&self) -> usize {
        self.err.column
    }

    /// Categorizes the cause of this error.
    ///
    /// - `Category::Syntax` - input that is not syntactically valid JSON
    /// - `Category::Limit` - input nested deeper than the configured limit
    /// - `Category::Encoding` - input bytes that are not valid UTF-8
    /// - `Category::Access` - a checked accessor was used on the wrong variant or index
    pub fn classify(&self) -> Category {
        self.err.code.classify()
    }

    /// Returns true if this error was caused by input that was not syntactically valid JSON.
    pub fn is_syntax(&self) -> bool {
        self.classify() == Category::Syntax
    }

    /// Returns true if this error was caused by input nested deeper than allowed.
    pub fn is_limit(&self) -> bool {
        self.classify() == Category::Limit
    }

    /// Returns true if this error was caused by input that is not valid UTF-8.
    pub fn is_encoding(&self) -> bool {
        self.classify() == Category::Encoding
    }

    /// Returns true if this error was caused by a checked accessor.
    pub fn is_access(&self) -> bool {
        self.classify() == Category::Access
    }

    #[cold]
    pub(crate) fn syntax(code: ErrorCode, data: &[u8], index: usize) -> Self {
        let pos = Position::from_index(index, data);
        Error {
            err: Box::new(ErrorImpl {
                code,
                line: pos.line,
                column: pos.column,
            }),
        }
    }

    #[cold]
    pub(crate) fn access(code: ErrorCode) -> Self {
        Error {
            err: Box::new(ErrorImpl {
                code,
                line: 0,
                column: 0,
            }),
        }
    }

    #[cold]
    pub(crate) fn unexpected_type(expected: JsonType, found: JsonType) -> Self {
        Error::access(ErrorCode::UnexpectedType { expected, found })
    }

    #[cold]
    pub(crate) fn out_of_bounds(index: usize, len: usize) -> Self {
        Error::access(ErrorCode::IndexOutOfBounds { index, len })
    }
}

/// Categorizes the cause of a `tagged_json::Error`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Category {
    /// The input is not syntactically valid JSON.
    Syntax,

    /// The input nests arrays and objects deeper than the configured limit.
    Limit,

    /// The input bytes are not valid UTF-8.
    Encoding,

    /// A checked accessor was called on the wrong variant or with an index out of range.
    Access,
}

#[allow(clippy::fallible_impl_from)]
impl From<Error> for std::io::Error {
    /// Convert a `tagged_json::Error` into an `std::io::Error`.
    ///
    /// Every category is reported as `InvalidData`.
    fn from(j: Error) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidData, j)
    }
}

struct ErrorImpl {
    code: ErrorCode,
    line: usize,
    column: usize,
}

/// The closed set of failure categories.
///
/// Every decode failure reports exactly one of the syntax codes, for the first violation found
/// scanning left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ErrorCode {
    /// The input ended where a value was expected.
    #[error("expect value")]
    ExpectedValue,

    /// The lookahead cannot start a value, or a literal or number is malformed.
    #[error("invalid value")]
    InvalidValue,

    /// Non-whitespace content follows the root value.
    #[error("root not singular")]
    RootNotSingular,

    /// The number does not fit in a double.
    #[error("number too large")]
    NumberTooLarge,

    /// The input ended inside a string.
    #[error("miss quotation mark")]
    MissingQuote,

    /// A backslash is followed by a character that is not a known escape.
    #[error("invalid string escape")]
    InvalidStringEscape,

    /// A control character (`\u0000`-`\u001F`) appears unescaped inside a string.
    #[error("invalid string char")]
    InvalidStringChar,

    /// A `\u` escape is not followed by four hex digits.
    #[error("invalid unicode hex")]
    InvalidUnicodeHex,

    /// A `\u` escape encodes a lone or mismatched UTF-16 surrogate.
    #[error("invalid unicode surrogate")]
    InvalidUnicodeSurrogate,

    /// Expected `,` or `]` after an array element.
    #[error("miss comma or square bracket")]
    MissingCommaOrBracket,

    /// Expected a string key in an object.
    #[error("miss key")]
    MissingKey,

    /// Expected `:` after an object key.
    #[error("miss colon")]
    MissingColon,

    /// Expected `,` or `}` after an object member.
    #[error("miss comma or curly bracket")]
    MissingCommaOrBrace,

    /// Arrays and objects are nested deeper than the configured limit.
    #[error("recursion limit exceeded")]
    RecursionLimitExceeded,

    /// The input bytes are not valid UTF-8.
    #[error("invalid UTF-8 characters in json")]
    InvalidUtf8,

    /// A checked accessor expected a different variant.
    #[error("expected {expected} but the value is {found}")]
    UnexpectedType { expected: JsonType, found: JsonType },

    /// A checked accessor was given an index outside the container.
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

impl ErrorCode {
    /// Categorizes the cause of this error.
    pub fn classify(&self) -> Category {
        match self {
            ErrorCode::RecursionLimitExceeded => Category::Limit,
            ErrorCode::InvalidUtf8 => Category::Encoding,
            ErrorCode::UnexpectedType { .. } | ErrorCode::IndexOutOfBounds { .. } => {
                Category::Access
            }
            _ => Category::Syntax,
        }
    }
}

impl error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&*self.err, f)
    }
}

impl Display for ErrorImpl {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.line == 0 {
            Display::fmt(&self.code, f)
        } else {
            write!(
                f,
                "{} at line {} column {}",
                self.code, self.line, self.column
            )
        }
    }
}

// Remove two layers of verbosity from the debug representation. Humans often
// end up seeing this representation because it is what unwrap() shows.
impl Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Error({:?}, line: {}, column: {})",
            self.err.code.to_string(),
            self.err.line,
            self.err.column
        )
    }
}
