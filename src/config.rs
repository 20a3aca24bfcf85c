//! Options that tune how JSON text is decoded.

/// The nesting depth allowed by [`DecodeOptions::default`].
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// How the decoder treats an object key that appears more than once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicateKeys {
    /// A repeated key overwrites the value stored at the key's first position, the same way
    /// [`Object::insert`](crate::Object::insert) does. Decoded objects never hold duplicates.
    #[default]
    KeepLast,
    /// Every member is kept in input order. Lookups by key see the first occurrence.
    KeepAll,
}

/// Decoder configuration.
///
/// # Examples
/// ```
/// use tagged_json::{decode_with, DecodeOptions, DuplicateKeys, JsonValueTrait};
///
/// let opts = DecodeOptions::new()
///     .with_max_depth(2)
///     .with_duplicate_keys(DuplicateKeys::KeepAll);
///
/// let value = decode_with(r#"{"a":1,"a":2}"#, opts).unwrap();
/// assert_eq!(value.as_object().unwrap().len(), 2);
///
/// assert!(decode_with("[[[1]]]", opts).unwrap_err().is_limit());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// The deepest nesting of arrays and objects accepted. A limit of `n` accepts `n` nested
    /// containers and rejects `n + 1`.
    pub max_depth: usize,
    /// Policy for repeated object keys.
    pub duplicate_keys: DuplicateKeys,
}

impl DecodeOptions {
    pub const fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            duplicate_keys: DuplicateKeys::KeepLast,
        }
    }

    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub const fn with_duplicate_keys(mut self, duplicate_keys: DuplicateKeys) -> Self {
        self.duplicate_keys = duplicate_keys;
        self
    }
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self::new()
    }
}
