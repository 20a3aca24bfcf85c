//! A document handle with checked, index-based accessors.
//!
//! [`Json`] wraps a [`Value`] and exposes flat `get_*`/`set_*` operations. Where reading a
//! [`Value`] on the wrong variant simply yields `None`, every `Json` accessor reports the mismatch
//! as an [`Error`] of category [`Access`](crate::Category::Access).

use std::fmt;

use crate::{
    config::DecodeOptions,
    error::{Error, Result},
    input::JsonInput,
    parser,
    value::{Array, JsonType, JsonValueMutTrait, JsonValueTrait, Object, Value},
};

/// An owned JSON document.
///
/// # Examples
/// ```
/// use tagged_json::{Json, JsonType, Value};
///
/// let mut json = Json::decode(r#"{"name": "tagged", "tags": ["json"]}"#).unwrap();
/// assert_eq!(json.get_type(), JsonType::Object);
/// assert_eq!(json.find_object_index("tags").unwrap(), Some(1));
///
/// json.set_object_value("version", 1).unwrap();
/// json.set_object_value("name", "renamed").unwrap();
/// assert_eq!(json.get_object_size().unwrap(), 3);
/// assert_eq!(json.stringify(), r#"{"name":"renamed","tags":["json"],"version":1}"#);
///
/// // wrong-variant access is an error, not a panic
/// assert!(json.get_number().is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Json {
    v: Value,
}

impl Json {
    /// Creates a document holding `null`.
    #[inline]
    pub fn new() -> Self {
        Json::default()
    }

    /// Decodes `input` into a new document.
    #[inline]
    pub fn decode<'de, I: JsonInput<'de>>(input: I) -> Result<Json> {
        parser::decode(input).map(Json::from)
    }

    /// Decodes `input` into a new document with the given options.
    #[inline]
    pub fn decode_with<'de, I: JsonInput<'de>>(input: I, opts: DecodeOptions) -> Result<Json> {
        parser::decode_with(input, opts).map(Json::from)
    }

    /// Decodes `input` and replaces the content of `self`. On failure `self` is left untouched.
    pub fn decode_from<'de, I: JsonInput<'de>>(&mut self, input: I) -> Result<()> {
        self.v.decode_from(input)
    }

    /// Like [`Json::decode_from`], with the given options.
    pub fn decode_from_with<'de, I: JsonInput<'de>>(
        &mut self,
        input: I,
        opts: DecodeOptions,
    ) -> Result<()> {
        self.v.decode_from_with(input, opts)
    }

    /// Like [`Json::decode_from`], but reports the outcome as text: `"parse ok"` on success or
    /// the error message on failure.
    ///
    /// # Examples
    /// ```
    /// use tagged_json::Json;
    ///
    /// let mut json = Json::new();
    /// assert_eq!(json.decode_status("[true]"), "parse ok");
    /// assert_eq!(json.decode_status("[true"), "miss comma or square bracket at line 1 column 6");
    /// assert_eq!(json.stringify(), "[true]");
    /// ```
    pub fn decode_status<'de, I: JsonInput<'de>>(&mut self, input: I) -> String {
        match self.decode_from(input) {
            Ok(()) => "parse ok".to_owned(),
            Err(err) => {
                tracing::debug!(error = %err, "json decode failed, the document is unchanged");
                err.to_string()
            }
        }
    }

    /// Encodes the document as compact JSON text.
    #[inline]
    pub fn stringify(&self) -> String {
        self.v.stringify()
    }

    #[inline]
    pub fn as_value(&self) -> &Value {
        &self.v
    }

    #[inline]
    pub fn as_value_mut(&mut self) -> &mut Value {
        &mut self.v
    }

    #[inline]
    pub fn into_value(self) -> Value {
        self.v
    }

    /// Moves the document out, leaving `null` behind.
    #[inline]
    pub fn take(&mut self) -> Json {
        Json { v: self.v.take() }
    }

    #[inline]
    pub fn swap(&mut self, other: &mut Json) {
        self.v.swap(&mut other.v);
    }

    #[inline]
    pub fn get_type(&self) -> JsonType {
        self.v.get_type()
    }

    #[inline]
    pub fn set_null(&mut self) {
        self.v.set_null();
    }

    #[inline]
    pub fn set_boolean(&mut self, b: bool) {
        self.v.set_bool(b);
    }

    pub fn get_number(&self) -> Result<f64> {
        self.v.as_f64().ok_or_else(|| self.mismatch(JsonType::Number))
    }

    #[inline]
    pub fn set_number(&mut self, n: f64) {
        self.v.set_number(n);
    }

    pub fn get_string(&self) -> Result<&str> {
        self.v.as_str().ok_or_else(|| self.mismatch(JsonType::String))
    }

    #[inline]
    pub fn set_string<S: AsRef<str>>(&mut self, s: S) {
        self.v.set_string(s);
    }

    /// Makes the document an empty array.
    #[inline]
    pub fn set_array(&mut self) {
        self.v.set_array(Array::new());
    }

    pub fn get_array_size(&self) -> Result<usize> {
        self.array().map(Array::len)
    }

    pub fn get_array_element(&self, index: usize) -> Result<&Value> {
        let arr = self.array()?;
        arr.get(index)
            .ok_or_else(|| Error::out_of_bounds(index, arr.len()))
    }

    pub fn get_array_element_mut(&mut self, index: usize) -> Result<&mut Value> {
        let arr = self.array_mut()?;
        let len = arr.len();
        arr.get_mut(index)
            .ok_or_else(|| Error::out_of_bounds(index, len))
    }

    pub fn push_back_array_element<V: Into<Value>>(&mut self, val: V) -> Result<()> {
        self.array_mut()?.push(val);
        Ok(())
    }

    /// Removes and returns the last element. An empty array is an `IndexOutOfBounds` error.
    pub fn pop_back_array_element(&mut self) -> Result<Value> {
        self.array_mut()?
            .pop()
            .ok_or_else(|| Error::out_of_bounds(0, 0))
    }

    /// Inserts `val` before position `index`, which may equal the array size.
    pub fn insert_array_element<V: Into<Value>>(&mut self, val: V, index: usize) -> Result<()> {
        let arr = self.array_mut()?;
        if index > arr.len() {
            return Err(Error::out_of_bounds(index, arr.len()));
        }
        arr.insert(index, val);
        Ok(())
    }

    /// Removes `count` elements starting at `index`. The whole range must lie within the array.
    pub fn erase_array_element(&mut self, index: usize, count: usize) -> Result<()> {
        let arr = self.array_mut()?;
        match index.checked_add(count) {
            Some(end) if end <= arr.len() => {
                arr.erase(index, count);
                Ok(())
            }
            _ => Err(Error::out_of_bounds(index, arr.len())),
        }
    }

    pub fn clear_array(&mut self) -> Result<()> {
        self.array_mut()?.clear();
        Ok(())
    }

    /// Makes the document an empty object.
    #[inline]
    pub fn set_object(&mut self) {
        self.v.set_object(Object::new());
    }

    pub fn get_object_size(&self) -> Result<usize> {
        self.object().map(Object::len)
    }

    pub fn get_object_key(&self, index: usize) -> Result<&str> {
        let obj = self.object()?;
        obj.key_at(index)
            .ok_or_else(|| Error::out_of_bounds(index, obj.len()))
    }

    /// Returns the byte length of the key at `index`.
    pub fn get_object_key_length(&self, index: usize) -> Result<usize> {
        self.get_object_key(index).map(str::len)
    }

    pub fn get_object_value(&self, index: usize) -> Result<&Value> {
        let obj = self.object()?;
        obj.value_at(index)
            .ok_or_else(|| Error::out_of_bounds(index, obj.len()))
    }

    pub fn get_object_value_mut(&mut self, index: usize) -> Result<&mut Value> {
        let obj = self.object_mut()?;
        let len = obj.len();
        obj.value_at_mut(index)
            .ok_or_else(|| Error::out_of_bounds(index, len))
    }

    /// Sets `key` to `val`. An existing key keeps its position and gets the new value, so keys
    /// set through this method stay unique.
    pub fn set_object_value<V: Into<Value>>(&mut self, key: &str, val: V) -> Result<()> {
        self.object_mut()?.insert(key, val);
        Ok(())
    }

    /// Returns the position of the first member named `key`.
    pub fn find_object_index(&self, key: &str) -> Result<Option<usize>> {
        self.object().map(|obj| obj.find_index(key))
    }

    /// Removes exactly the member at `index`.
    pub fn remove_object_value(&mut self, index: usize) -> Result<()> {
        let obj = self.object_mut()?;
        let len = obj.len();
        obj.remove_at(index)
            .map(|_| ())
            .ok_or_else(|| Error::out_of_bounds(index, len))
    }

    pub fn clear_object(&mut self) -> Result<()> {
        self.object_mut()?.clear();
        Ok(())
    }

    #[cold]
    fn mismatch(&self, expected: JsonType) -> Error {
        Error::unexpected_type(expected, self.v.get_type())
    }

    #[inline]
    fn array(&self) -> Result<&Array> {
        self.v.as_array().ok_or_else(|| self.mismatch(JsonType::Array))
    }

    #[inline]
    fn array_mut(&mut self) -> Result<&mut Array> {
        let found = self.v.get_type();
        self.v
            .as_array_mut()
            .ok_or_else(|| Error::unexpected_type(JsonType::Array, found))
    }

    #[inline]
    fn object(&self) -> Result<&Object> {
        self.v.as_object().ok_or_else(|| self.mismatch(JsonType::Object))
    }

    #[inline]
    fn object_mut(&mut self) -> Result<&mut Object> {
        let found = self.v.get_type();
        self.v
            .as_object_mut()
            .ok_or_else(|| Error::unexpected_type(JsonType::Object, found))
    }
}

impl From<Value> for Json {
    #[inline]
    fn from(v: Value) -> Self {
        Json { v }
    }
}

impl From<Json> for Value {
    #[inline]
    fn from(json: Json) -> Self {
        json.v
    }
}

impl fmt::Display for Json {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.v, f)
    }
}
