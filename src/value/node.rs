use std::fmt;

use super::{
    array::Array,
    object::Object,
    value_trait::{JsonType, JsonValueMutTrait, JsonValueTrait},
};
use crate::{config::DecodeOptions, error::Result, input::JsonInput, parser, writer};

/// Value is a node in the JSON document tree.
///
/// The enum holds exactly one variant's payload at a time, and assigning a new variant drops the
/// previous payload. Containers own their children, so dropping a `Value` releases the whole
/// subtree and `clone` is a deep copy.
///
/// # Examples
/// ```
/// use tagged_json::{array, object, JsonValueTrait, Value};
///
/// let mut value: Value = tagged_json::from_str(r#"{"a": [1, 2], "b": null}"#).unwrap();
/// assert_eq!(value, object! {"b": Value::Null, "a": array![1, 2]});
///
/// value.set_number(3.5);
/// assert_eq!(value.as_f64(), Some(3.5));
/// assert_eq!(value.stringify(), "3.5");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    #[default]
    Null,
    True,
    False,
    /// Always finite when produced by the decoder.
    Number(f64),
    String(String),
    Array(Array),
    Object(Object),
}

impl Value {
    /// Decodes `input` with the default options and replaces `self` with the result.
    ///
    /// On failure `self` is left untouched.
    ///
    /// # Examples
    /// ```
    /// use tagged_json::Value;
    ///
    /// let mut value = Value::from("keep me");
    /// assert!(value.decode_from("[1,]").is_err());
    /// assert_eq!(value, "keep me");
    ///
    /// value.decode_from("[1]").unwrap();
    /// assert_eq!(value.stringify(), "[1]");
    /// ```
    pub fn decode_from<'de, I: JsonInput<'de>>(&mut self, input: I) -> Result<()> {
        self.decode_from_with(input, DecodeOptions::default())
    }

    /// Like [`Value::decode_from`], with the given options.
    pub fn decode_from_with<'de, I: JsonInput<'de>>(
        &mut self,
        input: I,
        opts: DecodeOptions,
    ) -> Result<()> {
        *self = parser::decode_with(input, opts)?;
        Ok(())
    }

    /// Encodes the value as compact JSON text.
    #[inline]
    pub fn stringify(&self) -> String {
        writer::to_string(self)
    }

    #[inline]
    pub fn set_null(&mut self) {
        *self = Value::Null;
    }

    #[inline]
    pub fn set_bool(&mut self, b: bool) {
        *self = Value::from(b);
    }

    #[inline]
    pub fn set_number(&mut self, n: f64) {
        *self = Value::Number(n);
    }

    /// Makes the value a string. An existing string buffer is reused.
    pub fn set_string<S: AsRef<str>>(&mut self, s: S) {
        match self {
            Value::String(buf) => {
                buf.clear();
                buf.push_str(s.as_ref());
            }
            _ => *self = Value::String(s.as_ref().to_owned()),
        }
    }

    /// Makes the value an array holding the elements of `arr`. An existing array's storage is
    /// reused.
    pub fn set_array(&mut self, arr: Array) {
        match self {
            Value::Array(old) => {
                old.clear();
                old.extend(arr);
            }
            _ => *self = Value::Array(arr),
        }
    }

    /// Makes the value an object holding the members of `obj`, including any repeated keys. An
    /// existing object's storage is reused.
    pub fn set_object(&mut self, obj: Object) {
        match self {
            Value::Object(old) => {
                // raw pairs, the members are stored exactly as given
                old.0.clear();
                old.0.extend(obj.0);
            }
            _ => *self = Value::Object(obj),
        }
    }

    /// Moves the value out, leaving `Null` behind.
    #[inline]
    pub fn take(&mut self) -> Value {
        std::mem::take(self)
    }

    #[inline]
    pub fn swap(&mut self, other: &mut Value) {
        std::mem::swap(self, other);
    }
}

impl JsonValueTrait for Value {
    #[inline]
    fn get_type(&self) -> JsonType {
        match self {
            Value::Null => JsonType::Null,
            Value::True => JsonType::True,
            Value::False => JsonType::False,
            Value::Number(_) => JsonType::Number,
            Value::String(_) => JsonType::String,
            Value::Array(_) => JsonType::Array,
            Value::Object(_) => JsonType::Object,
        }
    }

    #[inline]
    fn as_bool(&self) -> Option<bool> {
        match self {
            Value::True => Some(true),
            Value::False => Some(false),
            _ => None,
        }
    }

    #[inline]
    fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    #[inline]
    fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    fn as_array(&self) -> Option<&Array> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    #[inline]
    fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }
}

impl JsonValueMutTrait for Value {
    #[inline]
    fn as_array_mut(&mut self) -> Option<&mut Array> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    #[inline]
    fn as_object_mut(&mut self) -> Option<&mut Object> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    /// Formats the value as compact JSON text.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&writer::to_string(self))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{array, object};

    #[test]
    fn test_variant_transition() {
        let mut v = Value::default();
        assert_eq!(v.get_type(), JsonType::Null);

        v.set_string("hello");
        assert_eq!(v.as_str(), Some("hello"));
        v.set_string("a\0b");
        assert_eq!(v.as_str().map(str::len), Some(3));

        v.set_number(1.5);
        assert_eq!(v.get_type(), JsonType::Number);
        assert_eq!(v.as_str(), None);
        assert_eq!(v.as_f64(), Some(1.5));

        v.set_bool(true);
        assert!(v.is_true());
        v.set_bool(false);
        assert!(v.is_false());
        assert_eq!(v.as_bool(), Some(false));
        assert_eq!(v.as_f64(), None);

        v.set_array(array![1, "two"]);
        assert_eq!(v.as_array().map(|a| a.len()), Some(2));
        v.set_array(array![3]);
        assert_eq!(v, array![3]);

        v.set_object(object! {"k": 1});
        assert_eq!(v.get("k").as_f64(), Some(1.0));
        v.set_object(object! {});
        assert_eq!(v.as_object().map(|o| o.is_empty()), Some(true));

        v.set_null();
        assert!(v.is_null());
    }

    #[test]
    fn test_set_string_reuses_buffer() {
        let mut v = Value::String(String::with_capacity(64));
        v.set_string("short");
        match &v {
            Value::String(s) => assert!(s.capacity() >= 64),
            _ => panic!("expected a string"),
        }
    }

    #[test]
    fn test_copy_move_swap() {
        let mut a: Value = crate::from_str(r#"{"x":[1,{"y":"z"}]}"#).unwrap();
        let copy = a.clone();
        assert_eq!(a, copy);

        a.get_mut("x")
            .and_then(|x| x.get_index_mut(1))
            .and_then(|inner| inner.get_mut("y"))
            .unwrap()
            .set_number(0.0);
        assert_ne!(a, copy);
        assert_eq!(copy.get("x").get_index(1).get("y").as_str(), Some("z"));

        let moved = a.take();
        assert!(a.is_null());
        assert!(moved.is_object());

        let mut b = Value::from(2.0);
        let mut c = Value::from("s");
        b.swap(&mut c);
        assert_eq!(b, "s");
        assert_eq!(c, 2.0);
    }

    #[test]
    fn test_decode_from_keeps_value_on_error() {
        let mut v = Value::from(1.0);
        let err = v.decode_from("[1 2]").unwrap_err();
        assert_eq!(err.code(), crate::ErrorCode::MissingCommaOrBracket);
        assert_eq!(v, 1.0);

        v.decode_from("  {\"a\" : true}  ").unwrap();
        assert!(v.get("a").is_true());
    }

    #[test]
    fn test_set_object_keeps_members() {
        let mut members = Object::new();
        members.push("k", 1);
        members.push("k", 2);

        let mut from_null = Value::Null;
        from_null.set_object(members.clone());
        let mut from_obj = Value::from(object! {"x": true, "k": 0});
        from_obj.set_object(members);

        assert_eq!(from_null.stringify(), r#"{"k":1,"k":2}"#);
        assert_eq!(from_obj.stringify(), r#"{"k":1,"k":2}"#);
        assert_eq!(from_null, from_obj);
    }

    #[test]
    fn test_display() {
        let v = Value::from(object! {"a": array![1.5, Value::Null, true], "b": "\n"});
        assert_eq!(v.to_string(), r#"{"a":[1.5,null,true],"b":"\n"}"#);
        assert_eq!(format!("{}", Value::from(-0.0)), "-0");
    }
}
