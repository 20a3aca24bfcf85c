use std::fmt;

use super::{array::Array, node::Value, object::Object};

/// JsonType is the variant tag of a [`Value`].
///
/// Booleans are two distinct types, not one type with a payload.
///
/// # Examples
/// ```
/// use tagged_json::{JsonType, JsonValueTrait, Value};
///
/// let json: Value = tagged_json::from_str(r#"{"a": 1, "b": true}"#).unwrap();
///
/// assert_eq!(json.get_type(), JsonType::Object);
/// assert_eq!(json.get("a").get_type(), JsonType::Number);
/// assert_eq!(json.get("b").get_type(), JsonType::True);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[repr(u8)]
pub enum JsonType {
    Null = 0,
    True = 1,
    False = 2,
    Number = 3,
    String = 4,
    Array = 5,
    Object = 6,
}

impl fmt::Display for JsonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            JsonType::Null => "Null",
            JsonType::True => "True",
            JsonType::False => "False",
            JsonType::Number => "Number",
            JsonType::String => "String",
            JsonType::Array => "Array",
            JsonType::Object => "Object",
        };
        f.write_str(name)
    }
}

/// Read access to a JSON value. Used by `Value` and `Option<&Value>`, so lookups can be chained
/// without unwrapping at every step.
///
/// Every typed accessor returns `None` when the value holds a different variant.
pub trait JsonValueTrait {
    /// Gets the type of the value. Returns `JsonType::Null` for `Option::None`.
    ///
    /// # Examples
    /// ```
    /// use tagged_json::{JsonType, JsonValueTrait, Value};
    ///
    /// let json: Value = tagged_json::from_str(r#"{"a": 1}"#).unwrap();
    /// let v: Option<&Value> = json.get("c");
    /// assert!(v.is_none());
    /// assert_eq!(v.get_type(), JsonType::Null);
    /// ```
    fn get_type(&self) -> JsonType;

    /// Returns true if the value is `true` or `false`.
    #[inline]
    fn is_boolean(&self) -> bool {
        matches!(self.get_type(), JsonType::True | JsonType::False)
    }

    #[inline]
    fn is_true(&self) -> bool {
        self.get_type() == JsonType::True
    }

    #[inline]
    fn is_false(&self) -> bool {
        self.get_type() == JsonType::False
    }

    #[inline]
    fn is_null(&self) -> bool {
        self.get_type() == JsonType::Null
    }

    #[inline]
    fn is_number(&self) -> bool {
        self.get_type() == JsonType::Number
    }

    #[inline]
    fn is_str(&self) -> bool {
        self.get_type() == JsonType::String
    }

    #[inline]
    fn is_array(&self) -> bool {
        self.get_type() == JsonType::Array
    }

    #[inline]
    fn is_object(&self) -> bool {
        self.get_type() == JsonType::Object
    }

    /// Returns the boolean if the value is `true` or `false`.
    fn as_bool(&self) -> Option<bool>;

    /// Returns the number if the value is a `Number`.
    fn as_f64(&self) -> Option<f64>;

    /// Returns the string if the value is a `String`. The string may hold embedded NULs.
    fn as_str(&self) -> Option<&str>;

    fn as_array(&self) -> Option<&Array>;

    fn as_object(&self) -> Option<&Object>;

    /// Looks up `key` if the value is an object. With duplicated keys, the first one wins.
    ///
    /// # Examples
    /// ```
    /// use tagged_json::{JsonValueTrait, Value};
    ///
    /// let json: Value = tagged_json::from_str(r#"{"a": {"b": [1, "x"]}}"#).unwrap();
    /// assert_eq!(json.get("a").get("b").get_index(1).as_str(), Some("x"));
    /// assert!(json.get("a").get("zz").get_index(0).is_none());
    /// ```
    fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|obj| obj.get(key))
    }

    /// Returns the element at `index` if the value is an array.
    fn get_index(&self, index: usize) -> Option<&Value> {
        self.as_array().and_then(|arr| arr.get(index))
    }
}

/// Mutable access to the containers inside a JSON value.
pub trait JsonValueMutTrait {
    fn as_array_mut(&mut self) -> Option<&mut Array>;

    fn as_object_mut(&mut self) -> Option<&mut Object>;

    /// Looks up `key` if the value is an object. With duplicated keys, the first one wins.
    fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.as_object_mut().and_then(|obj| obj.get_mut(key))
    }

    /// Returns the element at `index` if the value is an array.
    fn get_index_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.as_array_mut().and_then(|arr| arr.get_mut(index))
    }
}

impl<V: JsonValueTrait> JsonValueTrait for Option<V> {
    #[inline]
    fn get_type(&self) -> JsonType {
        self.as_ref().map_or(JsonType::Null, |v| v.get_type())
    }

    #[inline]
    fn as_bool(&self) -> Option<bool> {
        self.as_ref().and_then(|v| v.as_bool())
    }

    #[inline]
    fn as_f64(&self) -> Option<f64> {
        self.as_ref().and_then(|v| v.as_f64())
    }

    #[inline]
    fn as_str(&self) -> Option<&str> {
        self.as_ref().and_then(|v| v.as_str())
    }

    #[inline]
    fn as_array(&self) -> Option<&Array> {
        self.as_ref().and_then(|v| v.as_array())
    }

    #[inline]
    fn as_object(&self) -> Option<&Object> {
        self.as_ref().and_then(|v| v.as_object())
    }
}

impl<V: JsonValueTrait> JsonValueTrait for &V {
    #[inline]
    fn get_type(&self) -> JsonType {
        (**self).get_type()
    }

    #[inline]
    fn as_bool(&self) -> Option<bool> {
        (**self).as_bool()
    }

    #[inline]
    fn as_f64(&self) -> Option<f64> {
        (**self).as_f64()
    }

    #[inline]
    fn as_str(&self) -> Option<&str> {
        (**self).as_str()
    }

    #[inline]
    fn as_array(&self) -> Option<&Array> {
        (**self).as_array()
    }

    #[inline]
    fn as_object(&self) -> Option<&Object> {
        (**self).as_object()
    }
}
