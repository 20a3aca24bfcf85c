use std::borrow::Cow;

use faststr::FastStr;

use super::{array::Array, node::Value, object::Object};

macro_rules! impl_from_number {
    ($($ty:ident),*) => {
        $(
            impl From<$ty> for Value {
                /// Converts the number to a `Number` value. Integers beyond 2^53 lose precision.
                #[inline]
                fn from(val: $ty) -> Self {
                    Value::Number(val as f64)
                }
            }
        )*
    };
}

impl_from_number!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64);

impl From<bool> for Value {
    /// Convert `bool` to a boolean `Value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagged_json::{JsonValueTrait, Value};
    ///
    /// let x: Value = true.into();
    /// assert!(x.is_true());
    /// ```
    #[inline]
    fn from(val: bool) -> Self {
        if val {
            Value::True
        } else {
            Value::False
        }
    }
}

macro_rules! impl_from_str {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                /// Convert a string type into a string `Value`. The string is copied.
                #[inline]
                fn from(val: $ty) -> Self {
                    Value::String(AsRef::<str>::as_ref(&val).to_owned())
                }
            }
        )*
    };
}

impl_from_str!(&str, &String, &FastStr, FastStr, Cow<'_, str>);

impl From<String> for Value {
    /// Convert `String` into a string `Value` without copying.
    #[inline]
    fn from(val: String) -> Self {
        Value::String(val)
    }
}

impl From<char> for Value {
    #[inline]
    fn from(val: char) -> Self {
        Value::String(val.to_string())
    }
}

impl From<()> for Value {
    /// Convert `()` to `Value::Null`.
    #[inline]
    fn from(_: ()) -> Self {
        Value::Null
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    /// Convert `None` to `Value::Null` and `Some(v)` to `v.into()`.
    ///
    /// # Examples
    /// ```
    /// use tagged_json::{JsonValueTrait, Value};
    ///
    /// assert!(Value::from(None::<i32>).is_null());
    /// assert_eq!(Value::from(Some("x")).as_str(), Some("x"));
    /// ```
    #[inline]
    fn from(val: Option<T>) -> Self {
        val.map_or(Value::Null, Into::into)
    }
}

impl From<Array> for Value {
    #[inline]
    fn from(val: Array) -> Self {
        Value::Array(val)
    }
}

impl From<Object> for Value {
    #[inline]
    fn from(val: Object) -> Self {
        Value::Object(val)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    /// Convert a `Vec` into an array `Value`.
    ///
    /// # Examples
    /// ```
    /// use tagged_json::{array, Value};
    ///
    /// let v = Value::from(vec![1, 2]);
    /// assert_eq!(v, array![1, 2]);
    /// ```
    #[inline]
    fn from(val: Vec<T>) -> Self {
        Value::Array(val.into_iter().collect())
    }
}

impl<T: Clone + Into<Value>> From<&[T]> for Value {
    #[inline]
    fn from(val: &[T]) -> Self {
        Value::Array(val.iter().cloned().collect())
    }
}

impl<T: Into<Value>> FromIterator<T> for Value {
    /// Collects the items into an array `Value`.
    #[inline]
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Value::Array(iter.into_iter().collect())
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    /// Collects the pairs into an object `Value`. A repeated key replaces the earlier value.
    #[inline]
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Value::Object(iter.into_iter().collect())
    }
}
