use faststr::FastStr;

use super::{array::Array, node::Value, object::Object, value_trait::JsonValueTrait};

#[inline]
fn eq_str(value: &Value, other: &str) -> bool {
    value.as_str() == Some(other)
}

#[inline]
fn eq_bool(value: &Value, other: bool) -> bool {
    value.as_bool() == Some(other)
}

#[inline]
fn eq_f64(value: &Value, other: f64) -> bool {
    value.as_f64() == Some(other)
}

macro_rules! impl_str_eq {
    ($($ty:ty)*) => {
        $(
            impl PartialEq<$ty> for Value {
                #[inline]
                fn eq(&self, other: &$ty) -> bool {
                    let s: &str = other.as_ref();
                    eq_str(self, s)
                }
            }

            impl PartialEq<Value> for $ty {
                #[inline]
                fn eq(&self, other: &Value) -> bool {
                    let s: &str = self.as_ref();
                    eq_str(other, s)
                }
            }
        )*
    }
}

impl_str_eq!(str String FastStr);

impl PartialEq<&str> for Value {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        eq_str(self, other)
    }
}

impl PartialEq<Value> for &str {
    #[inline]
    fn eq(&self, other: &Value) -> bool {
        eq_str(other, self)
    }
}

macro_rules! impl_num_eq {
    ($($ty:ident)*) => {
        $(
            impl PartialEq<$ty> for Value {
                #[inline]
                fn eq(&self, other: &$ty) -> bool {
                    eq_f64(self, *other as f64)
                }
            }

            impl PartialEq<Value> for $ty {
                #[inline]
                fn eq(&self, other: &Value) -> bool {
                    eq_f64(other, *self as f64)
                }
            }

            impl PartialEq<$ty> for &Value {
                #[inline]
                fn eq(&self, other: &$ty) -> bool {
                    eq_f64(*self, *other as f64)
                }
            }
        )*
    }
}

impl_num_eq!(i8 i16 i32 i64 isize u8 u16 u32 u64 usize f32 f64);

impl PartialEq<bool> for Value {
    #[inline]
    fn eq(&self, other: &bool) -> bool {
        eq_bool(self, *other)
    }
}

impl PartialEq<Value> for bool {
    #[inline]
    fn eq(&self, other: &Value) -> bool {
        eq_bool(other, *self)
    }
}

macro_rules! impl_container_eq {
    ($($ty:ident => $as:ident),*) => {
        $(
            impl PartialEq<$ty> for Value {
                #[inline]
                fn eq(&self, other: &$ty) -> bool {
                    self.$as() == Some(other)
                }
            }

            impl PartialEq<Value> for $ty {
                #[inline]
                fn eq(&self, other: &Value) -> bool {
                    other.$as() == Some(self)
                }
            }
        )*
    }
}

impl_container_eq!(Array => as_array, Object => as_object);

#[cfg(test)]
mod test {
    use super::*;
    use crate::{array, object, Array, Object};

    #[test]
    fn test_primitive_eq() {
        let v: Value = crate::from_str(r#"[1, 2.5, "s", true, null]"#).unwrap();
        let arr = v.as_array().unwrap();
        assert_eq!(arr[0], 1);
        assert_eq!(1u64, arr[0]);
        assert_eq!(&arr[0], 1);
        assert_eq!(arr[1], 2.5);
        assert_ne!(arr[1], 2);
        assert_eq!(arr[2], "s");
        assert_eq!("s", arr[2]);
        assert_eq!(arr[2], String::from("s"));
        assert_eq!(arr[2], FastStr::new("s"));
        assert_eq!(arr[3], true);
        assert_ne!(arr[3], false);
        assert_ne!(arr[4], false);
        assert_ne!(arr[4], 0);
        assert_eq!(v, array![1, 2.5, "s", true, Value::Null]);
    }

    #[test]
    fn test_container_eq() {
        let v: Value = crate::from_str(r#"{"a": [1, {}], "b": null}"#).unwrap();
        assert_eq!(v, object! {"b": Value::Null, "a": array![1, Object::new()]});
        assert_eq!(object! {"a": array![1, object! {}], "b": Value::Null}, v);
        assert_ne!(v, object! {"a": array![1, object! {}]});
        assert_ne!(v, Array::new());

        let arr = v.get("a").unwrap();
        assert_eq!(*arr, array![1, Object::new()]);
        assert_eq!(array![1, object! {}], *arr);
        assert_ne!(Value::Null, Array::new());
        assert_ne!(Object::new(), Value::Null);
    }
}
