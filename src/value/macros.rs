/// Construct a `tagged_json::Array` from a list of expressions.
///
/// Every element is converted with `Value::from`, so anything that implements `Into<Value>` works.
///
/// ```
/// use tagged_json::{array, object, JsonValueTrait, Value};
///
/// let local = "foo";
/// let array = array![Value::Null, local, true, false, 123, "hello", 1 == 2, array![1, 2, 3], object! {"key": "value"}];
/// assert!(array[0].is_null());
/// assert_eq!(array[1].as_str(), Some("foo"));
/// assert_eq!(array[array.len() - 2].get_index(0).as_f64(), Some(1.0));
/// assert_eq!(array[array.len() - 1], object! {"key": "value"});
/// ```
#[macro_export]
macro_rules! array {
    () => {
        $crate::Array::new()
    };

    ($($elem:expr),+ $(,)?) => {
        <$crate::Array as ::core::iter::FromIterator<$crate::Value>>::from_iter([
            $($crate::Value::from($elem)),+
        ])
    };
}

/// Construct a `tagged_json::Object` from `"key": value` pairs.
///
/// Keys are string literals. Values are converted with `Value::from`. A repeated key replaces the
/// value stored at its first position.
///
/// ```
/// use tagged_json::{array, object, JsonValueTrait};
///
/// let obj = object! {
///     "name": "tagged",
///     "tags": array!["json", "dom"],
///     "nested": object! {"depth": 2},
/// };
/// assert_eq!(obj.len(), 3);
/// assert_eq!(obj.get("nested").get("depth").as_f64(), Some(2.0));
///
/// let obj = object! {"a": 1, "a": 2};
/// assert_eq!(obj.len(), 1);
/// ```
#[macro_export]
macro_rules! object {
    () => {
        $crate::Object::new()
    };

    ($($key:literal : $val:expr),+ $(,)?) => {{
        let mut obj = $crate::Object::new();
        $(
            obj.insert($key, $crate::Value::from($val));
        )+
        obj
    }};
}
