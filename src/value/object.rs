//! Represents a JSON object.
use std::{slice, vec};

use super::node::Value;

/// Represents the JSON object. The inner implement is a key-value vector, kept in insertion order.
///
/// # Examples
/// ```
/// use tagged_json::{from_str, JsonValueMutTrait, JsonValueTrait};
///
/// let mut value = from_str(r#"{"a": 1, "b": true, "c": null}"#).unwrap();
/// let obj = value.as_object_mut().unwrap();
///
/// assert_eq!(obj.get("a").as_f64(), Some(1.0));
/// assert_eq!(obj.insert("d", "e"), None);
/// assert_eq!(obj.key_at(3), Some("d"));
/// assert_eq!(obj.len(), 4);
/// ```
///
/// # Warning
/// The keys in `Object` are not sorted and the `get` operation is O(n). `Object` is allowed to
/// have duplicated keys when it is built with [`Object::push`] or decoded with
/// [`DuplicateKeys::KeepAll`](crate::DuplicateKeys::KeepAll). Lookups then return the first match.
#[derive(Debug, Default, Clone)]
pub struct Object(pub(crate) Vec<(String, Value)>);

impl PartialEq for Object {
    /// Two objects are equal when they have the same size and every `(key, value)` pair of
    /// either side also appears in the other. Member order is ignored.
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        fn covered(lhs: &Object, rhs: &Object) -> bool {
            lhs.0
                .iter()
                .all(|(k, v)| rhs.0.iter().any(|(rk, rv)| rk == k && rv == v))
        }
        // duplicated keys are allowed, so both sides must be checked
        self.len() == other.len() && covered(self, other) && covered(other, self)
    }
}

impl Object {
    /// Create a new empty object. It does not allocate.
    #[inline]
    pub const fn new() -> Object {
        Object(Vec::new())
    }

    /// Create a new empty object with capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Object(Vec::with_capacity(capacity))
    }

    /// Clear the object, make it as empty but keep the allocated memory.
    #[inline]
    pub fn clear(&mut self) {
        self.0.clear();
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.0.capacity()
    }

    /// Returns the number of key-value pairs in the object.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the position of the first member whose key equals `key`, comparing the full
    /// byte content.
    ///
    /// # Examples
    /// ```
    /// use tagged_json::object;
    ///
    /// let obj = object! {"a": 1, "a\0b": 2};
    /// assert_eq!(obj.find_index("a\0b"), Some(1));
    /// assert_eq!(obj.find_index("a\0"), None);
    /// ```
    #[inline]
    pub fn find_index<Q: AsRef<str> + ?Sized>(&self, key: &Q) -> Option<usize> {
        let key = key.as_ref();
        self.0.iter().position(|(k, _)| k == key)
    }

    /// Returns a reference to the value of the first member named `key`.
    #[inline]
    pub fn get<Q: AsRef<str> + ?Sized>(&self, key: &Q) -> Option<&Value> {
        self.find_index(key).map(|i| &self.0[i].1)
    }

    /// Returns a mutable reference to the value of the first member named `key`.
    #[inline]
    pub fn get_mut<Q: AsRef<str> + ?Sized>(&mut self, key: &Q) -> Option<&mut Value> {
        let i = self.find_index(key)?;
        Some(&mut self.0[i].1)
    }

    #[inline]
    pub fn contains_key<Q: AsRef<str> + ?Sized>(&self, key: &Q) -> bool {
        self.find_index(key).is_some()
    }

    /// Sets the value of `key`.
    ///
    /// When the key already exists, the value at its first position is replaced in place and the
    /// old value is returned, so the member order and the key set stay unchanged. Otherwise the
    /// pair is appended.
    ///
    /// # Examples
    /// ```
    /// use tagged_json::{object, Value};
    ///
    /// let mut obj = object! {"a": 1, "b": 2};
    /// assert_eq!(obj.insert("a", "x"), Some(Value::from(1)));
    /// assert_eq!(obj.insert("c", 3), None);
    /// assert_eq!(obj.key_at(0), Some("a"));
    /// assert_eq!(obj.len(), 3);
    /// ```
    pub fn insert<K: AsRef<str> + ?Sized, V: Into<Value>>(
        &mut self,
        key: &K,
        value: V,
    ) -> Option<Value> {
        let value = value.into();
        match self.find_index(key) {
            Some(i) => Some(std::mem::replace(&mut self.0[i].1, value)),
            None => {
                self.0.push((key.as_ref().to_owned(), value));
                None
            }
        }
    }

    /// Appends a member without checking whether the key exists.
    #[inline]
    pub fn push<K: Into<String>, V: Into<Value>>(&mut self, key: K, value: V) {
        self.0.push((key.into(), value.into()));
    }

    /// Returns the key of the member at `index`.
    #[inline]
    pub fn key_at(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(|(k, _)| k.as_str())
    }

    /// Returns the value of the member at `index`.
    #[inline]
    pub fn value_at(&self, index: usize) -> Option<&Value> {
        self.0.get(index).map(|(_, v)| v)
    }

    #[inline]
    pub fn value_at_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.0.get_mut(index).map(|(_, v)| v)
    }

    /// Removes the member at `index`, shifting the later members left.
    #[inline]
    pub fn remove_at(&mut self, index: usize) -> Option<(String, Value)> {
        if index < self.0.len() {
            Some(self.0.remove(index))
        } else {
            None
        }
    }

    /// Removes the first member named `key` and returns its value.
    ///
    /// # Examples
    /// ```
    /// use tagged_json::{object, Value};
    ///
    /// let mut obj = object! {"a": 1, "b": true, "c": Value::Null};
    /// assert_eq!(obj.remove("d"), None);
    /// assert_eq!(obj.remove("a"), Some(Value::from(1)));
    /// assert_eq!(obj.key_at(0), Some("b"));
    /// ```
    #[inline]
    pub fn remove<Q: AsRef<str> + ?Sized>(&mut self, key: &Q) -> Option<Value> {
        let i = self.find_index(key)?;
        Some(self.0.remove(i).1)
    }

    /// Gets an iterator over the members in insertion order.
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter(self.0.iter())
    }

    /// Gets a mutable iterator over the members. Keys stay immutable.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_> {
        IterMut(self.0.iter_mut())
    }
}

/// A borrowed iterator over the members of an [`Object`].
pub struct Iter<'a>(slice::Iter<'a, (String, Value)>);

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a Value);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(k, v)| (k.as_str(), v))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

/// A mutable iterator over the members of an [`Object`].
pub struct IterMut<'a>(slice::IterMut<'a, (String, Value)>);

impl<'a> Iterator for IterMut<'a> {
    type Item = (&'a str, &'a mut Value);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(k, v)| (k.as_str(), v))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl ExactSizeIterator for IterMut<'_> {}

impl<'a> IntoIterator for &'a Object {
    type Item = (&'a str, &'a Value);
    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a mut Object {
    type Item = (&'a str, &'a mut Value);
    type IntoIter = IterMut<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl IntoIterator for Object {
    type Item = (String, Value);
    type IntoIter = vec::IntoIter<(String, Value)>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Object {
    /// Collects pairs with the same key rule as [`Object::insert`].
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut obj = Object::new();
        obj.extend(iter);
        obj
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for Object {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            let k: String = k.into();
            self.insert(&k, v);
        }
    }
}
