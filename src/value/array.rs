use std::{
    ops::{Deref, DerefMut},
    slice, vec,
};

use super::node::Value;

/// Array represents a JSON array. Its APIs are like `Vec<Value>`.
///
/// Slice methods such as `get`, `iter` and indexing are available through `Deref`.
///
/// # Example
/// ```
/// use tagged_json::{array, Array, JsonValueTrait};
///
/// let arr: Array = array![1, "b", true];
/// assert_eq!(arr[0], 1);
/// assert_eq!(arr.get(1).as_str(), Some("b"));
/// assert!(arr.get(3).is_none());
/// ```
#[derive(Debug, Default, Clone, PartialEq)]
#[repr(transparent)]
pub struct Array(pub(crate) Vec<Value>);

impl Array {
    /// Constructs a new, empty `Array`. It does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Array(Vec::new())
    }

    /// Constructs a new, empty `Array` able to hold at least `capacity` elements without
    /// reallocating.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Array(Vec::with_capacity(capacity))
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.0.capacity()
    }

    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.0.reserve(additional);
    }

    /// Appends an element to the back of the array.
    #[inline]
    pub fn push<T: Into<Value>>(&mut self, val: T) {
        self.0.push(val.into());
    }

    /// Removes the last element and returns it, or `None` if the array is empty.
    #[inline]
    pub fn pop(&mut self) -> Option<Value> {
        self.0.pop()
    }

    /// Inserts an element at position `index`, shifting all elements after it to the right.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    ///
    /// # Examples
    /// ```
    /// use tagged_json::array;
    ///
    /// let mut arr = array![1, 2, 3];
    /// arr.insert(1, "inserted");
    /// assert_eq!(arr, array![1, "inserted", 2, 3]);
    /// arr.insert(4, 4);
    /// assert_eq!(arr, array![1, "inserted", 2, 3, 4]);
    /// ```
    #[inline]
    pub fn insert<T: Into<Value>>(&mut self, index: usize, element: T) {
        self.0.insert(index, element.into());
    }

    /// Removes `count` elements starting at `index`, shifting the rest to the left.
    ///
    /// # Panics
    ///
    /// Panics if `index + count > len`.
    ///
    /// # Examples
    /// ```
    /// use tagged_json::array;
    ///
    /// let mut arr = array![0, 1, 2, 3, 4];
    /// arr.erase(1, 2);
    /// assert_eq!(arr, array![0, 3, 4]);
    /// arr.erase(3, 0);
    /// assert_eq!(arr.len(), 3);
    /// ```
    #[inline]
    pub fn erase(&mut self, index: usize, count: usize) {
        self.0.drain(index..index + count);
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn remove(&mut self, index: usize) -> Value {
        self.0.remove(index)
    }

    /// Removes all elements. The capacity is kept.
    #[inline]
    pub fn clear(&mut self) {
        self.0.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Value] {
        &self.0
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Value] {
        &mut self.0
    }

    /// Returns the inner vector.
    #[inline]
    pub fn into_vec(self) -> Vec<Value> {
        self.0
    }
}

impl Deref for Array {
    type Target = [Value];

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Array {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<Vec<Value>> for Array {
    #[inline]
    fn from(v: Vec<Value>) -> Self {
        Array(v)
    }
}

impl<T: Into<Value>> FromIterator<T> for Array {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Array(iter.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> Extend<T> for Array {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.0.extend(iter.into_iter().map(Into::into));
    }
}

impl IntoIterator for Array {
    type Item = Value;
    type IntoIter = vec::IntoIter<Value>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a Value;
    type IntoIter = slice::Iter<'a, Value>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a mut Array {
    type Item = &'a mut Value;
    type IntoIter = slice::IterMut<'a, Value>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter_mut()
    }
}
