use std::fmt::{self, Debug};
use std::ops::Index;
use std::slice;

/// An immutable ordered sequence, the result of the list reducer.
///
/// Preserves the encounter order of the reduction (within each partition;
/// across partitions the order follows the engine's merge order). Once
/// built it cannot be modified: there is no mutating API and the backing
/// storage is owned exclusively by this value.
///
/// # Examples
///
/// ```
/// use frozen_collect::{CollectWith, reducers};
///
/// let list = [1, 2, 3].into_iter().collect_with(reducers::to_list());
///
/// assert_eq!(list.len(), 3);
/// assert_eq!(list[1], 2);
/// assert_eq!(list, [1, 2, 3]);
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct FrozenList<T> {
    items: Box<[T]>,
}

impl<T> FrozenList<T> {
    pub(crate) fn from_vec(items: Vec<T>) -> Self {
        Self {
            items: items.into_boxed_slice(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T> Index<usize> for FrozenList<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T> IntoIterator for FrozenList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_vec().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a FrozenList<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for FrozenList<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        *self.items == other[..]
    }
}

impl<T: PartialEq> PartialEq<[T]> for FrozenList<T> {
    fn eq(&self, other: &[T]) -> bool {
        *self.items == *other
    }
}

impl<T: PartialEq> PartialEq<Vec<T>> for FrozenList<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        *self.items == other[..]
    }
}

impl<T: Debug> Debug for FrozenList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
