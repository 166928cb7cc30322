use std::fmt::{self, Debug};
use std::ops::Index;
use std::slice;

/// An immutable sequence sorted by a caller-supplied comparator, the result
/// of the sorted-set reducer.
///
/// Distinctness is decided by `Eq`/`Hash` during accumulation, not by the
/// comparator: two elements that the comparator ties but equality
/// distinguishes are both retained, adjacent in the output. Their relative
/// order is unspecified (the pre-sort accumulator is unordered).
///
/// # Examples
///
/// ```
/// use frozen_collect::{CollectWith, reducers};
///
/// let sorted = [3, 1, 2, 1]
///     .into_iter()
///     .collect_with(reducers::to_sorted_set(i32::cmp));
///
/// assert_eq!(sorted, [1, 2, 3]);
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct FrozenSortedSet<T> {
    items: Box<[T]>,
}

impl<T> FrozenSortedSet<T> {
    /// `items` must already be sorted by the reducer's comparator.
    pub(crate) fn from_sorted_vec(items: Vec<T>) -> Self {
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

    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }
}

impl<T: PartialEq> FrozenSortedSet<T> {
    // The sort comparator is not retained, so membership is a scan by
    // equality rather than a binary search.
    #[inline]
    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }
}

impl<T> Index<usize> for FrozenSortedSet<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T> IntoIterator for FrozenSortedSet<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_vec().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a FrozenSortedSet<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for FrozenSortedSet<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        *self.items == other[..]
    }
}

impl<T: PartialEq> PartialEq<[T]> for FrozenSortedSet<T> {
    fn eq(&self, other: &[T]) -> bool {
        *self.items == *other
    }
}

impl<T: Debug> Debug for FrozenSortedSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
