use std::collections::{HashSet, hash_set};
use std::fmt::{self, Debug};
use std::hash::Hash;

/// An immutable unordered set, the result of the set reducer.
///
/// Membership is decided by `Eq`/`Hash`. Duplicate elements collapse to one
/// during the reduction, regardless of how the input was partitioned.
///
/// # Examples
///
/// ```
/// use frozen_collect::{CollectWith, reducers};
///
/// let set = ["a", "b", "a"].into_iter().collect_with(reducers::to_set());
///
/// assert_eq!(set.len(), 2);
/// assert!(set.contains(&"b"));
/// ```
#[derive(Clone, Default)]
pub struct FrozenSet<T> {
    items: HashSet<T>,
}

impl<T> FrozenSet<T> {
    pub(crate) fn from_hash_set(items: HashSet<T>) -> Self {
        Self { items }
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
    pub fn iter(&self) -> hash_set::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: Eq + Hash> FrozenSet<T> {
    #[inline]
    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }
}

impl<T: Eq + Hash> PartialEq for FrozenSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq + Hash> Eq for FrozenSet<T> {}

impl<T: Eq + Hash> PartialEq<HashSet<T>> for FrozenSet<T> {
    fn eq(&self, other: &HashSet<T>) -> bool {
        self.items == *other
    }
}

impl<T> IntoIterator for FrozenSet<T> {
    type Item = T;
    type IntoIter = hash_set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a FrozenSet<T> {
    type Item = &'a T;
    type IntoIter = hash_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Debug> Debug for FrozenSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
