use std::fmt::{self, Debug};
use std::slice;

/// An immutable mapping whose entries are ordered by a caller-supplied key
/// comparator, the result of the sorted-map reducer.
///
/// Backed by a sorted slice of pairs; iteration yields entries in key order.
///
/// # Examples
///
/// ```
/// use frozen_collect::{CollectWith, reducers};
///
/// let map = [3, 1, 2]
///     .into_iter()
///     .collect_with(reducers::to_sorted_map(|n: &i32| *n, |n: &i32| n * 10, i32::cmp));
///
/// let keys: Vec<_> = map.keys().copied().collect();
/// assert_eq!(keys, [1, 2, 3]);
/// assert_eq!(map.get(&2), Some(&20));
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct FrozenSortedMap<K, V> {
    entries: Box<[(K, V)]>,
}

impl<K, V> FrozenSortedMap<K, V> {
    /// `entries` must already be sorted by the reducer's key comparator and
    /// hold no duplicate keys.
    pub(crate) fn from_sorted_pairs(entries: Vec<(K, V)>) -> Self {
        Self {
            entries: entries.into_boxed_slice(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over entries in key order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, (K, V)> {
        self.entries.iter()
    }

    /// Iterates over keys in order.
    #[inline]
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(k, _)| k)
    }

    /// Iterates over values in key order.
    #[inline]
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, v)| v)
    }

    #[inline]
    pub fn first(&self) -> Option<&(K, V)> {
        self.entries.first()
    }

    #[inline]
    pub fn last(&self) -> Option<&(K, V)> {
        self.entries.last()
    }
}

impl<K: PartialEq, V> FrozenSortedMap<K, V> {
    // The sort comparator is not retained, so lookup is a scan by key
    // equality rather than a binary search.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    #[inline]
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }
}

impl<K, V> IntoIterator for FrozenSortedMap<K, V> {
    type Item = (K, V);
    type IntoIter = std::vec::IntoIter<(K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_vec().into_iter()
    }
}

impl<'a, K, V> IntoIterator for &'a FrozenSortedMap<K, V> {
    type Item = &'a (K, V);
    type IntoIter = slice::Iter<'a, (K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<K: Debug, V: Debug> Debug for FrozenSortedMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(k, v)| (k, v)))
            .finish()
    }
}
