use std::collections::{HashMap, HashSet, hash_map};
use std::fmt::{self, Debug};
use std::hash::Hash;

use crate::multimap::{ListMultimap, SetMultimap};

/// An immutable multi-valued mapping whose per-key values preserve insertion
/// order and duplicates, the result of the list-multimap reducer.
///
/// # Examples
///
/// ```
/// use frozen_collect::{CollectWith, reducers};
///
/// let by_len = ["a", "b", "aa"]
///     .into_iter()
///     .collect_with(reducers::to_list_multimap(|s: &&str| s.len(), |s: &&str| *s));
///
/// assert_eq!(by_len.get(&1), ["a", "b"]);
/// assert_eq!(by_len.get(&3), [] as [&str; 0]);
/// ```
#[derive(Clone, Default)]
pub struct FrozenListMultimap<K, V> {
    entries: HashMap<K, Box<[V]>>,
}

impl<K, V> FrozenListMultimap<K, V>
where
    K: Eq + Hash,
{
    pub(crate) fn from_multimap(multimap: ListMultimap<K, V>) -> Self {
        Self {
            entries: multimap
                .into_entries()
                .map(|(k, vs)| (k, vs.into_boxed_slice()))
                .collect(),
        }
    }

    /// The values recorded under `key`, in insertion order; empty if the key
    /// is absent.
    #[inline]
    pub fn get(&self, key: &K) -> &[V] {
        self.entries.get(key).map_or(&[], |vs| vs)
    }

    #[inline]
    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }
}

impl<K, V> FrozenListMultimap<K, V> {
    /// Number of distinct keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of values across all keys.
    #[inline]
    pub fn values_len(&self) -> usize {
        self.entries.values().map(|vs| vs.len()).sum()
    }

    /// Iterates over `(key, values)` groups.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&K, &[V])> {
        self.entries.iter().map(|(k, vs)| (k, &**vs))
    }

    #[inline]
    pub fn keys(&self) -> hash_map::Keys<'_, K, Box<[V]>> {
        self.entries.keys()
    }
}

impl<K: Eq + Hash, V: PartialEq> PartialEq for FrozenListMultimap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Eq + Hash, V: Eq> Eq for FrozenListMultimap<K, V> {}

impl<K: Debug, V: Debug> Debug for FrozenListMultimap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}

/// An immutable multi-valued mapping whose per-key values are deduplicated,
/// the result of the set-multimap reducer.
///
/// # Examples
///
/// ```
/// use frozen_collect::{CollectWith, reducers};
///
/// let by_len = ["a", "b", "a"]
///     .into_iter()
///     .collect_with(reducers::to_set_multimap(|s: &&str| s.len(), |s: &&str| *s));
///
/// let ones = by_len.get(&1).unwrap();
/// assert_eq!(ones.len(), 2);
/// assert!(ones.contains("a"));
/// ```
#[derive(Clone, Default)]
pub struct FrozenSetMultimap<K, V> {
    entries: HashMap<K, HashSet<V>>,
}

impl<K, V> FrozenSetMultimap<K, V>
where
    K: Eq + Hash,
{
    pub(crate) fn from_multimap(multimap: SetMultimap<K, V>) -> Self {
        Self {
            entries: multimap.into_entries().collect(),
        }
    }

    /// The distinct values recorded under `key`, if any.
    #[inline]
    pub fn get(&self, key: &K) -> Option<&HashSet<V>> {
        self.entries.get(key)
    }

    #[inline]
    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }
}

impl<K, V> FrozenSetMultimap<K, V> {
    /// Number of distinct keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of distinct values across all keys.
    #[inline]
    pub fn values_len(&self) -> usize {
        self.entries.values().map(|vs| vs.len()).sum()
    }

    /// Iterates over `(key, values)` groups.
    #[inline]
    pub fn iter(&self) -> hash_map::Iter<'_, K, HashSet<V>> {
        self.entries.iter()
    }

    #[inline]
    pub fn keys(&self) -> hash_map::Keys<'_, K, HashSet<V>> {
        self.entries.keys()
    }
}

impl<K: Eq + Hash, V: Eq + Hash> PartialEq for FrozenSetMultimap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Eq + Hash, V: Eq + Hash> Eq for FrozenSetMultimap<K, V> {}

impl<K: Debug, V: Debug> Debug for FrozenSetMultimap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}
