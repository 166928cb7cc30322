use std::collections::{HashMap, hash_map};
use std::fmt::{self, Debug};
use std::hash::Hash;

/// An immutable key-value mapping, the result of the map reducer.
///
/// # Examples
///
/// ```
/// use frozen_collect::{CollectWith, reducers};
///
/// let map = ["a", "bb"]
///     .into_iter()
///     .collect_with(reducers::to_map(|s: &&str| *s, |s: &&str| s.len()));
///
/// assert_eq!(map.get(&"bb"), Some(&2));
/// ```
#[derive(Clone, Default)]
pub struct FrozenMap<K, V> {
    entries: HashMap<K, V>,
}

impl<K, V> FrozenMap<K, V> {
    pub(crate) fn from_hash_map(entries: HashMap<K, V>) -> Self {
        Self { entries }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> hash_map::Iter<'_, K, V> {
        self.entries.iter()
    }

    #[inline]
    pub fn keys(&self) -> hash_map::Keys<'_, K, V> {
        self.entries.keys()
    }

    #[inline]
    pub fn values(&self) -> hash_map::Values<'_, K, V> {
        self.entries.values()
    }
}

impl<K: Eq + Hash, V> FrozenMap<K, V> {
    #[inline]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    #[inline]
    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }
}

impl<K: Eq + Hash, V: PartialEq> PartialEq for FrozenMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Eq + Hash, V: Eq> Eq for FrozenMap<K, V> {}

impl<K: Eq + Hash, V: PartialEq> PartialEq<HashMap<K, V>> for FrozenMap<K, V> {
    fn eq(&self, other: &HashMap<K, V>) -> bool {
        self.entries == *other
    }
}

impl<K, V> IntoIterator for FrozenMap<K, V> {
    type Item = (K, V);
    type IntoIter = hash_map::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, K, V> IntoIterator for &'a FrozenMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = hash_map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<K: Debug, V: Debug> Debug for FrozenMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
