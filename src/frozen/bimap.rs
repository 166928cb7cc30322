use std::collections::{HashMap, hash_map};
use std::fmt::{self, Debug};
use std::hash::Hash;

use crate::DuplicateValueError;

/// An immutable bidirectional mapping, the result of the bimap reducer.
///
/// Both keys and values are unique; lookups work in either direction.
/// Value uniqueness is enforced when the accumulator is frozen — a
/// violation surfaces as [`DuplicateValueError`] rather than being resolved
/// by an arbitrary tie-break.
///
/// # Examples
///
/// ```
/// use frozen_collect::{CollectWith, reducers};
///
/// let bimap = ["a", "bb", "ccc"]
///     .into_iter()
///     .collect_with(reducers::to_bimap(|s: &&str| *s, |s: &&str| s.len()))
///     .unwrap();
///
/// assert_eq!(bimap.get_by_key(&"bb"), Some(&2));
/// assert_eq!(bimap.get_by_value(&3), Some(&"ccc"));
/// ```
#[derive(Clone, Default)]
pub struct FrozenBiMap<K, V> {
    forward: HashMap<K, V>,
    inverse: HashMap<V, K>,
}

impl<K, V> FrozenBiMap<K, V>
where
    K: Eq + Hash + Clone + Debug,
    V: Eq + Hash + Clone + Debug,
{
    /// Freezes a plain mapping, failing if two keys share a value.
    pub(crate) fn try_from_map(entries: HashMap<K, V>) -> Result<Self, DuplicateValueError> {
        let mut inverse = HashMap::with_capacity(entries.len());
        for (key, value) in &entries {
            if let Some(first_key) = inverse.insert(value.clone(), key.clone()) {
                return Err(DuplicateValueError {
                    value: format!("{value:?}"),
                    first_key: format!("{first_key:?}"),
                    second_key: format!("{key:?}"),
                });
            }
        }
        Ok(Self {
            forward: entries,
            inverse,
        })
    }
}

impl<K, V> FrozenBiMap<K, V> {
    #[inline]
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Iterates over `(key, value)` pairs in the forward direction.
    #[inline]
    pub fn iter(&self) -> hash_map::Iter<'_, K, V> {
        self.forward.iter()
    }
}

impl<K: Eq + Hash, V> FrozenBiMap<K, V> {
    #[inline]
    pub fn get_by_key(&self, key: &K) -> Option<&V> {
        self.forward.get(key)
    }

    #[inline]
    pub fn contains_key(&self, key: &K) -> bool {
        self.forward.contains_key(key)
    }
}

impl<K, V: Eq + Hash> FrozenBiMap<K, V> {
    #[inline]
    pub fn get_by_value(&self, value: &V) -> Option<&K> {
        self.inverse.get(value)
    }

    #[inline]
    pub fn contains_value(&self, value: &V) -> bool {
        self.inverse.contains_key(value)
    }
}

impl<K: Eq + Hash, V: PartialEq> PartialEq for FrozenBiMap<K, V> {
    // The inverse is derived from the forward map, so comparing the forward
    // halves is sufficient.
    fn eq(&self, other: &Self) -> bool {
        self.forward == other.forward
    }
}

impl<K: Eq + Hash, V: Eq> Eq for FrozenBiMap<K, V> {}

impl<'a, K, V> IntoIterator for &'a FrozenBiMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = hash_map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.forward.iter()
    }
}

impl<K, V> IntoIterator for FrozenBiMap<K, V> {
    type Item = (K, V);
    type IntoIter = hash_map::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.forward.into_iter()
    }
}

impl<K: Debug, V: Debug> Debug for FrozenBiMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
