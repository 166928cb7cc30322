use std::collections::{HashMap, HashSet, hash_map};
use std::fmt::{self, Debug};
use std::hash::Hash;

/// A mutable multi-valued mapping, the factory argument of the generic
/// multimap reducer and the accumulator behind the frozen multimap reducers.
///
/// `put_all` receives a whole other multimap (built from a disjoint
/// partition) and unions its per-key value collections into `self`.
pub trait Multimap<K, V>: Send {
    /// Records `value` under `key`.
    fn put(&mut self, key: K, value: V);

    /// Unions every value collection of `other` into `self`, per key.
    fn put_all(&mut self, other: Self);
}

/// A [`Multimap`] whose per-key values preserve insertion order and
/// duplicates.
///
/// # Examples
///
/// ```
/// use frozen_collect::{ListMultimap, Multimap};
///
/// let mut multimap = ListMultimap::new();
/// multimap.put(1, "a");
/// multimap.put(1, "b");
/// multimap.put(1, "a");
///
/// assert_eq!(multimap.get(&1), ["a", "b", "a"]);
/// ```
#[derive(Clone, Default)]
pub struct ListMultimap<K, V> {
    entries: HashMap<K, Vec<V>>,
}

impl<K, V> ListMultimap<K, V> {
    #[inline]
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Number of distinct keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(key, values)` groups.
    #[inline]
    pub fn iter(&self) -> hash_map::Iter<'_, K, Vec<V>> {
        self.entries.iter()
    }

    pub(crate) fn into_entries(self) -> hash_map::IntoIter<K, Vec<V>> {
        self.entries.into_iter()
    }
}

impl<K: Eq + Hash, V> ListMultimap<K, V> {
    /// The values recorded under `key`, in insertion order; empty if absent.
    #[inline]
    pub fn get(&self, key: &K) -> &[V] {
        self.entries.get(key).map_or(&[], |vs| vs)
    }
}

impl<K, V> Multimap<K, V> for ListMultimap<K, V>
where
    K: Eq + Hash + Send,
    V: Send,
{
    fn put(&mut self, key: K, value: V) {
        self.entries.entry(key).or_default().push(value);
    }

    fn put_all(&mut self, other: Self) {
        for (key, values) in other.entries {
            self.entries.entry(key).or_default().extend(values);
        }
    }
}

impl<K: Debug, V: Debug> Debug for ListMultimap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}

/// A [`Multimap`] whose per-key values are deduplicated by `Eq`/`Hash`.
///
/// # Examples
///
/// ```
/// use frozen_collect::{SetMultimap, Multimap};
///
/// let mut multimap = SetMultimap::new();
/// multimap.put(1, "a");
/// multimap.put(1, "a");
///
/// assert_eq!(multimap.get(&1).unwrap().len(), 1);
/// ```
#[derive(Clone, Default)]
pub struct SetMultimap<K, V> {
    entries: HashMap<K, HashSet<V>>,
}

impl<K, V> SetMultimap<K, V> {
    #[inline]
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Number of distinct keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(key, values)` groups.
    #[inline]
    pub fn iter(&self) -> hash_map::Iter<'_, K, HashSet<V>> {
        self.entries.iter()
    }

    pub(crate) fn into_entries(self) -> hash_map::IntoIter<K, HashSet<V>> {
        self.entries.into_iter()
    }
}

impl<K: Eq + Hash, V> SetMultimap<K, V> {
    /// The distinct values recorded under `key`, if any.
    #[inline]
    pub fn get(&self, key: &K) -> Option<&HashSet<V>> {
        self.entries.get(key)
    }
}

impl<K, V> Multimap<K, V> for SetMultimap<K, V>
where
    K: Eq + Hash + Send,
    V: Eq + Hash + Send,
{
    fn put(&mut self, key: K, value: V) {
        self.entries.entry(key).or_default().insert(value);
    }

    fn put_all(&mut self, other: Self) {
        for (key, values) in other.entries {
            self.entries.entry(key).or_default().extend(values);
        }
    }
}

impl<K: Debug, V: Debug> Debug for SetMultimap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}
