use std::collections::HashMap;
use std::hash::Hash;

use parking_lot::Mutex;

use crate::{Characteristics, ConcurrentReducer, FrozenMap, Reducer};

/// Creates a reducer that folds elements into a [`FrozenMap`], deriving
/// each entry as `key_fn(&element) -> value_fn(&element)`.
///
/// Key collisions resolve last-write-wins: within one accumulator the later
/// element wins, and on merge the right accumulator's entries win. Which
/// write is "last" for inputs with duplicate derived keys therefore depends
/// on the engine's partitioning and merge order (see the
/// [module docs](crate::reducers)).
///
/// # Examples
///
/// ```
/// use frozen_collect::{CollectWith, reducers};
///
/// let lengths = ["a", "bb"]
///     .into_iter()
///     .collect_with(reducers::to_map(|s: &&str| *s, |s: &&str| s.len()));
///
/// assert_eq!(lengths.get(&"a"), Some(&1));
/// ```
pub fn to_map<T, K, V, KF, VF>(key_fn: KF, value_fn: VF) -> MapReducer<KF, VF>
where
    KF: Fn(&T) -> K,
    VF: Fn(&T) -> V,
    K: Eq + Hash + Send,
    V: Send,
{
    MapReducer { key_fn, value_fn }
}

/// Reducer returned by [`to_map`].
#[derive(Clone)]
pub struct MapReducer<KF, VF> {
    key_fn: KF,
    value_fn: VF,
}

impl<T, K, V, KF, VF> Reducer<T> for MapReducer<KF, VF>
where
    KF: Fn(&T) -> K,
    VF: Fn(&T) -> V,
    K: Eq + Hash + Send,
    V: Send,
{
    type Accum = Mutex<HashMap<K, V>>;
    type Output = FrozenMap<K, V>;

    fn seed(&self) -> Self::Accum {
        Mutex::new(HashMap::new())
    }

    fn accumulate(&self, acc: &mut Self::Accum, item: T) {
        let key = (self.key_fn)(&item);
        let value = (self.value_fn)(&item);
        acc.get_mut().insert(key, value);
    }

    fn merge(&self, mut left: Self::Accum, right: Self::Accum) -> Self::Accum {
        // `extend` overwrites on collision, so the right side wins.
        left.get_mut().extend(right.into_inner());
        left
    }

    fn finish(&self, acc: Self::Accum) -> FrozenMap<K, V> {
        FrozenMap::from_hash_map(acc.into_inner())
    }

    #[inline]
    fn characteristics(&self) -> Characteristics {
        Characteristics::CONCURRENT | Characteristics::UNORDERED
    }
}

impl<T, K, V, KF, VF> ConcurrentReducer<T> for MapReducer<KF, VF>
where
    KF: Fn(&T) -> K,
    VF: Fn(&T) -> V,
    K: Eq + Hash + Send,
    V: Send,
{
    fn accumulate_shared(&self, acc: &Self::Accum, item: T) {
        let key = (self.key_fn)(&item);
        let value = (self.value_fn)(&item);
        acc.lock().insert(key, value);
    }
}

#[cfg(test)]
mod tests {
    use crate::{CollectWith, drive, reducers};

    #[test]
    fn later_element_wins_within_one_accumulator() {
        let map = [(1, "old"), (2, "other"), (1, "new")]
            .into_iter()
            .collect_with(reducers::to_map(|&(k, _): &(i32, &str)| k, |&(_, v)| v));

        assert_eq!(map.get(&1), Some(&"new"));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn right_partition_wins_on_merge() {
        // The observed survivor under the reference merge order (left fold
        // in partition order): the later partition's entry.
        let reducer = reducers::to_map(|&(k, _): &(i32, &str)| k, |&(_, v)| v);
        let map = drive::partitioned([vec![(1, "left")], vec![(1, "right")]], &reducer);
        assert_eq!(map.get(&1), Some(&"right"));
    }
}
