use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;

use parking_lot::Mutex;

use crate::{Characteristics, ConcurrentReducer, FrozenSortedMap, Reducer};

/// Creates a reducer that folds elements into a [`FrozenSortedMap`] whose
/// entries are ordered by the key `comparator`.
///
/// Accumulation and merging behave exactly like [`to_map`](super::to_map);
/// the comparator is applied only at finish time. Keys are already unique
/// by then (collisions resolved last-write-wins during accumulation), so
/// the comparator orders but never deduplicates.
///
/// # Examples
///
/// ```
/// use frozen_collect::{CollectWith, reducers};
///
/// let map = ["bb", "a"]
///     .into_iter()
///     .collect_with(reducers::to_sorted_map(
///         |s: &&str| *s,
///         |s: &&str| s.len(),
///         |a: &&str, b: &&str| a.cmp(b),
///     ));
///
/// let keys: Vec<_> = map.keys().copied().collect();
/// assert_eq!(keys, ["a", "bb"]);
/// ```
pub fn to_sorted_map<T, K, V, KF, VF, C>(
    key_fn: KF,
    value_fn: VF,
    comparator: C,
) -> SortedMapReducer<KF, VF, C>
where
    KF: Fn(&T) -> K,
    VF: Fn(&T) -> V,
    C: Fn(&K, &K) -> Ordering,
    K: Eq + Hash + Send,
    V: Send,
{
    SortedMapReducer {
        key_fn,
        value_fn,
        comparator,
    }
}

/// Reducer returned by [`to_sorted_map`].
#[derive(Clone)]
pub struct SortedMapReducer<KF, VF, C> {
    key_fn: KF,
    value_fn: VF,
    comparator: C,
}

impl<T, K, V, KF, VF, C> Reducer<T> for SortedMapReducer<KF, VF, C>
where
    KF: Fn(&T) -> K,
    VF: Fn(&T) -> V,
    C: Fn(&K, &K) -> Ordering,
    K: Eq + Hash + Send,
    V: Send,
{
    type Accum = Mutex<HashMap<K, V>>;
    type Output = FrozenSortedMap<K, V>;

    fn seed(&self) -> Self::Accum {
        Mutex::new(HashMap::new())
    }

    fn accumulate(&self, acc: &mut Self::Accum, item: T) {
        let key = (self.key_fn)(&item);
        let value = (self.value_fn)(&item);
        acc.get_mut().insert(key, value);
    }

    fn merge(&self, mut left: Self::Accum, right: Self::Accum) -> Self::Accum {
        left.get_mut().extend(right.into_inner());
        left
    }

    fn finish(&self, acc: Self::Accum) -> FrozenSortedMap<K, V> {
        let mut entries: Vec<(K, V)> = acc.into_inner().into_iter().collect();
        entries.sort_by(|(a, _), (b, _)| (self.comparator)(a, b));
        FrozenSortedMap::from_sorted_pairs(entries)
    }

    #[inline]
    fn characteristics(&self) -> Characteristics {
        Characteristics::CONCURRENT | Characteristics::UNORDERED
    }
}

impl<T, K, V, KF, VF, C> ConcurrentReducer<T> for SortedMapReducer<KF, VF, C>
where
    KF: Fn(&T) -> K,
    VF: Fn(&T) -> V,
    C: Fn(&K, &K) -> Ordering,
    K: Eq + Hash + Send,
    V: Send,
{
    fn accumulate_shared(&self, acc: &Self::Accum, item: T) {
        let key = (self.key_fn)(&item);
        let value = (self.value_fn)(&item);
        acc.lock().insert(key, value);
    }
}
