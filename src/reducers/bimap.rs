use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use parking_lot::Mutex;

use crate::{Characteristics, ConcurrentReducer, DuplicateValueError, FrozenBiMap, Reducer};

/// Creates a reducer that folds elements into a [`FrozenBiMap`].
///
/// Accumulation and merging behave exactly like [`to_map`](super::to_map) —
/// key collisions resolve last-write-wins — but the finish step additionally
/// enforces value uniqueness over the entries that survived. A violation is
/// surfaced as [`DuplicateValueError`], never resolved silently, which is
/// why the output is a `Result`.
///
/// # Examples
///
/// ```
/// use frozen_collect::{CollectWith, reducers};
///
/// let bimap = [1, 2, 3]
///     .into_iter()
///     .collect_with(reducers::to_bimap(|n: &i32| *n, |n: &i32| n * 10))
///     .unwrap();
///
/// assert_eq!(bimap.get_by_value(&20), Some(&2));
/// ```
///
/// Two keys deriving the same value fail at finish:
///
/// ```
/// use frozen_collect::{CollectWith, reducers};
///
/// let result = ["ab", "cd"]
///     .into_iter()
///     .collect_with(reducers::to_bimap(|s: &&str| *s, |s: &&str| s.len()));
///
/// assert!(result.is_err());
/// ```
pub fn to_bimap<T, K, V, KF, VF>(key_fn: KF, value_fn: VF) -> BiMapReducer<KF, VF>
where
    KF: Fn(&T) -> K,
    VF: Fn(&T) -> V,
    K: Eq + Hash + Clone + Debug + Send,
    V: Eq + Hash + Clone + Debug + Send,
{
    BiMapReducer { key_fn, value_fn }
}

/// Reducer returned by [`to_bimap`].
#[derive(Clone)]
pub struct BiMapReducer<KF, VF> {
    key_fn: KF,
    value_fn: VF,
}

impl<T, K, V, KF, VF> Reducer<T> for BiMapReducer<KF, VF>
where
    KF: Fn(&T) -> K,
    VF: Fn(&T) -> V,
    K: Eq + Hash + Clone + Debug + Send,
    V: Eq + Hash + Clone + Debug + Send,
{
    type Accum = Mutex<HashMap<K, V>>;
    type Output = Result<FrozenBiMap<K, V>, DuplicateValueError>;

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

    fn finish(&self, acc: Self::Accum) -> Self::Output {
        FrozenBiMap::try_from_map(acc.into_inner())
    }

    #[inline]
    fn characteristics(&self) -> Characteristics {
        Characteristics::CONCURRENT | Characteristics::UNORDERED
    }
}

impl<T, K, V, KF, VF> ConcurrentReducer<T> for BiMapReducer<KF, VF>
where
    KF: Fn(&T) -> K,
    VF: Fn(&T) -> V,
    K: Eq + Hash + Clone + Debug + Send,
    V: Eq + Hash + Clone + Debug + Send,
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
    fn distinct_values_freeze_cleanly() {
        let bimap = ["a", "bb", "ccc"]
            .into_iter()
            .collect_with(reducers::to_bimap(|s: &&str| *s, |s: &&str| s.len()))
            .unwrap();

        assert_eq!(bimap.len(), 3);
        assert_eq!(bimap.get_by_key(&"ccc"), Some(&3));
        assert_eq!(bimap.get_by_value(&1), Some(&"a"));
    }

    #[test]
    fn duplicate_values_fail_at_finish_not_during_accumulation() {
        // Accumulation happily stores both entries; only the finish step
        // inspects value uniqueness.
        let result = ["ab", "cd", "xyz"]
            .into_iter()
            .collect_with(reducers::to_bimap(|s: &&str| *s, |s: &&str| s.len()));

        let err = result.unwrap_err();
        assert_eq!(err.value(), "2");
    }

    #[test]
    fn merged_partitions_agree_with_one_sequential_partition() {
        let reducer = reducers::to_bimap(|n: &i32| *n, |n: &i32| n * 10);
        let whole = drive::sequential(vec![1, 2, 3, 4], &reducer).unwrap();
        let split = drive::partitioned([vec![1, 2], vec![3, 4]], &reducer).unwrap();
        assert_eq!(split, whole);
    }

    #[test]
    fn duplicate_values_across_partitions_fail_at_finish() {
        // The colliding entries live in different accumulators until merge,
        // so only the merged finish can see the violation.
        let reducer = reducers::to_bimap(|s: &&str| *s, |s: &&str| s.len());
        let result = drive::partitioned([vec!["ab"], vec!["cd"]], &reducer);
        assert_eq!(result.unwrap_err().value(), "2");
    }

    #[test]
    fn key_collisions_still_resolve_before_uniqueness_is_checked() {
        // Both "ab" entries collapse to one, so the value 2 appears once
        // and the freeze succeeds.
        let bimap = [("ab", 2), ("ab", 2), ("c", 1)]
            .into_iter()
            .collect_with(reducers::to_bimap(|&(k, _): &(&str, i32)| k, |&(_, v)| v))
            .unwrap();

        assert_eq!(bimap.len(), 2);
    }
}
