use std::hash::Hash;

use parking_lot::Mutex;

use crate::multimap::{ListMultimap, Multimap, SetMultimap};
use crate::{
    Characteristics, ConcurrentReducer, FrozenListMultimap, FrozenSetMultimap, Reducer,
};

/// Creates a reducer that folds elements into whatever [`Multimap`] the
/// given factory produces, returned live rather than frozen.
///
/// This is the deliberately lighter-weight variant: `finish` is the
/// identity ([`IDENTITY_FINISH`] is declared), so the caller receives the
/// still-mutable-but-synchronized accumulator — a `Mutex` around the
/// factory's multimap — not an immutable snapshot.
///
/// # Examples
///
/// ```
/// use frozen_collect::{CollectWith, reducers, ListMultimap};
///
/// let live = ["a", "b", "aa"]
///     .into_iter()
///     .collect_with(reducers::to_multimap(
///         |s: &&str| s.len(),
///         |s: &&str| *s,
///         ListMultimap::new,
///     ));
///
/// let multimap = live.into_inner();
/// assert_eq!(multimap.get(&1), ["a", "b"]);
/// ```
///
/// [`IDENTITY_FINISH`]: Characteristics::IDENTITY_FINISH
pub fn to_multimap<T, K, V, M, KF, VF, MF>(
    key_fn: KF,
    value_fn: VF,
    multimap_factory: MF,
) -> MultimapReducer<KF, VF, MF>
where
    KF: Fn(&T) -> K,
    VF: Fn(&T) -> V,
    MF: Fn() -> M,
    M: Multimap<K, V>,
{
    MultimapReducer {
        key_fn,
        value_fn,
        multimap_factory,
    }
}

/// Reducer returned by [`to_multimap`].
#[derive(Clone)]
pub struct MultimapReducer<KF, VF, MF> {
    key_fn: KF,
    value_fn: VF,
    multimap_factory: MF,
}

impl<T, K, V, M, KF, VF, MF> Reducer<T> for MultimapReducer<KF, VF, MF>
where
    KF: Fn(&T) -> K,
    VF: Fn(&T) -> V,
    MF: Fn() -> M,
    M: Multimap<K, V>,
{
    type Accum = Mutex<M>;
    type Output = Mutex<M>;

    fn seed(&self) -> Self::Accum {
        Mutex::new((self.multimap_factory)())
    }

    fn accumulate(&self, acc: &mut Self::Accum, item: T) {
        let key = (self.key_fn)(&item);
        let value = (self.value_fn)(&item);
        acc.get_mut().put(key, value);
    }

    fn merge(&self, mut left: Self::Accum, right: Self::Accum) -> Self::Accum {
        left.get_mut().put_all(right.into_inner());
        left
    }

    fn finish(&self, acc: Self::Accum) -> Self::Output {
        acc
    }

    #[inline]
    fn characteristics(&self) -> Characteristics {
        Characteristics::CONCURRENT | Characteristics::IDENTITY_FINISH
    }
}

impl<T, K, V, M, KF, VF, MF> ConcurrentReducer<T> for MultimapReducer<KF, VF, MF>
where
    KF: Fn(&T) -> K,
    VF: Fn(&T) -> V,
    MF: Fn() -> M,
    M: Multimap<K, V>,
{
    fn accumulate_shared(&self, acc: &Self::Accum, item: T) {
        let key = (self.key_fn)(&item);
        let value = (self.value_fn)(&item);
        acc.lock().put(key, value);
    }
}

/// Creates a reducer that folds elements into a [`FrozenListMultimap`]:
/// per-key values keep insertion order and duplicates.
///
/// Merging appends the right side's value collections after the left's,
/// per key. Declares [`CONCURRENT`] only — the result is order-preserving
/// within each key, so `UNORDERED` would be wrong.
///
/// # Examples
///
/// ```
/// use frozen_collect::{CollectWith, reducers};
///
/// let by_len = ["a", "b", "a"]
///     .into_iter()
///     .collect_with(reducers::to_list_multimap(|s: &&str| s.len(), |s: &&str| *s));
///
/// assert_eq!(by_len.get(&1), ["a", "b", "a"]);
/// ```
///
/// [`CONCURRENT`]: Characteristics::CONCURRENT
pub fn to_list_multimap<T, K, V, KF, VF>(key_fn: KF, value_fn: VF) -> ListMultimapReducer<KF, VF>
where
    KF: Fn(&T) -> K,
    VF: Fn(&T) -> V,
    K: Eq + Hash + Send,
    V: Send,
{
    ListMultimapReducer { key_fn, value_fn }
}

/// Reducer returned by [`to_list_multimap`].
#[derive(Clone)]
pub struct ListMultimapReducer<KF, VF> {
    key_fn: KF,
    value_fn: VF,
}

impl<T, K, V, KF, VF> Reducer<T> for ListMultimapReducer<KF, VF>
where
    KF: Fn(&T) -> K,
    VF: Fn(&T) -> V,
    K: Eq + Hash + Send,
    V: Send,
{
    type Accum = Mutex<ListMultimap<K, V>>;
    type Output = FrozenListMultimap<K, V>;

    fn seed(&self) -> Self::Accum {
        Mutex::new(ListMultimap::new())
    }

    fn accumulate(&self, acc: &mut Self::Accum, item: T) {
        let key = (self.key_fn)(&item);
        let value = (self.value_fn)(&item);
        acc.get_mut().put(key, value);
    }

    fn merge(&self, mut left: Self::Accum, right: Self::Accum) -> Self::Accum {
        left.get_mut().put_all(right.into_inner());
        left
    }

    fn finish(&self, acc: Self::Accum) -> FrozenListMultimap<K, V> {
        FrozenListMultimap::from_multimap(acc.into_inner())
    }

    #[inline]
    fn characteristics(&self) -> Characteristics {
        Characteristics::CONCURRENT
    }
}

impl<T, K, V, KF, VF> ConcurrentReducer<T> for ListMultimapReducer<KF, VF>
where
    KF: Fn(&T) -> K,
    VF: Fn(&T) -> V,
    K: Eq + Hash + Send,
    V: Send,
{
    fn accumulate_shared(&self, acc: &Self::Accum, item: T) {
        let key = (self.key_fn)(&item);
        let value = (self.value_fn)(&item);
        acc.lock().put(key, value);
    }
}

/// Creates a reducer that folds elements into a [`FrozenSetMultimap`]:
/// per-key values are deduplicated by `Eq`/`Hash`.
///
/// Declares [`CONCURRENT`] and [`UNORDERED`].
///
/// # Examples
///
/// ```
/// use frozen_collect::{CollectWith, reducers};
///
/// let by_len = ["a", "a", "bb"]
///     .into_iter()
///     .collect_with(reducers::to_set_multimap(|s: &&str| s.len(), |s: &&str| *s));
///
/// assert_eq!(by_len.get(&1).unwrap().len(), 1);
/// ```
///
/// [`CONCURRENT`]: Characteristics::CONCURRENT
/// [`UNORDERED`]: Characteristics::UNORDERED
pub fn to_set_multimap<T, K, V, KF, VF>(key_fn: KF, value_fn: VF) -> SetMultimapReducer<KF, VF>
where
    KF: Fn(&T) -> K,
    VF: Fn(&T) -> V,
    K: Eq + Hash + Send,
    V: Eq + Hash + Send,
{
    SetMultimapReducer { key_fn, value_fn }
}

/// Reducer returned by [`to_set_multimap`].
#[derive(Clone)]
pub struct SetMultimapReducer<KF, VF> {
    key_fn: KF,
    value_fn: VF,
}

impl<T, K, V, KF, VF> Reducer<T> for SetMultimapReducer<KF, VF>
where
    KF: Fn(&T) -> K,
    VF: Fn(&T) -> V,
    K: Eq + Hash + Send,
    V: Eq + Hash + Send,
{
    type Accum = Mutex<SetMultimap<K, V>>;
    type Output = FrozenSetMultimap<K, V>;

    fn seed(&self) -> Self::Accum {
        Mutex::new(SetMultimap::new())
    }

    fn accumulate(&self, acc: &mut Self::Accum, item: T) {
        let key = (self.key_fn)(&item);
        let value = (self.value_fn)(&item);
        acc.get_mut().put(key, value);
    }

    fn merge(&self, mut left: Self::Accum, right: Self::Accum) -> Self::Accum {
        left.get_mut().put_all(right.into_inner());
        left
    }

    fn finish(&self, acc: Self::Accum) -> FrozenSetMultimap<K, V> {
        FrozenSetMultimap::from_multimap(acc.into_inner())
    }

    #[inline]
    fn characteristics(&self) -> Characteristics {
        Characteristics::CONCURRENT | Characteristics::UNORDERED
    }
}

impl<T, K, V, KF, VF> ConcurrentReducer<T> for SetMultimapReducer<KF, VF>
where
    KF: Fn(&T) -> K,
    VF: Fn(&T) -> V,
    K: Eq + Hash + Send,
    V: Eq + Hash + Send,
{
    fn accumulate_shared(&self, acc: &Self::Accum, item: T) {
        let key = (self.key_fn)(&item);
        let value = (self.value_fn)(&item);
        acc.lock().put(key, value);
    }
}

#[cfg(test)]
mod tests {
    use crate::multimap::Multimap;
    use crate::{CollectWith, ListMultimap, drive, reducers};

    #[test]
    fn generic_multimap_returns_the_live_synchronized_accumulator() {
        let live = [1, 2, 3, 12]
            .into_iter()
            .collect_with(reducers::to_multimap(
                |n: &i32| n % 10,
                |n: &i32| *n,
                ListMultimap::new,
            ));

        // Still mutable: the caller got the accumulator itself, not a
        // frozen snapshot.
        live.lock().put(9, 99);

        let multimap = live.into_inner();
        assert_eq!(multimap.get(&2), [2, 12]);
        assert_eq!(multimap.get(&9), [99]);
    }

    #[test]
    fn list_multimap_merge_appends_per_key() {
        let reducer = reducers::to_list_multimap(|&(k, _): &(i32, &str)| k, |&(_, v)| v);
        let grouped = drive::partitioned(
            [vec![(1, "a"), (2, "x")], vec![(1, "b"), (1, "a")]],
            &reducer,
        );

        assert_eq!(grouped.get(&1), ["a", "b", "a"]);
        assert_eq!(grouped.get(&2), ["x"]);
        assert_eq!(grouped.values_len(), 4);
    }

    #[test]
    fn set_multimap_merge_unions_per_key() {
        let reducer = reducers::to_set_multimap(|&(k, _): &(i32, &str)| k, |&(_, v)| v);
        let grouped = drive::partitioned([vec![(1, "a"), (1, "b")], vec![(1, "a")]], &reducer);

        assert_eq!(grouped.get(&1).unwrap().len(), 2);
        assert_eq!(grouped.values_len(), 2);
    }
}
