use std::collections::HashSet;
use std::hash::Hash;
use std::marker::PhantomData;

use parking_lot::Mutex;

use crate::{Characteristics, ConcurrentReducer, FrozenSet, Reducer};

/// Creates a reducer that folds elements into a [`FrozenSet`].
///
/// Duplicates collapse by `Eq`/`Hash` during accumulation; merging unions
/// partial sets, so duplicates across partitions also collapse to one.
/// Declares [`CONCURRENT`] and [`UNORDERED`].
///
/// # Examples
///
/// ```
/// use frozen_collect::{CollectWith, reducers};
///
/// let set = [1, 1, 2].into_iter().collect_with(reducers::to_set());
///
/// assert_eq!(set.len(), 2);
/// ```
///
/// [`CONCURRENT`]: Characteristics::CONCURRENT
/// [`UNORDERED`]: Characteristics::UNORDERED
pub fn to_set<T: Eq + Hash + Send>() -> SetReducer<T> {
    SetReducer {
        _marker: PhantomData,
    }
}

/// Reducer returned by [`to_set`].
#[derive(Debug, Default)]
pub struct SetReducer<T> {
    _marker: PhantomData<fn(T)>,
}

// No `T` is stored, so cloning must not require `T: Clone`.
impl<T> Clone for SetReducer<T> {
    fn clone(&self) -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T: Eq + Hash + Send> Reducer<T> for SetReducer<T> {
    type Accum = Mutex<HashSet<T>>;
    type Output = FrozenSet<T>;

    fn seed(&self) -> Self::Accum {
        Mutex::new(HashSet::new())
    }

    fn accumulate(&self, acc: &mut Self::Accum, item: T) {
        acc.get_mut().insert(item);
    }

    fn merge(&self, mut left: Self::Accum, right: Self::Accum) -> Self::Accum {
        left.get_mut().extend(right.into_inner());
        left
    }

    fn finish(&self, acc: Self::Accum) -> FrozenSet<T> {
        FrozenSet::from_hash_set(acc.into_inner())
    }

    #[inline]
    fn characteristics(&self) -> Characteristics {
        Characteristics::CONCURRENT | Characteristics::UNORDERED
    }
}

impl<T: Eq + Hash + Send> ConcurrentReducer<T> for SetReducer<T> {
    fn accumulate_shared(&self, acc: &Self::Accum, item: T) {
        acc.lock().insert(item);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::{CollectWith, drive, reducers};

    #[test]
    fn members_equal_the_distinct_elements_under_any_partitioning() {
        let items = [3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5];
        let expected: HashSet<i32> = items.into_iter().collect();

        let whole = items.into_iter().collect_with(reducers::to_set());
        assert_eq!(whole, expected);

        let reducer = reducers::to_set();
        let split = drive::partitioned([vec![3, 1, 4, 1], vec![5, 9, 2], vec![6, 5, 3, 5]], &reducer);
        assert_eq!(split, expected);
    }

    #[test]
    fn reducer_clones_over_non_clone_element_types() {
        #[derive(PartialEq, Eq, Hash)]
        struct Opaque(u8);

        let reducer = reducers::to_set::<Opaque>();
        let cloned = reducer.clone();
        let set = drive::sequential([Opaque(1), Opaque(1), Opaque(2)], &cloned);
        assert_eq!(set.len(), 2);
    }
}
