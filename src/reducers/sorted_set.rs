use std::cmp::Ordering;
use std::collections::HashSet;
use std::hash::Hash;
use std::marker::PhantomData;

use parking_lot::Mutex;

use crate::{Characteristics, ConcurrentReducer, FrozenSortedSet, Reducer};

/// Creates a reducer that folds elements into a [`FrozenSortedSet`] ordered
/// by `comparator`.
///
/// Accumulation and merging are identical to [`to_set`](super::to_set):
/// duplicate suppression uses `Eq`/`Hash` and is independent of the final
/// ordering. The comparator is applied only once, at finish time, with a
/// stable sort — elements it ties but equality distinguishes are both
/// retained.
///
/// # Examples
///
/// ```
/// use frozen_collect::{CollectWith, reducers};
///
/// let sorted = ["pear", "fig", "apple", "fig"]
///     .into_iter()
///     .collect_with(reducers::to_sorted_set(|a: &&str, b: &&str| a.cmp(b)));
///
/// assert_eq!(sorted, ["apple", "fig", "pear"]);
/// ```
pub fn to_sorted_set<T, F>(comparator: F) -> SortedSetReducer<T, F>
where
    T: Eq + Hash + Send,
    F: Fn(&T, &T) -> Ordering,
{
    SortedSetReducer {
        comparator,
        _marker: PhantomData,
    }
}

/// Reducer returned by [`to_sorted_set`].
pub struct SortedSetReducer<T, F> {
    comparator: F,
    _marker: PhantomData<fn(T)>,
}

// Only the comparator needs `Clone`; no `T` is stored.
impl<T, F: Clone> Clone for SortedSetReducer<T, F> {
    fn clone(&self) -> Self {
        Self {
            comparator: self.comparator.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T, F> Reducer<T> for SortedSetReducer<T, F>
where
    T: Eq + Hash + Send,
    F: Fn(&T, &T) -> Ordering,
{
    type Accum = Mutex<HashSet<T>>;
    type Output = FrozenSortedSet<T>;

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

    fn finish(&self, acc: Self::Accum) -> FrozenSortedSet<T> {
        let mut items: Vec<T> = acc.into_inner().into_iter().collect();
        items.sort_by(|a, b| (self.comparator)(a, b));
        FrozenSortedSet::from_sorted_vec(items)
    }

    #[inline]
    fn characteristics(&self) -> Characteristics {
        Characteristics::CONCURRENT | Characteristics::UNORDERED
    }
}

impl<T, F> ConcurrentReducer<T> for SortedSetReducer<T, F>
where
    T: Eq + Hash + Send,
    F: Fn(&T, &T) -> Ordering,
{
    fn accumulate_shared(&self, acc: &Self::Accum, item: T) {
        acc.lock().insert(item);
    }
}

#[cfg(test)]
mod tests {
    use crate::{CollectWith, drive, reducers};

    #[test]
    fn output_is_ordered_by_the_comparator() {
        let sorted = [5, 3, 8, 1]
            .into_iter()
            .collect_with(reducers::to_sorted_set(i32::cmp));
        assert_eq!(sorted, [1, 3, 5, 8]);
    }

    #[test]
    fn reverse_comparator_reverses_the_order() {
        let sorted = [5, 3, 8, 1]
            .into_iter()
            .collect_with(reducers::to_sorted_set(|a: &i32, b: &i32| b.cmp(a)));
        assert_eq!(sorted, [8, 5, 3, 1]);
    }

    #[test]
    fn comparator_ties_do_not_drive_dedup() {
        // Ordered by the first field only; the second field still makes the
        // elements distinct by equality, so all three survive.
        let sorted = [(2, 'a'), (1, 'x'), (1, 'y'), (1, 'x')]
            .into_iter()
            .collect_with(reducers::to_sorted_set(|a: &(i32, char), b: &(i32, char)| {
                a.0.cmp(&b.0)
            }));

        assert_eq!(sorted.len(), 3);
        assert_eq!(sorted[2], (2, 'a'));
        assert!(sorted.contains(&(1, 'x')));
        assert!(sorted.contains(&(1, 'y')));
    }

    #[test]
    fn reducer_clones_over_non_clone_element_types() {
        #[derive(PartialEq, Eq, Hash)]
        struct Opaque(u8);

        let reducer = reducers::to_sorted_set(|a: &Opaque, b: &Opaque| a.0.cmp(&b.0));
        let cloned = reducer.clone();
        let sorted = drive::sequential([Opaque(2), Opaque(1)], &cloned);
        assert_eq!(sorted[0].0, 1);
    }
}
