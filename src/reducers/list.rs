use std::marker::PhantomData;

use parking_lot::Mutex;

use crate::{Characteristics, ConcurrentReducer, FrozenList, Reducer};

/// Creates a reducer that folds elements into a [`FrozenList`].
///
/// The accumulator is a lock-protected growable sequence, so the reducer
/// declares [`CONCURRENT`] — but not `UNORDERED`, since the result
/// preserves order. Within a partition the encounter order is kept exactly;
/// across partitions the overall order follows the engine's merge order.
///
/// # Examples
///
/// ```
/// use frozen_collect::{CollectWith, reducers};
///
/// let list = ["x", "y", "x"].into_iter().collect_with(reducers::to_list());
///
/// assert_eq!(list, ["x", "y", "x"]);
/// ```
///
/// [`CONCURRENT`]: Characteristics::CONCURRENT
pub fn to_list<T: Send>() -> ListReducer<T> {
    ListReducer {
        _marker: PhantomData,
    }
}

/// Reducer returned by [`to_list`].
#[derive(Debug, Default)]
pub struct ListReducer<T> {
    _marker: PhantomData<fn(T)>,
}

// No `T` is stored, so cloning must not require `T: Clone`.
impl<T> Clone for ListReducer<T> {
    fn clone(&self) -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T: Send> Reducer<T> for ListReducer<T> {
    type Accum = Mutex<Vec<T>>;
    type Output = FrozenList<T>;

    fn seed(&self) -> Self::Accum {
        Mutex::new(Vec::new())
    }

    fn accumulate(&self, acc: &mut Self::Accum, item: T) {
        acc.get_mut().push(item);
    }

    fn merge(&self, mut left: Self::Accum, right: Self::Accum) -> Self::Accum {
        left.get_mut().extend(right.into_inner());
        left
    }

    fn finish(&self, acc: Self::Accum) -> FrozenList<T> {
        FrozenList::from_vec(acc.into_inner())
    }

    #[inline]
    fn characteristics(&self) -> Characteristics {
        Characteristics::CONCURRENT
    }
}

impl<T: Send> ConcurrentReducer<T> for ListReducer<T> {
    fn accumulate_shared(&self, acc: &Self::Accum, item: T) {
        acc.lock().push(item);
    }
}

#[cfg(test)]
mod tests {
    use crate::{Characteristics, CollectWith, Reducer, drive, reducers};

    #[test]
    fn sequential_reduction_preserves_encounter_order() {
        let list = (0..50).collect_with(reducers::to_list());
        let expected: Vec<i32> = (0..50).collect();
        assert_eq!(list, expected);
    }

    #[test]
    fn merge_appends_right_after_left() {
        let reducer = reducers::to_list();
        let list = drive::partitioned([vec!["b"], vec!["a"]], &reducer);
        assert_eq!(list, ["b", "a"]);
    }

    #[test]
    fn declares_concurrent_but_not_unordered() {
        let flags = reducers::to_list::<i32>().characteristics();
        assert_eq!(flags, Characteristics::CONCURRENT);
    }

    #[test]
    fn reducer_clones_over_non_clone_element_types() {
        struct Opaque;

        let reducer = reducers::to_list::<Opaque>();
        let cloned = reducer.clone();
        let list = drive::sequential([Opaque, Opaque], &cloned);
        assert_eq!(list.len(), 2);
    }
}
