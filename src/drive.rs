//! Minimal drivers for the reduction protocol.
//!
//! The crate does not schedule work itself — reducers are passive bundles —
//! but any engine consumes them the same way, and these free functions are
//! that consumption spelled out: one sequential form, one
//! partition-and-merge form, and two thread-per-partition forms. They also
//! pin down the reference merge order the tests rely on (left fold in
//! partition order).

use std::panic;
use std::thread;

use crate::{ConcurrentReducer, Reducer};

/// Reduces `items` as a single sequential partition.
///
/// One seed, one accumulator, no merge — the shortcut every engine may take
/// for a non-partitioned input regardless of characteristics.
pub fn sequential<I, R>(items: I, reducer: &R) -> R::Output
where
    I: IntoIterator,
    R: Reducer<I::Item>,
{
    let mut acc = reducer.seed();
    reducer.accumulate_all(&mut acc, items);
    reducer.finish(acc)
}

/// Reduces each partition independently, then left-folds the partial
/// accumulators with `merge` in partition order and finishes the survivor.
///
/// An empty partition list finishes a fresh seed.
pub fn partitioned<P, R>(partitions: P, reducer: &R) -> R::Output
where
    P: IntoIterator,
    P::Item: IntoIterator,
    R: Reducer<<P::Item as IntoIterator>::Item>,
{
    let mut merged: Option<R::Accum> = None;
    for partition in partitions {
        let mut acc = reducer.seed();
        reducer.accumulate_all(&mut acc, partition);
        merged = Some(match merged {
            Some(left) => reducer.merge(left, acc),
            None => acc,
        });
    }
    reducer.finish(merged.unwrap_or_else(|| reducer.seed()))
}

/// Reduces each partition on its own thread with a private accumulator,
/// merges on the calling thread in partition order, and finishes.
///
/// The merge order equals [`partitioned`]'s, so for inputs without
/// duplicate derived keys the two agree; under duplicates the usual
/// merge-order caveat applies.
pub fn parallel<P, R>(partitions: P, reducer: &R) -> R::Output
where
    P: IntoIterator,
    P::Item: IntoIterator + Send,
    R: Reducer<<P::Item as IntoIterator>::Item> + Sync,
{
    let accs = thread::scope(|scope| {
        let handles: Vec<_> = partitions
            .into_iter()
            .map(|partition| {
                scope.spawn(move || {
                    let mut acc = reducer.seed();
                    reducer.accumulate_all(&mut acc, partition);
                    acc
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| match handle.join() {
                Ok(acc) => acc,
                Err(payload) => panic::resume_unwind(payload),
            })
            .collect::<Vec<_>>()
    });

    let mut merged: Option<R::Accum> = None;
    for acc in accs {
        merged = Some(match merged {
            Some(left) => reducer.merge(left, acc),
            None => acc,
        });
    }
    reducer.finish(merged.unwrap_or_else(|| reducer.seed()))
}

/// Feeds one shared accumulator from a thread per partition, then finishes.
///
/// Legal only for reducers declaring
/// [`CONCURRENT`](crate::Characteristics::CONCURRENT), which is what the
/// [`ConcurrentReducer`] bound enforces. No merge happens at all.
pub fn parallel_shared<P, R>(partitions: P, reducer: &R) -> R::Output
where
    P: IntoIterator,
    P::Item: IntoIterator + Send,
    R: ConcurrentReducer<<P::Item as IntoIterator>::Item> + Sync,
    R::Accum: Sync,
{
    let acc = reducer.seed();
    thread::scope(|scope| {
        for partition in partitions {
            let acc = &acc;
            scope.spawn(move || {
                for item in partition {
                    reducer.accumulate_shared(acc, item);
                }
            });
        }
    });
    reducer.finish(acc)
}

#[cfg(test)]
mod tests {
    use crate::reducers;

    use super::{parallel, parallel_shared, partitioned, sequential};

    #[test]
    fn partitioned_with_no_partitions_finishes_an_empty_seed() {
        let reducer = reducers::to_list::<i32>();
        let list = partitioned(Vec::<Vec<i32>>::new(), &reducer);
        assert!(list.is_empty());
    }

    #[test]
    fn partitioned_list_concatenates_in_partition_order() {
        let reducer = reducers::to_list();
        let list = partitioned([vec![1, 2], vec![], vec![3]], &reducer);
        assert_eq!(list, [1, 2, 3]);
    }

    #[test]
    fn parallel_agrees_with_sequential_on_collision_free_input() {
        let reducer = reducers::to_map(|n: &i32| *n, |n: &i32| n * n);
        let all: Vec<i32> = (0..100).collect();
        let expected = sequential(all.clone(), &reducer);

        let partitions: Vec<Vec<i32>> = all.chunks(17).map(|c| c.to_vec()).collect();
        assert_eq!(parallel(partitions, &reducer), expected);
    }

    #[test]
    fn parallel_shared_agrees_with_sequential_for_sets() {
        let reducer = reducers::to_set();
        let all: Vec<i32> = (0..1000).map(|n| n % 77).collect();
        let expected = sequential(all.clone(), &reducer);

        let partitions: Vec<Vec<i32>> = all.chunks(99).map(|c| c.to_vec()).collect();
        assert_eq!(parallel_shared(partitions, &reducer), expected);
    }

    #[test]
    fn parallel_shared_list_holds_every_element() {
        let reducer = reducers::to_list();
        let partitions: Vec<Vec<i32>> = (0..8).map(|p| (p * 100..p * 100 + 100).collect()).collect();

        let list = parallel_shared(partitions, &reducer);
        assert_eq!(list.len(), 800);

        // Interleaving across threads is arbitrary, so only membership is
        // checked here.
        let mut sorted: Vec<i32> = list.into_iter().collect();
        sorted.sort_unstable();
        let expected: Vec<i32> = (0..800).collect();
        assert_eq!(sorted, expected);
    }
}
