use crate::{Characteristics, drive};

/// A reduction descriptor: the seed/accumulate/merge/finish bundle a driving
/// engine uses to fold a sequence into a finished container.
///
/// The descriptor itself is stateless and engine-agnostic. All reduction
/// state lives in the [`Accum`](Reducer::Accum) instances the engine asks it
/// to create — one per partition — and ownership of the result transfers to
/// the caller only at [`finish`](Reducer::finish).
///
/// An engine must drive the bundle as follows:
///
/// 1. call [`seed`](Reducer::seed) once per partition;
/// 2. feed every element of that partition through
///    [`accumulate`](Reducer::accumulate);
/// 3. combine partial accumulators pairwise with [`merge`](Reducer::merge),
///    in any order and arity consistent with associativity;
/// 4. call [`finish`](Reducer::finish) exactly once on the survivor.
///
/// [`characteristics`](Reducer::characteristics) advertises which shortcuts
/// are legal (skipping merge when sequential, sharing one accumulator across
/// threads, ignoring encounter order).
///
/// # Examples
///
/// A reducer is ordinarily obtained from one of the factory functions in
/// [`reducers`](crate::reducers) and handed to a driver:
///
/// ```
/// use frozen_collect::{CollectWith, reducers};
///
/// let list = ["a", "b", "c"].into_iter().collect_with(reducers::to_list());
///
/// assert_eq!(list, ["a", "b", "c"]);
/// ```
pub trait Reducer<T> {
    /// Mutable intermediate state. Never escapes to the caller; the engine
    /// owns every instance until it is merged away or finished.
    type Accum: Send;

    /// The finished, structurally immutable result.
    type Output;

    /// Creates a fresh, independent accumulator.
    ///
    /// A parallel engine may call this many times concurrently, once per
    /// partition.
    fn seed(&self) -> Self::Accum;

    /// Folds one element into the accumulator.
    fn accumulate(&self, acc: &mut Self::Accum, item: T);

    /// Combines two partial accumulators built from disjoint partitions.
    ///
    /// Must be associative. Where the container shape is order-preserving
    /// (lists, list-valued multimaps), `right`'s elements follow `left`'s;
    /// for map-shaped accumulators, `right`'s entries win key collisions.
    fn merge(&self, left: Self::Accum, right: Self::Accum) -> Self::Accum;

    /// Consumes the accumulator and produces the final result.
    ///
    /// For identity-finish reducers this returns the accumulator itself;
    /// everything else moves the accumulated elements into a frozen
    /// container, so later mutation of engine state cannot be observed
    /// through the result.
    fn finish(&self, acc: Self::Accum) -> Self::Output;

    /// The execution hints this reducer advertises.
    #[inline]
    fn characteristics(&self) -> Characteristics {
        Characteristics::empty()
    }

    /// Folds every element of an iterator into the accumulator.
    ///
    /// Override for a more efficient bulk path; the default is a plain loop.
    fn accumulate_all(&self, acc: &mut Self::Accum, items: impl IntoIterator<Item = T>) {
        for item in items {
            self.accumulate(acc, item);
        }
    }
}

/// A [`Reducer`] whose accumulator additionally tolerates being fed from
/// multiple threads at once.
///
/// Implemented exactly by the reducers that declare
/// [`Characteristics::CONCURRENT`]; their accumulators carry internal
/// locking, so an engine may hand one shared accumulator to every worker and
/// skip the merge step altogether.
///
/// `merge` remains single-threaded: an engine never merges concurrently into
/// the same pair.
pub trait ConcurrentReducer<T>: Reducer<T>
where
    Self::Accum: Sync,
{
    /// Folds one element into a shared accumulator.
    ///
    /// Safe to call concurrently from any number of threads against the same
    /// accumulator instance.
    fn accumulate_shared(&self, acc: &Self::Accum, item: T);
}

/// Extension trait running a [`Reducer`] over an iterator as a single
/// sequential partition.
pub trait CollectWith: Iterator {
    /// Reduces this iterator with `reducer`: one seed, one accumulator, no
    /// merge, then finish.
    ///
    /// # Examples
    ///
    /// ```
    /// use frozen_collect::{CollectWith, reducers};
    ///
    /// let set = [1, 2, 2, 3].into_iter().collect_with(reducers::to_set());
    ///
    /// assert_eq!(set.len(), 3);
    /// ```
    #[inline]
    fn collect_with<R>(self, reducer: R) -> R::Output
    where
        R: Reducer<Self::Item>,
        Self: Sized,
    {
        drive::sequential(self, &reducer)
    }
}

impl<I: Iterator> CollectWith for I {}
