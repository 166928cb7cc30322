//! Reducers that fold a sequence — possibly split across threads — into a
//! finished, structurally immutable container, plus an iterator adapter
//! that skips absent elements.
//!
//! # Reducers
//!
//! A [`Reducer`] is a passive bundle of four operations — seed, accumulate,
//! merge, finish — plus a set of declared [`Characteristics`]. It does not
//! iterate, partition, or schedule anything itself; a driving engine does,
//! and the bundle tells it what is legal: whether one accumulator may be
//! shared across threads, whether encounter order matters, whether the
//! finishing step can be skipped.
//!
//! The factories in [`reducers`] cover the common container shapes:
//!
//! ```
//! use frozen_collect::{CollectWith, reducers};
//!
//! let words = ["a", "abcde", "abc", "abcdef", "ab"];
//!
//! let list = words.into_iter().collect_with(reducers::to_list());
//! assert_eq!(list, words);
//!
//! let by_word = words
//!     .into_iter()
//!     .collect_with(reducers::to_map(|w: &&str| *w, |w: &&str| w.len()));
//! assert_eq!(by_word.get(&"abc"), Some(&3));
//! ```
//!
//! The same descriptor drives a split reduction — partial accumulators
//! built independently and merged afterwards give the same answer:
//!
//! ```
//! use frozen_collect::{drive, reducers};
//!
//! let reducer = reducers::to_set();
//! let whole = drive::sequential(1..=6, &reducer);
//! let split = drive::partitioned([vec![1, 2, 3], vec![4, 5, 6]], &reducer);
//! assert_eq!(whole, split);
//! ```
//!
//! Every finished container in [`frozen`] is a defensive snapshot: the
//! mutable accumulator is consumed by `finish`, so no path back to it
//! exists once the result is handed over. The accumulators behind the
//! concurrent reducers are lock-protected, which is what lets an engine
//! feed one accumulator from many threads when
//! [`Characteristics::CONCURRENT`] is declared (see
//! [`ConcurrentReducer`]).
//!
//! One caveat travels with every map-shaped reducer: key collisions
//! resolve last-write-wins, and "last" is decided by the engine's merge
//! order. Inputs with duplicate derived keys therefore have
//! execution-dependent survivors; see the [`reducers`] module docs.
//!
//! # Skipping absent elements
//!
//! [`SkipAbsent`] wraps any iterator of `Option`s and yields only the
//! present values, with one-slot lookahead and sticky exhaustion:
//!
//! ```
//! use frozen_collect::SkipAbsent;
//!
//! let present: Vec<_> = SkipAbsent::from_iterable([Some(1), None, Some(2)]).collect();
//! assert_eq!(present, [1, 2]);
//! ```

mod builder;
mod characteristics;
pub mod drive;
mod error;
pub mod frozen;
mod multimap;
mod reducer;
pub mod reducers;
mod skip_absent;
mod table;

pub use builder::{Builder, ListBuilder, SetBuilder};
pub use characteristics::Characteristics;
pub use error::DuplicateValueError;
pub use frozen::{
    FrozenBiMap, FrozenList, FrozenListMultimap, FrozenMap, FrozenSet, FrozenSetMultimap,
    FrozenSortedMap, FrozenSortedSet, FrozenTable,
};
pub use multimap::{ListMultimap, Multimap, SetMultimap};
pub use reducer::{CollectWith, ConcurrentReducer, Reducer};
pub use skip_absent::SkipAbsent;
pub use table::{HashTable, IntoCells, Table};

#[cfg(test)]
mod tests {
    use crate::{CollectWith, SkipAbsent, reducers};

    #[test]
    fn adapter_and_reducer_compose() {
        let list = SkipAbsent::from_iterable([Some("a"), None, Some("b"), None])
            .collect_with(reducers::to_list());
        assert_eq!(list, ["a", "b"]);
    }
}
