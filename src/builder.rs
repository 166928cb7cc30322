use std::collections::HashSet;
use std::hash::Hash;

use crate::{FrozenList, FrozenSet};

/// The mutable builder injected into the generic collection reducer.
///
/// Mirrors the reduction protocol on the container side: `add` backs
/// `accumulate`, `add_all` backs `merge` (it receives the *built output* of
/// the other partition's builder), and `build` backs `finish`.
///
/// Thread safety is the builder's own business — the generic collection
/// reducer declares no characteristics, so an engine must not share one
/// builder across threads.
pub trait Builder: Send {
    type Item;
    type Output;

    /// Adds one element.
    fn add(&mut self, item: Self::Item);

    /// Adds every element of another builder's finished output.
    fn add_all(&mut self, built: Self::Output);

    /// Consumes the builder and produces the finished container.
    fn build(self) -> Self::Output;
}

/// A [`Builder`] producing a [`FrozenList`].
///
/// # Examples
///
/// ```
/// use frozen_collect::{CollectWith, reducers, ListBuilder};
///
/// let list = [1, 2, 3]
///     .into_iter()
///     .collect_with(reducers::to_collection(ListBuilder::new));
///
/// assert_eq!(list, [1, 2, 3]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ListBuilder<T> {
    items: Vec<T>,
}

impl<T> ListBuilder<T> {
    #[inline]
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Send> Builder for ListBuilder<T> {
    type Item = T;
    type Output = FrozenList<T>;

    #[inline]
    fn add(&mut self, item: T) {
        self.items.push(item);
    }

    fn add_all(&mut self, built: FrozenList<T>) {
        self.items.extend(built);
    }

    fn build(self) -> FrozenList<T> {
        FrozenList::from_vec(self.items)
    }
}

/// A [`Builder`] producing a [`FrozenSet`].
///
/// # Examples
///
/// ```
/// use frozen_collect::{CollectWith, reducers, SetBuilder};
///
/// let set = [1, 2, 2]
///     .into_iter()
///     .collect_with(reducers::to_collection(SetBuilder::new));
///
/// assert_eq!(set.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SetBuilder<T> {
    items: HashSet<T>,
}

impl<T> SetBuilder<T> {
    #[inline]
    pub fn new() -> Self {
        Self {
            items: HashSet::new(),
        }
    }
}

impl<T: Eq + Hash + Send> Builder for SetBuilder<T> {
    type Item = T;
    type Output = FrozenSet<T>;

    #[inline]
    fn add(&mut self, item: T) {
        self.items.insert(item);
    }

    fn add_all(&mut self, built: FrozenSet<T>) {
        self.items.extend(built);
    }

    fn build(self) -> FrozenSet<T> {
        FrozenSet::from_hash_set(self.items)
    }
}
