//! Structurally immutable result containers.
//!
//! Every type here is the public, frozen half of a reduction: it is built by
//! consuming a mutable accumulator (or a [`Builder`]) and exposes no
//! mutating API afterwards. The mutable half never escapes the reduction.
//!
//! [`Builder`]: crate::Builder

mod bimap;
mod list;
mod map;
mod multimap;
mod set;
mod sorted_map;
mod sorted_set;
mod table;

pub use bimap::FrozenBiMap;
pub use list::FrozenList;
pub use map::FrozenMap;
pub use multimap::{FrozenListMultimap, FrozenSetMultimap};
pub use set::FrozenSet;
pub use sorted_map::FrozenSortedMap;
pub use sorted_set::FrozenSortedSet;
pub use table::FrozenTable;
