use std::collections::{HashMap, hash_map};
use std::fmt::{self, Debug};
use std::hash::Hash;

/// An immutable two-key table, the result of the frozen-table reducers.
///
/// Cells are addressed by a `(row, column)` pair. Built by draining a live
/// [`Table`](crate::Table) accumulator at finish time.
///
/// # Examples
///
/// ```
/// use frozen_collect::{CollectWith, reducers, HashTable};
///
/// let table = ["ab", "cd", "efg"]
///     .into_iter()
///     .collect_with(reducers::to_frozen_table(
///         |s: &&str| s.len(),
///         |s: &&str| s.chars().next().unwrap(),
///         |s: &&str| *s,
///         HashTable::new,
///     ));
///
/// assert_eq!(table.get(&2, &'c'), Some(&"cd"));
/// assert_eq!(table.len(), 3);
/// ```
#[derive(Clone, Default)]
pub struct FrozenTable<R, C, V> {
    rows: HashMap<R, HashMap<C, V>>,
}

impl<R, C, V> FrozenTable<R, C, V>
where
    R: Eq + Hash,
    C: Eq + Hash,
{
    pub(crate) fn from_cells(cells: impl IntoIterator<Item = (R, C, V)>) -> Self {
        let mut rows: HashMap<R, HashMap<C, V>> = HashMap::new();
        for (row, column, value) in cells {
            rows.entry(row).or_default().insert(column, value);
        }
        Self { rows }
    }

    #[inline]
    pub fn get(&self, row: &R, column: &C) -> Option<&V> {
        self.rows.get(row)?.get(column)
    }

    #[inline]
    pub fn contains(&self, row: &R, column: &C) -> bool {
        self.get(row, column).is_some()
    }

    /// The column → value mapping of one row, if the row is present.
    #[inline]
    pub fn row(&self, row: &R) -> Option<&HashMap<C, V>> {
        self.rows.get(row)
    }
}

impl<R, C, V> FrozenTable<R, C, V> {
    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.values().map(|columns| columns.len()).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over `(row, columns)` groups.
    #[inline]
    pub fn rows(&self) -> hash_map::Iter<'_, R, HashMap<C, V>> {
        self.rows.iter()
    }

    /// Iterates over `(row, column, value)` cells.
    pub fn cells(&self) -> impl Iterator<Item = (&R, &C, &V)> {
        self.rows
            .iter()
            .flat_map(|(row, columns)| columns.iter().map(move |(column, value)| (row, column, value)))
    }
}

impl<R, C, V> PartialEq for FrozenTable<R, C, V>
where
    R: Eq + Hash,
    C: Eq + Hash,
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows
    }
}

impl<R, C, V> Eq for FrozenTable<R, C, V>
where
    R: Eq + Hash,
    C: Eq + Hash,
    V: Eq,
{
}

impl<R: Debug, C: Debug, V: Debug> Debug for FrozenTable<R, C, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.rows.iter()).finish()
    }
}
