use std::collections::{HashMap, hash_map};
use std::fmt::{self, Debug};
use std::hash::Hash;

/// A mutable two-key table, the factory argument of the table reducers.
///
/// The `IntoIterator` supertrait drains the table into `(row, column,
/// value)` cells; it backs the default `put_all` and the freezing step of
/// the frozen-table reducers.
pub trait Table<R, C, V>: IntoIterator<Item = (R, C, V)> + Send + Sized {
    /// Records `value` at `(row, column)`, returning the previous value at
    /// that cell if there was one.
    fn put(&mut self, row: R, column: C, value: V) -> Option<V>;

    /// Moves every cell of `other` into `self`; `other`'s cells win
    /// collisions.
    fn put_all(&mut self, other: Self) {
        for (row, column, value) in other {
            self.put(row, column, value);
        }
    }
}

/// A hash-based [`Table`]: row → (column → value).
///
/// # Examples
///
/// ```
/// use frozen_collect::{HashTable, Table};
///
/// let mut table = HashTable::new();
/// table.put("r1", "c1", 1);
/// table.put("r1", "c2", 2);
///
/// assert_eq!(table.get(&"r1", &"c2"), Some(&2));
/// assert_eq!(table.len(), 2);
/// ```
#[derive(Clone, Default)]
pub struct HashTable<R, C, V> {
    rows: HashMap<R, HashMap<C, V>>,
}

impl<R, C, V> HashTable<R, C, V> {
    #[inline]
    pub fn new() -> Self {
        Self {
            rows: HashMap::new(),
        }
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.values().map(|columns| columns.len()).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over `(row, column, value)` cells.
    pub fn cells(&self) -> impl Iterator<Item = (&R, &C, &V)> {
        self.rows
            .iter()
            .flat_map(|(row, columns)| columns.iter().map(move |(column, value)| (row, column, value)))
    }
}

impl<R: Eq + Hash, C: Eq + Hash, V> HashTable<R, C, V> {
    #[inline]
    pub fn get(&self, row: &R, column: &C) -> Option<&V> {
        self.rows.get(row)?.get(column)
    }

    #[inline]
    pub fn contains(&self, row: &R, column: &C) -> bool {
        self.get(row, column).is_some()
    }

    /// The column → value mapping of one row, if present.
    #[inline]
    pub fn row(&self, row: &R) -> Option<&HashMap<C, V>> {
        self.rows.get(row)
    }
}

impl<R, C, V> Table<R, C, V> for HashTable<R, C, V>
where
    R: Eq + Hash + Clone + Send,
    C: Eq + Hash + Send,
    V: Send,
{
    fn put(&mut self, row: R, column: C, value: V) -> Option<V> {
        self.rows.entry(row).or_default().insert(column, value)
    }
}

/// Draining cell iterator for [`HashTable`].
pub struct IntoCells<R, C, V> {
    rows: hash_map::IntoIter<R, HashMap<C, V>>,
    current: Option<(R, hash_map::IntoIter<C, V>)>,
}

impl<R: Clone, C, V> Iterator for IntoCells<R, C, V> {
    type Item = (R, C, V);

    fn next(&mut self) -> Option<(R, C, V)> {
        loop {
            if let Some((row, columns)) = &mut self.current
                && let Some((column, value)) = columns.next()
            {
                return Some((row.clone(), column, value));
            }
            let (row, columns) = self.rows.next()?;
            self.current = Some((row, columns.into_iter()));
        }
    }
}

impl<R: Eq + Hash + Clone, C: Eq + Hash, V> IntoIterator for HashTable<R, C, V> {
    type Item = (R, C, V);
    type IntoIter = IntoCells<R, C, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoCells {
            rows: self.rows.into_iter(),
            current: None,
        }
    }
}

impl<R: Debug, C: Debug, V: Debug> Debug for HashTable<R, C, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.rows.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{HashTable, Table};

    #[test]
    fn put_overwrites_within_a_cell() {
        let mut table = HashTable::new();
        assert_eq!(table.put("r", "c", 1), None);
        assert_eq!(table.put("r", "c", 2), Some(1));
        assert_eq!(table.get(&"r", &"c"), Some(&2));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn put_all_moves_every_cell_and_wins_collisions() {
        let mut left = HashTable::new();
        left.put("r", "c", 1);
        left.put("r", "d", 10);

        let mut right = HashTable::new();
        right.put("r", "c", 2);
        right.put("s", "c", 3);

        left.put_all(right);
        assert_eq!(left.get(&"r", &"c"), Some(&2));
        assert_eq!(left.get(&"r", &"d"), Some(&10));
        assert_eq!(left.get(&"s", &"c"), Some(&3));
        assert_eq!(left.len(), 3);
    }

    #[test]
    fn emptiness_tracks_the_cell_count() {
        let mut table = HashTable::new();
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);

        table.put("r", "c", 1);
        assert!(!table.is_empty());
    }

    #[test]
    fn into_iter_drains_all_cells() {
        let mut table = HashTable::new();
        table.put(1, 'a', "x");
        table.put(1, 'b', "y");
        table.put(2, 'a', "z");

        let mut cells: Vec<_> = table.into_iter().collect();
        cells.sort();
        assert_eq!(cells, [(1, 'a', "x"), (1, 'b', "y"), (2, 'a', "z")]);
    }
}
