use std::hash::Hash;

use crate::{Characteristics, FrozenTable, Reducer, Table};

/// Creates a reducer that folds elements into whatever [`Table`] the given
/// factory produces, returned live rather than frozen.
///
/// This is the three-extractor signature: row key, column key, and value
/// are each derived from the element independently. For the variant that
/// derives the value from the already-derived keys, see
/// [`to_table_from_keys`] — the two signatures are not interchangeable.
///
/// Inserting at an occupied `(row, column)` cell overwrites within an
/// accumulator, and the right accumulator wins on merge. `finish` is the
/// identity ([`IDENTITY_FINISH`] declared); no concurrency is promised —
/// the factory's table is plain mutable state, one accumulator per
/// partition.
///
/// # Examples
///
/// ```
/// use frozen_collect::{CollectWith, reducers, HashTable};
///
/// let table = [("r1", "c1", 7)]
///     .into_iter()
///     .collect_with(reducers::to_table(
///         |&(r, _, _): &(&str, &str, i32)| r,
///         |&(_, c, _)| c,
///         |&(_, _, v)| v,
///         HashTable::new,
///     ));
///
/// assert_eq!(table.get(&"r1", &"c1"), Some(&7));
/// ```
///
/// [`IDENTITY_FINISH`]: Characteristics::IDENTITY_FINISH
pub fn to_table<T, R, C, V, B, RF, CF, VF, BF>(
    row_fn: RF,
    column_fn: CF,
    value_fn: VF,
    table_factory: BF,
) -> TableReducer<RF, CF, VF, BF>
where
    RF: Fn(&T) -> R,
    CF: Fn(&T) -> C,
    VF: Fn(&T) -> V,
    BF: Fn() -> B,
    B: Table<R, C, V>,
{
    TableReducer {
        row_fn,
        column_fn,
        value_fn,
        table_factory,
    }
}

/// Reducer returned by [`to_table`].
#[derive(Clone)]
pub struct TableReducer<RF, CF, VF, BF> {
    row_fn: RF,
    column_fn: CF,
    value_fn: VF,
    table_factory: BF,
}

impl<T, R, C, V, B, RF, CF, VF, BF> Reducer<T> for TableReducer<RF, CF, VF, BF>
where
    RF: Fn(&T) -> R,
    CF: Fn(&T) -> C,
    VF: Fn(&T) -> V,
    BF: Fn() -> B,
    B: Table<R, C, V>,
{
    type Accum = B;
    type Output = B;

    fn seed(&self) -> B {
        (self.table_factory)()
    }

    fn accumulate(&self, acc: &mut B, item: T) {
        let row = (self.row_fn)(&item);
        let column = (self.column_fn)(&item);
        let value = (self.value_fn)(&item);
        acc.put(row, column, value);
    }

    fn merge(&self, mut left: B, right: B) -> B {
        left.put_all(right);
        left
    }

    fn finish(&self, acc: B) -> B {
        acc
    }

    #[inline]
    fn characteristics(&self) -> Characteristics {
        Characteristics::IDENTITY_FINISH
    }
}

/// Creates a live-table reducer whose value is derived from the
/// already-derived row and column keys rather than from the element.
///
/// The second of the two table signatures; see [`to_table`] for the
/// element-derived one.
///
/// # Examples
///
/// ```
/// use frozen_collect::{CollectWith, reducers, HashTable};
///
/// let table = ["ab", "xyz"]
///     .into_iter()
///     .collect_with(reducers::to_table_from_keys(
///         |s: &&str| s.len(),
///         |s: &&str| s.chars().next().unwrap(),
///         |row: &usize, column: &char| format!("{column}{row}"),
///         HashTable::new,
///     ));
///
/// assert_eq!(table.get(&2, &'a'), Some(&"a2".to_string()));
/// ```
pub fn to_table_from_keys<T, R, C, V, B, RF, CF, VF, BF>(
    row_fn: RF,
    column_fn: CF,
    value_of: VF,
    table_factory: BF,
) -> TableFromKeysReducer<RF, CF, VF, BF>
where
    RF: Fn(&T) -> R,
    CF: Fn(&T) -> C,
    VF: Fn(&R, &C) -> V,
    BF: Fn() -> B,
    B: Table<R, C, V>,
{
    TableFromKeysReducer {
        row_fn,
        column_fn,
        value_of,
        table_factory,
    }
}

/// Reducer returned by [`to_table_from_keys`].
#[derive(Clone)]
pub struct TableFromKeysReducer<RF, CF, VF, BF> {
    row_fn: RF,
    column_fn: CF,
    value_of: VF,
    table_factory: BF,
}

impl<T, R, C, V, B, RF, CF, VF, BF> Reducer<T> for TableFromKeysReducer<RF, CF, VF, BF>
where
    RF: Fn(&T) -> R,
    CF: Fn(&T) -> C,
    VF: Fn(&R, &C) -> V,
    BF: Fn() -> B,
    B: Table<R, C, V>,
{
    type Accum = B;
    type Output = B;

    fn seed(&self) -> B {
        (self.table_factory)()
    }

    fn accumulate(&self, acc: &mut B, item: T) {
        let row = (self.row_fn)(&item);
        let column = (self.column_fn)(&item);
        let value = (self.value_of)(&row, &column);
        acc.put(row, column, value);
    }

    fn merge(&self, mut left: B, right: B) -> B {
        left.put_all(right);
        left
    }

    fn finish(&self, acc: B) -> B {
        acc
    }

    #[inline]
    fn characteristics(&self) -> Characteristics {
        Characteristics::IDENTITY_FINISH
    }
}

/// Like [`to_table`], but `finish` drains the accumulated table into an
/// immutable [`FrozenTable`] instead of handing the live table back.
///
/// Declares no characteristics.
///
/// # Examples
///
/// ```
/// use frozen_collect::{CollectWith, reducers, HashTable};
///
/// let table = [("r", "c", 1), ("r", "c", 2)]
///     .into_iter()
///     .collect_with(reducers::to_frozen_table(
///         |&(r, _, _): &(&str, &str, i32)| r,
///         |&(_, c, _)| c,
///         |&(_, _, v)| v,
///         HashTable::new,
///     ));
///
/// // Second write at the occupied cell won.
/// assert_eq!(table.get(&"r", &"c"), Some(&2));
/// ```
pub fn to_frozen_table<T, R, C, V, B, RF, CF, VF, BF>(
    row_fn: RF,
    column_fn: CF,
    value_fn: VF,
    table_factory: BF,
) -> FrozenTableReducer<RF, CF, VF, BF>
where
    RF: Fn(&T) -> R,
    CF: Fn(&T) -> C,
    VF: Fn(&T) -> V,
    BF: Fn() -> B,
    B: Table<R, C, V>,
    R: Eq + Hash,
    C: Eq + Hash,
{
    FrozenTableReducer {
        inner: to_table(row_fn, column_fn, value_fn, table_factory),
    }
}

/// Reducer returned by [`to_frozen_table`].
#[derive(Clone)]
pub struct FrozenTableReducer<RF, CF, VF, BF> {
    inner: TableReducer<RF, CF, VF, BF>,
}

impl<T, R, C, V, B, RF, CF, VF, BF> Reducer<T> for FrozenTableReducer<RF, CF, VF, BF>
where
    RF: Fn(&T) -> R,
    CF: Fn(&T) -> C,
    VF: Fn(&T) -> V,
    BF: Fn() -> B,
    B: Table<R, C, V>,
    R: Eq + Hash,
    C: Eq + Hash,
{
    type Accum = B;
    type Output = FrozenTable<R, C, V>;

    fn seed(&self) -> B {
        self.inner.seed()
    }

    fn accumulate(&self, acc: &mut B, item: T) {
        self.inner.accumulate(acc, item);
    }

    fn merge(&self, left: B, right: B) -> B {
        self.inner.merge(left, right)
    }

    fn finish(&self, acc: B) -> FrozenTable<R, C, V> {
        FrozenTable::from_cells(acc)
    }
}

/// Like [`to_table_from_keys`], but `finish` drains the accumulated table
/// into an immutable [`FrozenTable`].
///
/// Declares no characteristics.
pub fn to_frozen_table_from_keys<T, R, C, V, B, RF, CF, VF, BF>(
    row_fn: RF,
    column_fn: CF,
    value_of: VF,
    table_factory: BF,
) -> FrozenTableFromKeysReducer<RF, CF, VF, BF>
where
    RF: Fn(&T) -> R,
    CF: Fn(&T) -> C,
    VF: Fn(&R, &C) -> V,
    BF: Fn() -> B,
    B: Table<R, C, V>,
    R: Eq + Hash,
    C: Eq + Hash,
{
    FrozenTableFromKeysReducer {
        inner: to_table_from_keys(row_fn, column_fn, value_of, table_factory),
    }
}

/// Reducer returned by [`to_frozen_table_from_keys`].
#[derive(Clone)]
pub struct FrozenTableFromKeysReducer<RF, CF, VF, BF> {
    inner: TableFromKeysReducer<RF, CF, VF, BF>,
}

impl<T, R, C, V, B, RF, CF, VF, BF> Reducer<T> for FrozenTableFromKeysReducer<RF, CF, VF, BF>
where
    RF: Fn(&T) -> R,
    CF: Fn(&T) -> C,
    VF: Fn(&R, &C) -> V,
    BF: Fn() -> B,
    B: Table<R, C, V>,
    R: Eq + Hash,
    C: Eq + Hash,
{
    type Accum = B;
    type Output = FrozenTable<R, C, V>;

    fn seed(&self) -> B {
        self.inner.seed()
    }

    fn accumulate(&self, acc: &mut B, item: T) {
        self.inner.accumulate(acc, item);
    }

    fn merge(&self, left: B, right: B) -> B {
        self.inner.merge(left, right)
    }

    fn finish(&self, acc: B) -> FrozenTable<R, C, V> {
        FrozenTable::from_cells(acc)
    }
}

#[cfg(test)]
mod tests {
    use crate::{CollectWith, HashTable, drive, reducers};

    #[test]
    fn right_accumulator_wins_cell_collisions_on_merge() {
        let reducer = reducers::to_table(
            |&(r, _, _): &(&str, &str, i32)| r,
            |&(_, c, _)| c,
            |&(_, _, v)| v,
            HashTable::new,
        );

        let table = drive::partitioned(
            [vec![("r", "c", 1), ("r", "d", 9)], vec![("r", "c", 2)]],
            &reducer,
        );
        assert_eq!(table.get(&"r", &"c"), Some(&2));
        assert_eq!(table.get(&"r", &"d"), Some(&9));
    }

    #[test]
    fn from_keys_signature_derives_the_value_from_both_keys() {
        let table = [10, 25]
            .into_iter()
            .collect_with(reducers::to_table_from_keys(
                |n: &i32| n / 10,
                |n: &i32| n % 10,
                |row: &i32, column: &i32| row * 100 + column,
                HashTable::new,
            ));

        assert_eq!(table.get(&1, &0), Some(&100));
        assert_eq!(table.get(&2, &5), Some(&205));
    }

    #[test]
    fn frozen_variant_snapshots_the_cells() {
        let frozen = [("a", 1, "x"), ("b", 2, "y")]
            .into_iter()
            .collect_with(reducers::to_frozen_table(
                |&(r, _, _): &(&str, i32, &str)| r,
                |&(_, c, _)| c,
                |&(_, _, v)| v,
                HashTable::new,
            ));

        assert_eq!(frozen.len(), 2);
        assert_eq!(frozen.get(&"b", &2), Some(&"y"));
        assert!(frozen.row(&"c").is_none());
        assert!(!frozen.is_empty());
    }

    #[test]
    fn frozen_table_from_no_elements_is_empty() {
        let frozen = std::iter::empty::<(&str, i32, &str)>().collect_with(
            reducers::to_frozen_table(
                |&(r, _, _): &(&str, i32, &str)| r,
                |&(_, c, _)| c,
                |&(_, _, v)| v,
                HashTable::new,
            ),
        );

        assert!(frozen.is_empty());
        assert_eq!(frozen.len(), 0);
    }
}
