use crate::{Builder, Reducer};

/// Creates a reducer that folds elements into whatever container the
/// injected [`Builder`] family produces.
///
/// `accumulate` delegates to [`Builder::add`], `merge` to
/// [`Builder::add_all`] (fed the right side's built output), and `finish`
/// to [`Builder::build`].
///
/// Declares no characteristics: the builder decides its own thread-safety
/// story, so the descriptor must not promise concurrency on its behalf.
///
/// # Examples
///
/// ```
/// use frozen_collect::{CollectWith, reducers, SetBuilder};
///
/// let set = ["a", "b", "a"]
///     .into_iter()
///     .collect_with(reducers::to_collection(SetBuilder::new));
///
/// assert_eq!(set.len(), 2);
/// ```
pub fn to_collection<F, B>(builder_factory: F) -> CollectionReducer<F>
where
    F: Fn() -> B,
    B: Builder,
{
    CollectionReducer { builder_factory }
}

/// Reducer returned by [`to_collection`].
#[derive(Debug, Clone)]
pub struct CollectionReducer<F> {
    builder_factory: F,
}

impl<F, B> Reducer<B::Item> for CollectionReducer<F>
where
    F: Fn() -> B,
    B: Builder,
{
    type Accum = B;
    type Output = B::Output;

    fn seed(&self) -> B {
        (self.builder_factory)()
    }

    fn accumulate(&self, acc: &mut B, item: B::Item) {
        acc.add(item);
    }

    fn merge(&self, mut left: B, right: B) -> B {
        left.add_all(right.build());
        left
    }

    fn finish(&self, acc: B) -> B::Output {
        acc.build()
    }
}

#[cfg(test)]
mod tests {
    use crate::{ListBuilder, drive, reducers};

    #[test]
    fn merge_feeds_the_right_builders_output_into_the_left() {
        let reducer = reducers::to_collection(ListBuilder::new);
        let list = drive::partitioned([vec![1, 2], vec![3, 4]], &reducer);
        assert_eq!(list, [1, 2, 3, 4]);
    }
}
