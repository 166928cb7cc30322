use std::iter::FusedIterator;

/// Lookahead state: either nothing has been pulled yet, an element is
/// buffered and ready, or the source is exhausted for good.
#[derive(Debug)]
enum Slot<T> {
    NotReady,
    Ready(T),
    Done,
}

/// A forward-only view over a source of `Option`s that skips every `None`.
///
/// The adapter owns its source exclusively and keeps a one-slot lookahead
/// buffer, so [`peek`](SkipAbsent::peek) can answer "is there a next
/// element" without consuming it. Once the source runs out the adapter is
/// terminally exhausted: no amount of further querying produces another
/// element (it implements [`FusedIterator`]).
///
/// Every non-`None` element of the source is produced exactly once, in its
/// original relative order.
///
/// # Examples
///
/// ```
/// use frozen_collect::SkipAbsent;
///
/// let mut present = SkipAbsent::new([None, Some(1), None, None, Some(2)].into_iter());
///
/// assert_eq!(present.peek(), Some(&1));
/// assert_eq!(present.next(), Some(1));
/// assert_eq!(present.next(), Some(2));
/// assert_eq!(present.next(), None);
/// assert_eq!(present.next(), None);
/// ```
#[derive(Debug)]
pub struct SkipAbsent<I, T> {
    source: I,
    slot: Slot<T>,
}

impl<I, T> SkipAbsent<I, T>
where
    I: Iterator<Item = Option<T>>,
{
    /// Wraps a raw iterator of optional elements.
    pub fn new(source: I) -> Self {
        Self {
            source,
            slot: Slot::NotReady,
        }
    }

    /// Wraps any iterable of optional elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use frozen_collect::SkipAbsent;
    ///
    /// let present: Vec<_> = SkipAbsent::from_iterable(vec![Some("a"), None, Some("b")]).collect();
    ///
    /// assert_eq!(present, ["a", "b"]);
    /// ```
    pub fn from_iterable<S>(source: S) -> Self
    where
        S: IntoIterator<Item = Option<T>, IntoIter = I>,
    {
        Self::new(source.into_iter())
    }

    /// References the next present element without consuming it, or `None`
    /// if the source is exhausted.
    ///
    /// This is the "has a next element" half of the iteration contract;
    /// it pulls from the source at most up to the next present element.
    pub fn peek(&mut self) -> Option<&T> {
        self.fill();
        match &self.slot {
            Slot::Ready(item) => Some(item),
            _ => None,
        }
    }

    /// Pulls from the source until the slot holds a present element or the
    /// source is exhausted. The `Done` state is sticky: once entered, the
    /// source is never pulled again.
    fn fill(&mut self) {
        if let Slot::NotReady = self.slot {
            self.slot = loop {
                match self.source.next() {
                    Some(Some(item)) => break Slot::Ready(item),
                    Some(None) => continue,
                    None => break Slot::Done,
                }
            };
        }
    }
}

impl<I, T> Iterator for SkipAbsent<I, T>
where
    I: Iterator<Item = Option<T>>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.fill();
        match std::mem::replace(&mut self.slot, Slot::NotReady) {
            Slot::Ready(item) => Some(item),
            done => {
                // Keep exhaustion sticky rather than re-arming the slot.
                self.slot = done;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let buffered = matches!(self.slot, Slot::Ready(_)) as usize;
        match self.slot {
            Slot::Done => (buffered, Some(buffered)),
            _ => (buffered, self.source.size_hint().1.map(|n| n + buffered)),
        }
    }
}

impl<I, T> FusedIterator for SkipAbsent<I, T> where I: Iterator<Item = Option<T>> {}

#[cfg(test)]
mod tests {
    use super::SkipAbsent;

    #[test]
    fn skips_every_absent_element_in_order() {
        let present: Vec<_> =
            SkipAbsent::from_iterable([None, Some(1), None, Some(2), Some(3), None]).collect();
        assert_eq!(present, [1, 2, 3]);
    }

    #[test]
    fn all_absent_yields_nothing() {
        let mut present = SkipAbsent::from_iterable(vec![None::<i32>; 5]);
        assert_eq!(present.peek(), None);
        assert_eq!(present.next(), None);
    }

    #[test]
    fn exhaustion_is_sticky() {
        let mut present = SkipAbsent::from_iterable([Some(1)]);
        assert_eq!(present.next(), Some(1));
        for _ in 0..3 {
            assert_eq!(present.next(), None);
            assert_eq!(present.peek(), None);
        }
    }

    #[test]
    fn peek_does_not_consume() {
        let mut present = SkipAbsent::from_iterable([None, Some("x"), Some("y")]);
        assert_eq!(present.peek(), Some(&"x"));
        assert_eq!(present.peek(), Some(&"x"));
        assert_eq!(present.next(), Some("x"));
        assert_eq!(present.next(), Some("y"));
    }

    #[test]
    fn terminal_state_stops_pulling_the_source() {
        // A source that panics if pulled after returning `None` once.
        struct Strict {
            remaining: Vec<Option<i32>>,
            exhausted: bool,
        }

        impl Iterator for Strict {
            type Item = Option<i32>;

            fn next(&mut self) -> Option<Option<i32>> {
                assert!(!self.exhausted, "source pulled after exhaustion");
                if self.remaining.is_empty() {
                    self.exhausted = true;
                    None
                } else {
                    Some(self.remaining.remove(0))
                }
            }
        }

        let mut present = SkipAbsent::new(Strict {
            remaining: vec![Some(7), None],
            exhausted: false,
        });

        assert_eq!(present.next(), Some(7));
        assert_eq!(present.next(), None);
        assert_eq!(present.next(), None);
        assert_eq!(present.peek(), None);
    }
}
