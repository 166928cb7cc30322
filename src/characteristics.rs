use std::fmt::{self, Debug};
use std::ops::BitOr;

/// Execution hints a [`Reducer`] advertises to the engine driving it.
///
/// A driving engine is free to pick any execution strategy consistent with
/// the declared flags: it may skip the merge step entirely when running a
/// single sequential partition, feed one shared accumulator from many
/// threads when [`CONCURRENT`] is declared, or drop encounter-order
/// bookkeeping when [`UNORDERED`] is declared.
///
/// # Examples
///
/// ```
/// use frozen_collect::Characteristics;
///
/// let flags = Characteristics::CONCURRENT | Characteristics::UNORDERED;
///
/// assert!(flags.contains(Characteristics::CONCURRENT));
/// assert!(!flags.contains(Characteristics::IDENTITY_FINISH));
/// ```
///
/// [`Reducer`]: crate::Reducer
/// [`CONCURRENT`]: Characteristics::CONCURRENT
/// [`UNORDERED`]: Characteristics::UNORDERED
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Characteristics(u8);

impl Characteristics {
    /// The reducer's accumulator tolerates `accumulate_shared` calls from
    /// multiple threads against the same instance.
    ///
    /// See [`ConcurrentReducer`](crate::ConcurrentReducer).
    pub const CONCURRENT: Self = Self(1);

    /// The result does not depend on the encounter order of the input.
    pub const UNORDERED: Self = Self(1 << 1);

    /// `finish` is the identity: the accumulator already is the result.
    pub const IDENTITY_FINISH: Self = Self(1 << 2);

    /// No flags set.
    #[inline]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Whether every flag in `other` is also set in `self`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// The union of both flag sets.
    #[inline]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    pub const fn is_concurrent(self) -> bool {
        self.contains(Self::CONCURRENT)
    }

    #[inline]
    pub const fn is_unordered(self) -> bool {
        self.contains(Self::UNORDERED)
    }

    #[inline]
    pub const fn is_identity_finish(self) -> bool {
        self.contains(Self::IDENTITY_FINISH)
    }
}

impl BitOr for Characteristics {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl Debug for Characteristics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut set = f.debug_set();
        if self.is_concurrent() {
            set.entry(&"CONCURRENT");
        }
        if self.is_unordered() {
            set.entry(&"UNORDERED");
        }
        if self.is_identity_finish() {
            set.entry(&"IDENTITY_FINISH");
        }
        set.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::Characteristics;

    #[test]
    fn union_and_contains() {
        let flags = Characteristics::CONCURRENT | Characteristics::UNORDERED;

        assert!(flags.is_concurrent());
        assert!(flags.is_unordered());
        assert!(!flags.is_identity_finish());
        assert!(flags.contains(Characteristics::empty()));
        assert!(!Characteristics::empty().contains(flags));
    }

    #[test]
    fn debug_lists_flag_names() {
        let flags = Characteristics::CONCURRENT | Characteristics::IDENTITY_FINISH;
        assert_eq!(format!("{flags:?}"), r#"{"CONCURRENT", "IDENTITY_FINISH"}"#);
    }
}
