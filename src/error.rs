use thiserror::Error;

/// Error returned by the bidirectional-map reducer's finish step when two
/// retained keys map to the same value.
///
/// Key collisions are resolved silently (last write wins), but a value
/// collision cannot be: a bidirectional map must be invertible, so the
/// violation is surfaced to the caller instead of being resolved by an
/// arbitrary tie-break.
///
/// The offending value and both keys are captured in their `Debug`
/// rendering, so the error stays non-generic and cheap to pass around.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("value {value} is bound to more than one key ({first_key} and {second_key})")]
pub struct DuplicateValueError {
    pub(crate) value: String,
    pub(crate) first_key: String,
    pub(crate) second_key: String,
}

impl DuplicateValueError {
    /// `Debug` rendering of the value that appeared under two keys.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// `Debug` renderings of the two colliding keys, in the order they were
    /// encountered while freezing.
    #[inline]
    pub fn keys(&self) -> (&str, &str) {
        (&self.first_key, &self.second_key)
    }
}
