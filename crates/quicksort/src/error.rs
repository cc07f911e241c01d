use thiserror::Error;

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum SortError {
    #[error("unsupported pivot policy: {0:?}")]
    UnsupportedPivotPolicy(String),

    #[error("unknown partition scheme: {0:?}")]
    UnknownScheme(String),

    /// Only raised for non-empty ranges; `start > end` is always accepted.
    #[error("range [{start}, {end}] is out of bounds for a sequence of length {len}")]
    RangeOutOfBounds { start: usize, end: usize, len: usize },
}
