//! Error types for selection operations.

use thiserror::Error;

/// Errors that can occur while selecting, ranking or aggregating elements.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// An argument is outside its allowed domain (e.g. `k == 0`, empty input).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The requested `[from, to)` range is inverted or exceeds the input.
    #[error("invalid range [{from}, {to}) for input of length {len}")]
    InvalidRange { from: usize, to: usize, len: usize },

    /// A range was built with `from > to`, before any input length is known.
    #[error("inverted range [{from}, {to})")]
    InvertedRange { from: usize, to: usize },

    /// Two elements could not be ordered (e.g. a NaN under `PartialOrd`).
    #[error("element at index {index} is not comparable")]
    Incomparable { index: usize },
}

impl SelectionError {
    /// Shorthand for [`SelectionError::InvalidArgument`].
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        SelectionError::InvalidArgument(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, SelectionError>;
