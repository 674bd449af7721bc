//! Selection Ranges
//!
//! A half-open `[from, to)` index range validated against an input length.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SelectionError};

/// Half-open index range over a sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawRange", into = "RawRange")]
pub struct SelectionRange {
    from: usize,
    to: usize,
}

/// Unvalidated wire form of [`SelectionRange`]
#[derive(Serialize, Deserialize)]
struct RawRange {
    from: usize,
    to: usize,
}

impl TryFrom<RawRange> for SelectionRange {
    type Error = SelectionError;

    fn try_from(raw: RawRange) -> Result<Self> {
        SelectionRange::new(raw.from, raw.to)
    }
}

impl From<SelectionRange> for RawRange {
    fn from(range: SelectionRange) -> Self {
        RawRange {
            from: range.from,
            to: range.to,
        }
    }
}

impl SelectionRange {
    /// Create a range, checking only that it is not inverted
    ///
    /// # Arguments
    /// * `from` - Start index (inclusive)
    /// * `to` - End index (exclusive)
    ///
    /// # Returns
    /// * `Ok(range)` - If `from <= to`
    /// * `Err(SelectionError::InvertedRange)` - If the range is inverted
    pub fn new(from: usize, to: usize) -> Result<Self> {
        if from > to {
            return Err(SelectionError::InvertedRange { from, to });
        }
        Ok(Self { from, to })
    }

    /// The range covering a whole sequence of length `len`
    pub fn full(len: usize) -> Self {
        Self { from: 0, to: len }
    }

    /// Validate `[from, to)` against a sequence length
    ///
    /// # Arguments
    /// * `from` - Start index (inclusive)
    /// * `to` - End index (exclusive)
    /// * `len` - Length of the sequence the range indexes into
    ///
    /// # Returns
    /// * `Ok(range)` - If `from <= to <= len`
    /// * `Err(SelectionError::InvalidRange)` - Otherwise
    ///
    /// # Examples
    /// ```
    /// use entities_selection::SelectionRange;
    ///
    /// assert!(SelectionRange::checked(1, 3, 5).is_ok());
    /// assert!(SelectionRange::checked(3, 1, 5).is_err());
    /// assert!(SelectionRange::checked(0, 6, 5).is_err());
    /// ```
    pub fn checked(from: usize, to: usize, len: usize) -> Result<Self> {
        if from > to || to > len {
            return Err(SelectionError::InvalidRange { from, to, len });
        }
        Ok(Self { from, to })
    }

    /// Re-validate this range against a sequence length
    pub fn check_len(self, len: usize) -> Result<Self> {
        Self::checked(self.from, self.to, len)
    }

    pub fn from(&self) -> usize {
        self.from
    }

    pub fn to(&self) -> usize {
        self.to
    }

    /// Number of indices covered by the range
    pub fn len(&self) -> usize {
        self.to - self.from
    }

    pub fn is_empty(&self) -> bool {
        self.from == self.to
    }

    /// Borrow the covered sub-slice of `items`
    ///
    /// Callers must have validated the range against `items.len()`.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.from..self.to]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_valid() {
        let range = SelectionRange::checked(2, 5, 8).unwrap();
        assert_eq!(range.from(), 2);
        assert_eq!(range.to(), 5);
        assert_eq!(range.len(), 3);
        assert!(!range.is_empty());
    }

    #[test]
    fn test_checked_inverted() {
        let err = SelectionRange::checked(5, 2, 8).unwrap_err();
        assert_eq!(err, SelectionError::InvalidRange { from: 5, to: 2, len: 8 });
    }

    #[test]
    fn test_checked_out_of_bounds() {
        assert!(SelectionRange::checked(0, 9, 8).is_err());
        assert!(SelectionRange::checked(8, 8, 8).unwrap().is_empty());
    }

    #[test]
    fn test_new_then_check_len() {
        let range = SelectionRange::new(1, 4).unwrap();
        assert!(range.check_len(4).is_ok());
        assert!(range.check_len(3).is_err());
        assert_eq!(
            SelectionRange::new(4, 1),
            Err(SelectionError::InvertedRange { from: 4, to: 1 })
        );
    }

    #[test]
    fn test_slice() {
        let items = [10, 20, 30, 40];
        let range = SelectionRange::checked(1, 3, items.len()).unwrap();
        assert_eq!(range.slice(&items), &[20, 30]);
        assert_eq!(SelectionRange::full(items.len()).slice(&items), &items);
    }

    #[test]
    fn test_deserialize_rejects_inverted() {
        let ok: SelectionRange = serde_json::from_str(r#"{"from": 1, "to": 3}"#).unwrap();
        assert_eq!(ok.len(), 2);
        let err = serde_json::from_str::<SelectionRange>(r#"{"from": 3, "to": 1}"#).unwrap_err();
        assert!(err.to_string().contains("inverted range [3, 1)"));
    }
}
