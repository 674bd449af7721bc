//! Partial-order support
//!
//! Lets `PartialOrd` element types (floats) go through the comparator-based
//! selectors. Self-incomparable elements such as NaN are rejected up front;
//! any other incomparable pair seen during selection is recorded and turned
//! into an error once selection finishes.

use std::cell::Cell;
use std::cmp::Ordering;

use entities_selection::{Result, SelectionError};

/// Reject the first element that cannot be compared with itself
pub(crate) fn check_comparable<T: PartialOrd>(items: &[T]) -> Result<()> {
    match items.iter().position(|x| x.partial_cmp(x).is_none()) {
        Some(index) => Err(SelectionError::Incomparable { index }),
        None => Ok(()),
    }
}

/// Position of `item` within `items`, by address
pub(crate) fn position_of<T>(items: &[T], item: &T) -> usize {
    items
        .iter()
        .position(|x| std::ptr::eq(x, item))
        .unwrap_or_default()
}

/// `partial_cmp` that remembers a failure instead of panicking
#[derive(Default)]
pub(crate) struct PartialComparator {
    failed_at: Cell<Option<usize>>,
}

impl PartialComparator {
    /// Compare `a` with `b`; `index` locates the offending element on failure
    pub(crate) fn compare<T, I>(&self, a: &T, b: &T, index: I) -> Ordering
    where
        T: PartialOrd,
        I: FnOnce() -> usize,
    {
        a.partial_cmp(b).unwrap_or_else(|| {
            if self.failed_at.get().is_none() {
                self.failed_at.set(Some(index()));
            }
            Ordering::Equal
        })
    }

    /// Turn a recorded failure into an error
    pub(crate) fn finish<R>(&self, value: R) -> Result<R> {
        match self.failed_at.get() {
            Some(index) => Err(SelectionError::Incomparable { index }),
            None => Ok(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_comparable_nan() {
        assert_eq!(
            check_comparable(&[1.0, 2.0, f64::NAN, 3.0]),
            Err(SelectionError::Incomparable { index: 2 })
        );
        assert!(check_comparable(&[1.0, f64::INFINITY]).is_ok());
    }

    #[test]
    fn test_position_of_by_address() {
        let items = [7, 7, 7];
        assert_eq!(position_of(&items, &items[2]), 2);
    }

    #[test]
    fn test_partial_comparator_records_first_failure() {
        let cmp = PartialComparator::default();
        assert_eq!(cmp.compare(&1.0, &2.0, || 0), Ordering::Less);
        assert_eq!(cmp.finish(7), Ok(7));
        assert_eq!(cmp.compare(&1.0, &f64::NAN, || 4), Ordering::Equal);
        assert_eq!(cmp.compare(&f64::NAN, &1.0, || 9), Ordering::Equal);
        assert_eq!(cmp.finish(()), Err(SelectionError::Incomparable { index: 4 }));
    }
}
