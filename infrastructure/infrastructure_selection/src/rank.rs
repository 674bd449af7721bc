//! Rank Selection
//!
//! k-th largest and median without sorting the whole input.
//!
//! `kth_largest(items, k)` is the element at 1-based position `k` of the
//! input sorted descending. When `k` is in the upper half it is the minimum
//! of a bounded min-heap holding the `k` greatest elements; otherwise it is
//! the maximum of a bounded max-heap holding the `len - k + 1` smallest.
//!
//! The median is `kth_largest(items, len / 2 + 1)`. For an even length that
//! is the lower of the two middle elements, never their average:
//! `median([a, b]) == min(a, b)`.

use std::cmp::Ordering;

use entities_selection::{Result, SelectionError, SelectionRange};
use tracing::debug;

use crate::heap::BoundedHeap;
use crate::partial::{check_comparable, position_of, PartialComparator};

/// k-th largest and median selection
pub struct RankSelector;

impl RankSelector {
    /// Get the k-th largest element under natural ordering
    ///
    /// # Arguments
    /// * `items` - Input slice
    /// * `k` - 1-based descending rank
    ///
    /// # Returns
    /// * `Ok(element)` - If `1 <= k <= items.len()`
    /// * `Err(SelectionError::InvalidArgument)` - Otherwise
    ///
    /// # Examples
    /// ```
    /// use infrastructure_selection::RankSelector;
    ///
    /// assert_eq!(RankSelector::kth_largest(&[5, 3, 8, 1, 9], 2), Ok(8));
    /// assert!(RankSelector::kth_largest(&[5, 3], 3).is_err());
    /// ```
    pub fn kth_largest<T: Ord + Clone>(items: &[T], k: usize) -> Result<T> {
        Self::kth_largest_by(items, k, T::cmp)
    }

    /// Get the k-th largest element under a comparator
    pub fn kth_largest_by<T, F>(items: &[T], k: usize, cmp: F) -> Result<T>
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        kth_largest_ref(items, k, cmp).cloned()
    }

    /// Get the k-th largest element of `items[from..to]`
    pub fn kth_largest_in_range<T: Ord + Clone>(
        items: &[T],
        from: usize,
        to: usize,
        k: usize,
    ) -> Result<T> {
        let range = SelectionRange::checked(from, to, items.len())?;
        Self::kth_largest(range.slice(items), k)
    }

    /// Get the k-th largest element of a partially ordered slice
    ///
    /// # Returns
    /// * `Err(SelectionError::Incomparable)` - On NaN or another unordered pair
    pub fn kth_largest_partial<T: PartialOrd + Clone>(items: &[T], k: usize) -> Result<T> {
        check_comparable(items)?;
        let partial = PartialComparator::default();
        let kth = kth_largest_ref(items, k, |a, b| {
            partial.compare(a, b, || position_of(items, a).max(position_of(items, b)))
        })?
        .clone();
        partial.finish(kth)
    }

    /// Get the median under natural ordering
    ///
    /// # Returns
    /// * `Ok(element)` - The element of descending rank `len / 2 + 1`
    /// * `Err(SelectionError::InvalidArgument)` - If `items` is empty
    ///
    /// # Examples
    /// ```
    /// use infrastructure_selection::RankSelector;
    ///
    /// assert_eq!(RankSelector::median(&[7, 2]), Ok(2));
    /// assert_eq!(RankSelector::median(&[4, 1, 3, 2]), Ok(2));
    /// assert_eq!(RankSelector::median(&[9, 1, 5]), Ok(5));
    /// ```
    pub fn median<T: Ord + Clone>(items: &[T]) -> Result<T> {
        Self::median_by(items, T::cmp)
    }

    /// Get the median under a comparator
    pub fn median_by<T, F>(items: &[T], cmp: F) -> Result<T>
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        median_ref(items, cmp).cloned()
    }

    /// Get the median of `items[from..to]`
    pub fn median_in_range<T: Ord + Clone>(items: &[T], from: usize, to: usize) -> Result<T> {
        let range = SelectionRange::checked(from, to, items.len())?;
        Self::median(range.slice(items))
    }

    /// Get the median of a partially ordered slice
    pub fn median_partial<T: PartialOrd + Clone>(items: &[T]) -> Result<T> {
        check_comparable(items)?;
        let partial = PartialComparator::default();
        let median = median_ref(items, |a, b| {
            partial.compare(a, b, || position_of(items, a).max(position_of(items, b)))
        })?
        .clone();
        partial.finish(median)
    }

    /// Median of exactly three values by direct comparison
    pub fn median_of_three<'a, T, F>(a: &'a T, b: &'a T, c: &'a T, mut cmp: F) -> &'a T
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let ab = cmp(a, b);
        if ab == Ordering::Greater {
            // b < a
            if cmp(b, c) != Ordering::Less {
                b
            } else if cmp(a, c) == Ordering::Greater {
                c
            } else {
                a
            }
        } else if cmp(a, c) != Ordering::Less {
            a
        } else if cmp(b, c) == Ordering::Greater {
            c
        } else {
            b
        }
    }
}

fn kth_largest_ref<T, F>(items: &[T], k: usize, mut cmp: F) -> Result<&T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = items.len();
    if k == 0 || k > len {
        return Err(SelectionError::invalid_argument(format!(
            "k = {k} is out of range 1..={len}"
        )));
    }

    let kth = if k <= len - k + 1 {
        debug!(k, len, "k-th largest via min-heap of the top k");
        let mut heap = BoundedHeap::with_comparator(k, |a: &&T, b: &&T| cmp(*a, *b));
        for item in items {
            heap.offer(item);
        }
        heap.peek().copied()
    } else {
        let keep = len - k + 1;
        debug!(k, len, keep, "k-th largest via max-heap of the bottom len - k + 1");
        let mut heap = BoundedHeap::with_comparator(keep, |a: &&T, b: &&T| cmp(*b, *a));
        for item in items {
            heap.offer(item);
        }
        heap.peek().copied()
    };
    kth.ok_or_else(|| SelectionError::invalid_argument("selection heap is empty"))
}

fn median_ref<T, F>(items: &[T], mut cmp: F) -> Result<&T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    match items {
        [] => Err(SelectionError::invalid_argument("median of an empty input")),
        [only] => Ok(only),
        [a, b] => Ok(if cmp(a, b) == Ordering::Greater { b } else { a }),
        [a, b, c] => Ok(RankSelector::median_of_three(a, b, c, cmp)),
        _ => kth_largest_ref(items, items.len() / 2 + 1, cmp),
    }
}
