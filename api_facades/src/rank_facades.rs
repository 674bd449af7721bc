//! Rank API Facades
//!
//! Free-function entry points for k-th largest, median and percentiles.

use std::cmp::Ordering;

use entities_selection::Result;
use infrastructure_selection::{Percentiles, RankSelector};

/// The element of 1-based descending rank `k`
///
/// # Examples
/// ```
/// use api_facades::kth_largest;
///
/// assert_eq!(kth_largest(&[5, 3, 8, 1, 9], 2), Ok(8));
/// ```
pub fn kth_largest<T: Ord + Clone>(items: &[T], k: usize) -> Result<T> {
    RankSelector::kth_largest(items, k)
}

/// The element of 1-based descending rank `k` under a comparator
///
/// # Arguments
/// * `items` - Input slice
/// * `k` - 1-based rank, greatest first under `cmp`
/// * `cmp` - Comparator
///
/// # Returns
/// * `Ok(element)` - If `1 <= k <= items.len()`
/// * `Err(SelectionError::InvalidArgument)` - Otherwise
pub fn kth_largest_by<T, F>(items: &[T], k: usize, cmp: F) -> Result<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    RankSelector::kth_largest_by(items, k, cmp)
}

/// The element of descending rank `k` within `items[from..to]`
pub fn kth_largest_range<T: Ord + Clone>(
    items: &[T],
    from: usize,
    to: usize,
    k: usize,
) -> Result<T> {
    RankSelector::kth_largest_in_range(items, from, to, k)
}

/// Lower median: `kth_largest(items, len / 2 + 1)`
///
/// # Examples
/// ```
/// use api_facades::median;
///
/// assert_eq!(median(&[1, 2]), Ok(1));
/// assert_eq!(median(&[3, 1, 2]), Ok(2));
/// ```
pub fn median<T: Ord + Clone>(items: &[T]) -> Result<T> {
    RankSelector::median(items)
}

pub fn median_by<T, F>(items: &[T], cmp: F) -> Result<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    RankSelector::median_by(items, cmp)
}

pub fn median_range<T: Ord + Clone>(items: &[T], from: usize, to: usize) -> Result<T> {
    RankSelector::median_in_range(items, from, to)
}

pub fn median_partial<T: PartialOrd + Clone>(items: &[T]) -> Result<T> {
    RankSelector::median_partial(items)
}

/// Percentile table of an ascending-sorted slice
pub fn percentiles<T: PartialOrd + Clone>(sorted: &[T]) -> Result<Percentiles<T>> {
    Percentiles::from_sorted(sorted)
}
