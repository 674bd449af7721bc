//! Top-N Selection
//!
//! Selects the `n` greatest elements of a slice, sub-range or iterator under
//! a comparator without sorting the whole input. A min-heap of capacity `n`
//! holds the best candidates seen so far; each further candidate either
//! evicts the current minimum (when strictly greater) or is dropped.
//! O(m log n) for an input of length m.
//!
//! Output order:
//! - `n >= len`: the input, unchanged
//! - `keep_encounter_order`: selected elements in input order
//! - otherwise: heap-pop order, ascending under the comparator
//!
//! Ties at the boundary are resolved in favour of the elements that reached
//! the heap first; an equal candidate never evicts.

use std::cmp::Ordering;

use entities_selection::{Indexed, NullOrdering, Result, SelectionRange, TopOptions};
use tracing::{debug, trace};

use crate::heap::BoundedHeap;
use crate::partial::{check_comparable, PartialComparator};

/// Top-N and bottom-N selection
pub struct TopSelector;

impl TopSelector {
    /// Select the `n` greatest elements under natural ordering
    ///
    /// # Arguments
    /// * `items` - Input slice (not modified)
    /// * `n` - Number of elements to keep
    ///
    /// # Returns
    /// `min(n, items.len())` elements
    ///
    /// # Examples
    /// ```
    /// use infrastructure_selection::TopSelector;
    ///
    /// let mut top = TopSelector::top(&[3, 1, 4, 1, 5, 9, 2, 6], 3);
    /// top.sort();
    /// assert_eq!(top, vec![5, 6, 9]);
    /// ```
    pub fn top<T: Ord + Clone>(items: &[T], n: usize) -> Vec<T> {
        Self::top_by(items, n, T::cmp)
    }

    /// Select the `n` greatest elements, returned in input order
    ///
    /// # Examples
    /// ```
    /// use infrastructure_selection::TopSelector;
    ///
    /// let top = TopSelector::top_in_encounter_order(&[3, 1, 4, 1, 5, 9, 2, 6], 3);
    /// assert_eq!(top, vec![5, 9, 6]);
    /// ```
    pub fn top_in_encounter_order<T: Ord + Clone>(items: &[T], n: usize) -> Vec<T> {
        select_slice(items, n, true, T::cmp)
    }

    /// Select the `n` greatest elements under a comparator
    pub fn top_by<T, F>(items: &[T], n: usize, cmp: F) -> Vec<T>
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        select_slice(items, n, false, cmp)
    }

    /// Select the `n` elements with the greatest keys
    pub fn top_by_key<T, K, F>(items: &[T], n: usize, mut key: F) -> Vec<T>
    where
        T: Clone,
        K: Ord,
        F: FnMut(&T) -> K,
    {
        select_slice(items, n, false, |a, b| key(a).cmp(&key(b)))
    }

    /// Select the `n` greatest elements of `items[from..to]`
    ///
    /// # Returns
    /// * `Ok(selection)` - If the range is valid
    /// * `Err(SelectionError::InvalidRange)` - If `from > to` or `to > items.len()`
    pub fn top_in_range<T: Ord + Clone>(
        items: &[T],
        from: usize,
        to: usize,
        n: usize,
    ) -> Result<Vec<T>> {
        let range = SelectionRange::checked(from, to, items.len())?;
        Ok(select_slice(range.slice(items), n, false, T::cmp))
    }

    /// Select according to `options` under natural ordering
    pub fn top_with<T: Ord + Clone>(items: &[T], options: &TopOptions) -> Result<Vec<T>> {
        Self::top_with_by(items, options, T::cmp)
    }

    /// Select according to `options` under a comparator
    ///
    /// # Arguments
    /// * `items` - Input slice
    /// * `options` - Count, encounter-order flag and optional sub-range
    /// * `cmp` - Comparator
    ///
    /// # Returns
    /// * `Ok(selection)` - Selected elements
    /// * `Err(SelectionError::InvalidRange)` - If the configured range does not fit `items`
    pub fn top_with_by<T, F>(items: &[T], options: &TopOptions, cmp: F) -> Result<Vec<T>>
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        let range = resolve_range(options, items.len())?;
        Ok(select_slice(
            range.slice(items),
            options.n,
            options.keep_encounter_order,
            cmp,
        ))
    }

    /// Select the `n` greatest items of an iterator under natural ordering
    ///
    /// If the iterator yields at most `n` items, all of them come back in
    /// input order.
    pub fn top_iter<I, T>(items: I, n: usize, keep_encounter_order: bool) -> Vec<T>
    where
        I: IntoIterator<Item = T>,
        T: Ord,
    {
        Self::top_iter_by(items, n, keep_encounter_order, T::cmp)
    }

    /// Select the `n` greatest items of an iterator under a comparator
    pub fn top_iter_by<I, T, F>(
        items: I,
        n: usize,
        keep_encounter_order: bool,
        mut cmp: F,
    ) -> Vec<T>
    where
        I: IntoIterator<Item = T>,
        F: FnMut(&T, &T) -> Ordering,
    {
        select_indexed(items, n, keep_encounter_order, |a: &Indexed<T>, b: &Indexed<T>| {
            cmp(&a.value, &b.value)
        })
    }

    /// Select the `n` greatest elements of a partially ordered slice
    ///
    /// # Returns
    /// * `Ok(selection)` - If every compared pair was ordered
    /// * `Err(SelectionError::Incomparable)` - On NaN or another unordered pair
    ///
    /// # Examples
    /// ```
    /// use infrastructure_selection::TopSelector;
    ///
    /// assert_eq!(TopSelector::top_partial(&[0.5, 2.5, 1.5], 2, true).unwrap(), vec![2.5, 1.5]);
    /// assert!(TopSelector::top_partial(&[0.5, f64::NAN], 1, false).is_err());
    /// ```
    pub fn top_partial<T: PartialOrd + Clone>(
        items: &[T],
        n: usize,
        keep_encounter_order: bool,
    ) -> Result<Vec<T>> {
        check_comparable(items)?;
        let partial = PartialComparator::default();
        let selected = select_slice_indexed(items, n, keep_encounter_order, |a, b| {
            partial.compare(a.value, b.value, || a.index.max(b.index))
        });
        partial.finish(selected)
    }

    /// Select the `n` greatest optional elements, placing `None` per `nulls`
    pub fn top_nullable<T: Ord + Clone>(
        items: &[Option<T>],
        n: usize,
        nulls: NullOrdering,
        keep_encounter_order: bool,
    ) -> Vec<Option<T>> {
        select_slice(items, n, keep_encounter_order, |a, b| nulls.compare(a, b))
    }

    /// Select the `n` smallest elements under natural ordering
    ///
    /// Without encounter order the result is largest-first (heap-pop order
    /// of the reversed comparator).
    pub fn bottom<T: Ord + Clone>(items: &[T], n: usize) -> Vec<T> {
        Self::bottom_by(items, n, T::cmp)
    }

    /// Select the `n` smallest elements under a comparator
    pub fn bottom_by<T, F>(items: &[T], n: usize, mut cmp: F) -> Vec<T>
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        select_slice(items, n, false, |a, b| cmp(b, a))
    }

    /// Select the `n` smallest elements according to `options`
    pub fn bottom_with_by<T, F>(items: &[T], options: &TopOptions, mut cmp: F) -> Result<Vec<T>>
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        Self::top_with_by(items, options, |a, b| cmp(b, a))
    }
}

fn resolve_range(options: &TopOptions, len: usize) -> Result<SelectionRange> {
    match options.range {
        Some(range) => range.check_len(len),
        None => Ok(SelectionRange::full(len)),
    }
}

fn select_slice<T, F>(items: &[T], n: usize, keep_encounter_order: bool, mut cmp: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    select_slice_indexed(items, n, keep_encounter_order, |a, b| cmp(a.value, b.value))
}

fn select_slice_indexed<T, F>(items: &[T], n: usize, keep_encounter_order: bool, cmp: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&Indexed<&T>, &Indexed<&T>) -> Ordering,
{
    if n == 0 {
        debug!("top-n with n == 0, returning empty selection");
        return Vec::new();
    }
    if n >= items.len() {
        debug!(n, len = items.len(), "top-n covers the whole range, returning it unchanged");
        return items.to_vec();
    }
    select_indexed(items.iter(), n, keep_encounter_order, cmp)
        .into_iter()
        .cloned()
        .collect()
}

/// Bounded top-n pass over position-tagged items
fn select_indexed<I, T, F>(items: I, n: usize, keep_encounter_order: bool, cmp: F) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&Indexed<T>, &Indexed<T>) -> Ordering,
{
    if n == 0 {
        return Vec::new();
    }
    let mut heap = BoundedHeap::with_comparator(n, cmp);
    let mut seen = 0usize;
    for (index, item) in items.into_iter().enumerate() {
        heap.offer(Indexed::new(index, item));
        seen += 1;
    }
    trace!(
        seen,
        retained = heap.len(),
        evictions = heap.evictions(),
        "bounded top-n pass finished"
    );

    // Fewer candidates than slots: every item was kept, so hand them back
    // exactly as they came in.
    if keep_encounter_order || seen <= n {
        Indexed::into_encounter_order(heap.into_vec())
    } else {
        heap.into_sorted_vec()
            .into_iter()
            .map(Indexed::into_value)
            .collect()
    }
}
