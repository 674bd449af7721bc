//! Top-N API Facades
//!
//! Free-function entry points for top-N and bottom-N selection.

use std::cmp::Ordering;

use entities_selection::{NullOrdering, Result, TopOptions};
use infrastructure_selection::TopSelector;

/// The `n` greatest elements, in heap-pop (ascending) order
///
/// # Examples
/// ```
/// use api_facades::top;
///
/// assert_eq!(top(&[3, 1, 4, 1, 5, 9, 2, 6], 3), vec![5, 6, 9]);
/// assert_eq!(top(&[2, 1], 5), vec![2, 1]);
/// ```
pub fn top<T: Ord + Clone>(items: &[T], n: usize) -> Vec<T> {
    TopSelector::top(items, n)
}

/// The `n` greatest elements, in input order
///
/// # Examples
/// ```
/// use api_facades::top_ordered;
///
/// assert_eq!(top_ordered(&[3, 1, 4, 1, 5, 9, 2, 6], 3), vec![5, 9, 6]);
/// ```
pub fn top_ordered<T: Ord + Clone>(items: &[T], n: usize) -> Vec<T> {
    TopSelector::top_in_encounter_order(items, n)
}

/// The `n` greatest elements under a comparator
///
/// # Arguments
/// * `items` - Input slice (not modified)
/// * `n` - Number of elements to keep
/// * `cmp` - Comparator
///
/// # Returns
/// `min(n, items.len())` elements in heap-pop order, or the input unchanged when
/// `n >= items.len()`
pub fn top_by<T, F>(items: &[T], n: usize, cmp: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    TopSelector::top_by(items, n, cmp)
}

pub fn top_by_key<T, K, F>(items: &[T], n: usize, key: F) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: FnMut(&T) -> K,
{
    TopSelector::top_by_key(items, n, key)
}

/// The `n` greatest elements of `items[from..to]`
pub fn top_range<T: Ord + Clone>(items: &[T], from: usize, to: usize, n: usize) -> Result<Vec<T>> {
    TopSelector::top_in_range(items, from, to, n)
}

/// Selection driven entirely by `options`, with a comparator
pub fn top_with<T, F>(items: &[T], options: &TopOptions, cmp: F) -> Result<Vec<T>>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    TopSelector::top_with_by(items, options, cmp)
}

/// The `n` greatest items of any iterable
pub fn top_of<I, T>(items: I, n: usize, keep_encounter_order: bool) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    T: Ord,
{
    TopSelector::top_iter(items, n, keep_encounter_order)
}

pub fn top_partial<T: PartialOrd + Clone>(
    items: &[T],
    n: usize,
    keep_encounter_order: bool,
) -> Result<Vec<T>> {
    TopSelector::top_partial(items, n, keep_encounter_order)
}

pub fn top_nullable<T: Ord + Clone>(
    items: &[Option<T>],
    n: usize,
    nulls: NullOrdering,
    keep_encounter_order: bool,
) -> Vec<Option<T>> {
    TopSelector::top_nullable(items, n, nulls, keep_encounter_order)
}

/// The `n` smallest elements
pub fn bottom<T: Ord + Clone>(items: &[T], n: usize) -> Vec<T> {
    TopSelector::bottom(items, n)
}

pub fn bottom_by<T, F>(items: &[T], n: usize, cmp: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    TopSelector::bottom_by(items, n, cmp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use entities_selection::SelectionRange;

    #[test]
    fn test_top_facades_agree() {
        let items = [8, 3, 5, 1, 9, 7];
        assert_eq!(top(&items, 2), vec![8, 9]);
        assert_eq!(top_ordered(&items, 2), vec![8, 9]);
        assert_eq!(top_by(&items, 2, |a, b| b.cmp(a)), vec![3, 1]);
        assert_eq!(bottom(&items, 2), bottom_by(&items, 2, i32::cmp));
    }

    #[test]
    fn test_top_range_and_options() {
        let items = [8, 3, 5, 1, 9, 7];
        assert_eq!(top_range(&items, 1, 4, 1), Ok(vec![5]));
        let options = TopOptions::new(2)
            .keep_encounter_order(true)
            .range(SelectionRange::new(2, 6).unwrap());
        assert_eq!(top_with(&items, &options, i32::cmp), Ok(vec![9, 7]));
    }

    #[test]
    fn test_top_of_set() {
        let set: std::collections::BTreeSet<u8> = [4, 9, 1, 6].into_iter().collect();
        assert_eq!(top_of(set, 2, true), vec![6, 9]);
    }

    #[test]
    fn test_top_by_key_and_nullable() {
        let words = ["aa", "b", "cccc", "ddd"];
        assert_eq!(top_by_key(&words, 1, |w| w.len()), vec!["cccc"]);
        let items = [Some(1), None, Some(3)];
        assert_eq!(
            top_nullable(&items, 1, NullOrdering::NullsSmallest, false),
            vec![Some(3)]
        );
        assert!(top_partial(&[1.0, f64::NAN], 1, false).is_err());
    }
}
