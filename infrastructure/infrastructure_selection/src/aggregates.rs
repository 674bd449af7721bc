//! Aggregates
//!
//! Minimum, maximum, sum and average over slices, plus null-aware minimum
//! and maximum over `Option<T>` slices with an explicit [`NullOrdering`].

use std::cmp::Ordering;

use entities_selection::{NullOrdering, Result, SelectionError};
use num_traits::{CheckedAdd, ToPrimitive, Zero};

/// Aggregate functions over slices
pub struct Aggregates;

impl Aggregates {
    /// Get the minimum element
    ///
    /// # Returns
    /// * `Ok(min)` - The first minimal element
    /// * `Err(SelectionError::InvalidArgument)` - If `items` is empty
    pub fn min<T: Ord + Clone>(items: &[T]) -> Result<T> {
        Self::min_by(items, T::cmp)
    }

    /// Get the maximum element
    ///
    /// # Returns
    /// * `Ok(max)` - The first maximal element
    /// * `Err(SelectionError::InvalidArgument)` - If `items` is empty
    pub fn max<T: Ord + Clone>(items: &[T]) -> Result<T> {
        Self::max_by(items, T::cmp)
    }

    pub fn min_by<T, F>(items: &[T], mut cmp: F) -> Result<T>
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        extreme_by(items, "min", |candidate, best| {
            cmp(candidate, best) == Ordering::Less
        })
    }

    pub fn max_by<T, F>(items: &[T], mut cmp: F) -> Result<T>
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        extreme_by(items, "max", |candidate, best| {
            cmp(candidate, best) == Ordering::Greater
        })
    }

    /// Get the minimum of optional elements with `None` placed per `nulls`
    ///
    /// # Examples
    /// ```
    /// use entities_selection::NullOrdering;
    /// use infrastructure_selection::Aggregates;
    ///
    /// let values = [Some(4), None, Some(2)];
    /// assert_eq!(Aggregates::min_nullable(&values, NullOrdering::NullsLargest), Ok(Some(2)));
    /// assert_eq!(Aggregates::min_nullable(&values, NullOrdering::NullsSmallest), Ok(None));
    /// ```
    pub fn min_nullable<T: Ord + Clone>(
        items: &[Option<T>],
        nulls: NullOrdering,
    ) -> Result<Option<T>> {
        Self::min_by(items, |a, b| nulls.compare(a, b))
    }

    /// Get the maximum of optional elements with `None` placed per `nulls`
    pub fn max_nullable<T: Ord + Clone>(
        items: &[Option<T>],
        nulls: NullOrdering,
    ) -> Result<Option<T>> {
        Self::max_by(items, |a, b| nulls.compare(a, b))
    }

    /// Sum the elements, failing on overflow
    ///
    /// # Returns
    /// * `Ok(sum)` - Zero for an empty slice
    /// * `Err(SelectionError::InvalidArgument)` - If the sum overflows `T`
    ///
    /// # Examples
    /// ```
    /// use infrastructure_selection::Aggregates;
    ///
    /// assert_eq!(Aggregates::sum(&[1i32, 2, 3]), Ok(6));
    /// assert!(Aggregates::sum(&[i8::MAX, 1]).is_err());
    /// ```
    pub fn sum<T>(items: &[T]) -> Result<T>
    where
        T: CheckedAdd + Zero + Copy,
    {
        items.iter().try_fold(T::zero(), |acc, x| {
            acc.checked_add(x)
                .ok_or_else(|| SelectionError::invalid_argument("sum overflows the element type"))
        })
    }

    /// Arithmetic mean as `f64`
    ///
    /// # Returns
    /// * `Ok(mean)` - The mean
    /// * `Err(SelectionError::InvalidArgument)` - If `items` is empty or an element has no
    ///   `f64` form
    pub fn average<T: ToPrimitive>(items: &[T]) -> Result<f64> {
        if items.is_empty() {
            return Err(SelectionError::invalid_argument("average of an empty input"));
        }
        let mut total = 0.0;
        for (index, item) in items.iter().enumerate() {
            total += item.to_f64().ok_or_else(|| {
                SelectionError::invalid_argument(format!(
                    "element at index {index} has no f64 value"
                ))
            })?;
        }
        Ok(total / items.len() as f64)
    }
}

fn extreme_by<T, F>(items: &[T], what: &str, mut better: F) -> Result<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let (first, rest) = items
        .split_first()
        .ok_or_else(|| SelectionError::invalid_argument(format!("{what} of an empty input")))?;
    let mut best = first;
    for item in rest {
        if better(item, best) {
            best = item;
        }
    }
    Ok(best.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_max() {
        let items = [3, 7, 1, 9, 4];
        assert_eq!(Aggregates::min(&items), Ok(1));
        assert_eq!(Aggregates::max(&items), Ok(9));
        assert!(Aggregates::max::<i32>(&[]).is_err());
    }

    #[test]
    fn test_min_by_keeps_first_of_ties() {
        let items = [(2, 'a'), (1, 'b'), (1, 'c')];
        assert_eq!(Aggregates::min_by(&items, |x, y| x.0.cmp(&y.0)), Ok((1, 'b')));
        assert_eq!(Aggregates::max_by(&items, |x, y| x.0.cmp(&y.0)), Ok((2, 'a')));
    }

    #[test]
    fn test_nullable_extremes() {
        let items = [None, Some(5), Some(-3)];
        assert_eq!(Aggregates::max_nullable(&items, NullOrdering::NullsLargest), Ok(None));
        assert_eq!(Aggregates::max_nullable(&items, NullOrdering::NullsSmallest), Ok(Some(5)));
        assert_eq!(Aggregates::min_nullable(&items, NullOrdering::NullsLargest), Ok(Some(-3)));
        assert_eq!(
            Aggregates::min_nullable::<i32>(&[None, None], NullOrdering::NullsLargest),
            Ok(None)
        );
    }

    #[test]
    fn test_sum() {
        assert_eq!(Aggregates::sum::<u64>(&[]), Ok(0));
        assert_eq!(Aggregates::sum(&[10u8, 20, 30]), Ok(60));
        assert!(Aggregates::sum(&[200u8, 100]).is_err());
    }

    #[test]
    fn test_average() {
        assert_eq!(Aggregates::average(&[1, 2, 3, 4]), Ok(2.5));
        assert_eq!(Aggregates::average(&[0.5f32, 1.5]), Ok(1.0));
        assert!(Aggregates::average::<i64>(&[]).is_err());
    }
}
