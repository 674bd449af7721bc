//! Aggregate API Facades

use entities_selection::{NullOrdering, Result};
use infrastructure_selection::Aggregates;
use num_traits::{CheckedAdd, ToPrimitive, Zero};

/// Smallest element
///
/// # Arguments
/// * `items` - Input slice
///
/// # Returns
/// * `Ok(min)` - The first minimal element
/// * `Err(SelectionError::InvalidArgument)` - If `items` is empty
pub fn min<T: Ord + Clone>(items: &[T]) -> Result<T> {
    Aggregates::min(items)
}

/// Greatest element
///
/// # Arguments
/// * `items` - Input slice
///
/// # Returns
/// * `Ok(max)` - The first maximal element
/// * `Err(SelectionError::InvalidArgument)` - If `items` is empty
pub fn max<T: Ord + Clone>(items: &[T]) -> Result<T> {
    Aggregates::max(items)
}

/// Minimum with `None` placed explicitly by `nulls`
pub fn min_nullable<T: Ord + Clone>(
    items: &[Option<T>],
    nulls: NullOrdering,
) -> Result<Option<T>> {
    Aggregates::min_nullable(items, nulls)
}

/// Maximum with `None` placed explicitly by `nulls`
pub fn max_nullable<T: Ord + Clone>(
    items: &[Option<T>],
    nulls: NullOrdering,
) -> Result<Option<T>> {
    Aggregates::max_nullable(items, nulls)
}

/// Sum of the elements
///
/// # Arguments
/// * `items` - Input slice
///
/// # Returns
/// * `Ok(sum)` - Zero for an empty slice
/// * `Err(SelectionError::InvalidArgument)` - If the sum overflows `T`
pub fn sum<T: CheckedAdd + Zero + Copy>(items: &[T]) -> Result<T> {
    Aggregates::sum(items)
}

/// Arithmetic mean as `f64`
pub fn average<T: ToPrimitive>(items: &[T]) -> Result<f64> {
    Aggregates::average(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggregate_facades() {
        let items = [4i64, -2, 9];
        assert_eq!(min(&items), Ok(-2));
        assert_eq!(max(&items), Ok(9));
        assert_eq!(sum(&items), Ok(11));
        assert_eq!(average(&[1u8, 2]), Ok(1.5));
    }

    #[test]
    fn test_nullable_facades() {
        let items = [Some("b"), None, Some("a")];
        assert_eq!(min_nullable(&items, NullOrdering::NullsLargest), Ok(Some("a")));
        assert_eq!(max_nullable(&items, NullOrdering::NullsLargest), Ok(None));
    }
}
