//! Null Ordering Strategies
//!
//! Two named comparator strategies for `Option<T>` elements: `None` either
//! sorts above every value or below every value. Callers pick one
//! explicitly; nothing infers it from whether a minimum or a maximum is
//! being computed.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Where `None` sorts relative to present values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NullOrdering {
    /// `None` is greater than every `Some`
    NullsLargest,
    /// `None` is less than every `Some`
    NullsSmallest,
}

impl NullOrdering {
    /// Compare two optional values with a comparator for present values
    ///
    /// # Arguments
    /// * `a` - Left value
    /// * `b` - Right value
    /// * `cmp` - Comparator applied when both values are present
    ///
    /// # Returns
    /// Ordering of `a` relative to `b`
    pub fn compare_by<T, F>(self, a: &Option<T>, b: &Option<T>, mut cmp: F) -> Ordering
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        match (a, b) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => match self {
                NullOrdering::NullsLargest => Ordering::Greater,
                NullOrdering::NullsSmallest => Ordering::Less,
            },
            (Some(_), None) => match self {
                NullOrdering::NullsLargest => Ordering::Less,
                NullOrdering::NullsSmallest => Ordering::Greater,
            },
            (Some(x), Some(y)) => cmp(x, y),
        }
    }

    /// Compare two optional values under natural ordering
    ///
    /// # Examples
    /// ```
    /// use std::cmp::Ordering;
    /// use entities_selection::NullOrdering;
    ///
    /// assert_eq!(NullOrdering::NullsLargest.compare(&None, &Some(1)), Ordering::Greater);
    /// assert_eq!(NullOrdering::NullsSmallest.compare(&None, &Some(1)), Ordering::Less);
    /// assert_eq!(NullOrdering::NullsSmallest.compare(&Some(2), &Some(1)), Ordering::Greater);
    /// ```
    pub fn compare<T: Ord>(self, a: &Option<T>, b: &Option<T>) -> Ordering {
        self.compare_by(a, b, T::cmp)
    }

    /// Build a reusable comparator closure for this strategy
    pub fn comparator<T: Ord>(self) -> impl Fn(&Option<T>, &Option<T>) -> Ordering + Copy {
        move |a, b| self.compare(a, b)
    }
}
