//! Index-tagged values
//!
//! Pairs a value with the position it was encountered at so that a
//! selection can be put back into input order after heap processing.

/// A value together with its original position in the input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indexed<T> {
    pub index: usize,
    pub value: T,
}

impl<T> Indexed<T> {
    pub fn new(index: usize, value: T) -> Self {
        Self { index, value }
    }

    /// Discard the index
    pub fn into_value(self) -> T {
        self.value
    }

    /// Sort tagged values by original position and unwrap them
    ///
    /// # Arguments
    /// * `items` - Tagged values in arbitrary order
    ///
    /// # Returns
    /// The values in ascending index order
    ///
    /// # Examples
    /// ```
    /// use entities_selection::Indexed;
    ///
    /// let tagged = vec![Indexed::new(7, 'c'), Indexed::new(2, 'a'), Indexed::new(4, 'b')];
    /// assert_eq!(Indexed::into_encounter_order(tagged), vec!['a', 'b', 'c']);
    /// ```
    pub fn into_encounter_order(mut items: Vec<Indexed<T>>) -> Vec<T> {
        items.sort_unstable_by_key(|item| item.index);
        items.into_iter().map(Indexed::into_value).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_encounter_order_empty() {
        let empty: Vec<Indexed<i32>> = Vec::new();
        assert!(Indexed::into_encounter_order(empty).is_empty());
    }

    #[test]
    fn test_into_value() {
        assert_eq!(Indexed::new(3, "x").into_value(), "x");
    }
}
