//! Percentiles
//!
//! Reads a fixed table of percentiles off an ascending-sorted slice. The
//! value for percentile `p` is `sorted[floor(len * p / 100)]`; there is no
//! interpolation between neighbours.
//!
//! Table (in output order): 0.0001%, 0.001%, 0.01%, 0.1%, 1% to 99% in
//! steps of 1%, 99.9%, 99.99%, 99.999%, 99.9999%.

use serde::ser::{Serialize, SerializeMap, Serializer};

use entities_selection::{Result, SelectionError};

const PARTS_PER_MILLION: u128 = 1_000_000;

const LOW_TAIL: [(&str, u32); 4] = [
    ("0.0001%", 1),
    ("0.001%", 10),
    ("0.01%", 100),
    ("0.1%", 1_000),
];

const HIGH_TAIL: [(&str, u32); 4] = [
    ("99.9%", 999_000),
    ("99.99%", 999_900),
    ("99.999%", 999_990),
    ("99.9999%", 999_999),
];

/// A percentile reading: label, position in parts per million, value
#[derive(Debug, Clone, PartialEq)]
pub struct PercentileEntry<T> {
    pub label: String,
    pub ppm: u32,
    pub value: T,
}

/// Percentile table read off a sorted input
///
/// Serializes as a map from label to value, in table order.
#[derive(Debug, Clone, PartialEq)]
pub struct Percentiles<T> {
    entries: Vec<PercentileEntry<T>>,
}

impl<T: Clone> Percentiles<T> {
    /// Read the percentile table off an ascending-sorted slice
    ///
    /// # Arguments
    /// * `sorted` - Input sorted ascending
    ///
    /// # Returns
    /// * `Ok(percentiles)` - The full table
    /// * `Err(SelectionError::InvalidArgument)` - If `sorted` is empty or not ascending
    ///
    /// # Examples
    /// ```
    /// use infrastructure_selection::Percentiles;
    ///
    /// let data: Vec<u32> = (0..1000).collect();
    /// let p = Percentiles::from_sorted(&data).unwrap();
    /// assert_eq!(p.get("50%"), Some(&500));
    /// assert_eq!(p.get("99.9%"), Some(&999));
    /// assert_eq!(p.get("0.0001%"), Some(&0));
    /// ```
    pub fn from_sorted(sorted: &[T]) -> Result<Self>
    where
        T: PartialOrd,
    {
        if sorted.is_empty() {
            return Err(SelectionError::invalid_argument("percentiles of an empty input"));
        }
        // written as a negation so that NaN neighbours are rejected too
        if let Some(pos) = sorted.windows(2).position(|w| !(w[0] <= w[1])) {
            return Err(SelectionError::invalid_argument(format!(
                "percentiles input is not sorted ascending at index {}",
                pos + 1
            )));
        }

        let len = sorted.len() as u128;
        let entries = table()
            .map(|(label, ppm)| {
                // ppm < 1_000_000, so the index is always < len
                let index = (len * ppm as u128 / PARTS_PER_MILLION) as usize;
                PercentileEntry {
                    label,
                    ppm,
                    value: sorted[index].clone(),
                }
            })
            .collect();
        Ok(Self { entries })
    }

    /// Sort a copy of `items` and read the percentile table off it
    pub fn from_unsorted(items: &[T]) -> Result<Self>
    where
        T: Ord,
    {
        let mut sorted = items.to_vec();
        sorted.sort();
        Self::from_sorted(&sorted)
    }
}

impl<T> Percentiles<T> {
    /// Value for a label such as `"1%"` or `"99.99%"`
    pub fn get(&self, label: &str) -> Option<&T> {
        self.entries
            .iter()
            .find(|entry| entry.label == label)
            .map(|entry| &entry.value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PercentileEntry<T>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: Serialize> Serialize for Percentiles<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.label, &entry.value)?;
        }
        map.end()
    }
}

fn table() -> impl Iterator<Item = (String, u32)> {
    let whole = (1..=99u32).map(|p| (format!("{p}%"), p * 10_000));
    LOW_TAIL
        .iter()
        .map(|(label, ppm)| (label.to_string(), *ppm))
        .chain(whole)
        .chain(HIGH_TAIL.iter().map(|(label, ppm)| (label.to_string(), *ppm)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_shape() {
        let p = Percentiles::from_sorted(&[1]).unwrap();
        assert_eq!(p.len(), 107);
        let labels: Vec<&str> = p.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(&labels[..5], &["0.0001%", "0.001%", "0.01%", "0.1%", "1%"]);
        assert_eq!(labels[labels.len() - 1], "99.9999%");
        let ppms: Vec<u32> = p.iter().map(|e| e.ppm).collect();
        assert_eq!(&ppms[..5], &[1, 10, 100, 1_000, 10_000]);
        assert_eq!(ppms[53], 500_000);
        assert!(ppms.windows(2).all(|w| w[0] < w[1]));
        assert!(p.iter().all(|e| e.value == 1));
    }

    #[test]
    fn test_whole_percentiles_index_exactly() {
        let data: Vec<u32> = (0..100).collect();
        let p = Percentiles::from_sorted(&data).unwrap();
        for q in 1..=99u32 {
            assert_eq!(p.get(&format!("{q}%")), Some(&q));
        }
    }

    #[test]
    fn test_small_input_floors() {
        let p = Percentiles::from_sorted(&[10, 20, 30]).unwrap();
        assert_eq!(p.get("33%"), Some(&10));
        assert_eq!(p.get("34%"), Some(&20));
        assert_eq!(p.get("67%"), Some(&30));
        assert_eq!(p.get("99.9999%"), Some(&30));
        assert_eq!(p.get("42.5%"), None);
    }

    #[test]
    fn test_rejects_empty_and_unsorted() {
        assert!(Percentiles::<i32>::from_sorted(&[]).is_err());
        let err = Percentiles::from_sorted(&[1, 3, 2]).unwrap_err();
        assert_eq!(
            err,
            SelectionError::invalid_argument("percentiles input is not sorted ascending at index 2")
        );
        assert!(Percentiles::from_sorted(&[1.0, f64::NAN]).is_err());
    }

    #[test]
    fn test_from_unsorted() {
        let p = Percentiles::from_unsorted(&[5, 1, 4, 2, 3]).unwrap();
        assert_eq!(p.get("50%"), Some(&3));
        assert_eq!(p.get("1%"), Some(&1));
    }

    #[test]
    fn test_serialize_preserves_table_order() {
        let p = Percentiles::from_sorted(&[7]).unwrap();
        let json = serde_json::to_string(&p).unwrap();
        assert!(json.starts_with(r#"{"0.0001%":7,"0.001%":7,"0.01%":7,"0.1%":7,"1%":7,"2%":7"#));
        assert!(json.ends_with(r#""99.9999%":7}"#));
    }
}
