//! Top-N Selection Options
//!
//! Configuration for a single top/bottom selection call. Serializable so it
//! can be embedded in a caller's configuration file.

use serde::{Deserialize, Serialize};

use crate::range::SelectionRange;

/// Options for a top-N (or bottom-N) selection
///
/// # Examples
/// ```
/// use entities_selection::{SelectionRange, TopOptions};
///
/// let options = TopOptions::new(3)
///     .keep_encounter_order(true)
///     .range(SelectionRange::new(1, 6).unwrap());
/// assert_eq!(options.n, 3);
/// assert!(options.keep_encounter_order);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopOptions {
    /// Number of elements to keep
    pub n: usize,
    /// Return the kept elements in input order instead of heap-pop order
    pub keep_encounter_order: bool,
    /// Restrict selection to a sub-range; `None` means the whole input
    pub range: Option<SelectionRange>,
}

impl TopOptions {
    pub fn new(n: usize) -> Self {
        Self {
            n,
            ..Self::default()
        }
    }

    pub fn keep_encounter_order(mut self, keep: bool) -> Self {
        self.keep_encounter_order = keep;
        self
    }

    pub fn range(mut self, range: SelectionRange) -> Self {
        self.range = Some(range);
        self
    }
}

impl Default for TopOptions {
    fn default() -> Self {
        Self {
            n: 0,
            keep_encounter_order: false,
            range: None,
        }
    }
}
