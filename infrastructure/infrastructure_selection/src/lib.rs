//! Infrastructure Layer: Selection
//!
//! Provides selection algorithms over slices and iterators:
//! - Bounded heap with a caller-supplied comparator
//! - Top-N / bottom-N selection with optional encounter-order preservation
//! - k-th largest and (lower) median
//! - Percentile tables over sorted input
//! - Min / max / sum / average aggregates
//!
//! Depends on the Entities layer only.

pub mod aggregates;
pub mod heap;
pub mod percentiles;
pub mod rank;
pub mod top;

mod partial;

pub use aggregates::Aggregates;
pub use heap::BoundedHeap;
pub use percentiles::{PercentileEntry, Percentiles};
pub use rank::RankSelector;
pub use top::TopSelector;

pub use entities_selection::{
    Indexed, NullOrdering, Result, SelectionError, SelectionRange, TopOptions,
};
