//! Entities Layer: Selection
//!
//! Provides the domain types shared by the selection algorithms:
//! - Errors raised by selection helpers
//! - Validated half-open index ranges
//! - Null ordering strategies for `Option<T>` elements
//! - Index-tagged values for encounter-order reconstruction
//! - Top-N selection options
//!
//! Pure data only. No algorithms live here.

pub mod error;
pub mod indexed;
pub mod null_ordering;
pub mod options;
pub mod range;

pub use error::{Result, SelectionError};
pub use indexed::Indexed;
pub use null_ordering::NullOrdering;
pub use options::TopOptions;
pub use range::SelectionRange;
