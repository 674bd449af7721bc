//! API Facades Layer
//!
//! Flat free functions over the selection helpers, so callers can write
//! `top(&xs, 3)` or `median(&xs)` without naming the selector types.
//!
//! All facades call underlying Rust modules from inner layers.

pub mod aggregate_facades;
pub mod rank_facades;
pub mod top_facades;

// Re-export main facade functions
pub use aggregate_facades::*;
pub use rank_facades::*;
pub use top_facades::*;

pub use entities_selection::{NullOrdering, Result, SelectionError, SelectionRange, TopOptions};
pub use infrastructure_selection::Percentiles;
