//! Per-call counters for graph traversals.
//!
//! A [`Stats`] value is created fresh by every traversal call, updated as nodes are
//! visited, skipped or pruned, and logged when the call finishes.

mod stats;
pub use stats::*;
