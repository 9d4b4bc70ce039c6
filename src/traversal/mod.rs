//! Depth-first traversal of entity graphs.
//!
//! Two entry points share one step machine ([`Walk`]):
//!
//! - [`traverse`] runs on the caller's thread and invokes a plain closure per node.
//! - [`traverse_async`] awaits an async closure per node, one at a time.
//!
//! Both visit every entity reachable from the root exactly once, keyed by identity,
//! in depth-first pre-order following the enumerator's yield order. [`GraphTraversal`]
//! bundles an enumerator with both entry points.

mod blocking;
mod engine;
mod suspendable;
mod walk;

#[cfg(test)]
pub(crate) mod fixtures;

pub use blocking::*;
pub use engine::*;
pub use suspendable::*;
pub use walk::*;
