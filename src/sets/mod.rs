//! Bookkeeping sets used during traversal.
//!
//! # Submodules
//!
//! - [`visited`]: identity-keyed tracking of entities a traversal has already processed

pub mod visited;
