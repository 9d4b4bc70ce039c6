//! Entity graph model consumed by the traversal engine.
//!
//! This module provides the pieces the engine needs from the outside world:
//!
//! - [`EntityIdentity`]: reference-identity keys for entity instances
//! - [`GraphNode`]: the traversal-time wrapper handed to visitors
//! - [`RelationshipEnumerator`]: the capability that discovers a node's children
//! - [`GraphResolutionError`]: raised when the enumerator cannot resolve an entity

mod error;
mod identity;
mod node;
mod relationships;

pub use error::*;
pub use identity::*;
pub use node::*;
pub use relationships::*;
