//! Entity graphs stored as JSON documents.
//!
//! A document names a root entity and lists every entity with its outgoing
//! relationships. [`DocumentGraph`] loads it into shared entity instances (one per
//! id) and serves their relationships to the traversal engine.

mod document_load;

pub use document_load::*;
