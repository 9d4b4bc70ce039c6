//! Identity-deduplicated depth-first traversal of entity graphs.
//!
//! Given a root entity and a [`RelationshipEnumerator`](graph::RelationshipEnumerator)
//! that knows how entities reference each other, the engine invokes a visitor exactly
//! once per distinct entity instance, parents before children, following cycles and
//! shared references safely. A blocking and a suspendable entry point share the same
//! step machine and produce the same visit order.

pub mod fs;
pub mod graph;
pub mod sets;
pub mod statistics;
pub mod traversal;
