use std::{
    fmt::{self, Debug},
    sync::{Arc, Weak},
};

use crate::graph::{EntityId, EntityIdentity};

/// Traversal-time wrapper around one entity instance.
///
/// A node pairs the entity with a weak link to the node that led to it and with the
/// relationship metadata connecting the two. The engine creates nodes, hands them to
/// the visitor and never looks inside the entity or the metadata.
///
/// # Invariants
/// - `parent` and `relationship` are both `None` for the root and both set otherwise.
/// - `depth` is one more than the parent's depth; the root sits at depth 0.
/// - `parent` is weak: a node never keeps its ancestors alive. While the engine is
///   visiting a node, every ancestor is still on the traversal stack, so
///   [`GraphNode::parent`] always resolves during a visitor call.
pub struct GraphNode<E, M> {
    entity: E,
    id: EntityId,
    parent: Option<Weak<GraphNode<E, M>>>,
    relationship: Option<M>,
    depth: usize,
}

impl<E: EntityIdentity, M> GraphNode<E, M> {
    /// Wraps the entity the traversal starts from.
    pub fn root(entity: E) -> Arc<Self> {
        let id = entity.entity_id();
        Arc::new(GraphNode {
            entity,
            id,
            parent: None,
            relationship: None,
            depth: 0,
        })
    }

    /// Wraps an entity reached from `parent` through `relationship`.
    pub fn child(parent: &Arc<Self>, entity: E, relationship: M) -> Arc<Self> {
        let id = entity.entity_id();
        Arc::new(GraphNode {
            entity,
            id,
            parent: Some(Arc::downgrade(parent)),
            relationship: Some(relationship),
            depth: parent.depth + 1,
        })
    }
}

impl<E, M> GraphNode<E, M> {
    pub fn entity(&self) -> &E {
        &self.entity
    }

    /// Identity of the wrapped entity, computed once when the node was created.
    pub fn id(&self) -> EntityId {
        self.id
    }

    /// The node this one was reached from, if it is still alive.
    pub fn parent(&self) -> Option<Arc<GraphNode<E, M>>> {
        self.parent.as_ref().and_then(Weak::upgrade)
    }

    /// How this node relates to its parent. `None` for the root.
    pub fn relationship(&self) -> Option<&M> {
        self.relationship.as_ref()
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Walks the parent chain, nearest ancestor first, ending at the root.
    pub fn ancestors(&self) -> Ancestors<E, M> {
        Ancestors {
            next: self.parent(),
        }
    }
}

impl<E, M: Debug> Debug for GraphNode<E, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphNode")
            .field("id", &self.id)
            .field("depth", &self.depth)
            .field("relationship", &self.relationship)
            .finish()
    }
}

/// Iterator over the ancestors of a [`GraphNode`].
pub struct Ancestors<E, M> {
    next: Option<Arc<GraphNode<E, M>>>,
}

impl<E, M> Iterator for Ancestors<E, M> {
    type Item = Arc<GraphNode<E, M>>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = current.parent();
        Some(current)
    }
}
