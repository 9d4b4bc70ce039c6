use crate::{
    graph::{EntityIdentity, GraphNode, GraphResolutionError, RelationshipEnumerator},
    traversal::{traverse, traverse_async, visit_all, visit_all_async},
};

/// A relationship enumerator bound to the traversal entry points.
///
/// Holds no per-traversal state: every call builds its own visited set and drops it
/// on return, so one engine can serve any number of sequential or concurrent calls.
pub struct GraphTraversal<R> {
    enumerator: R,
}

impl<R> GraphTraversal<R> {
    pub fn new(enumerator: R) -> Self {
        GraphTraversal { enumerator }
    }

    pub fn enumerator(&self) -> &R {
        &self.enumerator
    }

    pub fn into_inner(self) -> R {
        self.enumerator
    }

    /// See [`traverse`].
    pub fn traverse<E, F, Err>(&self, root: E, visitor: F) -> Result<(), Err>
    where
        E: EntityIdentity,
        R: RelationshipEnumerator<E>,
        F: FnMut(&GraphNode<E, R::Metadata>) -> Result<bool, Err>,
        Err: From<GraphResolutionError>,
    {
        traverse(&self.enumerator, root, visitor)
    }

    /// See [`traverse_async`].
    pub async fn traverse_async<E, F, Err>(&self, root: E, visitor: F) -> Result<(), Err>
    where
        E: EntityIdentity,
        R: RelationshipEnumerator<E>,
        F: AsyncFnMut(&GraphNode<E, R::Metadata>) -> Result<bool, Err>,
        Err: From<GraphResolutionError>,
    {
        traverse_async(&self.enumerator, root, visitor).await
    }

    /// See [`visit_all`].
    pub fn visit_all<E, F, Err>(&self, root: E, visitor: F) -> Result<(), Err>
    where
        E: EntityIdentity,
        R: RelationshipEnumerator<E>,
        F: FnMut(&GraphNode<E, R::Metadata>) -> Result<(), Err>,
        Err: From<GraphResolutionError>,
    {
        visit_all(&self.enumerator, root, visitor)
    }

    /// See [`visit_all_async`].
    pub async fn visit_all_async<E, F, Err>(&self, root: E, visitor: F) -> Result<(), Err>
    where
        E: EntityIdentity,
        R: RelationshipEnumerator<E>,
        F: AsyncFnMut(&GraphNode<E, R::Metadata>) -> Result<(), Err>,
        Err: From<GraphResolutionError>,
    {
        visit_all_async(&self.enumerator, root, visitor).await
    }
}
