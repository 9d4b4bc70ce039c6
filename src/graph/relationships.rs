use std::{marker::PhantomData, vec};

use crate::graph::{GraphNode, GraphResolutionError};

/// Discovers the direct relationships of an entity.
///
/// This is the seam between the traversal engine and whatever persistence model
/// knows how entities point at each other. Implementations must yield every
/// single-valued and collection-valued reference of the node's entity, in an order
/// that is stable for a given graph instance, and the sequence must be finite.
///
/// The returned iterator is consumed lazily: the engine pulls one child, fully
/// explores it, and only then pulls the next.
pub trait RelationshipEnumerator<E> {
    /// Describes how a child relates to its parent. Opaque to the engine.
    type Metadata;

    type Children: Iterator<Item = (E, Self::Metadata)>;

    fn children(
        &self,
        node: &GraphNode<E, Self::Metadata>,
    ) -> Result<Self::Children, GraphResolutionError>;
}

impl<E, R: RelationshipEnumerator<E> + ?Sized> RelationshipEnumerator<E> for &R {
    type Metadata = R::Metadata;
    type Children = R::Children;

    fn children(
        &self,
        node: &GraphNode<E, Self::Metadata>,
    ) -> Result<Self::Children, GraphResolutionError> {
        (**self).children(node)
    }
}

/// Adapts a closure into a [`RelationshipEnumerator`].
///
/// ```
/// use std::sync::Arc;
/// use entitywalk::graph::{enumerator_fn, RelationshipEnumerator, GraphNode};
///
/// let leaf = enumerator_fn(|_node: &GraphNode<Arc<u32>, &'static str>| Ok(Vec::new()));
/// let root = GraphNode::root(Arc::new(7));
/// assert_eq!(leaf.children(&*root).unwrap().count(), 0);
/// ```
pub fn enumerator_fn<E, M, F>(f: F) -> FnEnumerator<F, M>
where
    F: Fn(&GraphNode<E, M>) -> Result<Vec<(E, M)>, GraphResolutionError>,
{
    FnEnumerator {
        f,
        _metadata: PhantomData,
    }
}

pub struct FnEnumerator<F, M> {
    f: F,
    _metadata: PhantomData<fn() -> M>,
}

impl<E, M, F> RelationshipEnumerator<E> for FnEnumerator<F, M>
where
    F: Fn(&GraphNode<E, M>) -> Result<Vec<(E, M)>, GraphResolutionError>,
{
    type Metadata = M;
    type Children = vec::IntoIter<(E, M)>;

    fn children(&self, node: &GraphNode<E, M>) -> Result<Self::Children, GraphResolutionError> {
        (self.f)(node).map(Vec::into_iter)
    }
}
