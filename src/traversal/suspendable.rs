use crate::{
    graph::{EntityIdentity, GraphNode, GraphResolutionError, RelationshipEnumerator},
    traversal::Walk,
};

/// Suspendable form of [`traverse`](crate::traversal::traverse).
///
/// Each visitor invocation is awaited to completion before the engine pulls the
/// next node, so visits never overlap and happen in the same depth-first pre-order
/// as the blocking form. Nothing is spawned; the returned future does all its work
/// on whichever task polls it.
///
/// There is no built-in cancellation. A visitor that wants to stop the traversal
/// returns an error, which abandons the remaining nodes; dropping the future has the
/// same effect. Nodes visited before that point stay visited.
pub async fn traverse_async<E, R, F, Err>(enumerator: R, root: E, mut visitor: F) -> Result<(), Err>
where
    E: EntityIdentity,
    R: RelationshipEnumerator<E>,
    F: AsyncFnMut(&GraphNode<E, R::Metadata>) -> Result<bool, Err>,
    Err: From<GraphResolutionError>,
{
    let mut walk = Walk::new(enumerator, root)?;
    loop {
        let node = match walk.next_node() {
            Ok(Some(node)) => node,
            Ok(None) => break,
            Err(err) => {
                walk.abort();
                return Err(err.into());
            }
        };

        let descend = visitor(&*node).await.inspect_err(|_| walk.abort())?;
        walk.settle(node, descend).inspect_err(|_| walk.abort())?;
    }
    walk.finish();
    Ok(())
}

/// Suspendable form of [`visit_all`](crate::traversal::visit_all).
pub async fn visit_all_async<E, R, F, Err>(enumerator: R, root: E, mut visitor: F) -> Result<(), Err>
where
    E: EntityIdentity,
    R: RelationshipEnumerator<E>,
    F: AsyncFnMut(&GraphNode<E, R::Metadata>) -> Result<(), Err>,
    Err: From<GraphResolutionError>,
{
    traverse_async(enumerator, root, async |node: &GraphNode<E, R::Metadata>| {
        visitor(node).await?;
        Ok::<_, Err>(true)
    })
    .await
}
