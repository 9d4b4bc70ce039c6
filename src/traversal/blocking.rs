use crate::{
    graph::{EntityIdentity, GraphNode, GraphResolutionError, RelationshipEnumerator},
    traversal::Walk,
};

/// Visits every entity reachable from `root` exactly once, depth-first, on the
/// caller's thread.
///
/// The visitor's `Ok(true)` means "descend into this node's children", `Ok(false)`
/// skips the subtree. A visitor error aborts the traversal and is returned as is;
/// an enumerator failure is converted into the caller's error type. The root's
/// relationships are resolved before the visitor runs at all, so an unresolvable
/// root fails without any visit.
///
/// Visited identities are recorded after the visitor returns, so a visitor that
/// starts another traversal over the same graph will see the current node as not
/// yet visited.
pub fn traverse<E, R, F, Err>(enumerator: R, root: E, mut visitor: F) -> Result<(), Err>
where
    E: EntityIdentity,
    R: RelationshipEnumerator<E>,
    F: FnMut(&GraphNode<E, R::Metadata>) -> Result<bool, Err>,
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

        let descend = visitor(&*node).inspect_err(|_| walk.abort())?;
        walk.settle(node, descend).inspect_err(|_| walk.abort())?;
    }
    walk.finish();
    Ok(())
}

/// Like [`traverse`], but always descends. The visitor only observes nodes.
pub fn visit_all<E, R, F, Err>(enumerator: R, root: E, mut visitor: F) -> Result<(), Err>
where
    E: EntityIdentity,
    R: RelationshipEnumerator<E>,
    F: FnMut(&GraphNode<E, R::Metadata>) -> Result<(), Err>,
    Err: From<GraphResolutionError>,
{
    traverse(enumerator, root, |node| visitor(node).map(|()| true))
}
