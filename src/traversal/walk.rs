use std::sync::Arc;

use crate::{
    graph::{EntityId, EntityIdentity, GraphNode, GraphResolutionError, RelationshipEnumerator},
    sets::visited::{IdentitySet, VisitorSet},
    statistics::Stats,
};

type NodeOf<E, R> = Arc<GraphNode<E, <R as RelationshipEnumerator<E>>::Metadata>>;

/// A node whose children are being explored, together with the lazy sequence of
/// children not yet pulled.
struct Frame<E, R: RelationshipEnumerator<E>> {
    node: NodeOf<E, R>,
    children: R::Children,
}

/// Step machine behind both traversal forms.
///
/// A walk alternates between two calls: [`Walk::next_node`] hands out the next node
/// the visitor must see, in depth-first pre-order, and [`Walk::settle`] records the
/// visitor's verdict for it. The blocking and the suspendable entry points drive the
/// exact same sequence of calls and differ only in how they invoke the visitor in
/// between, so their visit order and visited sets are identical by construction.
///
/// ```
/// use std::sync::Arc;
/// use entitywalk::{
///     graph::{enumerator_fn, GraphNode},
///     traversal::Walk,
/// };
///
/// let leaf = enumerator_fn(|_: &GraphNode<Arc<u32>, ()>| Ok(Vec::new()));
/// let mut walk = Walk::new(leaf, Arc::new(7)).unwrap();
///
/// let root = walk.next_node().unwrap().unwrap();
/// walk.settle(root, true).unwrap();
/// assert!(walk.next_node().unwrap().is_none());
/// assert_eq!(walk.stats().get_nodes_visited(), 1);
/// ```
///
/// # Invariants
/// - The root's relationships are resolved when the walk is created, before the
///   visitor can see the root; an unresolvable root never reaches the visitor.
/// - An identity is marked visited in `settle`, i.e. after the visitor ran for it.
///   Every reference to that identity pulled afterwards is skipped.
/// - Every settled node is kept alive in `settled` until the walk is dropped, so an
///   address recorded in the visited set cannot be reused by another entity.
/// - `stack` holds exactly the open path from the root to the most recently
///   descended node, so every ancestor of a handed-out node is alive.
/// - Children are pulled one at a time; a child is checked against the visited set
///   when it is pulled, not when its parent is opened.
pub struct Walk<E, R: RelationshipEnumerator<E>, S = IdentitySet> {
    enumerator: R,
    visited: S,
    pending_root: Option<NodeOf<E, R>>,
    root_children: Option<R::Children>,
    stack: Vec<Frame<E, R>>,
    settled: Vec<NodeOf<E, R>>,
    stats: Stats,
}

impl<E, R> Walk<E, R, IdentitySet>
where
    E: EntityIdentity,
    R: RelationshipEnumerator<E>,
{
    pub fn new(enumerator: R, root: E) -> Result<Self, GraphResolutionError> {
        Self::with_visited_set(enumerator, root, IdentitySet::default())
    }
}

impl<E, R, S> Walk<E, R, S>
where
    E: EntityIdentity,
    R: RelationshipEnumerator<E>,
    S: VisitorSet,
{
    /// Starts a walk that records identities in `visited`.
    ///
    /// Fails if the enumerator cannot resolve the root's relationships. Identities
    /// already present in `visited` are treated as processed, including the root's.
    pub fn with_visited_set(enumerator: R, root: E, visited: S) -> Result<Self, GraphResolutionError> {
        let root = GraphNode::root(root);
        tracing::debug!(root = %root.id(), "starting entity graph traversal");
        let root_children = enumerator.children(&*root).inspect_err(|err| {
            tracing::debug!(entity = %root.id(), error = %err, "cannot resolve root relationships");
        })?;
        Ok(Walk {
            enumerator,
            visited,
            pending_root: Some(root),
            root_children: Some(root_children),
            stack: Vec::new(),
            settled: Vec::new(),
            stats: Stats::new(),
        })
    }

    /// The next node to hand to the visitor, or `None` once the graph is exhausted.
    ///
    /// References to identities that were already visited are consumed and skipped
    /// here; the visitor never sees them.
    pub fn next_node(&mut self) -> Result<Option<NodeOf<E, R>>, GraphResolutionError> {
        if let Some(root) = self.pending_root.take() {
            if self.visited.visited(root.id()) {
                self.skip(root.id(), 0);
            } else {
                return Ok(Some(root));
            }
        }

        while let Some(frame) = self.stack.last_mut() {
            let Some((entity, relationship)) = frame.children.next() else {
                self.stack.pop();
                continue;
            };

            let id = entity.entity_id();
            if self.visited.visited(id) {
                let depth = frame.node.depth() + 1;
                self.skip(id, depth);
                continue;
            }

            return Ok(Some(GraphNode::child(&frame.node, entity, relationship)));
        }

        Ok(None)
    }

    /// Records the visitor's verdict for `node`, which must be the node most recently
    /// returned by [`Walk::next_node`].
    ///
    /// The node's identity becomes visited. With `descend` set, the node's children
    /// are explored before any of its remaining siblings; the root reuses the
    /// relationships resolved when the walk started, any other node asks the
    /// enumerator now.
    pub fn settle(&mut self, node: NodeOf<E, R>, descend: bool) -> Result<(), GraphResolutionError> {
        self.visited.mark(node.id());
        self.settled.push(Arc::clone(&node));
        self.stats.bump_visited();

        let root_children = if node.is_root() {
            self.root_children.take()
        } else {
            None
        };

        if !descend {
            tracing::trace!(entity = %node.id(), depth = node.depth(), "visitor pruned subtree");
            self.stats.bump_pruned();
            return Ok(());
        }

        let children = match root_children {
            Some(children) => children,
            None => self.enumerator.children(&*node).inspect_err(|err| {
                tracing::debug!(entity = %node.id(), error = %err, "cannot resolve relationships");
            })?,
        };
        self.stack.push(Frame { node, children });
        Ok(())
    }

    fn skip(&mut self, id: EntityId, depth: usize) {
        tracing::trace!(entity = %id, depth, "entity already visited");
        self.stats.bump_duplicates();
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn visited(&self) -> &S {
        &self.visited
    }

    /// Logs the counters of a walk that ran to completion and returns them.
    pub fn finish(self) -> Stats {
        tracing::debug!(
            nodes_visited = self.stats.get_nodes_visited(),
            duplicates_skipped = self.stats.get_duplicates_skipped(),
            subtrees_pruned = self.stats.get_subtrees_pruned(),
            "entity graph traversal finished"
        );
        self.stats
    }

    /// Logs a walk cut short by a failure.
    pub(crate) fn abort(&self) {
        tracing::debug!(
            nodes_visited = self.settled.len(),
            open_depth = self.stack.len(),
            "entity graph traversal aborted"
        );
    }
}
