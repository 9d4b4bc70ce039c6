use crate::graph::EntityId;

/// Records which entity identities a traversal has already processed.
///
/// One set lives for exactly one top-level traversal call and is dropped with it.
pub trait VisitorSet {
    fn visited(&self, id: EntityId) -> bool;
    fn mark(&mut self, id: EntityId);
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
