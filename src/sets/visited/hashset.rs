use crate::{
    graph::EntityId,
    sets::visited::{IdentitySet, VisitorSet},
};

impl VisitorSet for IdentitySet {
    fn visited(&self, id: EntityId) -> bool {
        self.contains(&id)
    }

    fn mark(&mut self, id: EntityId) {
        self.insert(id);
    }

    fn len(&self) -> usize {
        IdentitySet::len(self)
    }
}
