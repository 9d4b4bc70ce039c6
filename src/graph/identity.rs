use std::{fmt, rc::Rc, sync::Arc};

/// Identity key of an entity instance.
///
/// Two entities share an `EntityId` only if they are the same instance (or if an
/// integrator injected the same stable id for both). Content equality plays no part.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(u64);

impl EntityId {
    /// Wraps an integrator-supplied stable id.
    pub const fn new(raw: u64) -> Self {
        EntityId(raw)
    }

    /// Identity of the allocation behind a shared pointer.
    pub fn of_ptr<T: ?Sized>(ptr: *const T) -> Self {
        EntityId(ptr.cast::<()>() as usize as u64)
    }
}

impl fmt::Debug for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntityId({:#x})", self.0)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// Anything the engine can deduplicate on.
///
/// Implemented for `Arc<T>` and `Rc<T>` using the address of the shared allocation,
/// so clones of the same handle map to the same id while distinct allocations with
/// equal contents do not.
pub trait EntityIdentity {
    fn entity_id(&self) -> EntityId;
}

impl<T: ?Sized> EntityIdentity for Arc<T> {
    fn entity_id(&self) -> EntityId {
        EntityId::of_ptr(Arc::as_ptr(self))
    }
}

impl<T: ?Sized> EntityIdentity for Rc<T> {
    fn entity_id(&self) -> EntityId {
        EntityId::of_ptr(Rc::as_ptr(self))
    }
}

impl<T: EntityIdentity + ?Sized> EntityIdentity for &T {
    fn entity_id(&self) -> EntityId {
        (**self).entity_id()
    }
}
