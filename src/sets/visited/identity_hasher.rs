use std::hash::{BuildHasherDefault, Hasher};

use hashbrown::HashSet;

use crate::graph::EntityId;

const FIBONACCI_MULTIPLIER: u64 = 0x9E37_79B9_7F4A_7C15;

/// Hasher for [`EntityId`] keys.
///
/// Identities are already unique integers, but pointer-derived ones are aligned
/// and clustered, so the key is spread with a Fibonacci multiply instead of being
/// hashed byte by byte.
#[derive(Default)]
pub struct IdentityHasher {
    hash: u64,
}

impl Hasher for IdentityHasher {
    fn write(&mut self, _bytes: &[u8]) {
        panic!("This hasher only accepts u64/usize keys");
    }

    fn write_usize(&mut self, i: usize) {
        self.write_u64(i as u64);
    }

    fn write_u64(&mut self, i: u64) {
        self.hash = i.wrapping_mul(FIBONACCI_MULTIPLIER).rotate_left(29);
    }

    fn finish(&self) -> u64 {
        self.hash
    }
}

pub type IdentitySet = HashSet<EntityId, BuildHasherDefault<IdentityHasher>>;
