mod hashset;
mod identity_hasher;
mod visitor_set;

pub use identity_hasher::*;
pub use visitor_set::*;
