#[cfg(feature = "std")]
pub use std::collections::{HashMap as Map, HashSet as Set};

#[cfg(all(not(feature = "std"), feature = "alloc"))]
pub use hashbrown::{HashMap as Map, HashSet as Set};
