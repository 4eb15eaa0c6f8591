pub mod heap;

use std::hash::BuildHasherDefault;
use indexmap::IndexMap;
use rustc_hash::FxHasher;

pub use heap::{Comparator, Growth, Heap, MaxFirst, MinFirst};
pub use rustc_hash::FxHashSet;


/// Use indexmap for fast lookups and rustc_hash for fast hashing
/// Entries keep their insertion index, so a node can be referred to by a plain `usize` handle
pub type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;
