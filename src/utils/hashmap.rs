//! The hash-map used by the edge adjacency index.
//!
//! The hasher has a fixed state so that two runs on the same input build
//! the exact same table. Nothing in this crate depends on the iteration
//! order of the map, only on the order of the values stored in each entry.

/// Hashmap using [`hashbrown::HashMap`] with a fixed-state hasher.
pub type HashMap<K, V> = hashbrown::hash_map::HashMap<K, V, foldhash::fast::FixedState>;
