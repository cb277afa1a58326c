//! Triangle adjacency through directed edges, and the disjoint bodies it induces.

pub use self::disjoint_bodies::DisjointBodies;
pub use self::edge_adjacency::{DirectedEdge, EdgeAdjacencyIndex, TriangleRecord};
pub use self::neighbor::resolve_neighbor;
pub use self::split_options::{SplitFlags, SplitOptions, DEFAULT_PARALLEL_EPSILON};

mod disjoint_bodies;
mod edge_adjacency;
mod neighbor;
mod split_options;
