//! # dgn-algo: Network Analyses
//!
//! Read-only analyses over a [`dgn_core::Network`]. Every function takes the
//! network by shared reference and returns a plain result value, so callers
//! can format or serialize the outcome however they like.
//!
//! | Analysis | Function | Method |
//! |----------|----------|--------|
//! | Connectivity class (C3/C2/C1/C0) | [`classify_connectivity`] | Tarjan SCC + undirected BFS |
//! | Single-pair shortest path | [`shortest_path`] | Dijkstra (A* with zero heuristic) |
//! | All-pairs shortest paths | [`all_pairs_shortest_paths`] | Floyd–Warshall |
//! | Eulerian circuit test | [`is_eulerian`] | degree balance + connectivity |
//! | Vertex coloring | [`greedy_coloring`] | largest-first greedy |
//!
//! Graphs handled here are small and hand-edited, so the dense O(V³)
//! all-pairs pass is fine.

pub mod coloring;
pub mod connectivity;
pub mod euler;
pub mod shortest_path;

pub use coloring::{greedy_coloring, Coloring};
pub use connectivity::{
    classify_connectivity, is_strongly_connected, is_weakly_connected,
    strongly_connected_components, weak_components, Connectivity,
};
pub use euler::is_eulerian;
pub use shortest_path::{all_pairs_shortest_paths, shortest_path, PairDistance, ShortestPath};
