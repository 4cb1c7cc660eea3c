//! Item graphs and their traversals.
//!
//! Graph implementations are organized into categories:
//! - `basic`: the adjacency-list item graph and BFS/DFS traversals
//! - `access`: crate-internal traversal building blocks

pub mod basic;
pub(crate) mod access;

// Re-export commonly used types from submodules
pub use basic::{
    traverse_bfs, traverse_dfs, Bfs, Dfs, Direction, EdgePolicy, Graph, Unweighted,
    UnweightedGraph, Weighted, WeightedEdge, WeightedGraph,
};
