//! Basic graph implementations.
//!
//! This module contains the item graph and the traversals built on it.

pub mod algorithms;
pub mod item_graph;

pub use algorithms::{traverse_bfs, traverse_dfs, Bfs, Dfs};
pub use item_graph::{
    Direction, EdgePolicy, Graph, Unweighted, UnweightedGraph, Weighted, WeightedEdge,
    WeightedGraph,
};
