//! # `stratum` - Const-Generic Containers and Algorithms
//!
//! A small toolkit of generic containers whose shape lives in the type system
//! wherever Rust allows it, plus the textbook algorithms that go with them.
//!
//! ## Key Features
//!
//! - **Const-generic matrices**: `Matrix<T, R, C>` stores exactly `R * C`
//!   cells inline. Same-shape arithmetic and compatible matrix products are
//!   checked at compile time; shapes only known to match at run time go
//!   through checked accessors that return [`Error`].
//! - **Item graphs**: `Graph<P, T>` stores unique items and directed edges
//!   between them, with the edge record (bare or weighted) chosen by the
//!   policy type `P`.
//! - **Traversals**: breadth- and depth-first iterators with a visited set,
//!   so every reachable item is visited once and cycles terminate.
//! - **Type lists**: zero-sized, compile-time sequences of types.
//!
//! ## Architecture
//!
//! The subsystems are independent:
//!
//! 1. **Graphs** (`graph`):
//!    - Items are identified by insertion position; edges store positions
//!    - New edges go to the front of a row (most recent neighbor first)
//!    - Removal patches every row so stored positions never dangle
//!
//! 2. **Matrices** (`collections::matrix`):
//!    - `[[T; C]; R]` storage, no heap allocation
//!    - `MatrixKind` captures the capability set generic algorithms need
//!
//! 3. **Meta** (`meta`):
//!    - `Nil` / `Cons` type lists and the `type_list!` macro
//!    - `ChooseType` for compile-time type selection
//!
//! Rejected graph operations (duplicate items, missing endpoints) are reported
//! as `false` or empty results. Programmer errors (indices out of range,
//! incompatible shapes) are reported as [`Error`].
//!
//! ## Example
//!
//! ```rust
//! use stratum::{traverse_bfs, Direction, Matrix, UnweightedGraph};
//!
//! let mut graph = UnweightedGraph::new();
//! for item in [10, 3, 15, -8] {
//!     graph.add(item);
//! }
//! graph.connect(&10, &3, Direction::OneWay);
//! graph.connect(&10, &15, Direction::OneWay);
//! graph.connect(&3, &-8, Direction::OneWay);
//! assert_eq!(traverse_bfs(&graph, |x| *x > 0), vec![true, true, true, false]);
//!
//! let a = Matrix::from_rows([[1, 2, 3], [4, 5, 6]]);
//! let b = Matrix::from_rows([[7, 8], [9, 10], [11, 12]]);
//! assert_eq!((a * b).into_rows(), [[58, 64], [139, 154]]);
//! ```
//!
//! ## Features
//!
//! - `tracing` (default): emit `tracing` events for rejected operations and
//!   finished traversals.
//! - `parallel`: `Matrix::par_multiply` on the rayon thread pool.

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

mod trace;

pub mod collections;
pub mod error;
pub mod graph;
pub mod meta;

pub use collections::{Fill, Mat2x2, Mat3x3, Matrix, MatrixKind, VecN};
pub use error::{Error, Result};
pub use graph::{
    traverse_bfs, traverse_dfs, Bfs, Dfs, Direction, EdgePolicy, Graph, Unweighted,
    UnweightedGraph, Weighted, WeightedEdge, WeightedGraph,
};
pub use meta::{Cons, Nil, TypeList};

// Compile-time assertions for memory layout
const _: () = {
    use core::mem;

    // Matrices are exactly their cells.
    assert!(mem::size_of::<Matrix<f64, 3, 4>>() == mem::size_of::<[[f64; 4]; 3]>());
    assert!(mem::align_of::<Matrix<u8, 2, 2>>() == mem::align_of::<u8>());

    // Type lists and policies carry no runtime payload.
    assert!(mem::size_of::<Nil>() == 0);
    assert!(mem::size_of::<Cons<u64, Cons<String, Nil>>>() == 0);
    assert!(mem::size_of::<Unweighted>() == 0);
    assert!(mem::size_of::<Weighted>() == 0);

    // Unweighted rows store bare positions.
    assert!(mem::size_of::<<Unweighted as EdgePolicy>::Edge>() == mem::size_of::<usize>());
};
