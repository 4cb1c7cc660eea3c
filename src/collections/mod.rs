//! Fixed-shape collections.
//!
//! Collections are organized by data structure type:
//! - `matrix`: const-generic dense matrices and the algorithms generic over them

pub mod matrix;

// Re-export commonly used types from submodules
pub use matrix::{Fill, Mat2x2, Mat3x3, Matrix, MatrixKind, VecN};
