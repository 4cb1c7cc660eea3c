//! Crate-wide error type.
//!
//! Only programmer errors are reported here: out-of-range indices, regions that
//! do not fit, incompatible product shapes. Lookup misses on a graph (duplicate
//! items, missing endpoints) are ordinary outcomes and are reported as `bool`
//! or empty results instead.

/// Errors raised by matrix and graph accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A cell index is outside a matrix.
    #[error("cell ({row}, {col}) is out of bounds for a {rows}x{cols} matrix")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Row count of the matrix.
        rows: usize,
        /// Column count of the matrix.
        cols: usize,
    },

    /// A sub-matrix region does not fit inside its source matrix.
    #[error(
        "a {sub_rows}x{sub_cols} region at ({row}, {col}) does not fit a {rows}x{cols} matrix"
    )]
    RegionOutOfBounds {
        /// First row of the region.
        row: usize,
        /// First column of the region.
        col: usize,
        /// Rows in the region.
        sub_rows: usize,
        /// Columns in the region.
        sub_cols: usize,
        /// Row count of the source matrix.
        rows: usize,
        /// Column count of the source matrix.
        cols: usize,
    },

    /// A row index passed to a row operation is outside the matrix.
    #[error("row {row} is out of bounds for a matrix with {rows} rows")]
    RowOutOfBounds {
        /// Requested row.
        row: usize,
        /// Row count of the matrix.
        rows: usize,
    },

    /// The left operand's column count differs from the right operand's row count.
    #[error(
        "cannot multiply a {left_rows}x{left_cols} matrix by a {right_rows}x{right_cols} matrix"
    )]
    DimensionMismatch {
        /// Rows of the left operand.
        left_rows: usize,
        /// Columns of the left operand.
        left_cols: usize,
        /// Rows of the right operand.
        right_rows: usize,
        /// Columns of the right operand.
        right_cols: usize,
    },

    /// The graph holds no items.
    #[error("graph has no items")]
    EmptyGraph,
}

/// Shorthand for results carrying [`Error`].
pub type Result<T> = core::result::Result<T, Error>;
