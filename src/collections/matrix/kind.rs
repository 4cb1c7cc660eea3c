//! The capability set generic matrix algorithms rely on.

use super::Matrix;
use crate::error::Result;

/// A fixed-shape, indexable matrix.
///
/// Algorithms such as the row operations in this module are written against
/// this trait rather than against [`Matrix`] directly. Implementors guarantee
/// that `at`/`at_mut` succeed for every `row < ROWS` and `col < COLS`.
pub trait MatrixKind {
    /// The cell type.
    type Scalar;

    /// Number of rows.
    const ROWS: usize;

    /// Number of columns.
    const COLS: usize;

    /// Returns `ROWS * COLS`.
    fn area(&self) -> usize {
        Self::ROWS * Self::COLS
    }

    /// Returns `true` if `ROWS == COLS`.
    fn is_square(&self) -> bool {
        Self::ROWS == Self::COLS
    }

    /// Checked access to the cell at (row, col).
    ///
    /// # Errors
    /// Returns [`Error::OutOfBounds`](crate::Error::OutOfBounds) outside the matrix.
    fn at(&self, row: usize, col: usize) -> Result<&Self::Scalar>;

    /// Checked mutable access to the cell at (row, col).
    ///
    /// # Errors
    /// Returns [`Error::OutOfBounds`](crate::Error::OutOfBounds) outside the matrix.
    fn at_mut(&mut self, row: usize, col: usize) -> Result<&mut Self::Scalar>;

    /// Copies the `SR x SC` block whose top-left cell is `(R0, C0)`.
    ///
    /// # Errors
    /// Returns [`Error::RegionOutOfBounds`](crate::Error::RegionOutOfBounds) if
    /// the block does not fit.
    fn chop<const R0: usize, const C0: usize, const SR: usize, const SC: usize>(
        &self,
    ) -> Result<Matrix<Self::Scalar, SR, SC>>
    where
        Self::Scalar: Clone;
}

impl<T, const R: usize, const C: usize> MatrixKind for Matrix<T, R, C> {
    type Scalar = T;

    const ROWS: usize = R;
    const COLS: usize = C;

    fn at(&self, row: usize, col: usize) -> Result<&T> {
        Matrix::at(self, row, col)
    }

    fn at_mut(&mut self, row: usize, col: usize) -> Result<&mut T> {
        Matrix::at_mut(self, row, col)
    }

    fn chop<const R0: usize, const C0: usize, const SR: usize, const SC: usize>(
        &self,
    ) -> Result<Matrix<T, SR, SC>>
    where
        T: Clone,
    {
        Matrix::chop::<R0, C0, SR, SC>(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn describe<M: MatrixKind>(m: &M) -> (usize, bool) {
        (m.area(), m.is_square())
    }

    #[test]
    fn matrix_exposes_its_shape() {
        let m = Matrix::<i32, 2, 3>::zeroed();
        assert_eq!(describe(&m), (6, false));
        assert_eq!(<Matrix<i32, 3, 3> as MatrixKind>::ROWS, 3);
        assert!(MatrixKind::at(&m, 1, 2).is_ok());
        assert!(MatrixKind::at(&m, 2, 0).is_err());
    }

    #[test]
    fn chop_through_the_trait() {
        fn top_left<M>(m: &M) -> Result<Matrix<M::Scalar, 1, 1>>
        where
            M: MatrixKind,
            M::Scalar: Clone,
        {
            m.chop::<0, 0, 1, 1>()
        }

        let m = Matrix::from_rows([[4, 5], [6, 7]]);
        assert_eq!(top_left(&m).map(Matrix::into_rows), Ok([[4]]));
    }
}
