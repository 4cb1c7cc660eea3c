//! A dense 2D matrix whose dimensions are const generic parameters.
//!
//! Storage is a plain `[[T; C]; R]`, so a matrix is exactly as large as its
//! cells and lives wherever its owner puts it (stack, struct field, `Box`).
//! Shape errors that can be ruled out at compile time are: same-shape
//! arithmetic only accepts same-shape operands, and `a * b` only type-checks
//! when `a`'s column count equals `b`'s row count. Shapes that are only known
//! to be compatible at run time go through [`Matrix::try_multiply`].
//!
//! # Access discipline
//!
//! - `m[(row, col)]` is the fast path: the caller guarantees `row < R` and
//!   `col < C`, and the access panics otherwise.
//! - [`Matrix::at`] / [`Matrix::at_mut`] check both indices and return
//!   [`Error::OutOfBounds`].
//! - [`Matrix::get`] / [`Matrix::get_mut`] return `Option`.

mod kind;
mod ops;
mod row_ops;

pub use kind::MatrixKind;
pub use row_ops::{apply_row_add, apply_row_add_scaled, apply_row_scale, apply_row_swap};

use core::array;
use core::ops::{Index, IndexMut};

use num_traits::{One, Zero};

use crate::error::{Error, Result};

/// How [`Matrix::new`] initializes its cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Fill {
    /// Every cell is zero.
    #[default]
    Zeroed,
    /// One along the main diagonal, zero elsewhere.
    Identity,
}

/// A dense `R x C` matrix.
#[derive(Debug, Clone, Copy)]
pub struct Matrix<T, const R: usize, const C: usize> {
    cells: [[T; C]; R],
}

/// A 2x2 matrix.
pub type Mat2x2<T> = Matrix<T, 2, 2>;

/// A 3x3 matrix.
pub type Mat3x3<T> = Matrix<T, 3, 3>;

/// A column vector of `N` cells.
pub type VecN<T, const N: usize> = Matrix<T, N, 1>;

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Creates a matrix from row-major cells.
    #[inline]
    pub const fn from_rows(cells: [[T; C]; R]) -> Self {
        Self { cells }
    }

    /// Returns the cells, row-major.
    #[inline]
    pub fn into_rows(self) -> [[T; C]; R] {
        self.cells
    }

    /// Borrows the cells, row-major.
    #[inline]
    pub const fn as_rows(&self) -> &[[T; C]; R] {
        &self.cells
    }

    /// Returns the number of rows.
    #[inline(always)]
    pub const fn rows(&self) -> usize {
        R
    }

    /// Returns the number of columns.
    #[inline(always)]
    pub const fn cols(&self) -> usize {
        C
    }

    /// Returns `R * C`.
    #[inline(always)]
    pub const fn area(&self) -> usize {
        R * C
    }

    /// Returns `true` if `R == C`.
    #[inline(always)]
    pub const fn is_square(&self) -> bool {
        R == C
    }

    /// Returns a shared reference to the cell at (row, col).
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.cells.get(row)?.get(col)
    }

    /// Returns a mutable reference to the cell at (row, col).
    #[inline]
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.cells.get_mut(row)?.get_mut(col)
    }

    /// Checked access to the cell at (row, col).
    ///
    /// # Errors
    /// Returns [`Error::OutOfBounds`] if `row >= R` or `col >= C`.
    pub fn at(&self, row: usize, col: usize) -> Result<&T> {
        self.get(row, col).ok_or(Error::OutOfBounds {
            row,
            col,
            rows: R,
            cols: C,
        })
    }

    /// Checked mutable access to the cell at (row, col).
    ///
    /// # Errors
    /// Returns [`Error::OutOfBounds`] if `row >= R` or `col >= C`.
    pub fn at_mut(&mut self, row: usize, col: usize) -> Result<&mut T> {
        self.get_mut(row, col).ok_or(Error::OutOfBounds {
            row,
            col,
            rows: R,
            cols: C,
        })
    }

    /// Returns row `row`, if in range.
    #[inline]
    pub fn row(&self, row: usize) -> Option<&[T; C]> {
        self.cells.get(row)
    }

    /// Iterates over all cells, row-major.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.cells.iter().flatten()
    }

    /// Iterates mutably over all cells, row-major.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> + '_ {
        self.cells.iter_mut().flatten()
    }
}

impl<T: Clone, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Creates a matrix with `value` in every cell.
    pub fn filled(value: T) -> Self {
        Self {
            cells: array::from_fn(|_| array::from_fn(|_| value.clone())),
        }
    }

    /// Copies the `SR x SC` block whose top-left cell is `(R0, C0)`.
    ///
    /// ```
    /// use stratum::Matrix;
    ///
    /// let m = Matrix::from_rows([[1, 2, 3], [4, 5, 6]]);
    /// let block = m.chop::<0, 1, 2, 2>().unwrap();
    /// assert_eq!(block, Matrix::from_rows([[2, 3], [5, 6]]));
    /// ```
    ///
    /// # Errors
    /// Returns [`Error::RegionOutOfBounds`] unless `R0 + SR <= R` and
    /// `C0 + SC <= C`.
    pub fn chop<const R0: usize, const C0: usize, const SR: usize, const SC: usize>(
        &self,
    ) -> Result<Matrix<T, SR, SC>> {
        let fits_rows = R0.checked_add(SR).is_some_and(|end| end <= R);
        let fits_cols = C0.checked_add(SC).is_some_and(|end| end <= C);
        if !(fits_rows && fits_cols) {
            return Err(Error::RegionOutOfBounds {
                row: R0,
                col: C0,
                sub_rows: SR,
                sub_cols: SC,
                rows: R,
                cols: C,
            });
        }

        Ok(Matrix {
            cells: array::from_fn(|r| array::from_fn(|c| self.cells[R0 + r][C0 + c].clone())),
        })
    }

    /// Returns the `C x R` transpose.
    pub fn transpose(&self) -> Matrix<T, C, R> {
        Matrix {
            cells: array::from_fn(|c| array::from_fn(|r| self.cells[r][c].clone())),
        }
    }
}

impl<T: Zero + Clone, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Creates a matrix of zeros.
    pub fn zeroed() -> Self {
        Self::filled(T::zero())
    }

    /// Creates a matrix with `value` on the main diagonal and zero elsewhere.
    ///
    /// On non-square shapes the diagonal runs for `min(R, C)` cells.
    pub fn diagonal(value: T) -> Self {
        let mut matrix = Self::zeroed();
        for i in 0..R.min(C) {
            matrix.cells[i][i] = value.clone();
        }
        matrix
    }
}

impl<T: Zero + One + Clone, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Creates a matrix initialized according to `fill`.
    pub fn new(fill: Fill) -> Self {
        match fill {
            Fill::Zeroed => Self::zeroed(),
            Fill::Identity => Self::identity(),
        }
    }

    /// Creates the identity matrix (ones on the main diagonal).
    pub fn identity() -> Self {
        Self::diagonal(T::one())
    }
}

impl<T: Zero + Clone, const R: usize, const C: usize> Default for Matrix<T, R, C> {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl<T, const R: usize, const C: usize> From<[[T; C]; R]> for Matrix<T, R, C> {
    fn from(cells: [[T; C]; R]) -> Self {
        Self { cells }
    }
}

impl<T, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;

    /// # Panics
    /// Panics if `row >= R` or `col >= C`.
    #[inline(always)]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.cells[row][col]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
    /// # Panics
    /// Panics if `row >= R` or `col >= C`.
    #[inline(always)]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.cells[row][col]
    }
}

/// Matrices are equal iff their shapes match and every cell is equal.
impl<T, const R: usize, const C: usize, const R2: usize, const C2: usize>
    PartialEq<Matrix<T, R2, C2>> for Matrix<T, R, C>
where
    T: PartialEq,
{
    fn eq(&self, other: &Matrix<T, R2, C2>) -> bool {
        if R != R2 || C != C2 {
            return false;
        }
        if core::ptr::eq(self.cells.as_ptr().cast::<T>(), other.cells.as_ptr().cast::<T>()) {
            return true;
        }
        self.iter().eq(other.iter())
    }
}

impl<T: Eq, const R: usize, const C: usize> Eq for Matrix<T, R, C> {}
