//! Arithmetic on [`Matrix`].
//!
//! Same-shape `+`/`-` (and their assigning forms) and scalar `*=` work cell by
//! cell. The matrix product is available three ways:
//! - `a * b`, which only type-checks for compatible shapes;
//! - [`Matrix::try_multiply`], which accepts any shapes and reports
//!   [`Error::DimensionMismatch`] at run time;
//! - [`Matrix::par_multiply`] (feature `parallel`), which computes output rows
//!   on the rayon pool.

use core::array;
use core::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

use num_traits::Zero;

use super::Matrix;
use crate::error::{Error, Result};
use crate::trace::trace_event;

impl<T, const R: usize, const C: usize> Matrix<T, R, C>
where
    T: Copy + Zero + Mul<Output = T>,
{
    /// Dot product of row `row` of `self` with column `col` of `rhs`.
    ///
    /// `rhs` must have `C` rows; callers pass in-range `row` and `col`.
    #[inline]
    fn dot<const R2: usize, const C2: usize>(
        &self,
        row: usize,
        rhs: &Matrix<T, R2, C2>,
        col: usize,
    ) -> T {
        (0..C).fold(T::zero(), |acc, k| acc + self.cells[row][k] * rhs.cells[k][col])
    }

    /// Returns the matrix product `self * rhs`.
    pub fn product<const C2: usize>(&self, rhs: &Matrix<T, C, C2>) -> Matrix<T, R, C2> {
        Matrix {
            cells: array::from_fn(|i| array::from_fn(|j| self.dot(i, rhs, j))),
        }
    }

    /// Returns the matrix product `self * rhs` for shapes known only at run time.
    ///
    /// # Errors
    /// Returns [`Error::DimensionMismatch`] if `C != R2`.
    pub fn try_multiply<const R2: usize, const C2: usize>(
        &self,
        rhs: &Matrix<T, R2, C2>,
    ) -> Result<Matrix<T, R, C2>> {
        if C != R2 {
            trace_event!(left_cols = C, right_rows = R2, "rejected matrix product");
            return Err(Error::DimensionMismatch {
                left_rows: R,
                left_cols: C,
                right_rows: R2,
                right_cols: C2,
            });
        }

        Ok(Matrix {
            cells: array::from_fn(|i| array::from_fn(|j| self.dot(i, rhs, j))),
        })
    }

    /// Returns the matrix product `self * rhs`, one output row per rayon task.
    #[cfg(feature = "parallel")]
    pub fn par_multiply<const C2: usize>(&self, rhs: &Matrix<T, C, C2>) -> Matrix<T, R, C2>
    where
        T: Send + Sync,
    {
        use rayon::prelude::*;

        let mut out = Matrix::<T, R, C2>::zeroed();
        out.cells
            .as_mut_slice()
            .par_iter_mut()
            .enumerate()
            .for_each(|(i, row)| {
                for (j, cell) in row.iter_mut().enumerate() {
                    *cell = self.dot(i, rhs, j);
                }
            });
        out
    }
}

impl<T, const R: usize, const C: usize> Matrix<T, R, C>
where
    T: Clone + MulAssign,
{
    /// Returns `self` with every cell multiplied by `factor`.
    #[must_use]
    pub fn scaled(mut self, factor: T) -> Self {
        self *= factor;
        self
    }
}

impl<T, const R: usize, const K: usize, const C2: usize> Mul<Matrix<T, K, C2>> for Matrix<T, R, K>
where
    T: Copy + Zero + Mul<Output = T>,
{
    type Output = Matrix<T, R, C2>;

    fn mul(self, rhs: Matrix<T, K, C2>) -> Self::Output {
        self.product(&rhs)
    }
}

impl<'a, T, const R: usize, const K: usize, const C2: usize> Mul<&'a Matrix<T, K, C2>>
    for &'a Matrix<T, R, K>
where
    T: Copy + Zero + Mul<Output = T>,
{
    type Output = Matrix<T, R, C2>;

    fn mul(self, rhs: &'a Matrix<T, K, C2>) -> Self::Output {
        self.product(rhs)
    }
}

impl<T: Clone + AddAssign, const R: usize, const C: usize> AddAssign<&Matrix<T, R, C>> for Matrix<T, R, C> {
    fn add_assign(&mut self, rhs: &Matrix<T, R, C>) {
        for (lhs_row, rhs_row) in self.cells.iter_mut().zip(&rhs.cells) {
            for (lhs, rhs) in lhs_row.iter_mut().zip(rhs_row) {
                *lhs += rhs.clone();
            }
        }
    }
}

impl<T: Clone + AddAssign, const R: usize, const C: usize> AddAssign for Matrix<T, R, C> {
    fn add_assign(&mut self, rhs: Self) {
        *self += &rhs;
    }
}

impl<T: Clone + SubAssign, const R: usize, const C: usize> SubAssign<&Matrix<T, R, C>> for Matrix<T, R, C> {
    fn sub_assign(&mut self, rhs: &Matrix<T, R, C>) {
        for (lhs_row, rhs_row) in self.cells.iter_mut().zip(&rhs.cells) {
            for (lhs, rhs) in lhs_row.iter_mut().zip(rhs_row) {
                *lhs -= rhs.clone();
            }
        }
    }
}

impl<T: Clone + SubAssign, const R: usize, const C: usize> SubAssign for Matrix<T, R, C> {
    fn sub_assign(&mut self, rhs: Self) {
        *self -= &rhs;
    }
}

impl<T: Clone + MulAssign, const R: usize, const C: usize> MulAssign<T> for Matrix<T, R, C> {
    fn mul_assign(&mut self, factor: T) {
        for cell in self.iter_mut() {
            *cell *= factor.clone();
        }
    }
}

impl<T: Clone + AddAssign, const R: usize, const C: usize> Add for Matrix<T, R, C> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += &rhs;
        self
    }
}

impl<T: Clone + SubAssign, const R: usize, const C: usize> Sub for Matrix<T, R, C> {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self {
        self -= &rhs;
        self
    }
}
