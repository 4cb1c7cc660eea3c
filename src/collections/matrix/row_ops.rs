//! Elementary row operations, generic over [`MatrixKind`].
//!
//! Every operation validates its row indices first and leaves the matrix
//! untouched when one is out of range. Column indices always lie in
//! `0..COLS`, so the per-cell `at`/`at_mut` calls cannot fail afterwards.

use core::ops::{AddAssign, Mul, MulAssign};

use super::MatrixKind;
use crate::error::{Error, Result};

#[inline]
fn check_row<M: MatrixKind>(row: usize) -> Result<()> {
    if row < M::ROWS {
        Ok(())
    } else {
        Err(Error::RowOutOfBounds { row, rows: M::ROWS })
    }
}

/// Multiplies every cell of `row` by `factor`.
///
/// # Errors
/// Returns [`Error::RowOutOfBounds`] if `row` is outside the matrix.
pub fn apply_row_scale<M>(matrix: &mut M, row: usize, factor: M::Scalar) -> Result<()>
where
    M: MatrixKind,
    M::Scalar: Clone + MulAssign,
{
    check_row::<M>(row)?;
    for col in 0..M::COLS {
        *matrix.at_mut(row, col)? *= factor.clone();
    }
    Ok(())
}

/// Adds row `from` into row `to`.
///
/// # Errors
/// Returns [`Error::RowOutOfBounds`] if either row is outside the matrix.
pub fn apply_row_add<M>(matrix: &mut M, from: usize, to: usize) -> Result<()>
where
    M: MatrixKind,
    M::Scalar: Clone + AddAssign,
{
    check_row::<M>(from)?;
    check_row::<M>(to)?;
    for col in 0..M::COLS {
        let value = matrix.at(from, col)?.clone();
        *matrix.at_mut(to, col)? += value;
    }
    Ok(())
}

/// Adds `factor` times row `from` into row `to`.
///
/// # Errors
/// Returns [`Error::RowOutOfBounds`] if either row is outside the matrix.
pub fn apply_row_add_scaled<M>(
    matrix: &mut M,
    from: usize,
    to: usize,
    factor: M::Scalar,
) -> Result<()>
where
    M: MatrixKind,
    M::Scalar: Clone + Mul<Output = M::Scalar> + AddAssign,
{
    check_row::<M>(from)?;
    check_row::<M>(to)?;
    for col in 0..M::COLS {
        let value = factor.clone() * matrix.at(from, col)?.clone();
        *matrix.at_mut(to, col)? += value;
    }
    Ok(())
}

/// Swaps rows `a` and `b`.
///
/// # Errors
/// Returns [`Error::RowOutOfBounds`] if either row is outside the matrix.
pub fn apply_row_swap<M>(matrix: &mut M, a: usize, b: usize) -> Result<()>
where
    M: MatrixKind,
    M::Scalar: Clone,
{
    check_row::<M>(a)?;
    check_row::<M>(b)?;
    if a == b {
        return Ok(());
    }
    for col in 0..M::COLS {
        let upper = matrix.at(a, col)?.clone();
        let lower = core::mem::replace(matrix.at_mut(b, col)?, upper);
        *matrix.at_mut(a, col)? = lower;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collections::matrix::Matrix;

    #[test]
    fn scale_touches_one_row() {
        let mut m = Matrix::from_rows([[1, 2], [3, 4]]);
        apply_row_scale(&mut m, 1, 10).unwrap();
        assert_eq!(m.into_rows(), [[1, 2], [30, 40]]);
    }

    #[test]
    fn add_and_add_scaled() {
        let mut m = Matrix::from_rows([[1, 2], [3, 4]]);
        apply_row_add(&mut m, 0, 1).unwrap();
        assert_eq!(m.into_rows(), [[1, 2], [4, 6]]);

        apply_row_add_scaled(&mut m, 0, 1, -4).unwrap();
        assert_eq!(m.into_rows(), [[1, 2], [0, -2]]);
    }

    #[test]
    fn swap_exchanges_rows() {
        let mut m = Matrix::from_rows([[1, 2], [3, 4], [5, 6]]);
        apply_row_swap(&mut m, 0, 2).unwrap();
        assert_eq!(m.into_rows(), [[5, 6], [3, 4], [1, 2]]);
    }

    #[test]
    fn out_of_range_rows_leave_the_matrix_untouched() {
        let mut m = Matrix::from_rows([[1, 2], [3, 4]]);
        assert_eq!(
            apply_row_add(&mut m, 0, 2),
            Err(Error::RowOutOfBounds { row: 2, rows: 2 })
        );
        assert!(apply_row_scale(&mut m, 7, 0).is_err());
        assert_eq!(m.into_rows(), [[1, 2], [3, 4]]);
    }
}
