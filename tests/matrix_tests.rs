//! Integration tests for `Matrix` and the generic row operations.

use stratum::collections::matrix::{apply_row_add_scaled, apply_row_scale, apply_row_swap};
use stratum::{Error, Fill, Mat2x2, Matrix, MatrixKind, VecN};

#[test]
fn test_diagonal_fill_then_write() {
    // [1 2]
    // [2 1]
    let mut square_1 = Mat2x2::<i32>::diagonal(1);
    square_1[(0, 1)] = 2;
    square_1[(1, 0)] = 2;

    assert!(square_1.is_square());
    assert_eq!(square_1.area(), 4);
    assert_eq!(square_1.into_rows(), [[1, 2], [2, 1]]);
}

#[test]
fn test_equality_is_cellwise() {
    let filled = Mat2x2::<i32>::filled(3);
    let diagonal = Mat2x2::<i32>::diagonal(1);
    assert_ne!(filled, diagonal);
    assert_eq!(filled, Matrix::from_rows([[3, 3], [3, 3]]));
    assert_eq!(filled, filled);
}

#[test]
fn test_chop_column_of_filled_matrix() {
    let square_2 = Mat2x2::<i32>::filled(3);
    let column = square_2.chop::<0, 0, 2, 1>().unwrap();
    assert_eq!(column, VecN::<i32, 2>::filled(3));

    // Chopping a diagonal matrix keeps the zero below the diagonal.
    let diagonal = Mat2x2::<i32>::diagonal(3);
    assert_eq!(diagonal.chop::<0, 0, 2, 1>().unwrap(), VecN::<i32, 2>::diagonal(3));
}

#[test]
fn test_vector_addition_after_chop() {
    let mut column = Mat2x2::<i32>::filled(3).chop::<0, 0, 2, 1>().unwrap();

    // [[2], [0]]
    let mut extra = VecN::<i32, 2>::diagonal(1);
    extra[(1, 0)] = 0;
    extra *= 2;

    let mut expected = VecN::<i32, 2>::zeroed();
    expected[(0, 0)] = 5;
    expected[(1, 0)] = 3;

    column += extra;
    assert_eq!(column, expected);
}

#[test]
fn test_product_shapes() {
    let left = Matrix::from_rows([[1, 0, 2], [-1, 3, 1]]);
    let right = Matrix::from_rows([[3, 1], [2, 1], [1, 0]]);

    let product = left * right;
    assert_eq!(product.into_rows(), [[5, 1], [4, 2]]);
    assert!(product.is_square());

    let incompatible = Mat2x2::<i32>::identity();
    assert_eq!(
        left.try_multiply(&incompatible),
        Err(Error::DimensionMismatch {
            left_rows: 2,
            left_cols: 3,
            right_rows: 2,
            right_cols: 2,
        })
    );
}

#[test]
fn test_checked_and_unchecked_access() {
    let mut m = Matrix::<u16, 3, 2>::new(Fill::Zeroed);
    *m.at_mut(2, 1).unwrap() = 7;
    assert_eq!(m[(2, 1)], 7);
    assert!(matches!(m.at(3, 0), Err(Error::OutOfBounds { row: 3, .. })));
}

#[test]
#[should_panic]
fn test_unchecked_access_panics_out_of_range() {
    let m = Mat2x2::<i32>::zeroed();
    let _ = m[(2, 0)];
}

#[test]
fn test_gaussian_step_through_row_operations() {
    // Eliminate below the first pivot, then normalize the second row.
    let mut m = Matrix::from_rows([[2.0, 1.0], [4.0, 6.0]]);
    apply_row_add_scaled(&mut m, 0, 1, -2.0).unwrap();
    apply_row_scale(&mut m, 1, 0.25).unwrap();
    assert_eq!(m.into_rows(), [[2.0, 1.0], [0.0, 1.0]]);

    apply_row_swap(&mut m, 0, 1).unwrap();
    assert_eq!(m.into_rows(), [[0.0, 1.0], [2.0, 1.0]]);
    assert_eq!(
        apply_row_swap(&mut m, 0, 4),
        Err(Error::RowOutOfBounds { row: 4, rows: 2 })
    );
}

#[test]
fn test_generic_over_matrix_kind() {
    fn trace<M>(m: &M) -> i64
    where
        M: MatrixKind<Scalar = i64>,
    {
        (0..M::ROWS.min(M::COLS))
            .filter_map(|i| m.at(i, i).ok())
            .sum()
    }

    let m = Matrix::from_rows([[1i64, 9, 9], [9, 2, 9], [9, 9, 3]]);
    assert_eq!(trace(&m), 6);
    assert_eq!(trace(&Matrix::<i64, 2, 4>::identity()), 2);
}
