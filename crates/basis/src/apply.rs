//! Application of basis matrices to 1-D signals and 2-D grids.
//!
//! A family only has to supply a matrix builder `n -> n x n`; the functions
//! here validate the input rank, request matrices of the right size and
//! multiply.

use ndarray::{Array1, Array2, ArrayBase, Data, Dimension};
use num_complex::Complex64;

use crate::error::BasisError;
use crate::sample::Sample;
use crate::shape::{as_grid, as_vector};

/// Multiplies `matrix · vector`.
///
/// # Errors
///
/// Returns [`BasisError::ShapeMismatch`] if the matrix column count differs
/// from the vector length.
pub fn apply_1d(
    matrix: &Array2<Complex64>,
    vector: &Array1<Complex64>,
) -> Result<Array1<Complex64>, BasisError> {
    let (rows, cols) = matrix.dim();
    if cols != vector.len() {
        return Err(BasisError::ShapeMismatch {
            rows,
            cols,
            len: vector.len(),
        });
    }
    Ok(matrix.dot(vector))
}

/// Multiplies `rows · grid · cols`, transforming both axes of the grid.
///
/// # Errors
///
/// Returns [`BasisError::ShapeMismatch`] if either matrix does not fit the
/// corresponding grid axis.
pub fn apply_2d(
    rows: &Array2<Complex64>,
    grid: &Array2<Complex64>,
    cols: &Array2<Complex64>,
) -> Result<Array2<Complex64>, BasisError> {
    let (n_rows, n_cols) = grid.dim();
    if rows.ncols() != n_rows {
        return Err(BasisError::ShapeMismatch {
            rows: rows.nrows(),
            cols: rows.ncols(),
            len: n_rows,
        });
    }
    if cols.nrows() != n_cols {
        return Err(BasisError::ShapeMismatch {
            rows: cols.nrows(),
            cols: cols.ncols(),
            len: n_cols,
        });
    }
    Ok(rows.dot(&grid.dot(cols)))
}

/// Transforms a 1-D signal with the matrix `build(signal.len())`.
///
/// The builder's error type only has to absorb [`BasisError`], so wavelet
/// families can report their own preconditions through the same call.
///
/// # Errors
///
/// Propagates the dimensionality guard of [`as_vector`] and any error from
/// `build`.
pub fn transform_1d<S, D, E, F>(signal: &ArrayBase<S, D>, build: F) -> Result<Array1<Complex64>, E>
where
    S: Data,
    S::Elem: Sample,
    D: Dimension,
    E: From<BasisError>,
    F: Fn(usize) -> Result<Array2<Complex64>, E>,
{
    let vector = as_vector(signal)?;
    let matrix = build(vector.len())?;
    Ok(apply_1d(&matrix, &vector)?)
}

/// Transforms a 2-D grid with `build(rows) · grid · build(cols)`.
///
/// # Errors
///
/// Propagates the dimensionality guard of [`as_grid`] and any error from
/// `build`.
pub fn transform_2d<S, D, E, F>(signal: &ArrayBase<S, D>, build: F) -> Result<Array2<Complex64>, E>
where
    S: Data,
    S::Elem: Sample,
    D: Dimension,
    E: From<BasisError>,
    F: Fn(usize) -> Result<Array2<Complex64>, E>,
{
    let grid = as_grid(signal)?;
    let (n_rows, n_cols) = grid.dim();
    let left = build(n_rows)?;
    let right = build(n_cols)?;
    Ok(apply_2d(&left, &grid, &right)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn c(re: f64) -> Complex64 {
        Complex64::new(re, 0.0)
    }

    fn identity(n: usize) -> Result<Array2<Complex64>, BasisError> {
        Ok(Array2::eye(n))
    }

    fn swap_builder(n: usize) -> Result<Array2<Complex64>, BasisError> {
        let mut m = Array2::zeros((n, n));
        for i in 0..n {
            m[[i, n - 1 - i]] = c(1.0);
        }
        Ok(m)
    }

    #[test]
    fn apply_1d_multiplies() {
        let m = array![[c(1.0), c(2.0)], [c(3.0), c(4.0)]];
        let v = array![c(1.0), c(1.0)];
        let out = apply_1d(&m, &v).unwrap();
        assert_eq!(out, array![c(3.0), c(7.0)]);
    }

    #[test]
    fn apply_1d_shape_mismatch() {
        let m: Array2<Complex64> = Array2::eye(3);
        let v = array![c(1.0), c(1.0)];
        assert_eq!(
            apply_1d(&m, &v).unwrap_err(),
            BasisError::ShapeMismatch {
                rows: 3,
                cols: 3,
                len: 2
            }
        );
    }

    #[test]
    fn apply_2d_transforms_both_axes() {
        let grid = array![[c(1.0), c(2.0), c(3.0)], [c(4.0), c(5.0), c(6.0)]];
        let out = apply_2d(&swap_builder(2).unwrap(), &grid, &swap_builder(3).unwrap()).unwrap();
        assert_eq!(
            out,
            array![[c(6.0), c(5.0), c(4.0)], [c(3.0), c(2.0), c(1.0)]]
        );
    }

    #[test]
    fn apply_2d_rejects_wrong_column_matrix() {
        let grid: Array2<Complex64> = Array2::zeros((2, 3));
        let err = apply_2d(&Array2::eye(2), &grid, &Array2::eye(2)).unwrap_err();
        assert!(matches!(err, BasisError::ShapeMismatch { len: 3, .. }));
    }

    #[test]
    fn transform_1d_uses_signal_length() {
        let out = transform_1d(&array![1.0, 2.0, 3.0], swap_builder).unwrap();
        assert_eq!(out, array![c(3.0), c(2.0), c(1.0)]);
    }

    #[test]
    fn transform_1d_rejects_grid() {
        let err = transform_1d(&array![[1.0], [2.0]], identity).unwrap_err();
        assert_eq!(
            err,
            BasisError::DimensionMismatch {
                expected: 1,
                got: 2
            }
        );
    }

    #[test]
    fn transform_2d_rejects_vector() {
        let err = transform_2d(&array![1.0, 2.0], identity).unwrap_err();
        assert_eq!(
            err,
            BasisError::DimensionMismatch {
                expected: 2,
                got: 1
            }
        );
    }

    #[test]
    fn transform_2d_builder_error_propagates() {
        let err = transform_2d(&array![[1.0, 2.0]], |_| -> Result<Array2<Complex64>, BasisError> {
            Err(BasisError::ZeroDimension)
        })
        .unwrap_err();
        assert_eq!(err, BasisError::ZeroDimension);
    }
}
