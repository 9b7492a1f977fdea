//! Small dense complex linear algebra used to verify basis matrices.
//!
//! Basis matrices are inverted through their conjugate transpose; the
//! Gauss-Jordan inverse here exists to check that shortcut numerically.

use ndarray::{Array2, ArrayBase, Data, Dimension, Zip};
use num_complex::Complex64;
use tracing::debug;

use crate::error::BasisError;

/// Returns the conjugate transpose `Mᴴ`.
pub fn conjugate_transpose<S>(matrix: &ArrayBase<S, ndarray::Ix2>) -> Array2<Complex64>
where
    S: Data<Elem = Complex64>,
{
    matrix.t().mapv(|z| z.conj())
}

/// Inverts a square matrix by Gauss-Jordan elimination with partial pivoting.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`BasisError::NotSquare`] | `rows != cols` |
/// | [`BasisError::ZeroDimension`] | the matrix is `0 x 0` |
/// | [`BasisError::Singular`] | a pivot vanishes below `1e-12` |
pub fn invert<S>(matrix: &ArrayBase<S, ndarray::Ix2>) -> Result<Array2<Complex64>, BasisError>
where
    S: Data<Elem = Complex64>,
{
    let (rows, cols) = matrix.dim();
    if rows != cols {
        return Err(BasisError::NotSquare { rows, cols });
    }
    if rows == 0 {
        return Err(BasisError::ZeroDimension);
    }
    let n = rows;
    let mut a = matrix.to_owned();
    let mut inv: Array2<Complex64> = Array2::eye(n);

    for col in 0..n {
        // Partial pivoting: largest modulus at or below the diagonal.
        let mut pivot = col;
        let mut best = a[[col, col]].norm();
        for r in col + 1..n {
            let candidate = a[[r, col]].norm();
            if candidate > best {
                best = candidate;
                pivot = r;
            }
        }
        if best < 1e-12 {
            debug!(col, best, "pivot vanished");
            return Err(BasisError::Singular);
        }
        if pivot != col {
            for j in 0..n {
                a.swap([col, j], [pivot, j]);
                inv.swap([col, j], [pivot, j]);
            }
        }

        let scale = a[[col, col]].inv();
        for j in 0..n {
            a[[col, j]] *= scale;
            inv[[col, j]] *= scale;
        }

        for r in 0..n {
            if r == col {
                continue;
            }
            let factor = a[[r, col]];
            if factor == Complex64::new(0.0, 0.0) {
                continue;
            }
            for j in 0..n {
                let a_cj = a[[col, j]];
                let inv_cj = inv[[col, j]];
                a[[r, j]] -= factor * a_cj;
                inv[[r, j]] -= factor * inv_cj;
            }
        }
    }
    Ok(inv)
}

/// Largest elementwise modulus of `a - b`.
///
/// Returns `f64::INFINITY` when the shapes differ, so a shape error never
/// passes a tolerance check.
pub fn max_deviation<S1, S2, D>(a: &ArrayBase<S1, D>, b: &ArrayBase<S2, D>) -> f64
where
    S1: Data<Elem = Complex64>,
    S2: Data<Elem = Complex64>,
    D: Dimension,
{
    if a.shape() != b.shape() {
        return f64::INFINITY;
    }
    let mut worst = 0.0_f64;
    Zip::from(a).and(b).for_each(|x, y| {
        worst = worst.max((x - y).norm());
    });
    worst
}

/// Orthonormality residual `max|M·Mᴴ - I|` of a square matrix.
///
/// # Errors
///
/// Returns [`BasisError::NotSquare`] for a non-square matrix.
pub fn orthonormality_residual<S>(matrix: &ArrayBase<S, ndarray::Ix2>) -> Result<f64, BasisError>
where
    S: Data<Elem = Complex64>,
{
    let (rows, cols) = matrix.dim();
    if rows != cols {
        return Err(BasisError::NotSquare { rows, cols });
    }
    let product = matrix.dot(&conjugate_transpose(matrix));
    let identity: Array2<Complex64> = Array2::eye(rows);
    Ok(max_deviation(&product, &identity))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    #[test]
    fn conjugate_transpose_swaps_and_conjugates() {
        let m = array![[c(1.0, 1.0), c(2.0, 0.0)], [c(0.0, -3.0), c(4.0, 2.0)]];
        let h = conjugate_transpose(&m);
        assert_eq!(h[[0, 1]], c(0.0, 3.0));
        assert_eq!(h[[1, 0]], c(2.0, 0.0));
        assert_eq!(h[[1, 1]], c(4.0, -2.0));
    }

    #[test]
    fn invert_two_by_two() {
        let m = array![[c(4.0, 0.0), c(7.0, 0.0)], [c(2.0, 0.0), c(6.0, 0.0)]];
        let inv = invert(&m).unwrap();
        let expected = array![[c(0.6, 0.0), c(-0.7, 0.0)], [c(-0.2, 0.0), c(0.4, 0.0)]];
        assert!(max_deviation(&inv, &expected) < 1e-12);
    }

    #[test]
    fn invert_needs_pivoting() {
        let m = array![[c(0.0, 0.0), c(1.0, 0.0)], [c(1.0, 0.0), c(0.0, 0.0)]];
        let inv = invert(&m).unwrap();
        assert!(max_deviation(&inv, &m) < 1e-12);
    }

    #[test]
    fn invert_complex_rotation() {
        let m = array![[c(0.0, 1.0), c(0.0, 0.0)], [c(0.0, 0.0), c(0.0, -1.0)]];
        let inv = invert(&m).unwrap();
        assert!(max_deviation(&inv, &conjugate_transpose(&m)) < 1e-12);
    }

    #[test]
    fn invert_singular() {
        let m = array![[c(1.0, 0.0), c(2.0, 0.0)], [c(2.0, 0.0), c(4.0, 0.0)]];
        assert_eq!(invert(&m).unwrap_err(), BasisError::Singular);
    }

    #[test]
    fn invert_not_square() {
        let m: Array2<Complex64> = Array2::zeros((2, 3));
        assert_eq!(
            invert(&m).unwrap_err(),
            BasisError::NotSquare { rows: 2, cols: 3 }
        );
    }

    #[test]
    fn max_deviation_shape_mismatch_is_infinite() {
        let a: Array2<Complex64> = Array2::zeros((2, 2));
        let b: Array2<Complex64> = Array2::zeros((2, 3));
        assert!(max_deviation(&a, &b).is_infinite());
    }

    #[test]
    fn residual_of_identity_is_zero() {
        let m: Array2<Complex64> = Array2::eye(5);
        assert_abs_diff_eq!(orthonormality_residual(&m).unwrap(), 0.0);
    }

    #[test]
    fn residual_of_scaled_identity() {
        let m: Array2<Complex64> = Array2::eye(3) * c(2.0, 0.0);
        assert_abs_diff_eq!(orthonormality_residual(&m).unwrap(), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn residual_uses_m_times_m_conjugate() {
        // M Mᴴ = [[4, 2], [2, 1]] while Mᴴ M = [[5, 0], [0, 0]].
        let m = array![[c(2.0, 0.0), c(0.0, 0.0)], [c(1.0, 0.0), c(0.0, 0.0)]];
        assert_abs_diff_eq!(orthonormality_residual(&m).unwrap(), 3.0, epsilon = 1e-12);
    }
}
