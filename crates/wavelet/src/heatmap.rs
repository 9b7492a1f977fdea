//! Per-dilation compression of dyadic wavelet matrices for plotting.
//!
//! Columns of a dyadic matrix that share a span have disjoint supports, so
//! summing them collapses each dilation level into one dense column without
//! mixing values. Output column 0 is the constant level, column `c >= 1` the
//! level of span `m / 2^(c-1)`.

use ndarray::{Array2, ArrayView1, ArrayView2, Axis, LinalgScalar, s};
use num_complex::Complex64;
use ortho_basis::BasisError;

use crate::error::{WaveletError, ensure_power_of_two};

/// Number of dilation levels (output columns) for an `m x m` dyadic matrix.
///
/// Returns 0 for `m == 0`.
pub fn dilation_levels(m: usize) -> usize {
    m.checked_ilog2().map_or(0, |l| l as usize + 1)
}

/// Collapses an `m x m` dyadic wavelet matrix into `m x (log2(m) + 1)`.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`BasisError::NotSquare`] | the matrix is not square |
/// | [`WaveletError::NotPowerOfTwo`] | `m` is not a power of two |
pub fn compress_dyadic<A>(matrix: ArrayView2<'_, A>) -> Result<Array2<A>, WaveletError>
where
    A: LinalgScalar,
{
    let (rows, cols) = matrix.dim();
    if rows != cols {
        return Err(BasisError::NotSquare { rows, cols }.into());
    }
    ensure_power_of_two("signal length", rows)?;

    let levels = dilation_levels(rows);
    let mut out = Array2::zeros((rows, levels));
    out.column_mut(0).assign(&matrix.column(0));
    for level in 1..levels {
        let lo = 1usize << (level - 1);
        let hi = 1usize << level;
        let collapsed = matrix.slice(s![.., lo..hi]).sum_axis(Axis(1));
        out.column_mut(level).assign(&collapsed);
    }
    Ok(out)
}

/// [`compress_dyadic`] specialised to complex matrices, usable as a family
/// compressor.
pub fn compress_complex(matrix: ArrayView2<'_, Complex64>) -> Result<Array2<Complex64>, WaveletError> {
    compress_dyadic(matrix)
}

/// Scales each column of `matrix` by its coefficient.
///
/// Row `i` of the result lists the contribution of every basis vector to
/// sample `i`, so row sums give back the synthesised signal.
///
/// # Errors
///
/// Returns [`BasisError::ShapeMismatch`] if the coefficient count differs
/// from the column count.
pub fn weight_columns(
    matrix: ArrayView2<'_, Complex64>,
    coefficients: ArrayView1<'_, Complex64>,
) -> Result<Array2<Complex64>, WaveletError> {
    let (rows, cols) = matrix.dim();
    if coefficients.len() != cols {
        return Err(BasisError::ShapeMismatch {
            rows,
            cols,
            len: coefficients.len(),
        }
        .into());
    }
    Ok(&matrix * &coefficients.insert_axis(Axis(0)))
}
