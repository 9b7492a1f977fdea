//! Fourier analysis and synthesis of 1-D signals and 2-D grids.
//!
//! Analysis multiplies by [`inverse_fourier_matrix`]; synthesis multiplies by
//! [`fourier_matrix`]. 2-D variants apply the matrix on both sides:
//! `M_rows · grid · M_cols`.

use ndarray::{Array1, Array2, ArrayBase, Data, Dimension};
use num_complex::Complex64;
use ortho_basis::{BasisError, Sample, transform_1d, transform_2d};

use crate::matrix::{fourier_matrix, inverse_fourier_matrix};

/// Returns the Fourier coefficients of a 1-dimensional signal.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`BasisError::DimensionMismatch`] | `signal` is not 1-D |
/// | [`BasisError::EmptySignal`] | `signal` is empty |
///
/// # Example
///
/// ```
/// use ndarray::array;
/// use ortho_fourier::analyze;
///
/// let coeffs = analyze(&array![1.0, 0.0, 0.0, 0.0]).unwrap();
/// assert!((coeffs[3].re - 0.5).abs() < 1e-12);
/// ```
#[tracing::instrument(level = "debug", skip_all, fields(shape = ?signal.shape()))]
pub fn analyze<S, D>(signal: &ArrayBase<S, D>) -> Result<Array1<Complex64>, BasisError>
where
    S: Data,
    S::Elem: Sample,
    D: Dimension,
{
    transform_1d(signal, inverse_fourier_matrix)
}

/// Returns the 1-dimensional signal from its Fourier coefficients.
///
/// # Errors
///
/// Same as [`analyze`].
#[tracing::instrument(level = "debug", skip_all, fields(shape = ?coefficients.shape()))]
pub fn synthesize<S, D>(coefficients: &ArrayBase<S, D>) -> Result<Array1<Complex64>, BasisError>
where
    S: Data,
    S::Elem: Sample,
    D: Dimension,
{
    transform_1d(coefficients, fourier_matrix)
}

/// Returns the Fourier coefficients of a 2-dimensional signal.
///
/// Rows and columns may have different lengths.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`BasisError::DimensionMismatch`] | `signal` is not 2-D |
/// | [`BasisError::EmptySignal`] | either axis is empty |
#[tracing::instrument(level = "debug", skip_all, fields(shape = ?signal.shape()))]
pub fn analyze_2d<S, D>(signal: &ArrayBase<S, D>) -> Result<Array2<Complex64>, BasisError>
where
    S: Data,
    S::Elem: Sample,
    D: Dimension,
{
    transform_2d(signal, inverse_fourier_matrix)
}

/// Returns the 2-dimensional signal from its Fourier coefficients.
///
/// # Errors
///
/// Same as [`analyze_2d`].
#[tracing::instrument(level = "debug", skip_all, fields(shape = ?coefficients.shape()))]
pub fn synthesize_2d<S, D>(coefficients: &ArrayBase<S, D>) -> Result<Array2<Complex64>, BasisError>
where
    S: Data,
    S::Elem: Sample,
    D: Dimension,
{
    transform_2d(coefficients, fourier_matrix)
}
