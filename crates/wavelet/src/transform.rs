//! Name-dispatched wavelet transforms over the process-wide registry.

use ndarray::{Array1, Array2, ArrayBase, Data, Dimension};
use num_complex::Complex64;
use ortho_basis::Sample;

use crate::error::WaveletError;
use crate::family::get_family;

/// Returns the wavelet coefficients of a 1-dimensional signal.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`WaveletError::FamilyNotImplemented`] | `family` is not registered |
/// | [`WaveletError::Basis`] | `signal` is not 1-D or is empty |
/// | [`WaveletError::NotPowerOfTwo`] | Haar with a non-dyadic length |
///
/// # Example
///
/// ```
/// use ndarray::array;
/// use ortho_wavelet::analyze;
///
/// let coeffs = analyze(&array![1.0, 1.0, 1.0, 1.0], "Haar").unwrap();
/// assert!((coeffs[0].re - 2.0).abs() < 1e-12);
/// ```
#[tracing::instrument(level = "debug", skip(signal), fields(shape = ?signal.shape()))]
pub fn analyze<S, D>(signal: &ArrayBase<S, D>, family: &str) -> Result<Array1<Complex64>, WaveletError>
where
    S: Data,
    S::Elem: Sample,
    D: Dimension,
{
    get_family(family)?.analyze(signal)
}

/// Returns the 1-dimensional signal from its wavelet coefficients.
///
/// # Errors
///
/// Same as [`analyze`].
#[tracing::instrument(level = "debug", skip(coefficients), fields(shape = ?coefficients.shape()))]
pub fn synthesize<S, D>(coefficients: &ArrayBase<S, D>, family: &str) -> Result<Array1<Complex64>, WaveletError>
where
    S: Data,
    S::Elem: Sample,
    D: Dimension,
{
    get_family(family)?.synthesize(coefficients)
}

/// Returns the wavelet coefficients of a 2-dimensional signal.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`WaveletError::FamilyNotImplemented`] | `family` is not registered |
/// | [`WaveletError::Basis`] | `signal` is not 2-D or has an empty axis |
/// | [`WaveletError::NotPowerOfTwo`] | Haar with a non-dyadic axis |
#[tracing::instrument(level = "debug", skip(signal), fields(shape = ?signal.shape()))]
pub fn analyze_2d<S, D>(signal: &ArrayBase<S, D>, family: &str) -> Result<Array2<Complex64>, WaveletError>
where
    S: Data,
    S::Elem: Sample,
    D: Dimension,
{
    get_family(family)?.analyze_2d(signal)
}

/// Returns the 2-dimensional signal from its wavelet coefficients.
///
/// # Errors
///
/// Same as [`analyze_2d`].
#[tracing::instrument(level = "debug", skip(coefficients), fields(shape = ?coefficients.shape()))]
pub fn synthesize_2d<S, D>(coefficients: &ArrayBase<S, D>, family: &str) -> Result<Array2<Complex64>, WaveletError>
where
    S: Data,
    S::Elem: Sample,
    D: Dimension,
{
    get_family(family)?.synthesize_2d(coefficients)
}

/// Returns the per-dilation amplitude grid (`m x (log2(m) + 1)`) of a
/// 1-dimensional signal.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`WaveletError::FamilyNotImplemented`] | `family` is not registered |
/// | [`WaveletError::CompressionUnsupported`] | family has no compressor |
/// | [`WaveletError::Basis`] | `signal` is not 1-D or is empty |
#[tracing::instrument(level = "debug", skip(signal), fields(shape = ?signal.shape()))]
pub fn heatmap<S, D>(signal: &ArrayBase<S, D>, family: &str) -> Result<Array2<Complex64>, WaveletError>
where
    S: Data,
    S::Elem: Sample,
    D: Dimension,
{
    get_family(family)?.heatmap(signal)
}
