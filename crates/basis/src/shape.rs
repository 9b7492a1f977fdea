//! Dimensionality guard for transform inputs.
//!
//! Entry points accept arrays of any rank and check it at runtime, so a grid
//! handed to a 1-D transform is rejected instead of being flattened.

use ndarray::{Array1, Array2, ArrayBase, Data, Dimension, Ix1, Ix2};
use num_complex::Complex64;

use crate::error::BasisError;
use crate::sample::Sample;

/// Copies a rank-1 array into a complex vector.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`BasisError::DimensionMismatch`] | `signal.ndim() != 1` |
/// | [`BasisError::EmptySignal`] | `signal` has no elements |
pub fn as_vector<S, D>(signal: &ArrayBase<S, D>) -> Result<Array1<Complex64>, BasisError>
where
    S: Data,
    S::Elem: Sample,
    D: Dimension,
{
    let view = signal
        .view()
        .into_dimensionality::<Ix1>()
        .map_err(|_| BasisError::DimensionMismatch {
            expected: 1,
            got: signal.ndim(),
        })?;
    if view.is_empty() {
        return Err(BasisError::EmptySignal);
    }
    Ok(view.mapv(Sample::to_complex))
}

/// Copies a rank-2 array into a complex grid (rows x columns).
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`BasisError::DimensionMismatch`] | `signal.ndim() != 2` |
/// | [`BasisError::EmptySignal`] | either axis has length zero |
pub fn as_grid<S, D>(signal: &ArrayBase<S, D>) -> Result<Array2<Complex64>, BasisError>
where
    S: Data,
    S::Elem: Sample,
    D: Dimension,
{
    let view = signal
        .view()
        .into_dimensionality::<Ix2>()
        .map_err(|_| BasisError::DimensionMismatch {
            expected: 2,
            got: signal.ndim(),
        })?;
    if view.is_empty() {
        return Err(BasisError::EmptySignal);
    }
    Ok(view.mapv(Sample::to_complex))
}
