//! Haar wavelet basis.
//!
//! The basis for a signal of length `m` (a power of two) is made of one
//! constant column followed by, for each span `k = m, m/2, ..., 2`, the
//! `m / k` disjoint translates of a `+1/-1` step of length `k`.

use ndarray::{Array1, Array2, ArrayView1};
use tracing::debug;

use crate::error::{WaveletError, ensure_power_of_two};

/// Returns a normalised Haar wavelet of span `span` padded to length `len`.
///
/// For `span == 1` this is the constant vector `1/√len`. Otherwise the first
/// `span / 2` entries are `1/√span`, the next `span / 2` are `-1/√span`, and
/// the rest are zero.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`WaveletError::SpanExceedsLength`] | `span > len` |
/// | [`WaveletError::NotPowerOfTwo`] | `span` or `len` is not a power of two |
///
/// # Example
///
/// ```
/// use ortho_wavelet::haar;
///
/// let w = haar::wavelet(4, 8).unwrap();
/// assert_eq!(w.to_vec(), vec![0.5, 0.5, -0.5, -0.5, 0.0, 0.0, 0.0, 0.0]);
/// ```
pub fn wavelet(span: usize, len: usize) -> Result<Array1<f64>, WaveletError> {
    if span > len {
        return Err(WaveletError::SpanExceedsLength { span, len });
    }
    ensure_power_of_two("wavelet span", span)?;
    ensure_power_of_two("signal length", len)?;

    if span == 1 {
        return Ok(Array1::from_elem(len, 1.0 / (len as f64).sqrt()));
    }
    let amplitude = 1.0 / (span as f64).sqrt();
    let half = span / 2;
    Ok(Array1::from_shape_fn(len, |i| {
        if i < half {
            amplitude
        } else if i < span {
            -amplitude
        } else {
            0.0
        }
    }))
}

/// Returns the Haar synthesis matrix (`len x len`), one wavelet per column.
///
/// Column 0 is the constant wavelet. The remaining columns are grouped by
/// decreasing span; within a group each column is the previous one rotated
/// right by the span. This matrix multiplies a vector of coefficients to
/// construct a signal.
///
/// # Errors
///
/// Returns [`WaveletError::NotPowerOfTwo`] if `len` is not a power of two.
pub fn matrix(len: usize) -> Result<Array2<f64>, WaveletError> {
    ensure_power_of_two("signal length", len)?;
    debug!(len, "building Haar matrix");

    let mut out = Array2::zeros((len, len));
    out.column_mut(0).assign(&wavelet(1, len)?);

    let mut col = 1;
    let mut span = len;
    while span > 1 {
        let mut translate = wavelet(span, len)?.to_vec();
        for shift in 0..len / span {
            if shift > 0 {
                translate.rotate_right(span);
            }
            out.column_mut(col).assign(&ArrayView1::from(&translate));
            col += 1;
        }
        span /= 2;
    }
    Ok(out)
}

/// Returns the Haar analysis matrix, the transpose of [`matrix`].
///
/// The Haar basis is real and orthonormal, so the transpose is the exact
/// inverse. This matrix multiplies a signal to obtain a vector of
/// coefficients.
///
/// # Errors
///
/// Returns [`WaveletError::NotPowerOfTwo`] if `len` is not a power of two.
pub fn inverse_matrix(len: usize) -> Result<Array2<f64>, WaveletError> {
    Ok(matrix(len)?.reversed_axes())
}
