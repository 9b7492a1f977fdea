//! Orthonormal discrete Fourier matrices.

use std::f64::consts::PI;

use ndarray::Array2;
use num_complex::Complex64;
use ortho_basis::BasisError;
use tracing::debug;

/// Direction of the exponent in `ω = exp(±2πi/m)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    /// `ω = exp(+2πi/m)`, synthesis.
    Synthesis,
    /// `ω = exp(-2πi/m)`, analysis.
    Analysis,
}

impl Direction {
    fn sign(self) -> f64 {
        match self {
            Self::Synthesis => 1.0,
            Self::Analysis => -1.0,
        }
    }
}

fn build(m: usize, direction: Direction) -> Result<Array2<Complex64>, BasisError> {
    if m == 0 {
        return Err(BasisError::ZeroDimension);
    }
    debug!(m, ?direction, "building Fourier matrix");
    let norm = 1.0 / (m as f64).sqrt();
    let step = direction.sign() * 2.0 * PI / m as f64;
    // ω^(k·j) only depends on k·j mod m; reducing first keeps the angle small.
    Ok(Array2::from_shape_fn((m, m), |(k, j)| {
        let phase = ((k * j) % m) as f64;
        Complex64::from_polar(norm, step * phase)
    }))
}

/// Returns the orthonormal Fourier synthesis matrix (`m x m`).
///
/// Entry `(k, j)` is `ω^(k·j) / √m` with `ω = exp(2πi/m)`. This matrix
/// multiplies a vector of coefficients to construct a signal.
///
/// # Errors
///
/// Returns [`BasisError::ZeroDimension`] if `m == 0`.
///
/// # Example
///
/// ```
/// use ortho_fourier::fourier_matrix;
///
/// let f = fourier_matrix(1).unwrap();
/// assert_eq!(f[[0, 0]].re, 1.0);
/// ```
pub fn fourier_matrix(m: usize) -> Result<Array2<Complex64>, BasisError> {
    build(m, Direction::Synthesis)
}

/// Returns the orthonormal Fourier analysis matrix (`m x m`).
///
/// Entry `(k, j)` is `ω^(k·j) / √m` with `ω = exp(-2πi/m)`; it is the
/// conjugate transpose, and therefore the inverse, of [`fourier_matrix`].
/// This matrix multiplies a signal to obtain a vector of coefficients.
///
/// # Errors
///
/// Returns [`BasisError::ZeroDimension`] if `m == 0`.
pub fn inverse_fourier_matrix(m: usize) -> Result<Array2<Complex64>, BasisError> {
    build(m, Direction::Analysis)
}
