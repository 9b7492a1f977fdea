//! # ortho-fourier
//!
//! Orthonormal discrete Fourier basis: matrix builders and direct
//! (matrix-multiplication) transforms for 1-D signals and 2-D grids.
//!
//! ## Convention
//!
//! | Function | Matrix | Role |
//! |----------|--------|------|
//! | [`analyze`] / [`analyze_2d`] | [`inverse_fourier_matrix`], `ω = exp(-2πi/m)` | signal → coefficients |
//! | [`synthesize`] / [`synthesize_2d`] | [`fourier_matrix`], `ω = exp(+2πi/m)` | coefficients → signal |
//!
//! Both matrices carry the `1/√m` normalisation, so each is the conjugate
//! transpose of the other. Any `m >= 1` is accepted.
//!
//! ## Quick Start
//!
//! ```
//! use ndarray::array;
//! use ortho_fourier::{analyze, synthesize};
//!
//! let signal = array![1.0, 2.0, 3.0];
//! let coeffs = analyze(&signal)?;
//! let back = synthesize(&coeffs)?;
//! assert!((back[1].re - 2.0).abs() < 1e-12);
//! # Ok::<(), ortho_basis::BasisError>(())
//! ```

mod matrix;
mod transform;

pub use matrix::{fourier_matrix, inverse_fourier_matrix};
pub use transform::{analyze, analyze_2d, synthesize, synthesize_2d};
