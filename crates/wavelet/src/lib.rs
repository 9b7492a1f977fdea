//! # ortho-wavelet
//!
//! Dyadic wavelet bases, looked up by family name.
//!
//! ## Pipeline
//!
//! ```mermaid
//! graph LR
//!     A["get_family(\"Haar\")?"] --> B["Family"]
//!     B -->|".analyze(&signal)?"| C["coefficients"]
//!     C -->|".synthesize(&coeffs)?"| D["signal"]
//!     B -->|".heatmap(&signal)?"| E["m x (log2 m + 1) grid"]
//! ```
//!
//! ## Built-in Families
//!
//! | Name | Lengths | Compression |
//! |------|---------|-------------|
//! | `"Haar"` | powers of two | yes |
//!
//! Names are case-sensitive. Additional families can be placed in a
//! caller-owned [`Registry`].
//!
//! ## Quick Start
//!
//! ```
//! use ndarray::array;
//! use ortho_wavelet::{analyze, synthesize};
//!
//! let signal = array![1.0, 3.0, -2.0, 0.5];
//! let coeffs = analyze(&signal, "Haar")?;
//! let back = synthesize(&coeffs, "Haar")?;
//! assert!((back[2].re + 2.0).abs() < 1e-12);
//! # Ok::<(), ortho_wavelet::WaveletError>(())
//! ```

mod error;
mod family;
mod heatmap;
mod transform;

pub mod haar;

pub use error::WaveletError;
pub use family::{
    CompressFn, Family, HAAR, MatrixFn, Registry, get_family, is_registered, registry,
};
pub use heatmap::{compress_dyadic, dilation_levels, weight_columns};
pub use transform::{analyze, analyze_2d, heatmap, synthesize, synthesize_2d};
