//! # ortho-basis
//!
//! Shared plumbing for orthonormal basis transforms: input validation,
//! matrix application and the numerical checks behind the orthonormality
//! contract `M · Mᴴ = I`.
//!
//! ## Data Flow
//!
//! ```mermaid
//! graph LR
//!     A["signal (any rank)"] -->|"as_vector / as_grid"| B["Array1 / Array2<Complex64>"]
//!     C["build(n)?"] --> D["n x n basis matrix"]
//!     B -->|"apply_1d / apply_2d"| E["coefficients"]
//!     D --> E
//! ```
//!
//! Family crates only provide matrix builders and call
//! [`transform_1d`] / [`transform_2d`].

mod apply;
mod error;
mod sample;
mod shape;

pub mod linalg;

pub use apply::{apply_1d, apply_2d, transform_1d, transform_2d};
pub use error::{BasisError, ErrorKind};
pub use sample::Sample;
pub use shape::{as_grid, as_vector};
