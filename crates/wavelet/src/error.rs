//! Error types for the ortho-wavelet crate.

use ortho_basis::{BasisError, ErrorKind};

/// Error type for all fallible operations in the ortho-wavelet crate.
///
/// Covers dyadic preconditions of the wavelet builders, family lookups and
/// the shape validation shared with the other basis crates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WaveletError {
    /// Shape or rank validation failed.
    #[error(transparent)]
    Basis(#[from] BasisError),

    /// Returned when a length that must be dyadic is not a power of two.
    #[error("{what} must be a power of two, got {value}")]
    NotPowerOfTwo {
        /// Which quantity failed the check (`"wavelet span"`, `"signal length"`).
        what: &'static str,
        /// Offending value.
        value: usize,
    },

    /// Returned when a wavelet span is longer than the signal it spans.
    #[error("wavelet span {span} exceeds signal length {len}")]
    SpanExceedsLength {
        /// Requested wavelet span.
        span: usize,
        /// Target signal length.
        len: usize,
    },

    /// Returned when a family name is not in the registry.
    #[error("{0} family is not implemented")]
    FamilyNotImplemented(String),

    /// Returned when a family has no heatmap compressor.
    #[error("{0} family does not support compression")]
    CompressionUnsupported(String),
}

impl WaveletError {
    /// Returns the broad classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::FamilyNotImplemented(_) | Self::CompressionUnsupported(_) => {
                ErrorKind::NotImplemented
            }
            Self::Basis(e) => e.kind(),
            Self::NotPowerOfTwo { .. } | Self::SpanExceedsLength { .. } => {
                ErrorKind::InvalidArgument
            }
        }
    }
}

/// Checks that `value` is a positive power of two.
pub(crate) fn ensure_power_of_two(what: &'static str, value: usize) -> Result<(), WaveletError> {
    if value.is_power_of_two() {
        Ok(())
    } else {
        Err(WaveletError::NotPowerOfTwo { what, value })
    }
}
