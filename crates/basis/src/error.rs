//! Error types for the ortho-basis crate.

/// Broad classification of a transform failure.
///
/// Every error raised by the transform crates is either a violated
/// precondition on the caller's input or a request for something that
/// does not exist (such as an unknown wavelet family).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The caller supplied an argument that breaks a documented precondition.
    InvalidArgument,
    /// The requested capability is not implemented.
    NotImplemented,
}

/// Error type for shape validation and matrix helpers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BasisError {
    /// Returned when an array of the wrong rank reaches a 1-D or 2-D entry point.
    #[error("dimension mismatch: expected a {expected}-D array, got {got}-D")]
    DimensionMismatch {
        /// Rank required by the entry point.
        expected: usize,
        /// Rank of the supplied array.
        got: usize,
    },

    /// Returned when a signal (or one axis of a grid) has no samples.
    #[error("signal is empty")]
    EmptySignal,

    /// Returned when a basis matrix is requested for dimension zero.
    #[error("basis dimension must be positive")]
    ZeroDimension,

    /// Returned when a square matrix is required.
    #[error("matrix is not square: {rows}x{cols}")]
    NotSquare {
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        cols: usize,
    },

    /// Returned when a matrix cannot multiply an operand of the given length.
    #[error("matrix of shape {rows}x{cols} cannot be applied to an axis of length {len}")]
    ShapeMismatch {
        /// Number of matrix rows.
        rows: usize,
        /// Number of matrix columns.
        cols: usize,
        /// Length of the operand axis.
        len: usize,
    },

    /// Returned when a matrix has no numerical inverse.
    #[error("matrix is singular")]
    Singular,
}

impl BasisError {
    /// Returns the broad classification of this error.
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidArgument
    }
}
