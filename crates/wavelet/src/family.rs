//! Wavelet family descriptors and the name-keyed registry.
//!
//! A [`Family`] is an immutable bundle of matrix builders. The process-wide
//! registry is built once, on first use, and is read-only afterwards; custom
//! families go into a caller-owned [`Registry`].

use std::collections::BTreeMap;
use std::sync::OnceLock;

use ndarray::{Array1, Array2, ArrayBase, ArrayView2, Data, Dimension};
use num_complex::Complex64;
use ortho_basis::{Sample, as_vector, transform_1d, transform_2d};
use tracing::{debug, warn};

use crate::error::WaveletError;
use crate::haar;
use crate::heatmap::{compress_complex, weight_columns};

/// Builds an `n x n` basis matrix.
pub type MatrixFn = fn(usize) -> Result<Array2<Complex64>, WaveletError>;

/// Collapses a basis matrix into one column per dilation level.
pub type CompressFn = fn(ArrayView2<'_, Complex64>) -> Result<Array2<Complex64>, WaveletError>;

/// Name of the built-in Haar family.
pub const HAAR: &str = "Haar";

/// A named wavelet family.
///
/// `forward_matrix` is the synthesis matrix (coefficients → signal) and
/// `inverse_matrix` the analysis matrix (signal → coefficients).
///
/// # Example
///
/// ```
/// use ortho_wavelet::get_family;
///
/// let haar = get_family("Haar").unwrap();
/// let m = haar.forward_matrix(4).unwrap();
/// assert_eq!(m.dim(), (4, 4));
/// ```
#[derive(Clone, Debug)]
pub struct Family {
    name: String,
    forward: MatrixFn,
    inverse: MatrixFn,
    compress: Option<CompressFn>,
}

impl Family {
    /// Creates a family from its builders.
    pub fn new(
        name: impl Into<String>,
        forward: MatrixFn,
        inverse: MatrixFn,
        compress: Option<CompressFn>,
    ) -> Self {
        Self {
            name: name.into(),
            forward,
            inverse,
            compress,
        }
    }

    /// The built-in Haar family.
    pub fn haar() -> Self {
        Self::new(
            HAAR,
            haar_forward,
            haar_inverse,
            Some(compress_complex as CompressFn),
        )
    }

    /// Returns the family name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns `true` if the family can build heatmaps.
    pub fn supports_compression(&self) -> bool {
        self.compress.is_some()
    }

    /// Builds the `n x n` synthesis matrix.
    ///
    /// # Errors
    ///
    /// Propagates the family's preconditions on `n`.
    pub fn forward_matrix(&self, n: usize) -> Result<Array2<Complex64>, WaveletError> {
        debug!(family = %self.name, n, "building synthesis matrix");
        (self.forward)(n)
    }

    /// Builds the `n x n` analysis matrix.
    ///
    /// # Errors
    ///
    /// Propagates the family's preconditions on `n`.
    pub fn inverse_matrix(&self, n: usize) -> Result<Array2<Complex64>, WaveletError> {
        debug!(family = %self.name, n, "building analysis matrix");
        (self.inverse)(n)
    }

    /// Collapses a basis matrix into one column per dilation level.
    ///
    /// # Errors
    ///
    /// Returns [`WaveletError::CompressionUnsupported`] if the family has no
    /// compressor, otherwise propagates the compressor's errors.
    pub fn compress(&self, matrix: ArrayView2<'_, Complex64>) -> Result<Array2<Complex64>, WaveletError> {
        let compress = self
            .compress
            .ok_or_else(|| WaveletError::CompressionUnsupported(self.name.clone()))?;
        compress(matrix)
    }

    /// Returns the wavelet coefficients of a 1-dimensional signal.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`WaveletError::Basis`] | `signal` is not 1-D or is empty |
    /// | family precondition | e.g. [`WaveletError::NotPowerOfTwo`] for Haar |
    pub fn analyze<S, D>(&self, signal: &ArrayBase<S, D>) -> Result<Array1<Complex64>, WaveletError>
    where
        S: Data,
        S::Elem: Sample,
        D: Dimension,
    {
        transform_1d(signal, |n| self.inverse_matrix(n))
    }

    /// Returns the 1-dimensional signal from its wavelet coefficients.
    ///
    /// # Errors
    ///
    /// Same as [`Family::analyze`].
    pub fn synthesize<S, D>(&self, coefficients: &ArrayBase<S, D>) -> Result<Array1<Complex64>, WaveletError>
    where
        S: Data,
        S::Elem: Sample,
        D: Dimension,
    {
        transform_1d(coefficients, |n| self.forward_matrix(n))
    }

    /// Returns the wavelet coefficients of a 2-dimensional signal.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`WaveletError::Basis`] | `signal` is not 2-D or has an empty axis |
    /// | family precondition | applied to each axis length |
    pub fn analyze_2d<S, D>(&self, signal: &ArrayBase<S, D>) -> Result<Array2<Complex64>, WaveletError>
    where
        S: Data,
        S::Elem: Sample,
        D: Dimension,
    {
        transform_2d(signal, |n| self.inverse_matrix(n))
    }

    /// Returns the 2-dimensional signal from its wavelet coefficients.
    ///
    /// # Errors
    ///
    /// Same as [`Family::analyze_2d`].
    pub fn synthesize_2d<S, D>(&self, coefficients: &ArrayBase<S, D>) -> Result<Array2<Complex64>, WaveletError>
    where
        S: Data,
        S::Elem: Sample,
        D: Dimension,
    {
        transform_2d(coefficients, |n| self.forward_matrix(n))
    }

    /// Builds the per-dilation amplitude grid of a 1-dimensional signal.
    ///
    /// Each synthesis column is scaled by its coefficient and the result is
    /// compressed to one column per dilation level. Summing a row gives back
    /// the corresponding signal sample.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`WaveletError::CompressionUnsupported`] | family has no compressor |
    /// | [`WaveletError::Basis`] | `signal` is not 1-D or is empty |
    /// | family precondition | e.g. non-dyadic length for Haar |
    pub fn heatmap<S, D>(&self, signal: &ArrayBase<S, D>) -> Result<Array2<Complex64>, WaveletError>
    where
        S: Data,
        S::Elem: Sample,
        D: Dimension,
    {
        if !self.supports_compression() {
            return Err(WaveletError::CompressionUnsupported(self.name.clone()));
        }
        let vector = as_vector(signal)?;
        let coefficients = self.analyze(&vector)?;
        let matrix = self.forward_matrix(vector.len())?;
        let weighted = weight_columns(matrix.view(), coefficients.view())?;
        self.compress(weighted.view())
    }
}

fn haar_forward(n: usize) -> Result<Array2<Complex64>, WaveletError> {
    Ok(haar::matrix(n)?.mapv(|x| Complex64::new(x, 0.0)))
}

fn haar_inverse(n: usize) -> Result<Array2<Complex64>, WaveletError> {
    Ok(haar::inverse_matrix(n)?.mapv(|x| Complex64::new(x, 0.0)))
}

/// Name-keyed table of wavelet families.
///
/// Registering under a name that is already present replaces the earlier
/// family: the most recent registration wins.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    families: BTreeMap<String, Family>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the built-in families.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Family::haar());
        registry
    }

    /// Adds a family, returning the one it replaced, if any.
    pub fn register(&mut self, family: Family) -> Option<Family> {
        let replaced = self.families.insert(family.name.clone(), family);
        if let Some(old) = &replaced {
            warn!(family = %old.name, "replacing previously registered wavelet family");
        }
        replaced
    }

    /// Returns `true` if `name` is registered (exact, case-sensitive match).
    pub fn is_registered(&self, name: &str) -> bool {
        self.families.contains_key(name)
    }

    /// Looks up a family by name.
    ///
    /// # Errors
    ///
    /// Returns [`WaveletError::FamilyNotImplemented`] for an unknown name.
    pub fn get(&self, name: &str) -> Result<&Family, WaveletError> {
        self.families
            .get(name)
            .ok_or_else(|| WaveletError::FamilyNotImplemented(name.to_string()))
    }

    /// Returns the registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.families.keys().map(String::as_str)
    }

    /// Returns the number of registered families.
    pub fn len(&self) -> usize {
        self.families.len()
    }

    /// Returns `true` if no family is registered.
    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }
}

static REGISTRY: OnceLock<Registry> = OnceLock::new();

/// Returns the process-wide registry of built-in families.
pub fn registry() -> &'static Registry {
    REGISTRY.get_or_init(Registry::with_builtins)
}

/// Returns `true` if `name` is a registered wavelet family.
pub fn is_registered(name: &str) -> bool {
    registry().is_registered(name)
}

/// Returns the registered family called `name`.
///
/// The returned reference is the same on every call.
///
/// # Errors
///
/// Returns [`WaveletError::FamilyNotImplemented`] for an unknown name.
pub fn get_family(name: &str) -> Result<&'static Family, WaveletError> {
    registry().get(name)
}
