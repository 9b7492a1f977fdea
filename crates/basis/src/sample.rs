//! Conversion of real and complex samples into the transform domain.

use num_complex::{Complex, Complex64};

/// A numeric sample that can enter a basis transform.
///
/// Transforms always compute in `Complex64`; real inputs are lifted with a
/// zero imaginary part.
pub trait Sample: Copy {
    /// Returns the sample as a double-precision complex number.
    fn to_complex(self) -> Complex64;
}

impl Sample for f64 {
    #[inline]
    fn to_complex(self) -> Complex64 {
        Complex64::new(self, 0.0)
    }
}

impl Sample for f32 {
    #[inline]
    fn to_complex(self) -> Complex64 {
        Complex64::new(f64::from(self), 0.0)
    }
}

impl Sample for Complex<f64> {
    #[inline]
    fn to_complex(self) -> Complex64 {
        self
    }
}

impl Sample for Complex<f32> {
    #[inline]
    fn to_complex(self) -> Complex64 {
        Complex64::new(f64::from(self.re), f64::from(self.im))
    }
}
