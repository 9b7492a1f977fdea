//! Property tests: the Fourier basis is unitary and transforms round-trip.

use ndarray::{Array1, Array2};
use num_complex::Complex64;
use ortho_basis::linalg::{conjugate_transpose, invert, max_deviation, orthonormality_residual};
use ortho_basis::{BasisError, ErrorKind};
use ortho_fourier::{
    analyze, analyze_2d, fourier_matrix, inverse_fourier_matrix, synthesize, synthesize_2d,
};
use proptest::prelude::*;

const TOL: f64 = 1e-6;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn inverse_is_conjugate_transpose(n in 1usize..40) {
        let f = fourier_matrix(n).unwrap();
        let g = inverse_fourier_matrix(n).unwrap();
        prop_assert!(max_deviation(&conjugate_transpose(&f), &g) < 1e-10);
    }

    #[test]
    fn inverse_is_numerical_inverse(n in 1usize..24) {
        let f = fourier_matrix(n).unwrap();
        let g = inverse_fourier_matrix(n).unwrap();
        let numerical = invert(&f).unwrap();
        prop_assert!(max_deviation(&numerical, &g) < 1e-8);
    }

    #[test]
    fn both_matrices_are_orthonormal(n in 1usize..40) {
        prop_assert!(orthonormality_residual(&fourier_matrix(n).unwrap()).unwrap() < 1e-10);
        prop_assert!(orthonormality_residual(&inverse_fourier_matrix(n).unwrap()).unwrap() < 1e-10);
    }

    #[test]
    fn real_signal_round_trips(signal in prop::collection::vec(-100.0f64..100.0, 1..48)) {
        let original = Array1::from(signal);
        let back = synthesize(&analyze(&original).unwrap()).unwrap();
        for (a, b) in original.iter().zip(back.iter()) {
            prop_assert!((a - b.re).abs() < TOL);
            prop_assert!(b.im.abs() < TOL);
        }
    }

    #[test]
    fn analysis_preserves_energy(signal in prop::collection::vec(-10.0f64..10.0, 1..32)) {
        let original = Array1::from(signal);
        let coeffs = analyze(&original).unwrap();
        let e_signal: f64 = original.iter().map(|x| x * x).sum();
        let e_coeffs: f64 = coeffs.iter().map(|c| c.norm_sqr()).sum();
        prop_assert!((e_signal - e_coeffs).abs() < 1e-6 * (1.0 + e_signal));
    }

    #[test]
    fn real_grid_round_trips(
        rows in 1usize..10,
        cols in 1usize..10,
        seed in prop::collection::vec(-50.0f64..50.0, 100),
    ) {
        let grid = Array2::from_shape_fn((rows, cols), |(r, c)| seed[r * 10 + c]);
        let back = synthesize_2d(&analyze_2d(&grid).unwrap()).unwrap();
        prop_assert_eq!(back.dim(), (rows, cols));
        for (a, b) in grid.iter().zip(back.iter()) {
            prop_assert!((a - b.re).abs() < TOL);
        }
    }

    #[test]
    fn complex_signal_round_trips(
        parts in prop::collection::vec((-5.0f64..5.0, -5.0f64..5.0), 1..24),
    ) {
        let original: Array1<Complex64> =
            parts.iter().map(|&(re, im)| Complex64::new(re, im)).collect();
        let back = synthesize(&analyze(&original).unwrap()).unwrap();
        prop_assert!(max_deviation(&original, &back) < TOL);
    }
}

#[test]
fn dimensionality_guard_is_invalid_argument() {
    let one = Array1::<f64>::zeros(50);
    let two = Array2::<f64>::zeros((50, 50));
    let errors = [
        analyze(&two).unwrap_err(),
        synthesize(&two).unwrap_err(),
        analyze_2d(&one).unwrap_err(),
        synthesize_2d(&one).unwrap_err(),
    ];
    for err in errors {
        assert!(matches!(err, BasisError::DimensionMismatch { .. }));
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }
}

#[test]
fn empty_signal_is_rejected() {
    let empty = Array1::<f64>::zeros(0);
    assert_eq!(analyze(&empty).unwrap_err(), BasisError::EmptySignal);
    assert_eq!(synthesize(&empty).unwrap_err(), BasisError::EmptySignal);
}

#[test]
fn input_signal_is_left_untouched() {
    let signal = Array1::from(vec![1.0, -1.0, 0.5, 0.25]);
    let copy = signal.clone();
    let _ = analyze(&signal).unwrap();
    assert_eq!(signal, copy);
}
