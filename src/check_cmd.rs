//! The `check` command: numerical sanity report for a basis at one size.

use anyhow::{Context, Result};
use ndarray::Array2;
use num_complex::Complex64;
use ortho_basis::linalg::{invert, max_deviation, orthonormality_residual};
use serde::Serialize;
use tracing::{info, info_span, warn};

use crate::cli::CheckArgs;
use crate::config::OrthoConfig;
use crate::convert::{Basis, resolve_basis};
use crate::signal_io::write_json;

/// Residuals above this are flagged in the log.
const RESIDUAL_WARN: f64 = 1e-9;

/// Report written by `check`.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub basis: String,
    pub size: usize,
    /// `max |M M^H - I|` for the synthesis matrix.
    pub forward_residual: f64,
    /// `max |M M^H - I|` for the analysis matrix.
    pub inverse_residual: f64,
    /// Largest gap between the numerical inverse of the synthesis matrix
    /// and the analysis matrix.
    pub inverse_deviation: f64,
}

fn matrices(basis: Basis, size: usize) -> Result<(Array2<Complex64>, Array2<Complex64>)> {
    match basis {
        Basis::Fourier => Ok((
            ortho_fourier::fourier_matrix(size)?,
            ortho_fourier::inverse_fourier_matrix(size)?,
        )),
        Basis::Wavelet(family) => Ok((family.forward_matrix(size)?, family.inverse_matrix(size)?)),
    }
}

/// Builds the report without writing it.
pub fn build_report(basis: Basis, size: usize) -> Result<CheckReport> {
    let (forward, inverse) = matrices(basis, size)
        .with_context(|| format!("cannot build {} basis of size {size}", basis.label()))?;

    let forward_residual = orthonormality_residual(&forward)?;
    let inverse_residual = orthonormality_residual(&inverse)?;
    let inverse_deviation = max_deviation(&invert(&forward)?, &inverse);

    Ok(CheckReport {
        basis: basis.label().to_string(),
        size,
        forward_residual,
        inverse_residual,
        inverse_deviation,
    })
}

/// Run `check`.
pub fn run(args: CheckArgs, config: &OrthoConfig) -> Result<()> {
    let _cmd = info_span!("check", size = args.size).entered();
    let basis = resolve_basis(&config.transform, &args.basis)?;
    let report = build_report(basis, args.size)?;

    let worst = report
        .forward_residual
        .max(report.inverse_residual)
        .max(report.inverse_deviation);
    if worst > RESIDUAL_WARN {
        warn!(basis = %report.basis, worst, "basis is not numerically orthonormal");
    } else {
        info!(basis = %report.basis, worst, "basis is orthonormal");
    }

    write_json(&report, None, config.output.pretty)
}
