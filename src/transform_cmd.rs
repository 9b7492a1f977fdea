//! Analyze, synthesize and heatmap commands.

use anyhow::{Context, Result, bail};
use ndarray::ArrayD;
use num_complex::Complex64;
use tracing::{info, info_span};

use crate::cli::TransformArgs;
use crate::config::OrthoConfig;
use crate::convert::{Basis, resolve_basis};
use crate::signal_io::{SignalFile, read_signal, write_json};

/// Transform direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Analyze,
    Synthesize,
}

/// Applies `basis` in `direction`, choosing the 1-D or 2-D entry point from
/// the array rank. Other ranks reach the 1-D entry point and are rejected
/// by its dimensionality guard.
pub fn apply(basis: Basis, direction: Direction, array: &ArrayD<Complex64>) -> Result<ArrayD<Complex64>> {
    let out = match (basis, direction, array.ndim()) {
        (Basis::Fourier, Direction::Analyze, 2) => ortho_fourier::analyze_2d(array)?.into_dyn(),
        (Basis::Fourier, Direction::Synthesize, 2) => {
            ortho_fourier::synthesize_2d(array)?.into_dyn()
        }
        (Basis::Fourier, Direction::Analyze, _) => ortho_fourier::analyze(array)?.into_dyn(),
        (Basis::Fourier, Direction::Synthesize, _) => ortho_fourier::synthesize(array)?.into_dyn(),
        (Basis::Wavelet(family), Direction::Analyze, 2) => family.analyze_2d(array)?.into_dyn(),
        (Basis::Wavelet(family), Direction::Synthesize, 2) => {
            family.synthesize_2d(array)?.into_dyn()
        }
        (Basis::Wavelet(family), Direction::Analyze, _) => family.analyze(array)?.into_dyn(),
        (Basis::Wavelet(family), Direction::Synthesize, _) => family.synthesize(array)?.into_dyn(),
    };
    Ok(out)
}

/// Run `analyze` or `synthesize`.
pub fn run(args: TransformArgs, config: &OrthoConfig, direction: Direction) -> Result<()> {
    let _cmd = info_span!("transform", ?direction).entered();
    let basis = resolve_basis(&config.transform, &args.basis)?;

    info!(path = %args.input.display(), "reading signal");
    let signal = read_signal(&args.input)?;
    info!(basis = basis.label(), shape = ?signal.shape(), "signal loaded");

    let result = apply(basis, direction, &signal)
        .with_context(|| format!("{} transform failed", basis.label()))?;

    let file = SignalFile::from_array(&result, config.output.imag_tol);
    if file.im.is_none() {
        info!(imag_tol = config.output.imag_tol, "dropped imaginary residue");
    }
    write_json(&file, args.output.as_deref(), config.output.pretty)?;
    info!("output written");
    Ok(())
}

/// Run `heatmap`.
pub fn run_heatmap(args: TransformArgs, config: &OrthoConfig) -> Result<()> {
    let _cmd = info_span!("heatmap").entered();
    let family = match resolve_basis(&config.transform, &args.basis)? {
        Basis::Wavelet(family) => family,
        Basis::Fourier => bail!("heatmap requires a wavelet basis (use --basis wavelet)"),
    };

    info!(path = %args.input.display(), "reading signal");
    let signal = read_signal(&args.input)?;

    let grid = family
        .heatmap(&signal)
        .with_context(|| format!("{} heatmap failed", family.name()))?;
    info!(rows = grid.nrows(), levels = grid.ncols(), "heatmap built");

    let file = SignalFile::from_array(&grid.into_dyn(), config.output.imag_tol);
    write_json(&file, args.output.as_deref(), config.output.pretty)
}
