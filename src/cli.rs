use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Ortho: orthonormal Fourier and wavelet transforms of discrete signals.
#[derive(Parser)]
#[command(
    name = "ortho",
    version,
    about = "Orthonormal Fourier and wavelet basis transforms"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Project a signal onto basis coefficients.
    Analyze(TransformArgs),
    /// Reconstruct a signal from basis coefficients.
    Synthesize(TransformArgs),
    /// Per-dilation amplitude grid of a 1-D signal (wavelet families only).
    Heatmap(TransformArgs),
    /// Report orthonormality residuals of a basis at a given size.
    Check(CheckArgs),
    /// List registered wavelet families.
    Families,
}

/// Basis selection shared by all transform subcommands.
#[derive(clap::Args, Clone, Debug, Default)]
pub struct BasisArgs {
    /// Override the basis from config (`fourier` or `wavelet`).
    #[arg(short, long)]
    pub basis: Option<String>,

    /// Override the wavelet family from config.
    #[arg(short, long)]
    pub family: Option<String>,
}

/// Arguments for the `analyze`, `synthesize` and `heatmap` subcommands.
#[derive(clap::Args)]
pub struct TransformArgs {
    /// Path to input signal JSON file.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Path for output JSON; stdout when omitted.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub basis: BasisArgs,
}

/// Arguments for the `check` subcommand.
#[derive(clap::Args)]
pub struct CheckArgs {
    /// Basis dimension to build.
    #[arg(short = 'n', long)]
    pub size: usize,

    #[command(flatten)]
    pub basis: BasisArgs,
}
