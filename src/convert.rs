//! Pure conversion functions: TOML config + CLI overrides -> library selections.

use anyhow::{Context, Result, bail};

use ortho_wavelet::{Family, get_family};

use crate::cli::BasisArgs;
use crate::config::TransformToml;

/// Basis kind named in config or on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BasisKind {
    Fourier,
    Wavelet,
}

/// Parses a basis kind name string into the corresponding enum variant.
pub fn parse_basis_kind(s: &str) -> Result<BasisKind> {
    match s.to_lowercase().as_str() {
        "fourier" => Ok(BasisKind::Fourier),
        "wavelet" => Ok(BasisKind::Wavelet),
        other => bail!("unknown basis: {other:?} (expected \"fourier\" or \"wavelet\")"),
    }
}

/// A resolved basis, ready to transform.
#[derive(Clone, Copy, Debug)]
pub enum Basis {
    Fourier,
    Wavelet(&'static Family),
}

impl Basis {
    /// Human-readable label for logs and reports.
    pub fn label(&self) -> &str {
        match self {
            Self::Fourier => "fourier",
            Self::Wavelet(family) => family.name(),
        }
    }
}

/// Applies CLI overrides on top of the `[transform]` table and resolves the
/// wavelet family against the registry.
pub fn resolve_basis(config: &TransformToml, overrides: &BasisArgs) -> Result<Basis> {
    let kind_name = overrides.basis.as_deref().unwrap_or(&config.basis);
    match parse_basis_kind(kind_name)? {
        BasisKind::Fourier => Ok(Basis::Fourier),
        BasisKind::Wavelet => {
            let family_name = overrides.family.as_deref().unwrap_or(&config.family);
            let family = get_family(family_name)
                .with_context(|| format!("cannot use wavelet family {family_name:?}"))?;
            Ok(Basis::Wavelet(family))
        }
    }
}
