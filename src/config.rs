use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level Ortho configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OrthoConfig {
    /// Basis selection.
    #[serde(default)]
    pub transform: TransformToml,

    /// Output settings.
    #[serde(default)]
    pub output: OutputToml,
}

impl OrthoConfig {
    /// Loads the config file, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TransformToml {
    #[serde(default = "default_basis")]
    pub basis: String,
    #[serde(default = "default_family")]
    pub family: String,
}

impl Default for TransformToml {
    fn default() -> Self {
        Self {
            basis: default_basis(),
            family: default_family(),
        }
    }
}

fn default_basis() -> String {
    "fourier".to_string()
}
fn default_family() -> String {
    "Haar".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    #[serde(default = "default_imag_tol")]
    pub imag_tol: f64,
    #[serde(default = "default_true")]
    pub pretty: bool,
}

impl Default for OutputToml {
    fn default() -> Self {
        Self {
            imag_tol: default_imag_tol(),
            pretty: true,
        }
    }
}

fn default_imag_tol() -> f64 {
    1e-9
}
fn default_true() -> bool {
    true
}
