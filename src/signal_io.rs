//! JSON signal files: `{"shape": [..], "re": [..], "im": [..]}`, row-major.

use std::path::Path;

use anyhow::{Context, Result, bail};
use ndarray::{ArrayD, IxDyn};
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// On-disk representation of a real or complex array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SignalFile {
    pub shape: Vec<usize>,
    pub re: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub im: Option<Vec<f64>>,
}

impl SignalFile {
    /// Converts to a complex array, checking that the data fills the shape.
    pub fn into_array(self) -> Result<ArrayD<Complex64>> {
        let Some(expected) = self
            .shape
            .iter()
            .try_fold(1usize, |acc, &dim| acc.checked_mul(dim))
        else {
            bail!("shape {:?} is too large", self.shape);
        };
        if self.re.len() != expected {
            bail!(
                "shape {:?} needs {} values, got {} real parts",
                self.shape,
                expected,
                self.re.len()
            );
        }
        let data: Vec<Complex64> = match self.im {
            Some(im) => {
                if im.len() != self.re.len() {
                    bail!(
                        "got {} imaginary parts for {} real parts",
                        im.len(),
                        self.re.len()
                    );
                }
                self.re
                    .iter()
                    .zip(&im)
                    .map(|(&re, &im)| Complex64::new(re, im))
                    .collect()
            }
            None => self.re.iter().map(|&re| Complex64::new(re, 0.0)).collect(),
        };
        ArrayD::from_shape_vec(IxDyn(&self.shape), data).context("invalid signal shape")
    }

    /// Builds a file from a complex array.
    ///
    /// The imaginary parts are dropped when every one of them is within
    /// `imag_tol` of zero.
    pub fn from_array(array: &ArrayD<Complex64>, imag_tol: f64) -> Self {
        let re: Vec<f64> = array.iter().map(|z| z.re).collect();
        let im: Vec<f64> = array.iter().map(|z| z.im).collect();
        let im = if im.iter().all(|v| v.abs() <= imag_tol) {
            None
        } else {
            Some(im)
        };
        Self {
            shape: array.shape().to_vec(),
            re,
            im,
        }
    }
}

/// Reads a signal file into a complex array.
pub fn read_signal(path: &Path) -> Result<ArrayD<Complex64>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read signal file: {}", path.display()))?;
    let file: SignalFile = serde_json::from_str(&json)
        .with_context(|| format!("failed to parse signal JSON: {}", path.display()))?;
    file.into_array()
        .with_context(|| format!("malformed signal file: {}", path.display()))
}

/// Serializes `value` and writes it to `path`, or to stdout when `path` is `None`.
pub fn write_json<T: Serialize>(value: &T, path: Option<&Path>, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .context("failed to serialize output")?;

    match path {
        Some(path) => std::fs::write(path, json + "\n")
            .with_context(|| format!("failed to write output: {}", path.display())),
        None => {
            println!("{json}");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn real_file_round_trip() {
        let file = SignalFile {
            shape: vec![2, 2],
            re: vec![1.0, 2.0, 3.0, 4.0],
            im: None,
        };
        let array = file.clone().into_array().unwrap();
        assert_eq!(array.shape(), &[2, 2]);
        assert_eq!(array[[1, 0]], Complex64::new(3.0, 0.0));
        assert_eq!(SignalFile::from_array(&array, 1e-9), file);
    }

    #[test]
    fn complex_values_kept() {
        let file = SignalFile {
            shape: vec![2],
            re: vec![1.0, 0.0],
            im: Some(vec![0.0, -1.0]),
        };
        let array = file.clone().into_array().unwrap();
        assert_eq!(array[[1]], Complex64::new(0.0, -1.0));
        assert_eq!(SignalFile::from_array(&array, 1e-9), file);
    }

    #[test]
    fn imaginary_residue_dropped() {
        let array = ArrayD::from_shape_vec(
            IxDyn(&[2]),
            vec![Complex64::new(1.0, 1e-14), Complex64::new(2.0, -1e-13)],
        )
        .unwrap();
        let file = SignalFile::from_array(&array, 1e-9);
        assert!(file.im.is_none());
        assert_eq!(file.re, vec![1.0, 2.0]);
    }

    #[test]
    fn length_mismatch_rejected() {
        let file = SignalFile {
            shape: vec![3],
            re: vec![1.0, 2.0],
            im: None,
        };
        assert!(file.into_array().is_err());
    }

    #[test]
    fn oversized_shape_rejected() {
        let file = SignalFile {
            shape: vec![1 << 40, 1 << 40],
            re: vec![1.0],
            im: None,
        };
        let err = file.into_array().unwrap_err();
        assert!(err.to_string().contains("too large"), "{err}");
    }

    #[test]
    fn imaginary_length_mismatch_rejected() {
        let file = SignalFile {
            shape: vec![2],
            re: vec![1.0, 2.0],
            im: Some(vec![0.0]),
        };
        assert!(file.into_array().is_err());
    }

    #[test]
    fn json_without_im_parses() {
        let file: SignalFile = serde_json::from_str(r#"{"shape": [3], "re": [1, 2, 3]}"#).unwrap();
        assert!(file.im.is_none());
        assert_eq!(file.re, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn read_signal_from_disk() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        write!(tmp, r#"{{"shape": [1, 2], "re": [5.0, 6.0]}}"#).unwrap();
        let array = read_signal(tmp.path()).unwrap();
        assert_eq!(array.ndim(), 2);
        assert_eq!(array[[0, 1]], Complex64::new(6.0, 0.0));
    }

    #[test]
    fn write_json_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        let file = SignalFile {
            shape: vec![1],
            re: vec![0.5],
            im: None,
        };
        write_json(&file, Some(&path), false).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.trim(), r#"{"shape":[1],"re":[0.5]}"#);
    }
}
