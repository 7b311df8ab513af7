//! Provenance records written next to every CLI output.
//!
//! `points.json` gets `points.provenance.json` naming the command, its
//! parameters, the input documents and the code revision that produced it.

use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::doc::write_json;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provenance {
    pub command: String,
    pub version: String,
    pub code_rev: String,
    pub params: Value,
    #[serde(default)]
    pub inputs: Vec<PathBuf>,
    pub output: PathBuf,
}

impl Provenance {
    pub fn new(command: &str, params: Value, output: &Path) -> Self {
        Self {
            command: command.to_owned(),
            version: quadmax::VERSION.to_owned(),
            code_rev: code_rev(),
            params,
            inputs: Vec::new(),
            output: output.to_path_buf(),
        }
    }

    pub fn with_input(mut self, input: &Path) -> Self {
        self.inputs.push(input.to_path_buf());
        self
    }

    /// `<dir>/<stem>.provenance.json` beside the output.
    pub fn sidecar_path(&self) -> PathBuf {
        let stem = self
            .output
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "output".to_owned());
        self.output.with_file_name(format!("{stem}.provenance.json"))
    }

    pub fn write(&self) -> Result<PathBuf> {
        let path = self.sidecar_path();
        write_json(&path, self)?;
        Ok(path)
    }
}

/// `GIT_COMMIT` (build time, then run time), else `git rev-parse HEAD`.
fn code_rev() -> String {
    let from_env = option_env!("GIT_COMMIT")
        .map(str::to_owned)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|s| !s.is_empty());
    from_env
        .or_else(|| {
            let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
            out.status
                .success()
                .then(|| String::from_utf8_lossy(&out.stdout).trim().to_owned())
        })
        .unwrap_or_else(|| "unknown".to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn sidecar_sits_beside_the_output() {
        let prov = Provenance::new("solve", json!({}), Path::new("/tmp/out/result.json"));
        assert_eq!(prov.sidecar_path(), Path::new("/tmp/out/result.provenance.json"));
    }

    #[test]
    fn written_record_reads_back() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("result.json");
        let input = dir.path().join("points.json");
        let prov = Provenance::new("solve", json!({"points": 6}), &output).with_input(&input);
        let path = prov.write().unwrap();
        let back: Provenance = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
        assert_eq!(back, prov);
        assert_eq!(back.version, quadmax::VERSION);
        assert!(!back.code_rev.is_empty());
    }
}
