//! Pipeline configuration loaded from a JSON file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

/// Operator-facing pipeline configuration.
///
/// The bucket name is recognized for compatibility with the deployment
/// that uploads trained models; the core pipeline only carries it.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Name of the label column in every raw dataset.
    pub target_column: String,
    /// Database (subdirectory of the source folder) to export from.
    pub database_name: String,
    /// Cloud bucket trained models are uploaded to by deployment tooling.
    pub bucket_name: String,
    /// Root directory under which per-run artifact directories are created.
    pub artifact_root: PathBuf,
    /// Fixed seed for oversampling and splitting; entropy-derived when
    /// absent.
    pub seed: Option<u64>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            target_column: "Result".to_string(),
            database_name: "phising".to_string(),
            bucket_name: "sensorpw".to_string(),
            artifact_root: PathBuf::from("artifacts"),
            seed: None,
        }
    }
}

impl PipelineConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("read pipeline config {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("parse pipeline config {}", path.display()))
    }
}
