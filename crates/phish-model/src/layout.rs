use std::path::{Path, PathBuf};

use crate::RunId;

/// Derived artifact paths for one pipeline run.
///
/// All paths are computed once from the artifact root and the run id and
/// stay fixed for the run's lifetime. Directory names are part of the
/// on-disk contract consumed by downstream tooling.
#[derive(Debug, Clone)]
pub struct RunLayout {
    root: PathBuf,
}

impl RunLayout {
    pub fn new(artifact_root: &Path, run_id: &RunId) -> Self {
        Self {
            root: artifact_root.join(run_id.as_str()),
        }
    }

    /// The run's artifact root, `artifacts/<run id>`.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn data_ingestion_dir(&self) -> PathBuf {
        self.root.join("data_ingestion")
    }

    pub fn data_validation_dir(&self) -> PathBuf {
        self.root.join("data_validation")
    }

    pub fn valid_data_dir(&self) -> PathBuf {
        self.data_validation_dir().join("valid")
    }

    pub fn invalid_data_dir(&self) -> PathBuf {
        self.data_validation_dir().join("invalid")
    }

    pub fn column_roles_path(&self) -> PathBuf {
        self.data_validation_dir().join("column_roles.json")
    }

    pub fn data_transformation_dir(&self) -> PathBuf {
        self.root.join("data_transformation")
    }

    pub fn preprocessor_path(&self) -> PathBuf {
        self.data_transformation_dir().join("preprocessing.json")
    }

    pub fn train_matrix_path(&self) -> PathBuf {
        self.data_transformation_dir().join("train.csv")
    }

    pub fn test_matrix_path(&self) -> PathBuf {
        self.data_transformation_dir().join("test.csv")
    }

    pub fn model_trainer_dir(&self) -> PathBuf {
        self.root.join("model_trainer")
    }

    pub fn trained_model_path(&self) -> PathBuf {
        self.model_trainer_dir().join("trained_model").join("model.json")
    }
}
