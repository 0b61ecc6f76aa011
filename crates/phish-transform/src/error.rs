use std::path::PathBuf;

use phish_ingest::IngestError;
use phish_model::{ColumnName, ModelError};

/// Errors from the transformation stage.
#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    #[error("no validated files found in {0}")]
    EmptyInput(PathBuf),

    #[error("list valid data dir {path}")]
    ListDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Read(#[from] IngestError),

    #[error("merge validated files")]
    Merge(#[source] ModelError),

    #[error("target column {0:?} not found in merged data")]
    TargetNotFound(String),

    #[error("class {label} has no members; cannot balance")]
    DegenerateClass { label: u8 },

    #[error("column {0} has no observed value in the training partition")]
    NoObservedValue(ColumnName),

    #[error("no fitted fill value for column {0}")]
    MissingFillValue(ColumnName),

    #[error("persist preprocessing object at {path}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("load preprocessing object from {path}")]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
