use std::path::PathBuf;

use phish_ingest::IngestError;
use phish_model::ModelError;

/// Errors from the validation stage.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("no raw file passed validation; pipeline stopped")]
    NoValidFiles,

    #[error("list raw data dir {path}")]
    ListDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("move {path} into {dest}")]
    MoveFile {
        path: PathBuf,
        dest: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Read(#[from] IngestError),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("write column roles {path}")]
    WriteRoles {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
