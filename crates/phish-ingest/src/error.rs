use std::path::PathBuf;

use phish_model::ModelError;

/// Errors from the ingestion stage.
///
/// Every variant keeps its originating cause; callers get the full chain
/// when a run aborts.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("document store, collection {collection:?}")]
    Store {
        collection: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("list collections in document store")]
    ListCollections(#[source] anyhow::Error),

    #[error("create directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("read csv {path}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("write csv {path}")]
    CsvWrite {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("malformed table in {path}")]
    Table {
        path: PathBuf,
        #[source]
        source: ModelError,
    },
}
