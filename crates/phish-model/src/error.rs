use std::path::PathBuf;

/// Errors from model-level operations.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("invalid column name: {0:?}")]
    InvalidColumnName(String),

    #[error("invalid run id: {0:?}")]
    InvalidRunId(String),

    #[error("row has {got} cells but table has {expected} columns")]
    RowArity { expected: usize, got: usize },

    #[error("column not found: {0}")]
    ColumnNotFound(String),

    #[error("no input tables to merge")]
    EmptyConcat,

    #[error("column sets differ between merged tables: {left:?} vs {right:?}")]
    ColumnMismatch {
        left: Vec<String>,
        right: Vec<String>,
    },

    #[error("read schema file {path}")]
    SchemaRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse schema file {path}")]
    SchemaParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
