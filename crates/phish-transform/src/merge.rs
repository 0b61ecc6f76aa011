use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use phish_ingest::read_table;
use phish_model::Table;

use crate::TransformError;

/// Read every validated file and concatenate them row-wise.
///
/// Files are read in sorted path order so merged row order is stable. An
/// empty directory is a fatal error, never an empty table; mismatched
/// column sets surface as a merge error from [`Table::concat`].
pub fn merge_valid_files(valid_data_dir: &Path) -> Result<Table, TransformError> {
    let mut paths: Vec<PathBuf> = Vec::new();
    let entries = fs::read_dir(valid_data_dir).map_err(|source| TransformError::ListDir {
        path: valid_data_dir.to_path_buf(),
        source,
    })?;
    for entry in entries {
        let entry = entry.map_err(|source| TransformError::ListDir {
            path: valid_data_dir.to_path_buf(),
            source,
        })?;
        if entry.path().is_file() {
            paths.push(entry.path());
        }
    }
    paths.sort();

    if paths.is_empty() {
        return Err(TransformError::EmptyInput(valid_data_dir.to_path_buf()));
    }

    let mut tables = Vec::with_capacity(paths.len());
    for path in &paths {
        let table = read_table(path)?;
        debug!(file = %path.display(), rows = table.height(), "read validated file");
        tables.push(table);
    }
    Table::concat(tables).map_err(TransformError::Merge)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_directory_is_a_fatal_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = merge_valid_files(dir.path()).unwrap_err();
        assert!(matches!(err, TransformError::EmptyInput(_)));
    }

    #[test]
    fn mismatched_schemas_fail_the_merge() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.csv"), "A,Result\n1,-1\n").unwrap();
        fs::write(dir.path().join("b.csv"), "A,Other\n2,1\n").unwrap();

        let err = merge_valid_files(dir.path()).unwrap_err();
        assert!(matches!(err, TransformError::Merge(_)));
    }

    #[test]
    fn merges_rows_across_files_in_sorted_order() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.csv"), "A,Result\n3,1\n").unwrap();
        fs::write(dir.path().join("a.csv"), "A,Result\n1,-1\n2,1\n").unwrap();

        let merged = merge_valid_files(dir.path()).unwrap();
        assert_eq!(merged.height(), 3);
        let a = merged.column_index("A").unwrap();
        assert_eq!(merged.rows()[0][a].as_text(), Some("1"));
        assert_eq!(merged.rows()[2][a].as_text(), Some("3"));
    }
}
