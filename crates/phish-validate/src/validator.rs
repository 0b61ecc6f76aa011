use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use phish_ingest::read_table;
use phish_model::{
    ColumnName, ColumnRole, DatasetSchema, RunLayout, Table, infer_column_roles,
};

use crate::checks::{column_count_matches, filename_matches_schema, fully_missing_columns};
use crate::ValidationError;

/// Result of the validation stage.
#[derive(Debug)]
pub struct ValidationOutcome {
    /// Directory of schema-conformant files, ready for merging.
    pub valid_dir: PathBuf,
    /// Per-column preprocessing roles, decided here once and carried into
    /// the transformer.
    pub column_roles: BTreeMap<ColumnName, ColumnRole>,
    pub valid_count: usize,
    pub invalid_count: usize,
}

/// Validates every raw batch file against the dataset schema and moves it
/// into the run's `valid` or `invalid` directory.
pub struct DataValidation {
    raw_data_dir: PathBuf,
    valid_dir: PathBuf,
    invalid_dir: PathBuf,
    roles_path: PathBuf,
    schema: DatasetSchema,
}

impl DataValidation {
    pub fn new(raw_data_dir: impl Into<PathBuf>, layout: &RunLayout, schema: DatasetSchema) -> Self {
        Self {
            raw_data_dir: raw_data_dir.into(),
            valid_dir: layout.valid_data_dir(),
            invalid_dir: layout.invalid_data_dir(),
            roles_path: layout.column_roles_path(),
            schema,
        }
    }

    /// Run all checks, partition the files, and infer column roles from
    /// the surviving data.
    ///
    /// Zero surviving files aborts the run: there is nothing to train on.
    pub fn run(&self) -> Result<ValidationOutcome, ValidationError> {
        let mut valid_tables: Vec<Table> = Vec::new();
        let mut invalid_count = 0usize;

        for path in self.raw_file_paths()? {
            match self.validate_file(&path)? {
                Some(table) => {
                    self.move_file(&path, &self.valid_dir)?;
                    valid_tables.push(table);
                }
                None => {
                    self.move_file(&path, &self.invalid_dir)?;
                    invalid_count += 1;
                }
            }
        }

        let valid_count = valid_tables.len();
        info!(valid_count, invalid_count, "raw file validation finished");
        if valid_count == 0 {
            return Err(ValidationError::NoValidFiles);
        }

        let merged = Table::concat(valid_tables)?;
        let column_roles = infer_column_roles(&merged);
        self.persist_roles(&column_roles)?;

        Ok(ValidationOutcome {
            valid_dir: self.valid_dir.clone(),
            column_roles,
            valid_count,
            invalid_count,
        })
    }

    /// Apply all per-file checks; `Some(table)` means the file passed.
    fn validate_file(&self, path: &Path) -> Result<Option<Table>, ValidationError> {
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default();
        if !filename_matches_schema(file_name, &self.schema) {
            warn!(file = %file_name, "rejected: filename does not match schema rule");
            return Ok(None);
        }

        let table = read_table(path)?;
        if !column_count_matches(&table, &self.schema) {
            warn!(
                file = %file_name,
                columns = table.width(),
                expected = self.schema.number_of_columns,
                "rejected: column count mismatch"
            );
            return Ok(None);
        }

        let missing = fully_missing_columns(&table);
        if !missing.is_empty() {
            warn!(
                file = %file_name,
                columns = ?missing.iter().map(ColumnName::as_str).collect::<Vec<_>>(),
                "rejected: fully missing columns"
            );
            return Ok(None);
        }

        debug!(file = %file_name, rows = table.height(), "file passed validation");
        Ok(Some(table))
    }

    fn raw_file_paths(&self) -> Result<Vec<PathBuf>, ValidationError> {
        let entries =
            fs::read_dir(&self.raw_data_dir).map_err(|source| ValidationError::ListDir {
                path: self.raw_data_dir.clone(),
                source,
            })?;
        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| ValidationError::ListDir {
                path: self.raw_data_dir.clone(),
                source,
            })?;
            if entry.path().is_file() {
                paths.push(entry.path());
            }
        }
        paths.sort();
        Ok(paths)
    }

    fn move_file(&self, path: &Path, dest_dir: &Path) -> Result<(), ValidationError> {
        let move_err = |source| ValidationError::MoveFile {
            path: path.to_path_buf(),
            dest: dest_dir.to_path_buf(),
            source,
        };
        fs::create_dir_all(dest_dir).map_err(move_err)?;
        let file_name = path.file_name().unwrap_or_default();
        fs::rename(path, dest_dir.join(file_name)).map_err(move_err)?;
        Ok(())
    }

    fn persist_roles(
        &self,
        roles: &BTreeMap<ColumnName, ColumnRole>,
    ) -> Result<(), ValidationError> {
        let write_err = |source| ValidationError::WriteRoles {
            path: self.roles_path.clone(),
            source,
        };
        let rendered: BTreeMap<&str, &ColumnRole> = roles
            .iter()
            .map(|(column, role)| (column.as_str(), role))
            .collect();
        let body = serde_json::to_string_pretty(&rendered)
            .map_err(|source| write_err(std::io::Error::other(source)))?;
        fs::write(&self.roles_path, body).map_err(write_err)?;
        Ok(())
    }
}
