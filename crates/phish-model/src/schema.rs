use std::fs;
use std::path::Path;

use crate::ModelError;

/// Validation rules for raw batch files, loaded from a JSON config.
///
/// Mirrors the operator-maintained `training_schema.json`: the expected
/// filename shape (`<prefix>_<datestamp>_<timestamp>.csv`) and the column
/// layout every raw file must carry.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DatasetSchema {
    /// Filename prefix before the first underscore, e.g. `phising`.
    pub file_prefix: String,
    /// Digit count of the date stamp segment.
    pub date_stamp_length: usize,
    /// Digit count of the time stamp segment.
    pub time_stamp_length: usize,
    /// Expected column names.
    pub column_names: Vec<String>,
    /// Expected column count.
    pub number_of_columns: usize,
}

impl DatasetSchema {
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let raw = fs::read_to_string(path).map_err(|source| ModelError::SchemaRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ModelError::SchemaParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_round_trips_schema_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("training_schema.json");
        let schema = DatasetSchema {
            file_prefix: "phising".to_string(),
            date_stamp_length: 8,
            time_stamp_length: 6,
            column_names: vec!["A".to_string(), "Result".to_string()],
            number_of_columns: 2,
        };
        fs::write(&path, serde_json::to_string_pretty(&schema).unwrap()).unwrap();

        assert_eq!(DatasetSchema::load(&path).unwrap(), schema);
    }

    #[test]
    fn load_reports_missing_file() {
        let err = DatasetSchema::load(Path::new("/nonexistent/schema.json")).unwrap_err();
        assert!(matches!(err, ModelError::SchemaRead { .. }));
    }
}
