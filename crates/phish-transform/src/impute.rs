use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use phish_model::{CellValue, ColumnName, Table};

use crate::TransformError;

/// A fitted most-frequent-value imputer.
///
/// For every column the fill value is the most frequent non-missing value
/// observed in the training partition, ties broken by first occurrence in
/// training order. The imputer only fills missing cells; it never rescales
/// or otherwise alters present values.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MostFrequentImputer {
    fill_values: BTreeMap<ColumnName, String>,
}

impl MostFrequentImputer {
    /// Fit on the training features only.
    ///
    /// A column with no observed value at all cannot be imputed and fails
    /// the fit.
    pub fn fit(train_features: &Table) -> Result<Self, TransformError> {
        let mut fill_values = BTreeMap::new();
        for (index, column) in train_features.columns().iter().enumerate() {
            // Count per distinct value, remembering first-seen order for ties.
            let mut counts: Vec<(&str, usize)> = Vec::new();
            for cell in train_features.column_values(index) {
                let Some(value) = cell.as_text() else {
                    continue;
                };
                match counts.iter_mut().find(|(seen, _)| *seen == value) {
                    Some((_, count)) => *count += 1,
                    None => counts.push((value, 1)),
                }
            }
            // Strictly-greater comparison keeps the first-seen value on ties.
            let mut best: Option<(&str, usize)> = None;
            for &(value, count) in &counts {
                if best.is_none_or(|(_, best_count)| count > best_count) {
                    best = Some((value, count));
                }
            }
            let (value, _) =
                best.ok_or_else(|| TransformError::NoObservedValue(column.clone()))?;
            fill_values.insert(column.clone(), value.to_string());
        }
        Ok(Self { fill_values })
    }

    /// Fill missing cells; present values pass through unchanged.
    pub fn transform(&self, features: &Table) -> Result<Table, TransformError> {
        let fills: Vec<&String> = features
            .columns()
            .iter()
            .map(|column| {
                self.fill_values
                    .get(column)
                    .ok_or_else(|| TransformError::MissingFillValue(column.clone()))
            })
            .collect::<Result<_, _>>()?;

        let mut transformed = features.clone();
        for row in transformed.rows_mut() {
            for (cell, fill) in row.iter_mut().zip(&fills) {
                if cell.is_missing() {
                    *cell = CellValue::text((*fill).clone());
                }
            }
        }
        Ok(transformed)
    }

    /// Serialize to `path`, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<(), TransformError> {
        let persist_err = |source| TransformError::Persist {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(persist_err)?;
        }
        let body = serde_json::to_string_pretty(self)
            .map_err(|source| persist_err(std::io::Error::other(source)))?;
        fs::write(path, body).map_err(persist_err)?;
        Ok(())
    }

    /// Load a previously persisted imputer.
    pub fn load(path: &Path) -> Result<Self, TransformError> {
        let load_err = |source| TransformError::Load {
            path: path.to_path_buf(),
            source,
        };
        let body = fs::read_to_string(path).map_err(load_err)?;
        serde_json::from_str(&body).map_err(|source| load_err(std::io::Error::other(source)))
    }

    pub fn fill_value(&self, column: &ColumnName) -> Option<&str> {
        self.fill_values.get(column).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(columns: &[&str], rows: &[&[&str]]) -> Table {
        let mut table = Table::new(
            columns
                .iter()
                .map(|name| ColumnName::new(*name).unwrap())
                .collect(),
        );
        for row in rows {
            let cells = row
                .iter()
                .map(|value| {
                    if value.is_empty() {
                        CellValue::Missing
                    } else {
                        CellValue::text(*value)
                    }
                })
                .collect();
            table.push_row(cells).unwrap();
        }
        table
    }

    #[test]
    fn fills_missing_with_most_frequent_training_value() {
        let train = table(&["A"], &[&["1"], &["2"], &["2"], &[""]]);
        let imputer = MostFrequentImputer::fit(&train).unwrap();

        let transformed = imputer.transform(&train).unwrap();
        assert_eq!(transformed.rows()[3][0], CellValue::text("2"));
    }

    #[test]
    fn ties_break_by_first_occurrence() {
        let train = table(&["A"], &[&["b"], &["a"], &["a"], &["b"]]);
        let imputer = MostFrequentImputer::fit(&train).unwrap();
        assert_eq!(imputer.fill_value(&ColumnName::new("A").unwrap()), Some("b"));
    }

    #[test]
    fn transform_is_identity_on_complete_data() {
        let train = table(&["A", "B"], &[&["1", "x"], &["2", "y"]]);
        let imputer = MostFrequentImputer::fit(&train).unwrap();

        let transformed = imputer.transform(&train).unwrap();
        assert_eq!(transformed, train);
    }

    #[test]
    fn all_missing_column_fails_the_fit() {
        let train = table(&["A", "B"], &[&["1", ""], &["2", ""]]);
        let err = MostFrequentImputer::fit(&train).unwrap_err();
        assert!(matches!(err, TransformError::NoObservedValue(_)));
    }

    #[test]
    fn unknown_column_fails_the_transform() {
        let train = table(&["A"], &[&["1"]]);
        let imputer = MostFrequentImputer::fit(&train).unwrap();
        let other = table(&["Z"], &[&["1"]]);
        let err = imputer.transform(&other).unwrap_err();
        assert!(matches!(err, TransformError::MissingFillValue(_)));
    }

    #[test]
    fn persistence_round_trips_and_reproduces_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data_transformation").join("preprocessing.json");
        let train = table(&["A"], &[&["3"], &["3"], &[""]]);
        let imputer = MostFrequentImputer::fit(&train).unwrap();
        imputer.save(&path).unwrap();

        let reloaded = MostFrequentImputer::load(&path).unwrap();
        assert_eq!(reloaded, imputer);
        assert_eq!(
            reloaded.transform(&train).unwrap(),
            imputer.transform(&train).unwrap()
        );
    }
}
