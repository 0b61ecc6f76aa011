use std::path::PathBuf;

use phish_model::Table;

use crate::TrainError;

/// A fitted baseline classifier.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BaselineModel {
    /// Always predicts the most frequent training label.
    MajorityClass { label: u8 },
    /// Predicts the class whose training centroid is nearest (squared
    /// euclidean distance).
    NearestCentroid {
        negative: Vec<f64>,
        positive: Vec<f64>,
    },
}

impl BaselineModel {
    /// Stable name for logging and the persisted artifact.
    pub fn name(&self) -> &'static str {
        match self {
            Self::MajorityClass { .. } => "majority_class",
            Self::NearestCentroid { .. } => "nearest_centroid",
        }
    }

    pub fn predict(&self, features: &[Vec<f64>]) -> Vec<u8> {
        features.iter().map(|row| self.predict_row(row)).collect()
    }

    fn predict_row(&self, row: &[f64]) -> u8 {
        match self {
            Self::MajorityClass { label } => *label,
            Self::NearestCentroid { negative, positive } => {
                u8::from(squared_distance(row, positive) <= squared_distance(row, negative))
            }
        }
    }
}

fn squared_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum()
}

/// Fraction of predictions matching the actual labels.
pub fn accuracy(predicted: &[u8], actual: &[u8]) -> f64 {
    debug_assert_eq!(predicted.len(), actual.len());
    if actual.is_empty() {
        return 0.0;
    }
    let hits = predicted
        .iter()
        .zip(actual)
        .filter(|(p, a)| p == a)
        .count();
    hits as f64 / actual.len() as f64
}

/// The persisted training artifact: the winning model paired with the
/// preprocessing object it expects at inference time.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct TrainedModel {
    pub model: BaselineModel,
    pub preprocessor_path: PathBuf,
    pub score: f64,
}

/// Parse an imputed feature table into a numeric matrix.
///
/// Every cell must be present and numeric; the transformation stage
/// guarantees the former, the source data the latter.
pub fn numeric_matrix(features: &Table) -> Result<Vec<Vec<f64>>, TrainError> {
    let mut matrix = Vec::with_capacity(features.height());
    for row in features.rows() {
        let mut numeric_row = Vec::with_capacity(row.len());
        for (cell, column) in row.iter().zip(features.columns()) {
            let value = cell
                .as_text()
                .ok_or_else(|| TrainError::MissingFeature(column.clone()))?;
            let parsed =
                value
                    .trim()
                    .parse::<f64>()
                    .map_err(|_| TrainError::NonNumericFeature {
                        column: column.clone(),
                        value: value.to_string(),
                    })?;
            numeric_row.push(parsed);
        }
        matrix.push(numeric_row);
    }
    Ok(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use phish_model::{CellValue, ColumnName};

    #[test]
    fn accuracy_counts_matches() {
        assert_eq!(accuracy(&[1, 0, 1, 1], &[1, 1, 1, 0]), 0.5);
        assert_eq!(accuracy(&[], &[]), 0.0);
    }

    #[test]
    fn majority_class_predicts_constant() {
        let model = BaselineModel::MajorityClass { label: 1 };
        assert_eq!(model.predict(&[vec![0.0], vec![9.0]]), vec![1, 1]);
    }

    #[test]
    fn nearest_centroid_separates_clusters() {
        let model = BaselineModel::NearestCentroid {
            negative: vec![0.0, 0.0],
            positive: vec![10.0, 10.0],
        };
        let predictions = model.predict(&[vec![1.0, -1.0], vec![9.0, 11.0]]);
        assert_eq!(predictions, vec![0, 1]);
    }

    #[test]
    fn numeric_matrix_rejects_text() {
        let mut table = Table::new(vec![ColumnName::new("A").unwrap()]);
        table.push_row(vec![CellValue::text("abc")]).unwrap();
        let err = numeric_matrix(&table).unwrap_err();
        assert!(matches!(err, TrainError::NonNumericFeature { .. }));
    }

    #[test]
    fn numeric_matrix_rejects_missing() {
        let mut table = Table::new(vec![ColumnName::new("A").unwrap()]);
        table.push_row(vec![CellValue::Missing]).unwrap();
        let err = numeric_matrix(&table).unwrap_err();
        assert!(matches!(err, TrainError::MissingFeature(_)));
    }
}
